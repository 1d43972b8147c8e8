// web_app/api/store.rs - Process-wide catalogue and settings
//
// The server binary installs one AppState at startup; server functions
// read it back. Tests can swap in their own state without restarting.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::config::AppConfig;
use crate::web_app::data;
use crate::web_app::model::Property;

/// Everything a server function needs to answer a request
#[derive(Clone, Debug)]
pub struct AppState {
    pub properties: Arc<[Property]>,
    pub config: AppConfig,
}

impl AppState {
    /// The built-in catalogue with the given settings.
    pub fn new(config: AppConfig) -> Self {
        Self::with_properties(data::properties().to_vec(), config)
    }

    pub fn with_properties(properties: Vec<Property>, config: AppConfig) -> Self {
        Self {
            properties: properties.into(),
            config,
        }
    }
}

static STATE: OnceLock<AppState> = OnceLock::new();
static TEST_STATE_OVERRIDE: Mutex<Option<AppState>> = Mutex::new(None);

/// Install the global state. Only the first call wins.
pub fn init_state(state: AppState) {
    tracing::info!(
        "Initializing catalogue with {} properties (search delay {:?})",
        state.properties.len(),
        state.config.search_delay
    );
    if STATE.set(state).is_err() {
        tracing::warn!("Application state already initialized");
    }
}

/// Set a state override for testing
pub fn set_test_state(state: AppState) {
    let mut guard = TEST_STATE_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(state);
}

pub fn clear_test_state() {
    let mut guard = TEST_STATE_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Get the active state: test override first, then the global one.
pub fn get_state() -> Option<AppState> {
    {
        let guard = TEST_STATE_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(ref state) = *guard {
            return Some(state.clone());
        }
    }

    let state = STATE.get().cloned();
    if state.is_none() {
        tracing::warn!("Application state is empty!");
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_uses_builtin_catalogue() {
        let state = AppState::new(AppConfig::immediate());
        assert_eq!(state.properties.len(), data::properties().len());
        assert!(state.config.search_delay.is_zero());
    }

    #[test]
    fn test_override_takes_precedence() {
        set_test_state(AppState::with_properties(Vec::new(), AppConfig::immediate()));
        let state = get_state().expect("override should be visible");
        assert!(state.properties.is_empty());
        clear_test_state();
    }
}
