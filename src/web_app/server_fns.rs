// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// Server functions are bridges: the listing logic lives in api::queries.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::web_app::model::*;

#[cfg(feature = "ssr")]
use crate::web_app::api::store::AppState;

#[cfg(feature = "ssr")]
async fn state() -> Result<AppState, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::store;

    // Context first (tests or manual provide_context), then the global state
    if let Some(state) = use_context::<AppState>() {
        return Ok(state);
    }

    if let Some(state) = store::get_state() {
        return Ok(state);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(data) = req.app_data::<Data<AppState>>() {
                return Ok(data.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Application state not available"))
}

/// Filter the catalogue after the configured loading delay
#[server(name = SearchProperties, prefix = "/api", input = Json)]
pub async fn search_properties(
    filters: SearchFilters,
    scope: ListingScope,
) -> Result<SearchOutcome, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Search request: scope={:?}, filters={:?}", scope, filters);

    let state = state().await?;

    if !state.config.search_delay.is_zero() {
        tokio::time::sleep(state.config.search_delay).await;
    }

    let limit = scope.limit(state.config.featured_limit);
    let outcome = queries::apply_filters(&state.properties, &filters, limit);

    if outcome.no_results {
        tracing::info!("Search matched no properties");
    } else {
        tracing::info!(
            "Search successful: {} matches, showing {}",
            outcome.total_matches,
            outcome.properties.len()
        );
    }

    Ok(outcome)
}

/// Listing shown before any search is submitted; no delay
#[server(ListProperties, "/api")]
pub async fn list_properties(scope: ListingScope) -> Result<Vec<Property>, ServerFnError> {
    use crate::web_app::api::queries;

    let state = state().await?;
    let properties = match scope.limit(state.config.featured_limit) {
        Some(limit) => queries::featured_properties(&state.properties, limit),
        None => state.properties.to_vec(),
    };
    Ok(properties)
}

/// Get a single property by ID
#[server(GetProperty, "/api")]
pub async fn get_property(id: u32) -> Result<Property, ServerFnError> {
    use crate::error::EstateError;
    use crate::web_app::api::queries;

    let state = state().await?;

    queries::find_property(&state.properties, id)
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("Requested unknown property {}", id);
            ServerFnError::new(EstateError::PropertyNotFound(id).to_string())
        })
}

/// Same-type listings for the detail page
#[server(GetSimilarProperties, "/api")]
pub async fn get_similar_properties(id: u32) -> Result<Vec<Property>, ServerFnError> {
    use crate::error::EstateError;
    use crate::web_app::api::queries;

    let state = state().await?;

    let current = queries::find_property(&state.properties, id)
        .ok_or_else(|| ServerFnError::new(EstateError::PropertyNotFound(id).to_string()))?;

    Ok(queries::similar_properties(
        &state.properties,
        current.id,
        current.property_type,
        state.config.similar_limit,
    ))
}

/// Accept a contact form message. Nothing is stored; the message is logged.
#[server(name = SubmitContact, prefix = "/api", input = Json)]
pub async fn submit_contact(message: ContactMessage) -> Result<ContactReceipt, ServerFnError> {
    if let Err(e) = message.validate() {
        tracing::warn!("Rejected contact message: {}", e);
        return Err(ServerFnError::new(e.to_string()));
    }

    let receipt = ContactReceipt {
        reference: uuid::Uuid::new_v4(),
        received_at: chrono::Utc::now().naive_utc(),
        first_name: message.first_name.trim().to_string(),
    };

    tracing::info!(
        reference = %receipt.reference,
        "Contact message from {} {} <{}>: {}",
        message.first_name.trim(),
        message.last_name.trim(),
        message.email.trim(),
        message.subject.trim()
    );

    Ok(receipt)
}
