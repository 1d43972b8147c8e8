// fixtures/mod.rs - Test fixtures module
//
// A fixture is reusable test setup. Instead of building the same listing
// set by hand in every test, each set is defined once as a type
// implementing `ListingFixture` and shared by unit and integration tests.
//
// Example: instead of this in every test...
//   let properties = vec![Property { .. }, Property { .. }];
//   let state = AppState::with_properties(properties, AppConfig::immediate());
//
// We just use: VillaListings::state()

pub mod listings;

pub use listings::{property, VillaListings};

use crate::config::AppConfig;
use crate::web_app::api::store::AppState;
use crate::web_app::model::Property;

/// A known, ordered set of listings
pub trait ListingFixture {
    /// The listings, in catalogue order
    fn properties() -> Vec<Property>;

    /// Server state over these listings with no search delay
    fn state() -> AppState {
        AppState::with_properties(Self::properties(), AppConfig::immediate())
    }

    /// Ids of the listings, in order
    fn ids() -> Vec<u32> {
        Self::properties().iter().map(|p| p.id).collect()
    }
}
