// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - search.rs: Search forms and the shared search context
// - property.rs: Listing display components (PropertyCard, PropertyListing)
// - layout.rs: Header and footer
// - content.rs: Home page marketing sections

pub mod common;
pub mod content;
pub mod layout;
pub mod property;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use content::*;
pub use layout::*;
pub use property::*;
pub use search::*;
