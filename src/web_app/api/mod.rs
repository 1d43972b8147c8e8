// web_app/api/mod.rs - Catalogue queries and shared server state
//
// Both modules are plain Rust with no framework dependency, so the
// listing logic can be tested without the ssr feature.

pub mod queries;
pub mod store;
