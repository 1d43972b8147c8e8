// web_app/pages/mod.rs - Page components module
//
// One component per route:
// - HomePage: Hero, quick search and featured listings
// - PropertiesPage / PropertyDetailPage: Full listing and single listing
// - AboutPage, BlogPage, ContactPage, LoginPage, PrivacyPage: Static pages
// - NotFound: Fallback for unknown routes and unknown listings

pub mod about;
pub mod blog;
pub mod contact;
pub mod home;
pub mod login;
pub mod not_found;
pub mod privacy;
pub mod properties;
pub mod property_detail;

// Re-export page components
pub use about::AboutPage;
pub use blog::BlogPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use privacy::PrivacyPage;
pub use properties::PropertiesPage;
pub use property_detail::PropertyDetailPage;
