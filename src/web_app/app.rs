// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, global state, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::{Footer, Header};
use crate::web_app::model::{Favorites, Theme};
use crate::web_app::pages::*;

/// Root application component
///
/// Sets up:
/// - Meta tags for SEO
/// - Site-wide favourites and colour scheme
/// - Router with one route per page
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);
    provide_context(RwSignal::new(Favorites::default()));

    view! {
        <Title text="EstateEase" />
        <Meta name="description" content="Find houses, apartments, villas and more with EstateEase." />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/estate_ease.css" />

        <Router>
            <div class=move || format!("{} min-h-screen flex flex-col bg-background text-foreground", theme.get().class())>
                <Header />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/properties") view=PropertiesPage />
                        <Route path=path!("/properties/:id") view=PropertyDetailPage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/blog") view=BlogPage />
                        <Route path=path!("/contact") view=ContactPage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/privacy") view=PrivacyPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
