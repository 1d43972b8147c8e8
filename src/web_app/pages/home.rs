// web_app/pages/home.rs - Landing page
//
// Hero banner, the quick search form with the featured grid below it,
// testimonials and partners. The search form and grid share one
// SearchContext, scoped to this page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::web_app::components::*;
use crate::web_app::model::ListingScope;

#[component]
pub fn HomePage() -> impl IntoView {
    provide_search_context();

    view! {
        <Title text="EstateEase | Find Your Dream Home" />

        <Hero />

        <section class="container mx-auto -mt-16 px-4 relative z-10">
            <SearchBar />
        </section>

        <section class="container mx-auto px-4 py-16">
            <SectionHeading
                title="Featured Properties"
                subtitle="Discover our handpicked selection of exceptional homes."
            />
            <PropertyListing scope=ListingScope::Featured />
            <div class="mt-12 text-center">
                <A href="/properties" attr:class="inline-flex rounded-md border px-6 py-3 font-medium hover:bg-muted">
                    "View All Properties"
                </A>
            </div>
        </section>

        <Testimonials />
        <Partners />

        <section class="bg-primary py-16 text-primary-foreground">
            <div class="container mx-auto px-4 text-center">
                <h2 class="mb-4 text-3xl font-bold">"Ready to Find Your Dream Home?"</h2>
                <p class="mx-auto mb-8 max-w-2xl opacity-90">
                    "Our agents know every neighborhood we list in. Tell us what you are looking for."
                </p>
                <A href="/contact" attr:class="inline-flex rounded-md bg-background px-6 py-3 font-medium text-foreground">
                    "Get in Touch"
                </A>
            </div>
        </section>
    }
}
