// web_app/pages/properties.rs - Full listing with advanced search

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::*;
use crate::web_app::model::ListingScope;

#[component]
pub fn PropertiesPage() -> impl IntoView {
    provide_search_context();

    view! {
        <Title text="Properties | EstateEase" />

        <div class="container mx-auto px-4 py-12">
            <div class="mb-8">
                <h1 class="mb-2 text-3xl font-bold md:text-4xl">"Find Your Perfect Property"</h1>
                <p class="text-muted-foreground">
                    "Browse every home we list, then narrow it down by location, size and budget."
                </p>
            </div>

            <AdvancedSearch />
            <PropertyListing scope=ListingScope::All show_count=true />
        </div>
    }
}
