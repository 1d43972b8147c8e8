// web_app/pages/not_found.rs - 404 page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found | EstateEase" />

        <div class="flex min-h-[60vh] items-center justify-center px-4">
            <div class="text-center">
                <h1 class="mb-4 text-6xl font-bold text-muted-foreground">"404"</h1>
                <p class="mb-8 text-xl">"The page you are looking for does not exist."</p>
                <A href="/" attr:class="rounded-lg bg-primary px-6 py-3 text-primary-foreground hover:bg-primary/90">
                    "Return Home"
                </A>
            </div>
        </div>
    }
}
