// web_app/components/layout.rs - Site header and footer

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::web_app::data::nav_items;
use crate::web_app::model::Theme;

/// Colour scheme, shared through context by the app root.
pub fn use_theme() -> RwSignal<Theme> {
    use_context::<RwSignal<Theme>>().unwrap_or_else(|| {
        let theme = RwSignal::new(Theme::default());
        provide_context(theme);
        theme
    })
}

/// Light/dark switch
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class="rounded-md p-2 hover:bg-muted"
            title=move || match theme.get() {
                Theme::Light => "Switch to dark mode",
                Theme::Dark => "Switch to light mode",
            }
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || match theme.get() {
                Theme::Light => "🌙",
                Theme::Dark => "☀",
            }}
        </button>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let links = move || {
        nav_items()
            .iter()
            .map(|item| {
                let href = item.href.clone();
                let name = item.name.clone();
                let item = item.clone();
                let class = move || {
                    if pathname.with(|path| item.is_active(path)) {
                        "text-sm font-medium text-primary"
                    } else {
                        "text-sm font-medium text-muted-foreground hover:text-primary"
                    }
                };
                view! {
                    <A href=href attr:class=class>
                        {name}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-40 w-full border-b bg-background/95 backdrop-blur">
            <div class="container mx-auto flex h-16 items-center justify-between px-4">
                <A href="/" attr:class="flex items-center gap-2 text-xl font-bold">
                    <span class="text-primary">"⌂"</span>
                    "EstateEase"
                </A>

                <nav class="hidden items-center gap-6 md:flex">
                    {links}
                </nav>

                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <A href="/login" attr:class="hidden rounded-md border px-4 py-2 text-sm font-medium md:inline-flex">
                        "Sign In"
                    </A>
                    <button
                        type="button"
                        class="rounded-md p-2 md:hidden"
                        title="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav
                    class="flex flex-col gap-4 border-t px-4 py-4 md:hidden"
                    on:click=move |_| menu_open.set(false)
                >
                    {links}
                    <A href="/login" attr:class="text-sm font-medium">"Sign In"</A>
                </nav>
            </Show>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="border-t bg-muted/40">
            <div class="container mx-auto grid gap-8 px-4 py-12 md:grid-cols-4">
                <div>
                    <h3 class="mb-4 text-lg font-bold">"EstateEase"</h3>
                    <p class="text-sm text-muted-foreground">
                        "Helping you find the perfect property since 2010."
                    </p>
                </div>
                <div>
                    <h4 class="mb-4 font-semibold">"Explore"</h4>
                    <ul class="space-y-2 text-sm text-muted-foreground">
                        {nav_items().iter().map(|item| view! {
                            <li><A href=item.href.clone()>{item.name.clone()}</A></li>
                        }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="mb-4 font-semibold">"Contact"</h4>
                    <ul class="space-y-2 text-sm text-muted-foreground">
                        <li>"123 Real Estate Ave, Suite 100"</li>
                        <li>"New York, NY 10001"</li>
                        <li>"(555) 123-4567"</li>
                        <li>"info@estateease.com"</li>
                    </ul>
                </div>
                <div>
                    <h4 class="mb-4 font-semibold">"Legal"</h4>
                    <ul class="space-y-2 text-sm text-muted-foreground">
                        <li><A href="/privacy">"Privacy Policy"</A></li>
                        <li><A href="/contact">"Support"</A></li>
                    </ul>
                </div>
            </div>
            <div class="border-t py-6 text-center text-sm text-muted-foreground">
                "© " {year} " EstateEase. All rights reserved."
            </div>
        </footer>
    }
}
