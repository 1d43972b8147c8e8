// web_app/pages/login.rs - Sign in / register forms
//
// Presentational only: there are no accounts, so submitting just shows
// a notice.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::{Button, TabList, TextInput};

#[component]
pub fn LoginPage() -> impl IntoView {
    let tab = RwSignal::new("login");
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notice.set(Some("Online accounts are coming soon. Please contact an agent directly."));
    };

    view! {
        <Title text="Sign In | EstateEase" />

        <div class="container mx-auto flex justify-center px-4 py-16">
            <div class="w-full max-w-md rounded-lg border bg-card p-8 shadow-sm">
                <h1 class="mb-6 text-center text-2xl font-bold">"Welcome to EstateEase"</h1>
                <TabList tabs=vec![("login", "Sign In"), ("register", "Register")] selected=tab />

                <form on:submit=on_submit class="mt-6 space-y-4">
                    <Show when=move || tab.get() == "register">
                        <TextInput value=name id="name" label="Full Name" placeholder="John Doe" required=true />
                    </Show>
                    <TextInput value=email id="email" label="Email" input_type="email" placeholder="you@example.com" required=true />
                    <TextInput value=password id="password" label="Password" input_type="password" required=true />
                    <Button button_type="submit" class="w-full">
                        {move || if tab.get() == "register" { "Create Account" } else { "Sign In" }}
                    </Button>
                </form>

                {move || notice.get().map(|text| view! {
                    <p class="mt-4 rounded-md bg-muted p-3 text-center text-sm">{text}</p>
                })}
            </div>
        </div>
    }
}
