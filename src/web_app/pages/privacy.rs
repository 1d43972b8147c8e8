// web_app/pages/privacy.rs - Tabbed privacy policy

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::TabList;
use crate::web_app::data::privacy_sections;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let sections = privacy_sections();
    let tabs: Vec<(&'static str, &'static str)> = sections
        .iter()
        .map(|s| (s.key.as_str(), s.title.as_str()))
        .collect();
    let selected = RwSignal::new(tabs.first().map(|(key, _)| *key).unwrap_or_default());

    view! {
        <Title text="Privacy Policy | EstateEase" />

        <div class="container mx-auto max-w-4xl px-4 py-12">
            <h1 class="mb-2 text-4xl font-bold">"Privacy Policy"</h1>
            <p class="mb-8 text-muted-foreground">"Last updated: January 1, 2024"</p>

            <TabList tabs=tabs selected=selected />

            <div class="mt-8 space-y-4">
                {move || {
                    sections
                        .iter()
                        .find(|s| s.key == selected.get())
                        .map(|section| view! {
                            <h2 class="text-2xl font-semibold">{section.title.clone()}</h2>
                            {section.paragraphs.iter().map(|p| view! {
                                <p class="leading-relaxed text-muted-foreground">{p.clone()}</p>
                            }).collect_view()}
                        })
                }}
            </div>
        </div>
    }
}
