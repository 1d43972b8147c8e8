// web_app/pages/about.rs - Company story, values, team and milestones

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::SectionHeading;
use crate::web_app::data::{milestones, team};

const VALUES: [(&str, &str); 3] = [
    ("Integrity", "We give honest advice, even when it means walking away from a sale."),
    ("Local Knowledge", "Our agents live in the neighborhoods they sell."),
    ("Client First", "Every search starts with what you need, not what we have."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Us | EstateEase" />

        <section class="bg-muted/40 py-16">
            <div class="container mx-auto px-4 text-center">
                <h1 class="mb-4 text-4xl font-bold">"About EstateEase"</h1>
                <p class="mx-auto max-w-3xl text-lg text-muted-foreground">
                    "Since 2010 we have helped thousands of families buy, sell and rent homes across the country."
                </p>
            </div>
        </section>

        <section class="container mx-auto px-4 py-16">
            <SectionHeading title="Our Values" subtitle="What guides every transaction we handle." />
            <div class="grid gap-8 md:grid-cols-3">
                {VALUES.iter().map(|(title, text)| view! {
                    <div class="rounded-lg border bg-card p-6 text-center">
                        <h3 class="mb-2 text-xl font-semibold">{*title}</h3>
                        <p class="text-muted-foreground">{*text}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="bg-muted/40 py-16">
            <div class="container mx-auto px-4">
                <SectionHeading title="Meet Our Team" subtitle="The people behind every listing." />
                <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-4">
                    {team().iter().map(|member| view! {
                        <div class="text-center">
                            <img src=member.image.clone() alt=member.name.clone() class="mx-auto mb-4 h-40 w-40 rounded-full object-cover" />
                            <h3 class="text-lg font-semibold">{member.name.clone()}</h3>
                            <p class="text-sm text-muted-foreground">{member.role.clone()}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="container mx-auto px-4 py-16">
            <SectionHeading title="Our Journey" subtitle="Milestones along the way." />
            <ol class="mx-auto max-w-3xl space-y-8 border-l-2 border-primary pl-8">
                {milestones().iter().map(|m| view! {
                    <li>
                        <span class="text-sm font-bold text-primary">{m.year}</span>
                        <h3 class="text-lg font-semibold">{m.title.clone()}</h3>
                        <p class="text-muted-foreground">{m.description.clone()}</p>
                    </li>
                }).collect_view()}
            </ol>
        </section>
    }
}
