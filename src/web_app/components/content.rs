// web_app/components/content.rs - Home page marketing sections
//
// - Hero: Slide show with manual navigation
// - Testimonials: Client quotes, one at a time
// - Partners: Logo strip

use leptos::prelude::*;
use leptos_router::components::A;

use super::common::{SectionHeading, StarRating};
use crate::web_app::data::{hero_slides, testimonials, PARTNERS};
use crate::web_app::model::Carousel;

#[component]
pub fn Hero() -> impl IntoView {
    let slides = hero_slides();
    let carousel = RwSignal::new(Carousel::new(slides.len()));

    view! {
        <section class="relative h-[600px] w-full overflow-hidden">
            {slides.iter().enumerate().map(|(index, slide)| {
                let visible = move || carousel.with(|c| c.current()) == index;
                view! {
                    <div
                        class=move || {
                            if visible() {
                                "absolute inset-0 opacity-100 transition-opacity duration-1000"
                            } else {
                                "absolute inset-0 opacity-0 transition-opacity duration-1000"
                            }
                        }
                        aria-hidden=move || (!visible()).to_string()
                    >
                        <img src=slide.image.clone() alt=slide.title.clone() class="h-full w-full object-cover" />
                        <div class="absolute inset-0 bg-black/50"></div>
                        <div class="absolute inset-0 flex flex-col items-center justify-center px-4 text-center text-white">
                            <h1 class="mb-4 text-4xl font-bold md:text-6xl">{slide.title.clone()}</h1>
                            <p class="mb-8 max-w-2xl text-lg md:text-xl">{slide.description.clone()}</p>
                            <div class="flex gap-4">
                                <A href="/properties" attr:class="rounded-md bg-primary px-6 py-3 font-medium text-primary-foreground">
                                    "Browse Properties"
                                </A>
                                <A href="/contact" attr:class="rounded-md border border-white px-6 py-3 font-medium">
                                    "Contact an Agent"
                                </A>
                            </div>
                        </div>
                    </div>
                }
            }).collect_view()}

            <button
                type="button"
                class="absolute left-4 top-1/2 -translate-y-1/2 rounded-full bg-black/30 px-3 py-2 text-white"
                title="Previous slide"
                on:click=move |_| carousel.update(|c| c.prev())
            >
                "‹"
            </button>
            <button
                type="button"
                class="absolute right-4 top-1/2 -translate-y-1/2 rounded-full bg-black/30 px-3 py-2 text-white"
                title="Next slide"
                on:click=move |_| carousel.update(|c| c.next())
            >
                "›"
            </button>
            <div class="absolute bottom-6 left-1/2 flex -translate-x-1/2 gap-2">
                {(0..slides.len()).map(|index| view! {
                    <button
                        type="button"
                        class=move || {
                            if carousel.with(|c| c.current()) == index {
                                "h-2 w-8 rounded-full bg-white"
                            } else {
                                "h-2 w-2 rounded-full bg-white/50"
                            }
                        }
                        title=format!("Slide {}", index + 1)
                        on:click=move |_| carousel.update(|c| c.go_to(index))
                    ></button>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let quotes = testimonials();
    let carousel = RwSignal::new(Carousel::new(quotes.len()));

    let current = move || quotes.get(carousel.with(|c| c.current())).cloned();

    view! {
        <section class="bg-muted/40 py-16">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="What Our Clients Say"
                    subtitle="Hear from homeowners and investors who found their place with us."
                />
                <div class="mx-auto max-w-3xl rounded-lg border bg-card p-8 text-center shadow-sm">
                    {move || current().map(|t| view! {
                        <div>
                            <img src=t.image.clone() alt=t.name.clone() class="mx-auto mb-4 h-20 w-20 rounded-full object-cover" />
                            <div class="mb-4 flex justify-center">
                                <StarRating rating=t.rating />
                            </div>
                            <blockquote class="mb-6 text-lg italic">"\u{201c}" {t.content.clone()} "\u{201d}"</blockquote>
                            <p class="font-semibold">{t.name.clone()}</p>
                            <p class="text-sm text-muted-foreground">{t.role.clone()}</p>
                        </div>
                    })}
                    <div class="mt-6 flex justify-center gap-4">
                        <button
                            type="button"
                            class="rounded-full border px-3 py-1"
                            title="Previous testimonial"
                            on:click=move |_| carousel.update(|c| c.prev())
                        >
                            "‹"
                        </button>
                        <button
                            type="button"
                            class="rounded-full border px-3 py-1"
                            title="Next testimonial"
                            on:click=move |_| carousel.update(|c| c.next())
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Partners() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Our Trusted Partners"
                    subtitle="We work with leading lenders, insurers and service providers."
                />
                <div class="grid grid-cols-2 items-center gap-8 md:grid-cols-3 lg:grid-cols-6">
                    {PARTNERS.iter().map(|(name, logo)| view! {
                        <div class="flex flex-col items-center gap-2 opacity-70 transition-opacity hover:opacity-100">
                            <img src=*logo alt=*name class="h-12 w-auto" />
                            <span class="text-xs text-muted-foreground">{*name}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
