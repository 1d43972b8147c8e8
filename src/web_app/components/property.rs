// web_app/components/property.rs - Property display components
//
// Components for displaying listings including:
// - PropertyCard: Grid card with favourite toggle and link to details
// - PropertyGrid: Grid layout for multiple properties
// - PropertyListing: Search-driven listing with loading and empty states
// - PropertyGallery: Image carousel on the detail page
// - AgentCard / SimilarProperties: Detail page sidebar and footer

use leptos::prelude::*;
use leptos_router::components::A;

use super::common::{Alert, Badge, ErrorDisplay, Loading};
use super::search::use_search_context;
use crate::web_app::format::{count_label, format_price, truncate};
use crate::web_app::model::*;
use crate::web_app::server_fns::{get_similar_properties, list_properties, search_properties};

/// Saved listings, shared through context by the app root.
pub fn use_favorites() -> RwSignal<Favorites> {
    use_context::<RwSignal<Favorites>>().unwrap_or_else(|| {
        let favorites = RwSignal::new(Favorites::default());
        provide_context(favorites);
        favorites
    })
}

/// Property card for listing grids
#[component]
pub fn PropertyCard(
    /// The listing to display
    property: Property,
) -> impl IntoView {
    let favorites = use_favorites();
    let id = property.id;
    let href = format!("/properties/{}", id);
    let is_favorite = move || favorites.with(|f| f.contains(id));

    view! {
        <div class="group overflow-hidden rounded-lg border bg-card shadow-sm transition-all hover:shadow-lg">
            <div class="relative aspect-[4/3] overflow-hidden">
                <img
                    src=property.image.clone()
                    alt=property.title.clone()
                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
                <div class="absolute left-3 top-3 flex gap-2">
                    <Badge>{property.property_type.label()}</Badge>
                    {property.featured.then(|| view! { <Badge variant="featured">"Featured"</Badge> })}
                </div>
                <button
                    type="button"
                    class="absolute right-3 top-3 rounded-full bg-background/80 p-2 backdrop-blur-sm"
                    title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
                    on:click=move |_| {
                        favorites.update(|f| {
                            f.toggle(id);
                        });
                    }
                >
                    <span class=move || if is_favorite() { "text-red-500" } else { "text-muted-foreground" }>
                        {move || if is_favorite() { "♥" } else { "♡" }}
                    </span>
                </button>
                <div class="absolute bottom-3 left-3">
                    <Badge variant="price">{format_price(property.price)}</Badge>
                </div>
            </div>

            <div class="p-4">
                <h3 class="mb-1 line-clamp-1 text-lg font-semibold">{property.title.clone()}</h3>
                <p class="mb-3 flex items-center gap-1 text-sm text-muted-foreground">
                    <span>"📍"</span>
                    {property.address.clone()}
                </p>
                <p class="mb-4 line-clamp-2 text-sm text-muted-foreground">
                    {truncate(&property.description, 140)}
                </p>
                <div class="flex justify-between border-t pt-3 text-sm">
                    <span>{property.bedrooms} " Beds"</span>
                    <span>{property.bathrooms} " Baths"</span>
                    <span>{property.area} " sq ft"</span>
                </div>
            </div>

            <div class="px-4 pb-4">
                <A href=href attr:class="block w-full rounded-md bg-primary px-4 py-2 text-center text-sm font-medium text-primary-foreground hover:bg-primary/90">
                    "View Details"
                </A>
            </div>
        </div>
    }
}

/// Grid layout for property cards
#[component]
pub fn PropertyGrid(
    properties: Vec<Property>,
) -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
            {properties
                .into_iter()
                .map(|property| view! { <PropertyCard property=property /> })
                .collect_view()}
        </div>
    }
}

/// Listing driven by the nearest search context
///
/// Shows the unfiltered listing until a search is submitted, then the
/// filtered one. A search that matches nothing shows an alert instead of
/// an empty grid.
#[component]
pub fn PropertyListing(
    /// Featured (capped) or full listing
    #[prop(default = ListingScope::Featured)]
    scope: ListingScope,
    /// Show the "N properties found" line above the grid
    #[prop(default = false)]
    show_count: bool,
) -> impl IntoView {
    let ctx = use_search_context();

    let listing = Resource::new(
        move || ctx.submission.get(),
        move |request| async move {
            match request {
                Some(request) => search_properties(request.filters, scope).await,
                None => list_properties(scope).await.map(|properties| SearchOutcome {
                    total_matches: properties.len(),
                    no_results: properties.is_empty(),
                    properties,
                }),
            }
        },
    );

    view! {
        <Suspense fallback=move || view! { <Loading message="Searching for properties..." /> }>
            {move || match listing.get() {
                None => view! { <Loading message="Searching for properties..." /> }.into_any(),
                Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                Some(Ok(outcome)) if outcome.no_results => view! {
                    <Alert
                        title="No properties found"
                        description="No properties match your search criteria. Try adjusting your filters."
                    />
                }.into_any(),
                Some(Ok(outcome)) => view! {
                    <div class="animate-fade-in">
                        {show_count.then(|| view! {
                            <p class="mb-6 font-medium text-muted-foreground">
                                {count_label(outcome.total_matches)}
                            </p>
                        })}
                        <PropertyGrid properties=outcome.properties />
                    </div>
                }.into_any(),
            }}
        </Suspense>
    }
}

/// Image carousel with prev/next controls and thumbnail dots
#[component]
pub fn PropertyGallery(
    images: Vec<String>,
    title: String,
) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let images = StoredValue::new(images);

    let current_src = move || {
        images.with_value(|imgs| imgs.get(carousel.with(|c| c.current())).cloned().unwrap_or_default())
    };

    view! {
        <div class="relative mb-8 overflow-hidden rounded-lg">
            <img
                src=current_src
                alt=title
                class="aspect-[16/9] w-full object-cover"
            />
            <Show when=move || carousel.with(|c| c.len() > 1)>
                <button
                    type="button"
                    class="absolute left-4 top-1/2 -translate-y-1/2 rounded-full bg-background/80 px-3 py-2"
                    title="Previous image"
                    on:click=move |_| carousel.update(|c| c.prev())
                >
                    "‹"
                </button>
                <button
                    type="button"
                    class="absolute right-4 top-1/2 -translate-y-1/2 rounded-full bg-background/80 px-3 py-2"
                    title="Next image"
                    on:click=move |_| carousel.update(|c| c.next())
                >
                    "›"
                </button>
                <div class="absolute bottom-4 left-1/2 flex -translate-x-1/2 gap-2">
                    {(0..carousel.with_untracked(|c| c.len())).map(|index| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if carousel.with(|c| c.current()) == index {
                                        "h-2 w-6 rounded-full bg-white"
                                    } else {
                                        "h-2 w-2 rounded-full bg-white/60"
                                    }
                                }
                                title=format!("Image {}", index + 1)
                                on:click=move |_| carousel.update(|c| c.go_to(index))
                            ></button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Listing agent contact card; falls back to the office line
#[component]
pub fn AgentCard(agent: Option<Agent>) -> impl IntoView {
    match agent {
        Some(agent) => view! {
            <div class="rounded-lg border bg-card p-6">
                <h3 class="mb-4 text-lg font-semibold">"Listed by"</h3>
                <div class="mb-4 flex items-center gap-4">
                    <img src=agent.image.clone() alt=agent.name.clone() class="h-16 w-16 rounded-full object-cover" />
                    <div>
                        <p class="font-medium">{agent.name.clone()}</p>
                        <p class="text-sm text-muted-foreground">"Real Estate Agent"</p>
                    </div>
                </div>
                <div class="space-y-2 text-sm">
                    <a href=format!("tel:{}", agent.phone) class="block hover:text-primary">"📞 " {agent.phone.clone()}</a>
                    <a href=format!("mailto:{}", agent.email) class="block hover:text-primary">"✉ " {agent.email.clone()}</a>
                </div>
            </div>
        }.into_any(),
        None => view! {
            <div class="rounded-lg border bg-card p-6">
                <h3 class="mb-2 text-lg font-semibold">"Interested in this property?"</h3>
                <p class="mb-4 text-sm text-muted-foreground">
                    "Our team will put you in touch with the listing agent."
                </p>
                <A href="/contact" attr:class="block w-full rounded-md bg-primary px-4 py-2 text-center text-sm font-medium text-primary-foreground">
                    "Contact Us"
                </A>
            </div>
        }.into_any(),
    }
}

/// Same-type listings shown under a property's details
#[component]
pub fn SimilarProperties(
    /// Id of the property being viewed
    id: u32,
) -> impl IntoView {
    let similar = Resource::new(move || id, |id| get_similar_properties(id));

    view! {
        <section class="mt-16">
            <h2 class="mb-6 text-2xl font-bold">"Similar Properties"</h2>
            <Suspense fallback=move || view! { <Loading /> }>
                {move || match similar.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Some(Ok(properties)) if properties.is_empty() => view! {
                        <p class="text-muted-foreground">"No similar properties are listed right now."</p>
                    }.into_any(),
                    Some(Ok(properties)) => view! { <PropertyGrid properties=properties /> }.into_any(),
                }}
            </Suspense>
        </section>
    }
}
