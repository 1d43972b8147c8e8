// web_app/pages/property_detail.rs - Single listing view
//
// Reads the id from the route, loads the listing and renders gallery,
// key facts, tabbed details, agent card and similar listings. Unknown or
// malformed ids render the not-found view.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::web_app::components::*;
use crate::web_app::format::price_per_sqft;
use crate::web_app::model::Property;
use crate::web_app::pages::NotFound;
use crate::web_app::server_fns::get_property;

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").and_then(|raw| raw.parse::<u32>().ok());

    let property = Resource::new(id, |id| async move {
        match id {
            Some(id) => get_property(id).await,
            None => Err(ServerFnError::new("Property not found")),
        }
    });

    view! {
        <Suspense fallback=move || view! { <Loading message="Loading property..." /> }>
            {move || match property.get() {
                None => view! { <Loading message="Loading property..." /> }.into_any(),
                Some(Err(e)) => {
                    tracing::debug!("Property lookup failed: {}", e);
                    view! { <NotFound /> }.into_any()
                }
                Some(Ok(p)) => view! { <PropertyDetail property=p /> }.into_any(),
            }}
        </Suspense>
    }
}

/// Tab keys for the details section
const DETAIL_TABS: [(&str, &str); 4] = [
    ("overview", "Overview"),
    ("features", "Features"),
    ("amenities", "Amenities"),
    ("location", "Location"),
];

#[component]
fn PropertyDetail(property: Property) -> impl IntoView {
    let tab = RwSignal::new("overview");
    let per_sqft = price_per_sqft(property.price, property.area);
    let title = format!("{} | EstateEase", property.title);
    let Property {
        id,
        title: name,
        description,
        address,
        price,
        bedrooms,
        bathrooms,
        area,
        property_type,
        features,
        amenities,
        nearby_places,
        agent,
        ..
    } = property.clone();
    let gallery = property.gallery();

    let list = |items: Vec<String>, empty: &'static str| {
        if items.is_empty() {
            view! { <p class="text-muted-foreground">{empty}</p> }.into_any()
        } else {
            view! {
                <ul class="grid gap-2 sm:grid-cols-2">
                    {items.into_iter().map(|item| view! {
                        <li class="flex items-center gap-2"><span class="text-primary">"✓"</span>{item}</li>
                    }).collect_view()}
                </ul>
            }.into_any()
        }
    };
    let features_view = StoredValue::new(features);
    let amenities_view = StoredValue::new(amenities);
    let nearby_view = StoredValue::new(nearby_places);
    let description = StoredValue::new(description);
    let location_address = address.clone();

    view! {
        <Title text=title />

        <div class="container mx-auto px-4 py-8">
            <nav class="mb-6 text-sm text-muted-foreground">
                <A href="/">"Home"</A>
                " / "
                <A href="/properties">"Properties"</A>
                " / "
                <span class="text-foreground">{name.clone()}</span>
            </nav>

            <PropertyGallery images=gallery title=name.clone() />

            <div class="grid gap-8 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <div class="mb-6 flex flex-wrap items-start justify-between gap-4">
                        <div>
                            <div class="mb-2 flex gap-2">
                                <Badge>{property_type.label()}</Badge>
                                {property.featured.then(|| view! { <Badge variant="featured">"Featured"</Badge> })}
                            </div>
                            <h1 class="mb-2 text-3xl font-bold">{name}</h1>
                            <p class="text-muted-foreground">"📍 " {address}</p>
                        </div>
                        <div class="text-right">
                            <PriceDisplay price=price highlight=true />
                            {per_sqft.map(|value| view! {
                                <p class="text-sm text-muted-foreground">
                                    {crate::web_app::format::format_price(value)} " per sq ft"
                                </p>
                            })}
                        </div>
                    </div>

                    <div class="mb-8 grid grid-cols-3 gap-4 rounded-lg border p-4 text-center">
                        <div>
                            <p class="text-2xl font-bold">{bedrooms}</p>
                            <p class="text-sm text-muted-foreground">"Bedrooms"</p>
                        </div>
                        <div>
                            <p class="text-2xl font-bold">{bathrooms}</p>
                            <p class="text-sm text-muted-foreground">"Bathrooms"</p>
                        </div>
                        <div>
                            <p class="text-2xl font-bold">{area}</p>
                            <p class="text-sm text-muted-foreground">"Square Feet"</p>
                        </div>
                    </div>

                    <TabList tabs=DETAIL_TABS.to_vec() selected=tab />

                    <div class="mt-6">
                        {move || match tab.get() {
                            "features" => list(features_view.get_value(), "No features listed."),
                            "amenities" => list(amenities_view.get_value(), "No amenities listed."),
                            "location" => {
                                let address = location_address.clone();
                                view! {
                                    <div class="space-y-4">
                                        <div class="flex h-64 items-center justify-center rounded-lg bg-muted text-muted-foreground">
                                            "Map of " {address}
                                        </div>
                                        <h3 class="font-semibold">"Nearby"</h3>
                                        {list(nearby_view.get_value(), "No nearby places listed.")}
                                    </div>
                                }.into_any()
                            }
                            _ => view! {
                                <p class="leading-relaxed text-muted-foreground">{description.get_value()}</p>
                            }.into_any(),
                        }}
                    </div>
                </div>

                <aside class="space-y-6">
                    <AgentCard agent=agent />
                    <div class="rounded-lg border bg-card p-6">
                        <h3 class="mb-4 text-lg font-semibold">"Schedule a Viewing"</h3>
                        <p class="mb-4 text-sm text-muted-foreground">
                            "Pick a time that suits you and an agent will confirm by email."
                        </p>
                        <A href="/contact" attr:class="block w-full rounded-md bg-primary px-4 py-2 text-center text-sm font-medium text-primary-foreground">
                            "Request a Tour"
                        </A>
                    </div>
                </aside>
            </div>

            <SimilarProperties id=id />
        </div>
    }
}
