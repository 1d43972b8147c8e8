// web_app/components/search.rs - Search-related UI components
//
// These components handle the search interface including:
// - SearchContext: Shared filters plus the last submitted search
// - SearchBar: Compact form on the home page with Buy/Rent tabs
// - AdvancedSearch: Properties page form with a collapsible filter panel
// - ActiveFilterChips: Removable badges for every non-default filter

use leptos::prelude::*;

use crate::web_app::api::queries::active_filters;
use crate::web_app::components::common::{Badge, Button, SecondaryButton};
use crate::web_app::format::format_price;
use crate::web_app::model::*;

/// Search state shared by a search form and the listing view below it
///
/// `filters` holds the last submitted constraints; `submission` is None
/// until the first search, so listings start with the unfiltered view.
#[derive(Clone, Copy)]
pub struct SearchContext {
    pub filters: RwSignal<SearchFilters>,
    pub submission: RwSignal<Option<SearchRequest>>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            filters: RwSignal::new(SearchFilters::default()),
            submission: RwSignal::new(None),
        }
    }

    /// Publish new filters and trigger a listing recomputation.
    pub fn submit(&self, filters: SearchFilters) {
        self.filters.set(filters.clone());
        self.submission
            .update(|current| *current = Some(SearchRequest::next(current.as_ref(), filters)));
    }

    /// Reset the chip's field on `draft` and search with the draft.
    ///
    /// Unsubmitted edits to other fields are kept.
    pub fn remove_filter(&self, draft: RwSignal<SearchFilters>, chip: &ActiveFilter) {
        draft.update(|f| chip.clear(f));
        self.submit(draft.get_untracked());
    }

    /// Reset `draft` and search with the default filters.
    pub fn clear_all(&self, draft: RwSignal<SearchFilters>) {
        draft.set(SearchFilters::default());
        self.submit(SearchFilters::default());
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a search context and make it available to child components.
pub fn provide_search_context() -> SearchContext {
    let ctx = SearchContext::new();
    provide_context(ctx);
    ctx
}

/// Fetch the nearest search context, creating a detached one when absent.
pub fn use_search_context() -> SearchContext {
    use_context::<SearchContext>().unwrap_or_else(provide_search_context)
}

/// Property type selector bound to a draft
#[component]
pub fn TypeSelect(draft: RwSignal<SearchFilters>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="text-sm font-medium">"Property Type"</label>
            <select
                class="w-full px-3 py-2 border border-input rounded-md bg-background"
                on:change=move |ev| {
                    let value = PropertyType::parse_filter(&event_target_value(&ev));
                    draft.update(|f| f.property_type = value);
                }
            >
                <option value="any" selected=move || draft.with(|f| f.property_type.is_none())>
                    "Any Type"
                </option>
                {PropertyType::ALL.into_iter().map(|t| {
                    view! {
                        <option
                            value=t.label()
                            selected=move || draft.with(|f| f.property_type == Some(t))
                        >
                            {t.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Which room count a `RoomSelect` edits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomField {
    Bedrooms,
    Bathrooms,
}

impl RoomField {
    fn label(self) -> &'static str {
        match self {
            RoomField::Bedrooms => "Bedrooms",
            RoomField::Bathrooms => "Bathrooms",
        }
    }

    fn get(self, filters: &SearchFilters) -> RoomFilter {
        match self {
            RoomField::Bedrooms => filters.bedrooms,
            RoomField::Bathrooms => filters.bathrooms,
        }
    }

    fn set(self, filters: &mut SearchFilters, value: RoomFilter) {
        match self {
            RoomField::Bedrooms => filters.bedrooms = value,
            RoomField::Bathrooms => filters.bathrooms = value,
        }
    }
}

/// Minimum bedrooms or bathrooms selector
#[component]
pub fn RoomSelect(draft: RwSignal<SearchFilters>, field: RoomField) -> impl IntoView {
    let options = [
        (RoomFilter::Any, "Any"),
        (RoomFilter::AtLeast(1), "1+"),
        (RoomFilter::AtLeast(2), "2+"),
        (RoomFilter::AtLeast(3), "3+"),
        (RoomFilter::AtLeast(4), "4+"),
        (RoomFilter::AtLeast(5), "5+"),
    ];

    view! {
        <div class="space-y-2">
            <label class="text-sm font-medium">{field.label()}</label>
            <select
                class="w-full px-3 py-2 border border-input rounded-md bg-background"
                on:change=move |ev| {
                    let value = RoomFilter::parse(&event_target_value(&ev));
                    draft.update(|f| field.set(f, value));
                }
            >
                {options.into_iter().map(|(value, label)| {
                    view! {
                        <option
                            value=value.as_value()
                            selected=move || draft.with(|f| field.get(f) == value)
                        >
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Maximum price slider, 0 to the price ceiling
#[component]
pub fn PriceSlider(draft: RwSignal<SearchFilters>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-sm">
                <label class="font-medium">"Max Price"</label>
                <span class="text-muted-foreground">
                    {move || format_price(draft.with(|f| f.max_price))}
                </span>
            </div>
            <input
                type="range"
                min="0"
                max={PRICE_CEILING.to_string()}
                step={PRICE_STEP.to_string()}
                class="w-full accent-primary"
                prop:value=move || draft.with(|f| f.max_price.to_string())
                on:input=move |ev| {
                    if let Ok(price) = event_target_value(&ev).parse::<u64>() {
                        draft.update(|f| f.max_price = price.min(PRICE_CEILING));
                    }
                }
            />
            <div class="flex justify-between text-xs text-muted-foreground">
                <span>"$0"</span>
                <span>{format_price(PRICE_CEILING)}</span>
            </div>
        </div>
    }
}

/// Monthly rent slider for the Rent tab, stored as the equivalent max price
#[component]
pub fn RentSlider(draft: RwSignal<SearchFilters>) -> impl IntoView {
    let per_month = |rent: u64| format!("{}/month", format_price(rent));

    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-sm">
                <label class="font-medium">"Monthly Rent"</label>
                <span class="text-muted-foreground">
                    {move || per_month(draft.with(|f| price_to_monthly_rent(f.max_price)))}
                </span>
            </div>
            <input
                type="range"
                min="0"
                max={RENT_CEILING.to_string()}
                step={RENT_STEP.to_string()}
                class="w-full accent-primary"
                prop:value=move || draft.with(|f| price_to_monthly_rent(f.max_price).to_string())
                on:input=move |ev| {
                    if let Ok(rent) = event_target_value(&ev).parse::<u64>() {
                        draft.update(|f| f.max_price = monthly_rent_to_price(rent));
                    }
                }
            />
            <div class="flex justify-between text-xs text-muted-foreground">
                <span>"$0"</span>
                <span>{per_month(RENT_CEILING)}</span>
            </div>
        </div>
    }
}

/// Area bound input; blank or unparsable input clears the bound
#[component]
pub fn AreaInput(
    draft: RwSignal<SearchFilters>,
    label: &'static str,
    /// Edits max_area when true, min_area otherwise
    #[prop(default = false)]
    upper: bool,
) -> impl IntoView {
    let current = move || draft.with(|f| if upper { f.max_area } else { f.min_area });

    view! {
        <div class="space-y-2">
            <label class="text-sm font-medium">{label}</label>
            <input
                type="number"
                min="0"
                placeholder="Any"
                class="w-full px-3 py-2 border border-input rounded-md bg-background"
                prop:value=move || current().map(|a| a.to_string()).unwrap_or_default()
                on:input=move |ev| {
                    let value = event_target_value(&ev).trim().parse::<u32>().ok();
                    draft.update(|f| {
                        if upper {
                            f.max_area = value;
                        } else {
                            f.min_area = value;
                        }
                    });
                }
            />
        </div>
    }
}

/// Compact search form for the home page
///
/// Edits a local draft and only publishes it on submit. The Rent tab
/// prices by monthly rent instead of purchase price.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_search_context();
    let draft = RwSignal::new(ctx.filters.get_untracked());
    let tab = RwSignal::new("buy");
    let renting = move || tab.get() == "rent";

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit(draft.get_untracked());
    };

    let tab_class = move |key: &'static str| {
        if tab.get() == key {
            "flex-1 rounded-sm px-3 py-1.5 text-sm font-medium bg-background shadow-sm"
        } else {
            "flex-1 rounded-sm px-3 py-1.5 text-sm font-medium text-muted-foreground"
        }
    };

    view! {
        <div class="rounded-lg border bg-card p-6 shadow-lg">
            <div class="mb-6 flex gap-1 rounded-md bg-muted p-1" role="tablist">
                <button type="button" class=move || tab_class("buy") on:click=move |_| tab.set("buy")>
                    "Buy"
                </button>
                <button type="button" class=move || tab_class("rent") on:click=move |_| tab.set("rent")>
                    "Rent"
                </button>
            </div>

            <form on:submit=on_submit class="grid gap-4 md:grid-cols-2 lg:grid-cols-5">
                <div class="space-y-2 lg:col-span-2">
                    <label class="text-sm font-medium">"Location"</label>
                    <input
                        type="text"
                        placeholder="City, neighborhood, or address"
                        class="w-full px-3 py-2 border border-input rounded-md bg-background"
                        prop:value=move || draft.with(|f| f.location.clone())
                        on:input=move |ev| draft.update(|f| f.location = event_target_value(&ev))
                    />
                </div>
                <TypeSelect draft=draft />
                <RoomSelect draft=draft field=RoomField::Bedrooms />
                <RoomSelect draft=draft field=RoomField::Bathrooms />
                <div class="md:col-span-2 lg:col-span-4">
                    {move || if renting() {
                        view! { <RentSlider draft=draft /> }.into_any()
                    } else {
                        view! { <PriceSlider draft=draft /> }.into_any()
                    }}
                </div>
                <div class="flex items-end">
                    <Button button_type="submit" class="w-full">
                        {move || if renting() { "Search Rentals" } else { "Search" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}

/// Full search form for the properties page
#[component]
pub fn AdvancedSearch() -> impl IntoView {
    let ctx = use_search_context();
    let draft = RwSignal::new(ctx.filters.get_untracked());
    let expanded = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit(draft.get_untracked());
    };

    let clear_all = Callback::new(move |_| ctx.clear_all(draft));
    let remove_filter = Callback::new(move |chip: ActiveFilter| ctx.remove_filter(draft, &chip));

    view! {
        <div class="mb-8 space-y-4">
            <form on:submit=on_submit class="space-y-4">
                <div class="flex flex-col gap-3 md:flex-row">
                    <input
                        type="text"
                        placeholder="Search by location, title or description"
                        class="flex-1 px-3 py-2 border border-input rounded-md bg-background"
                        prop:value=move || draft.with(|f| f.location.clone())
                        on:input=move |ev| draft.update(|f| f.location = event_target_value(&ev))
                    />
                    <SecondaryButton on_click=Callback::new(move |_| expanded.update(|e| *e = !*e))>
                        {move || if expanded.get() { "Hide Filters" } else { "Filters" }}
                    </SecondaryButton>
                    <Button button_type="submit">"Search"</Button>
                </div>

                <Show when=move || expanded.get()>
                    <div class="grid gap-4 rounded-lg border bg-card p-6 md:grid-cols-2 lg:grid-cols-3">
                        <TypeSelect draft=draft />
                        <RoomSelect draft=draft field=RoomField::Bedrooms />
                        <RoomSelect draft=draft field=RoomField::Bathrooms />
                        <PriceSlider draft=draft />
                        <AreaInput draft=draft label="Min Area (sq ft)" />
                        <AreaInput draft=draft label="Max Area (sq ft)" upper=true />
                        <div class="space-y-2 md:col-span-2 lg:col-span-3">
                            <label class="text-sm font-medium">"Features & Amenities"</label>
                            <input
                                type="text"
                                placeholder="e.g. pool, fireplace, gym"
                                class="w-full px-3 py-2 border border-input rounded-md bg-background"
                                prop:value=move || draft.with(|f| f.keywords.clone())
                                on:input=move |ev| draft.update(|f| f.keywords = event_target_value(&ev))
                            />
                        </div>
                    </div>
                </Show>
            </form>

            <ActiveFilterChips
                filters=Signal::derive(move || ctx.filters.get())
                on_remove=remove_filter
                on_clear=clear_all
            />
        </div>
    }
}

/// Removable badges for the active filters, plus "Clear all"
#[component]
pub fn ActiveFilterChips(
    filters: Signal<SearchFilters>,
    on_remove: Callback<ActiveFilter>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let chips = Memo::new(move |_| filters.with(active_filters));

    view! {
        <Show when=move || !chips.with(|c| c.is_empty())>
            <div class="flex flex-wrap items-center gap-2">
                <span class="text-sm text-muted-foreground">"Active filters:"</span>
                <For
                    each=move || chips.get()
                    key=|chip| chip.label()
                    let:chip
                >
                    {
                        let label = chip.label();
                        view! {
                            <Badge variant="secondary">
                                {label}
                                <button
                                    type="button"
                                    class="ml-1 hover:text-destructive"
                                    title="Remove filter"
                                    on:click=move |_| on_remove.run(chip.clone())
                                >
                                    "✕"
                                </button>
                            </Badge>
                        }
                    }
                </For>
                <button
                    type="button"
                    class="text-sm font-medium text-primary hover:underline"
                    on:click=move |_| on_clear.run(())
                >
                    "Clear all"
                </button>
            </div>
        </Show>
    }
}
