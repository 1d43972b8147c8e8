// tests/property_components_tests.rs
// Search context behaviour and router-free listing components

use leptos::prelude::*;
use estate_ease::fixtures::{ListingFixture, VillaListings};
use estate_ease::web_app::components::property::*;
use estate_ease::web_app::components::search::*;
use estate_ease::web_app::model::*;

fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn test_search_context_starts_unsubmitted() {
    with_runtime(|| {
        let ctx = SearchContext::new();
        assert!(ctx.filters.get_untracked().is_default());
        assert_eq!(ctx.submission.get_untracked(), None);
    });
}

#[test]
fn test_submit_publishes_filters_and_bumps_generation() {
    with_runtime(|| {
        let ctx = SearchContext::new();
        let filters = SearchFilters {
            property_type: Some(PropertyType::Villa),
            ..SearchFilters::default()
        };

        ctx.submit(filters.clone());
        assert_eq!(ctx.filters.get_untracked(), filters);
        let first = ctx.submission.get_untracked().expect("submitted");
        assert_eq!(first.generation, 1);

        // Same filters again still count as a new search
        ctx.submit(filters.clone());
        let second = ctx.submission.get_untracked().expect("submitted");
        assert_eq!(second.filters, filters);
        assert_eq!(second.generation, 2);
    });
}

#[test]
fn test_use_search_context_shares_provided_context() {
    with_runtime(|| {
        let provided = provide_search_context();
        let found = use_search_context();

        found.submit(SearchFilters {
            location: "Napa".to_string(),
            ..SearchFilters::default()
        });
        assert_eq!(provided.filters.get_untracked().location, "Napa");
    });
}

#[test]
fn test_remove_filter_keeps_unsubmitted_edits() {
    with_runtime(|| {
        let ctx = SearchContext::new();
        ctx.submit(SearchFilters {
            location: "Napa".to_string(),
            property_type: Some(PropertyType::Villa),
            ..SearchFilters::default()
        });

        // Bedrooms edited in the form but not yet submitted
        let draft = RwSignal::new(ctx.filters.get_untracked());
        draft.update(|f| f.bedrooms = RoomFilter::AtLeast(3));

        ctx.remove_filter(draft, &ActiveFilter::Location("Napa".to_string()));

        let expected = SearchFilters {
            property_type: Some(PropertyType::Villa),
            bedrooms: RoomFilter::AtLeast(3),
            ..SearchFilters::default()
        };
        assert_eq!(draft.get_untracked(), expected);
        assert_eq!(ctx.filters.get_untracked(), expected);

        let request = ctx.submission.get_untracked().expect("submitted");
        assert_eq!(request.filters, expected);
        assert_eq!(request.generation, 2);
    });
}

#[test]
fn test_clear_all_resets_draft_and_searches_defaults() {
    with_runtime(|| {
        let ctx = SearchContext::new();
        ctx.submit(SearchFilters {
            max_price: 750_000,
            ..SearchFilters::default()
        });
        let draft = RwSignal::new(ctx.filters.get_untracked());
        draft.update(|f| f.keywords = "pool".to_string());

        ctx.clear_all(draft);

        assert!(draft.get_untracked().is_default());
        assert!(ctx.filters.get_untracked().is_default());
        let request = ctx.submission.get_untracked().expect("submitted");
        assert!(request.filters.is_default());
        assert_eq!(request.generation, 2);
    });
}

#[test]
fn test_favorites_context_is_shared() {
    with_runtime(|| {
        let favorites = RwSignal::new(Favorites::default());
        provide_context(favorites);

        use_favorites().update(|f| {
            f.toggle(3);
        });
        assert!(favorites.with_untracked(|f| f.contains(3)));
    });
}

#[test]
fn test_gallery_instantiation() {
    with_runtime(|| {
        let property = VillaListings::properties().remove(0);
        let _ = PropertyGallery(PropertyGalleryProps {
            images: property.gallery(),
            title: property.title.clone(),
        });
    });
}

#[test]
fn test_active_filter_chips_instantiation() {
    with_runtime(|| {
        let filters = Signal::derive(|| SearchFilters {
            bedrooms: RoomFilter::AtLeast(2),
            ..SearchFilters::default()
        });
        let _ = ActiveFilterChips(ActiveFilterChipsProps {
            filters,
            on_remove: Callback::new(|_chip: ActiveFilter| {}),
            on_clear: Callback::new(|_| {}),
        });
    });
}

#[test]
fn test_search_forms_instantiation() {
    with_runtime(|| {
        provide_search_context();
        let _ = SearchBar();
        let _ = AdvancedSearch();
        let _ = RentSlider(RentSliderProps {
            draft: RwSignal::new(SearchFilters::default()),
        });
    });
}
