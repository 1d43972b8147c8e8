// tests/active_filter_tests.rs
// Active filter chips: which fields produce one and what removing it does

use estate_ease::web_app::api::queries::active_filters;
use estate_ease::web_app::model::*;

fn busy_filters() -> SearchFilters {
    SearchFilters {
        location: "  Austin ".to_string(),
        property_type: Some(PropertyType::House),
        bedrooms: RoomFilter::AtLeast(3),
        bathrooms: RoomFilter::AtLeast(2),
        max_price: 800_000,
        min_area: Some(1_500),
        max_area: Some(4_000),
        keywords: "garden".to_string(),
    }
}

#[test]
fn test_default_filters_have_no_chips() {
    assert!(active_filters(&SearchFilters::default()).is_empty());
}

#[test]
fn test_one_chip_per_field_in_form_order() {
    let chips = active_filters(&busy_filters());
    assert_eq!(
        chips,
        vec![
            ActiveFilter::Location("Austin".to_string()),
            ActiveFilter::Type(PropertyType::House),
            ActiveFilter::Bedrooms(3),
            ActiveFilter::Bathrooms(2),
            ActiveFilter::MaxPrice(800_000),
            ActiveFilter::MinArea(1_500),
            ActiveFilter::MaxArea(4_000),
            ActiveFilter::Keywords("garden".to_string()),
        ]
    );
}

#[test]
fn test_chip_labels() {
    let labels: Vec<String> = active_filters(&busy_filters()).iter().map(|c| c.label()).collect();
    assert_eq!(labels[0], "Location: Austin");
    assert_eq!(labels[1], "Type: House");
    assert_eq!(labels[2], "3+ Beds");
    assert_eq!(labels[3], "2+ Baths");
    assert_eq!(labels[4], "Max: $800,000");
}

#[test]
fn test_clearing_every_chip_restores_default() {
    let mut filters = busy_filters();
    for chip in active_filters(&busy_filters()) {
        chip.clear(&mut filters);
    }
    assert!(filters.is_default());
    assert!(active_filters(&filters).is_empty());
}

#[test]
fn test_clearing_one_chip_leaves_the_rest() {
    let mut filters = busy_filters();
    ActiveFilter::MaxPrice(800_000).clear(&mut filters);

    let chips = active_filters(&filters);
    assert_eq!(chips.len(), 7);
    assert!(!chips.iter().any(|c| matches!(c, ActiveFilter::MaxPrice(_))));
    assert_eq!(filters.max_price, PRICE_CEILING);
}

#[test]
fn test_blank_keywords_are_not_chips() {
    let filters = SearchFilters {
        keywords: "  ".to_string(),
        ..SearchFilters::default()
    };
    assert!(active_filters(&filters).is_empty());
}

#[test]
fn test_whitespace_location_is_still_a_chip() {
    // Spaces narrow the text match, so the chip must stay removable
    let mut filters = SearchFilters {
        location: "   ".to_string(),
        ..SearchFilters::default()
    };
    let chips = active_filters(&filters);
    assert_eq!(chips, vec![ActiveFilter::Location(String::new())]);

    chips[0].clear(&mut filters);
    assert!(filters.is_default());
}
