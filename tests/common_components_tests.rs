// tests/common_components_tests.rs
// Instantiation tests for the shared UI atoms

use leptos::prelude::*;
use estate_ease::web_app::components::common::*;

// Helper to run component construction inside a reactive owner
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        let _ = Loading(LoadingProps {
            message: "Searching for properties...",
        });
    });
}

#[test]
fn test_error_display_instantiation() {
    with_runtime(|| {
        let _ = ErrorDisplay(ErrorDisplayProps {
            error: "Property not found: 42".to_string(),
        });
    });
}

#[test]
fn test_alert_instantiation() {
    with_runtime(|| {
        let _ = Alert(AlertProps {
            title: "No properties found",
            description: "No properties match your search criteria.",
        });
    });
}

#[test]
fn test_secondary_button_instantiation() {
    with_runtime(|| {
        let _ = SecondaryButton(SecondaryButtonProps {
            children: Box::new(move || view! { "Filters" }.into_any()),
            on_click: None,
            disabled: false,
        });
    });
}

#[test]
fn test_star_rating_instantiation() {
    with_runtime(|| {
        for rating in [0u8, 3, 5, 7] {
            let _ = StarRating(StarRatingProps { rating });
        }
    });
}

#[test]
fn test_badge_variants() {
    with_runtime(|| {
        for variant in ["primary", "featured", "price", "secondary", "unknown"] {
            let _ = Badge(BadgeProps {
                children: Box::new(move || view! { "Villa" }.into_any()),
                variant,
            });
        }
    });
}

#[test]
fn test_text_input_binds_signal() {
    with_runtime(|| {
        let value = RwSignal::new("john@example.com".to_string());
        let _ = TextInput(TextInputProps {
            value,
            id: "email",
            label: "Email",
            placeholder: "",
            input_type: "email",
            required: true,
        });
        assert_eq!(value.get_untracked(), "john@example.com");
    });
}

#[test]
fn test_price_display_instantiation() {
    with_runtime(|| {
        let _ = PriceDisplay(PriceDisplayProps {
            price: 1_250_000,
            highlight: true,
        });
    });
}

#[test]
fn test_tab_list_instantiation() {
    with_runtime(|| {
        let selected = RwSignal::new("overview");
        let _ = TabList(TabListProps {
            tabs: vec![("overview", "Overview"), ("features", "Features")],
            selected,
        });
        assert_eq!(selected.get_untracked(), "overview");
    });
}

#[test]
fn test_section_heading_instantiation() {
    with_runtime(|| {
        let _ = SectionHeading(SectionHeadingProps {
            title: "Featured Properties",
            subtitle: "Handpicked homes",
        });
    });
}
