// tests/server_fn_tests.rs
// Test suite for Leptos server functions
//
// Every test installs the same fixture state, so parallel tests never
// observe each other's catalogue.

use estate_ease::fixtures::{ListingFixture, VillaListings};
use estate_ease::web_app::api::store;
use estate_ease::web_app::model::*;
use estate_ease::web_app::server_fns::*;

fn setup() {
    store::set_test_state(VillaListings::state());
}

#[tokio::test]
async fn test_search_properties_filters_fixture() -> anyhow::Result<()> {
    setup();

    let filters = SearchFilters {
        property_type: Some(PropertyType::Villa),
        bedrooms: RoomFilter::AtLeast(3),
        max_price: 1_000_000,
        ..SearchFilters::default()
    };

    let outcome = search_properties(filters, ListingScope::All)
        .await
        .map_err(|e| anyhow::anyhow!("search_properties failed: {}", e))?;

    let ids: Vec<u32> = outcome.properties.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 7]);
    assert!(!outcome.no_results);
    Ok(())
}

#[tokio::test]
async fn test_search_properties_no_results() -> anyhow::Result<()> {
    setup();

    let filters = SearchFilters {
        location: "nonexistent-city".to_string(),
        ..SearchFilters::default()
    };
    let outcome = search_properties(filters, ListingScope::Featured)
        .await
        .map_err(|e| anyhow::anyhow!("search_properties failed: {}", e))?;

    assert!(outcome.no_results);
    assert!(outcome.properties.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_featured_scope_is_capped() -> anyhow::Result<()> {
    setup();

    let outcome = search_properties(SearchFilters::default(), ListingScope::Featured)
        .await
        .map_err(|e| anyhow::anyhow!("search_properties failed: {}", e))?;
    assert_eq!(outcome.properties.len(), FEATURED_LIMIT);
    assert_eq!(outcome.total_matches, VillaListings::properties().len());

    let listed = list_properties(ListingScope::Featured)
        .await
        .map_err(|e| anyhow::anyhow!("list_properties failed: {}", e))?;
    assert_eq!(listed, outcome.properties);

    let all = list_properties(ListingScope::All)
        .await
        .map_err(|e| anyhow::anyhow!("list_properties failed: {}", e))?;
    assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), VillaListings::ids());
    Ok(())
}

#[tokio::test]
async fn test_get_property_and_similar() -> anyhow::Result<()> {
    setup();

    let property = get_property(3)
        .await
        .map_err(|e| anyhow::anyhow!("get_property failed: {}", e))?;
    assert_eq!(property.id, 3);
    assert_eq!(property.property_type, PropertyType::Villa);

    let similar = get_similar_properties(3)
        .await
        .map_err(|e| anyhow::anyhow!("get_similar_properties failed: {}", e))?;
    let ids: Vec<u32> = similar.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 4, 7]);
    Ok(())
}

#[tokio::test]
async fn test_unknown_property_is_an_error() {
    setup();

    let err = get_property(999).await.expect_err("999 is not listed");
    assert!(err.to_string().contains("Property not found: 999"));

    assert!(get_similar_properties(999).await.is_err());
}

#[tokio::test]
async fn test_submit_contact() -> anyhow::Result<()> {
    setup();

    let message = ContactMessage {
        first_name: " Grace ".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: String::new(),
        subject: "Selling my townhouse".to_string(),
        message: "Please call me about a valuation.".to_string(),
    };
    let receipt = submit_contact(message)
        .await
        .map_err(|e| anyhow::anyhow!("submit_contact failed: {}", e))?;
    assert_eq!(receipt.first_name, "Grace");

    let rejected = submit_contact(ContactMessage::default()).await;
    assert!(rejected.is_err());
    Ok(())
}
