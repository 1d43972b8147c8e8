// fixtures/listings.rs - Small listing sets with hand-checkable answers
//
// VillaListings mixes villas of different sizes and prices with other
// types so every filter clause has something to exclude.

use super::ListingFixture;
use crate::web_app::model::{Property, PropertyType};

/// Minimal listing with the fields filters look at; the rest are filled in.
pub fn property(
    id: u32,
    property_type: PropertyType,
    address: &str,
    price: u64,
    bedrooms: u32,
    bathrooms: u32,
    area: u32,
) -> Property {
    Property {
        id,
        title: format!("{} #{}", property_type, id),
        description: format!("A {} in {}", property_type.label().to_lowercase(), address),
        address: address.to_string(),
        price,
        bedrooms,
        bathrooms,
        area,
        property_type,
        image: format!("/images/property-{}.jpg", id),
        featured: false,
        features: Vec::new(),
        amenities: Vec::new(),
        nearby_places: Vec::new(),
        agent: None,
    }
}

pub struct VillaListings;

impl ListingFixture for VillaListings {
    fn properties() -> Vec<Property> {
        use PropertyType::*;

        let mut pool_villa = property(3, Villa, "Santa Barbara, CA", 980_000, 3, 3, 3_100);
        pool_villa.features = vec!["Infinity pool".to_string(), "Ocean view".to_string()];
        pool_villa.amenities = vec!["Gym".to_string()];

        let mut loft = property(6, Loft, "Los Angeles, CA", 890_000, 1, 2, 1_800);
        loft.description = "Converted warehouse loft with exposed brick and a fireplace".to_string();

        vec![
            property(1, Villa, "Malibu, CA", 2_450_000, 4, 5, 4_800),
            property(2, Apartment, "New York, NY", 1_200_000, 3, 2, 1_500),
            pool_villa,
            property(4, Villa, "Tuscany Lane, Austin, TX", 750_000, 2, 2, 2_000),
            property(5, House, "Austin, TX", 750_000, 5, 3, 3_200),
            loft,
            property(7, Villa, "Napa, CA", 1_000_000, 5, 4, 5_200),
            property(8, Cabin, "Lake Tahoe, CA", 620_000, 3, 2, 1_900),
        ]
    }
}
