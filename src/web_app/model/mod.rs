// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod content;

pub use content::*;

/// Upper bound of the price slider, in whole dollars.
pub const PRICE_CEILING: u64 = 5_000_000;

/// Price slider step, in whole dollars.
pub const PRICE_STEP: u64 = 50_000;

/// Upper bound of the monthly rent slider on the Rent tab.
pub const RENT_CEILING: u64 = 25_000;

/// Monthly rent slider step.
pub const RENT_STEP: u64 = 100;

/// Purchase price that one dollar of monthly rent stands for.
pub const RENT_TO_PRICE: u64 = 200;

/// Monthly rent shown for a maximum price.
pub fn price_to_monthly_rent(price: u64) -> u64 {
    price / RENT_TO_PRICE
}

/// Maximum price written for a monthly rent; rent is capped at the slider ceiling.
pub fn monthly_rent_to_price(rent: u64) -> u64 {
    rent.min(RENT_CEILING) * RENT_TO_PRICE
}

/// Number of listings shown in the home page featured section.
pub const FEATURED_LIMIT: usize = 6;

/// Number of listings shown under "Similar Properties".
pub const SIMILAR_LIMIT: usize = 3;

/// Property category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Loft,
    Cottage,
    Estate,
    Cabin,
    Townhouse,
    Brownstone,
    Ranch,
    Bungalow,
}

impl PropertyType {
    /// Every category, in the order the type selectors list them.
    pub const ALL: [PropertyType; 11] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Loft,
        PropertyType::Cottage,
        PropertyType::Estate,
        PropertyType::Cabin,
        PropertyType::Townhouse,
        PropertyType::Brownstone,
        PropertyType::Ranch,
        PropertyType::Bungalow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Loft => "Loft",
            PropertyType::Cottage => "Cottage",
            PropertyType::Estate => "Estate",
            PropertyType::Cabin => "Cabin",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Brownstone => "Brownstone",
            PropertyType::Ranch => "Ranch",
            PropertyType::Bungalow => "Bungalow",
        }
    }

    /// Parse a selector value into a type filter.
    ///
    /// "Any", empty and unknown labels all mean "no type constraint".
    pub fn parse_filter(value: &str) -> Option<PropertyType> {
        value.parse().ok()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PropertyType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or(())
    }
}

/// Listing agent contact card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub image: String,
}

/// A property listing. Loaded once from static data and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub address: String,
    /// Asking price in whole US dollars
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Living area in square feet
    pub area: u32,
    pub property_type: PropertyType,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub nearby_places: Vec<String>,
    #[serde(default)]
    pub agent: Option<Agent>,
}

/// Shared interior shots appended to every listing's gallery
pub const INTERIOR_IMAGES: [&str; 3] = [
    "/images/interior-1.jpg",
    "/images/interior-2.jpg",
    "/images/interior-3.jpg",
];

impl Property {
    /// Detail page slides: the listing photo first, then the interiors.
    pub fn gallery(&self) -> Vec<String> {
        std::iter::once(self.image.clone())
            .chain(INTERIOR_IMAGES.iter().map(|s| s.to_string()))
            .collect()
    }
}

/// Minimum room count filter (bedrooms or bathrooms)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomFilter {
    #[default]
    Any,
    AtLeast(u32),
}

impl RoomFilter {
    /// Lenient parse of a selector value.
    ///
    /// Leading digits are honoured ("3+" is 3); anything without them,
    /// including "any" and the empty string, is `Any`. Counts too large
    /// for a u32 saturate, so they match nothing.
    pub fn parse(value: &str) -> RoomFilter {
        let digits: String = value
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return RoomFilter::Any;
        }
        RoomFilter::AtLeast(digits.parse::<u32>().unwrap_or(u32::MAX))
    }

    pub fn accepts(&self, count: u32) -> bool {
        match self {
            RoomFilter::Any => true,
            RoomFilter::AtLeast(min) => count >= *min,
        }
    }

    /// Value used by `<select>` options ("any", "1", "2", ...)
    pub fn as_value(&self) -> String {
        match self {
            RoomFilter::Any => "any".to_string(),
            RoomFilter::AtLeast(n) => n.to_string(),
        }
    }
}

/// Search constraints written by the search forms and read by listing views
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free text matched against address, title and description
    pub location: String,
    /// None means any type
    pub property_type: Option<PropertyType>,
    pub bedrooms: RoomFilter,
    pub bathrooms: RoomFilter,
    /// Inclusive upper bound in whole dollars
    pub max_price: u64,
    pub min_area: Option<u32>,
    pub max_area: Option<u32>,
    /// Feature/amenity keywords, separated by whitespace or commas
    pub keywords: String,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            location: String::new(),
            property_type: None,
            bedrooms: RoomFilter::Any,
            bathrooms: RoomFilter::Any,
            max_price: PRICE_CEILING,
            min_area: None,
            max_area: None,
            keywords: String::new(),
        }
    }
}

impl SearchFilters {
    /// True when no field narrows the collection.
    pub fn is_default(&self) -> bool {
        *self == SearchFilters::default()
    }
}

/// Which listing view is asking: the capped home page grid or the full list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingScope {
    #[default]
    Featured,
    All,
}

impl ListingScope {
    /// Display cap for this view, given the configured featured limit.
    pub fn limit(self, featured_limit: usize) -> Option<usize> {
        match self {
            ListingScope::Featured => Some(featured_limit),
            ListingScope::All => None,
        }
    }
}

/// A submitted search. The generation distinguishes repeated submissions
/// of identical filters so each one re-runs the listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub filters: SearchFilters,
    pub generation: u32,
}

impl SearchRequest {
    pub fn next(previous: Option<&SearchRequest>, filters: SearchFilters) -> SearchRequest {
        let generation = previous.map_or(1, |p| p.generation.wrapping_add(1));
        SearchRequest { filters, generation }
    }
}

/// Result of one listing recomputation
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Matching listings in original order, capped to the display limit
    pub properties: Vec<Property>,
    /// Number of matches before the cap was applied
    pub total_matches: usize,
    /// Set when nothing matched; views show an alert instead of a grid
    pub no_results: bool,
}

/// One removable "chip" describing a non-default filter field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveFilter {
    Location(String),
    Type(PropertyType),
    Bedrooms(u32),
    Bathrooms(u32),
    MaxPrice(u64),
    MinArea(u32),
    MaxArea(u32),
    Keywords(String),
}

impl ActiveFilter {
    /// Reset exactly the field this chip describes.
    pub fn clear(&self, filters: &mut SearchFilters) {
        match self {
            ActiveFilter::Location(_) => filters.location.clear(),
            ActiveFilter::Type(_) => filters.property_type = None,
            ActiveFilter::Bedrooms(_) => filters.bedrooms = RoomFilter::Any,
            ActiveFilter::Bathrooms(_) => filters.bathrooms = RoomFilter::Any,
            ActiveFilter::MaxPrice(_) => filters.max_price = PRICE_CEILING,
            ActiveFilter::MinArea(_) => filters.min_area = None,
            ActiveFilter::MaxArea(_) => filters.max_area = None,
            ActiveFilter::Keywords(_) => filters.keywords.clear(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ActiveFilter::Location(text) => format!("Location: {}", text),
            ActiveFilter::Type(t) => format!("Type: {}", t),
            ActiveFilter::Bedrooms(n) => format!("{}+ Beds", n),
            ActiveFilter::Bathrooms(n) => format!("{}+ Baths", n),
            ActiveFilter::MaxPrice(p) => format!("Max: {}", crate::web_app::format::format_price(*p)),
            ActiveFilter::MinArea(a) => format!("Min Area: {} ft²", a),
            ActiveFilter::MaxArea(a) => format!("Max Area: {} ft²", a),
            ActiveFilter::Keywords(k) => format!("Keywords: {}", k),
        }
    }
}

/// Client-side set of saved listings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    /// Add the id if absent, remove it otherwise. Returns the new state.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&saved| saved == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Wrap-around position for slide shows and galleries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

/// Colour scheme chosen with the header toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the page root
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_parse() {
        assert_eq!(PropertyType::parse_filter("Villa"), Some(PropertyType::Villa));
        assert_eq!(PropertyType::parse_filter("villa"), Some(PropertyType::Villa));
        assert_eq!(PropertyType::parse_filter(" Loft "), Some(PropertyType::Loft));
        assert_eq!(PropertyType::parse_filter("Any"), None);
        assert_eq!(PropertyType::parse_filter(""), None);
        assert_eq!(PropertyType::parse_filter("Castle"), None);
    }

    #[test]
    fn test_property_type_labels_round_trip() {
        for t in PropertyType::ALL {
            assert_eq!(t.label().parse::<PropertyType>(), Ok(t));
            assert_eq!(t.to_string(), t.label());
        }
    }

    #[test]
    fn test_room_filter_parse() {
        assert_eq!(RoomFilter::parse("any"), RoomFilter::Any);
        assert_eq!(RoomFilter::parse(""), RoomFilter::Any);
        assert_eq!(RoomFilter::parse("lots"), RoomFilter::Any);
        assert_eq!(RoomFilter::parse("3"), RoomFilter::AtLeast(3));
        assert_eq!(RoomFilter::parse("4+"), RoomFilter::AtLeast(4));
        assert_eq!(RoomFilter::parse(" 2 "), RoomFilter::AtLeast(2));
    }

    #[test]
    fn test_room_filter_parse_saturates_huge_counts() {
        let filter = RoomFilter::parse("99999999999");
        assert_eq!(filter, RoomFilter::AtLeast(u32::MAX));
        assert!(!filter.accepts(12));
    }

    #[test]
    fn test_monthly_rent_price_conversion() {
        assert_eq!(monthly_rent_to_price(2_500), 500_000);
        assert_eq!(price_to_monthly_rent(500_000), 2_500);
        assert_eq!(price_to_monthly_rent(monthly_rent_to_price(RENT_STEP)), RENT_STEP);

        // The rent ceiling lines up with the price ceiling
        assert_eq!(monthly_rent_to_price(RENT_CEILING), PRICE_CEILING);
        assert_eq!(price_to_monthly_rent(PRICE_CEILING), RENT_CEILING);
        assert_eq!(monthly_rent_to_price(RENT_CEILING + 1_000), PRICE_CEILING);

        // Prices between rent steps round down
        assert_eq!(price_to_monthly_rent(450_150), 2_250);
    }

    #[test]
    fn test_room_filter_accepts() {
        assert!(RoomFilter::Any.accepts(0));
        assert!(RoomFilter::AtLeast(3).accepts(3));
        assert!(RoomFilter::AtLeast(3).accepts(5));
        assert!(!RoomFilter::AtLeast(3).accepts(2));
    }

    #[test]
    fn test_room_filter_value() {
        assert_eq!(RoomFilter::Any.as_value(), "any");
        assert_eq!(RoomFilter::AtLeast(2).as_value(), "2");
    }

    #[test]
    fn test_search_filters_default() {
        let filters = SearchFilters::default();
        assert!(filters.location.is_empty());
        assert_eq!(filters.property_type, None);
        assert_eq!(filters.bedrooms, RoomFilter::Any);
        assert_eq!(filters.bathrooms, RoomFilter::Any);
        assert_eq!(filters.max_price, PRICE_CEILING);
        assert!(filters.is_default());
    }

    #[test]
    fn test_active_filter_clear_resets_one_field() {
        let mut filters = SearchFilters {
            location: "Miami".to_string(),
            bedrooms: RoomFilter::AtLeast(2),
            ..SearchFilters::default()
        };

        ActiveFilter::Location("Miami".to_string()).clear(&mut filters);
        assert!(filters.location.is_empty());
        assert_eq!(filters.bedrooms, RoomFilter::AtLeast(2));
    }

    #[test]
    fn test_listing_scope_limit() {
        assert_eq!(ListingScope::Featured.limit(6), Some(6));
        assert_eq!(ListingScope::All.limit(6), None);
    }

    #[test]
    fn test_search_request_generation_advances() {
        let first = SearchRequest::next(None, SearchFilters::default());
        let second = SearchRequest::next(Some(&first), SearchFilters::default());
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_favorites_toggle() {
        let mut favorites = Favorites::default();
        assert!(favorites.toggle(4));
        assert!(favorites.contains(4));
        assert!(!favorites.toggle(4));
        assert!(!favorites.contains(4));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.go_to(1);
        assert_eq!(carousel.current(), 1);
        carousel.go_to(7);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().class(), "light");
    }

    #[test]
    fn test_property_deserializes_without_optional_lists() {
        let json = r#"{
            "id": 9, "title": "T", "description": "D", "address": "A",
            "price": 100, "bedrooms": 1, "bathrooms": 1, "area": 500,
            "property_type": "Cabin", "image": "/images/x.jpg"
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.property_type, PropertyType::Cabin);
        assert!(property.features.is_empty());
        assert!(property.agent.is_none());
        assert!(!property.featured);
        assert_eq!(property.gallery()[0], "/images/x.jpg");
        assert_eq!(property.gallery().len(), 1 + INTERIOR_IMAGES.len());
    }
}
