// web_app/api/queries.rs - Listing queries over the in-memory catalogue
//
// Pure functions: every operation takes the property slice it works on,
// so the same code runs on the server, in the browser and in tests.

use crate::web_app::model::*;

/// Whether `property` satisfies every clause of `filters`.
///
/// Clauses are independent and conjunctive: free text, type, minimum
/// bedrooms, minimum bathrooms, maximum price, area bounds and keywords.
pub fn matches(property: &Property, filters: &SearchFilters) -> bool {
    matches_location(property, &filters.location)
        && filters.property_type.map_or(true, |t| t == property.property_type)
        && filters.bedrooms.accepts(property.bedrooms)
        && filters.bathrooms.accepts(property.bathrooms)
        && property.price <= filters.max_price
        && filters.min_area.map_or(true, |min| property.area >= min)
        && filters.max_area.map_or(true, |max| property.area <= max)
        && matches_keywords(property, &filters.keywords)
}

/// Case-insensitive containment in address, title or description.
///
/// The text is matched as typed: surrounding spaces are part of the needle.
fn matches_location(property: &Property, location: &str) -> bool {
    if location.is_empty() {
        return true;
    }
    let needle = location.to_lowercase();
    [&property.address, &property.title, &property.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Every keyword must appear in the description, features or amenities.
fn matches_keywords(property: &Property, keywords: &str) -> bool {
    let terms = keyword_terms(keywords);
    if terms.is_empty() {
        return true;
    }

    let haystack = std::iter::once(&property.description)
        .chain(property.features.iter())
        .chain(property.amenities.iter())
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    terms.iter().all(|term| haystack.contains(term.as_str()))
}

/// Lower-cased keyword terms, split on whitespace and commas.
pub fn keyword_terms(keywords: &str) -> Vec<String> {
    keywords
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Recompute a listing: filter the full collection, keep original order,
/// cap to `limit` when given.
pub fn apply_filters(
    properties: &[Property],
    filters: &SearchFilters,
    limit: Option<usize>,
) -> SearchOutcome {
    let matched: Vec<&Property> = properties.iter().filter(|p| matches(p, filters)).collect();
    let total_matches = matched.len();

    let properties: Vec<Property> = matched
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    SearchOutcome {
        no_results: properties.is_empty(),
        properties,
        total_matches,
    }
}

/// The listing shown before any search is submitted.
pub fn featured_properties(properties: &[Property], limit: usize) -> Vec<Property> {
    properties.iter().take(limit).cloned().collect()
}

pub fn find_property(properties: &[Property], id: u32) -> Option<&Property> {
    properties.iter().find(|p| p.id == id)
}

/// Same-type listings other than `current_id`, in catalogue order.
pub fn similar_properties(
    properties: &[Property],
    current_id: u32,
    property_type: PropertyType,
    limit: usize,
) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| p.id != current_id && p.property_type == property_type)
        .take(limit)
        .cloned()
        .collect()
}

/// Chips for every non-default field, in form order.
pub fn active_filters(filters: &SearchFilters) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    if !filters.location.is_empty() {
        chips.push(ActiveFilter::Location(filters.location.trim().to_string()));
    }
    if let Some(t) = filters.property_type {
        chips.push(ActiveFilter::Type(t));
    }
    if let RoomFilter::AtLeast(n) = filters.bedrooms {
        chips.push(ActiveFilter::Bedrooms(n));
    }
    if let RoomFilter::AtLeast(n) = filters.bathrooms {
        chips.push(ActiveFilter::Bathrooms(n));
    }
    if filters.max_price != PRICE_CEILING {
        chips.push(ActiveFilter::MaxPrice(filters.max_price));
    }
    if let Some(min) = filters.min_area {
        chips.push(ActiveFilter::MinArea(min));
    }
    if let Some(max) = filters.max_area {
        chips.push(ActiveFilter::MaxArea(max));
    }
    let keywords = filters.keywords.trim();
    if !keywords.is_empty() {
        chips.push(ActiveFilter::Keywords(keywords.to_string()));
    }

    chips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u32, property_type: PropertyType, price: u64, bedrooms: u32) -> Property {
        Property {
            id,
            title: format!("Listing {}", id),
            description: "A bright home with a garden".to_string(),
            address: "1 Test Street, Springfield".to_string(),
            price,
            bedrooms,
            bathrooms: 2,
            area: 1_500,
            property_type,
            image: String::new(),
            featured: false,
            features: vec!["Pool".to_string()],
            amenities: vec!["Gym".to_string()],
            nearby_places: vec![],
            agent: None,
        }
    }

    #[test]
    fn test_location_matches_any_text_field() {
        let mut p = listing(1, PropertyType::House, 100, 1);
        p.title = "Harbor Loft".to_string();

        for text in ["springfield", "HARBOR", "garden", "1 test street"] {
            let filters = SearchFilters { location: text.to_string(), ..SearchFilters::default() };
            assert!(matches(&p, &filters), "{} should match", text);
        }

        let filters = SearchFilters { location: "Shelbyville".to_string(), ..SearchFilters::default() };
        assert!(!matches(&p, &filters));
    }

    #[test]
    fn test_location_is_matched_as_typed() {
        let p = listing(1, PropertyType::House, 100, 1);

        // Interior spaces occur in the address
        let inner = SearchFilters { location: "test street".to_string(), ..SearchFilters::default() };
        assert!(matches(&p, &inner));

        for text in ["   ", "  test street  "] {
            let filters = SearchFilters { location: text.to_string(), ..SearchFilters::default() };
            assert!(!matches(&p, &filters), "{:?} should not match", text);
        }
    }

    #[test]
    fn test_price_bound_is_inclusive() {
        let p = listing(1, PropertyType::House, 500_000, 1);
        let at = SearchFilters { max_price: 500_000, ..SearchFilters::default() };
        let below = SearchFilters { max_price: 499_999, ..SearchFilters::default() };
        assert!(matches(&p, &at));
        assert!(!matches(&p, &below));
    }

    #[test]
    fn test_area_bounds() {
        let p = listing(1, PropertyType::House, 100, 1);
        let within = SearchFilters { min_area: Some(1_500), max_area: Some(1_500), ..SearchFilters::default() };
        let too_small = SearchFilters { min_area: Some(1_501), ..SearchFilters::default() };
        let too_large = SearchFilters { max_area: Some(1_499), ..SearchFilters::default() };
        assert!(matches(&p, &within));
        assert!(!matches(&p, &too_small));
        assert!(!matches(&p, &too_large));
    }

    #[test]
    fn test_keywords_search_features_and_amenities() {
        let p = listing(1, PropertyType::House, 100, 1);
        let hit = SearchFilters { keywords: "pool, gym garden".to_string(), ..SearchFilters::default() };
        let miss = SearchFilters { keywords: "pool sauna".to_string(), ..SearchFilters::default() };
        assert!(matches(&p, &hit));
        assert!(!matches(&p, &miss));
    }

    #[test]
    fn test_keyword_terms_split() {
        assert_eq!(keyword_terms(" Pool,garden  renovated "), vec!["pool", "garden", "renovated"]);
        assert!(keyword_terms(" , ").is_empty());
    }

    #[test]
    fn test_limit_caps_but_counts_all() {
        let props: Vec<Property> = (1..=8).map(|id| listing(id, PropertyType::House, 100, 1)).collect();
        let outcome = apply_filters(&props, &SearchFilters::default(), Some(6));
        assert_eq!(outcome.properties.len(), 6);
        assert_eq!(outcome.total_matches, 8);
        assert!(!outcome.no_results);
        assert_eq!(outcome.properties.last().map(|p| p.id), Some(6));
    }

    #[test]
    fn test_similar_excludes_current() {
        let props = vec![
            listing(1, PropertyType::Villa, 100, 1),
            listing(2, PropertyType::House, 100, 1),
            listing(3, PropertyType::Villa, 100, 1),
        ];
        let similar = similar_properties(&props, 1, PropertyType::Villa, 3);
        assert_eq!(similar.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_active_filters_default_is_empty() {
        assert!(active_filters(&SearchFilters::default()).is_empty());
    }
}
