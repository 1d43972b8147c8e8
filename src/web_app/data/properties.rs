// web_app/data/properties.rs - The listing catalogue
//
// Hard-coded records served by the site. Order here is the order listings
// are shown in.

use crate::web_app::model::{Agent, Property, PropertyType};

fn agent(name: &str, phone: &str, email: &str, image: &str) -> Agent {
    Agent {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        image: image.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct Listing<'a> {
    id: u32,
    title: &'a str,
    property_type: PropertyType,
    address: &'a str,
    price: u64,
    bedrooms: u32,
    bathrooms: u32,
    area: u32,
    featured: bool,
    description: &'a str,
    features: &'a [&'a str],
    amenities: &'a [&'a str],
    nearby: &'a [&'a str],
    agent: Option<&'a Agent>,
}

impl Listing<'_> {
    fn build(self) -> Property {
        Property {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            address: self.address.to_string(),
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            property_type: self.property_type,
            image: format!("/images/property-{}.jpg", self.id),
            featured: self.featured,
            features: strings(self.features),
            amenities: strings(self.amenities),
            nearby_places: strings(self.nearby),
            agent: self.agent.cloned(),
        }
    }
}

pub(super) fn seed() -> Vec<Property> {
    let sarah = agent("Sarah Johnson", "(555) 123-4567", "sarah.johnson@estateease.com", "/images/agent-1.jpg");
    let michael = agent("Michael Chen", "(555) 234-5678", "michael.chen@estateease.com", "/images/agent-2.jpg");
    let emily = agent("Emily Rodriguez", "(555) 345-6789", "emily.rodriguez@estateease.com", "/images/agent-3.jpg");

    vec![
        Listing {
            id: 1,
            title: "Modern Villa with Ocean View",
            property_type: PropertyType::Villa,
            address: "123 Coastal Drive, Malibu, CA 90265",
            price: 2_450_000,
            bedrooms: 4,
            bathrooms: 3,
            area: 3_200,
            featured: true,
            description: "Stunning contemporary villa with panoramic ocean views, floor-to-ceiling windows and an infinity pool overlooking the Pacific.",
            features: &["Ocean view", "Infinity pool", "Smart home system", "Wine cellar"],
            amenities: &["Private beach access", "Home gym", "Three-car garage"],
            nearby: &["Zuma Beach (0.5 mi)", "Malibu Country Mart (2 mi)", "Pepperdine University (4 mi)"],
            agent: Some(&sarah),
        },
        Listing {
            id: 2,
            title: "Downtown Luxury Apartment",
            property_type: PropertyType::Apartment,
            address: "456 Main Street, Apt 12B, New York, NY 10001",
            price: 1_200_000,
            bedrooms: 2,
            bathrooms: 2,
            area: 1_400,
            featured: true,
            description: "Elegant high-rise apartment in the heart of Manhattan with skyline views, a chef's kitchen and 24-hour concierge.",
            features: &["Skyline view", "Chef's kitchen", "Hardwood floors"],
            amenities: &["Concierge", "Rooftop terrace", "Fitness center"],
            nearby: &["Penn Station (0.3 mi)", "Madison Square Park (0.8 mi)"],
            agent: Some(&michael),
        },
        Listing {
            id: 3,
            title: "Charming Countryside Cottage",
            property_type: PropertyType::Cottage,
            address: "789 Willow Lane, Woodstock, VT 05091",
            price: 450_000,
            bedrooms: 3,
            bathrooms: 2,
            area: 1_800,
            featured: false,
            description: "Cozy stone cottage set on two acres with a wood-burning fireplace, an orchard and a renovated country kitchen.",
            features: &["Fireplace", "Orchard", "Renovated kitchen"],
            amenities: &["Garden shed", "Covered porch"],
            nearby: &["Woodstock Village Green (1 mi)", "Suicide Six ski area (3 mi)"],
            agent: Some(&emily),
        },
        Listing {
            id: 4,
            title: "Spacious Family Home",
            property_type: PropertyType::House,
            address: "321 Oak Avenue, Austin, TX 78701",
            price: 750_000,
            bedrooms: 5,
            bathrooms: 3,
            area: 2_900,
            featured: true,
            description: "Bright family home on a quiet tree-lined street with an open floor plan, a large backyard and a pool.",
            features: &["Open floor plan", "Large backyard", "Pool"],
            amenities: &["Two-car garage", "Playroom", "Laundry room"],
            nearby: &["Zilker Park (2 mi)", "Austin Elementary (0.4 mi)"],
            agent: Some(&sarah),
        },
        Listing {
            id: 5,
            title: "Industrial Loft in Arts District",
            property_type: PropertyType::Loft,
            address: "55 Mill Street, Unit 4, Los Angeles, CA 90013",
            price: 890_000,
            bedrooms: 1,
            bathrooms: 1,
            area: 1_500,
            featured: true,
            description: "Converted warehouse loft with exposed brick, polished concrete floors and sixteen-foot ceilings.",
            features: &["Exposed brick", "High ceilings", "Renovated"],
            amenities: &["Shared rooftop", "Bike storage"],
            nearby: &["Arts District galleries (0.2 mi)", "Union Station (1.5 mi)"],
            agent: Some(&michael),
        },
        Listing {
            id: 6,
            title: "Mediterranean Villa Retreat",
            property_type: PropertyType::Villa,
            address: "18 Vista Del Mar, Santa Barbara, CA 93109",
            price: 980_000,
            bedrooms: 3,
            bathrooms: 2,
            area: 2_400,
            featured: true,
            description: "Terracotta-roofed villa with a courtyard fountain, olive trees and a garden with mountain views.",
            features: &["Courtyard", "Garden", "Mountain view"],
            amenities: &["Outdoor kitchen", "Guest casita"],
            nearby: &["Santa Barbara Harbor (1.2 mi)", "State Street (2 mi)"],
            agent: Some(&emily),
        },
        Listing {
            id: 7,
            title: "Historic Estate with Vineyard",
            property_type: PropertyType::Estate,
            address: "1 Vineyard Road, Napa, CA 94558",
            price: 4_750_000,
            bedrooms: 6,
            bathrooms: 5,
            area: 7_800,
            featured: false,
            description: "Grand 1920s estate on twenty acres of producing vineyard, with a tasting room, pool house and guest cottage.",
            features: &["Vineyard", "Tasting room", "Pool house"],
            amenities: &["Wine cellar", "Tennis court", "Staff quarters"],
            nearby: &["Downtown Napa (3 mi)", "Napa Valley Wine Train (4 mi)"],
            agent: Some(&sarah),
        },
        Listing {
            id: 8,
            title: "Lakeside Log Cabin",
            property_type: PropertyType::Cabin,
            address: "42 Pine Ridge Trail, Lake Tahoe, CA 96150",
            price: 620_000,
            bedrooms: 2,
            bathrooms: 1,
            area: 1_100,
            featured: false,
            description: "Hand-built log cabin steps from the lake with a stone fireplace, a wraparound deck and a private dock.",
            features: &["Lake view", "Fireplace", "Private dock"],
            amenities: &["Hot tub", "Kayak storage"],
            nearby: &["Heavenly ski resort (5 mi)", "South Lake Tahoe (2 mi)"],
            agent: None,
        },
        Listing {
            id: 9,
            title: "Sleek Urban Townhouse",
            property_type: PropertyType::Townhouse,
            address: "77 Beacon Street, Boston, MA 02108",
            price: 1_350_000,
            bedrooms: 3,
            bathrooms: 3,
            area: 2_100,
            featured: false,
            description: "Renovated three-storey townhouse on Beacon Hill with a private roof deck and a gourmet kitchen.",
            features: &["Roof deck", "Gourmet kitchen", "Renovated"],
            amenities: &["Deeded parking", "Storage unit"],
            nearby: &["Boston Common (0.2 mi)", "Charles Street (0.3 mi)"],
            agent: Some(&michael),
        },
        Listing {
            id: 10,
            title: "Classic Brooklyn Brownstone",
            property_type: PropertyType::Brownstone,
            address: "210 Park Place, Brooklyn, NY 11238",
            price: 2_900_000,
            bedrooms: 4,
            bathrooms: 3,
            area: 3_600,
            featured: false,
            description: "Four-storey 1890s brownstone with original moldings, pocket doors and a landscaped garden.",
            features: &["Original details", "Garden", "Fireplace"],
            amenities: &["Garden level apartment", "Laundry room"],
            nearby: &["Prospect Park (0.4 mi)", "Brooklyn Museum (0.6 mi)"],
            agent: Some(&emily),
        },
        Listing {
            id: 11,
            title: "Sprawling Hill Country Ranch",
            property_type: PropertyType::Ranch,
            address: "9000 Ranch Road 12, Wimberley, TX 78676",
            price: 1_850_000,
            bedrooms: 4,
            bathrooms: 4,
            area: 4_200,
            featured: false,
            description: "Single-storey ranch on forty acres with horse barns, a stocked pond and sweeping hill country views.",
            features: &["Horse barn", "Pond", "Acreage"],
            amenities: &["Workshop", "Covered patio", "Pool"],
            nearby: &["Wimberley Square (3 mi)", "Blue Hole Regional Park (4 mi)"],
            agent: Some(&sarah),
        },
        Listing {
            id: 12,
            title: "Craftsman Bungalow",
            property_type: PropertyType::Bungalow,
            address: "64 Alder Street, Portland, OR 97214",
            price: 585_000,
            bedrooms: 2,
            bathrooms: 1,
            area: 1_250,
            featured: false,
            description: "Lovingly restored craftsman bungalow with built-ins, a front porch and a detached studio.",
            features: &["Built-ins", "Front porch", "Detached studio"],
            amenities: &["Garden", "Off-street parking"],
            nearby: &["Hawthorne Boulevard (0.3 mi)", "Laurelhurst Park (0.8 mi)"],
            agent: None,
        },
        Listing {
            id: 13,
            title: "Penthouse Apartment with Terrace",
            property_type: PropertyType::Apartment,
            address: "900 Brickell Avenue, PH 2, Miami, FL 33131",
            price: 3_200_000,
            bedrooms: 3,
            bathrooms: 3,
            area: 2_800,
            featured: false,
            description: "Full-floor penthouse with a wraparound terrace, a plunge pool and views over Biscayne Bay.",
            features: &["Bay view", "Plunge pool", "Private elevator"],
            amenities: &["Spa", "Valet", "Marina access"],
            nearby: &["Brickell City Centre (0.3 mi)", "Bayfront Park (1.5 mi)"],
            agent: Some(&michael),
        },
        Listing {
            id: 14,
            title: "Desert Modern House",
            property_type: PropertyType::House,
            address: "15 Saguaro Way, Scottsdale, AZ 85251",
            price: 1_100_000,
            bedrooms: 4,
            bathrooms: 3,
            area: 3_000,
            featured: false,
            description: "Mid-century inspired desert home with walls of glass, a pool and a fire pit facing Camelback Mountain.",
            features: &["Mountain view", "Pool", "Fire pit"],
            amenities: &["Three-car garage", "Solar panels"],
            nearby: &["Old Town Scottsdale (1 mi)", "Camelback Mountain (3 mi)"],
            agent: Some(&emily),
        },
    ]
    .into_iter()
    .map(Listing::build)
    .collect()
}
