// web_app/data/mod.rs - Static site data
//
// Everything the site shows is compiled in. Each collection is built on
// first access and shared for the life of the process.

use std::sync::OnceLock;

use crate::web_app::model::*;

mod content;
mod properties;

/// The full listing catalogue, in display order.
pub fn properties() -> &'static [Property] {
    static PROPERTIES: OnceLock<Vec<Property>> = OnceLock::new();
    PROPERTIES.get_or_init(properties::seed)
}

pub fn blog_posts() -> &'static [BlogPost] {
    static POSTS: OnceLock<Vec<BlogPost>> = OnceLock::new();
    POSTS.get_or_init(content::blog_posts)
}

pub fn testimonials() -> &'static [Testimonial] {
    static TESTIMONIALS: OnceLock<Vec<Testimonial>> = OnceLock::new();
    TESTIMONIALS.get_or_init(content::testimonials)
}

pub fn team() -> &'static [TeamMember] {
    static TEAM: OnceLock<Vec<TeamMember>> = OnceLock::new();
    TEAM.get_or_init(content::team)
}

pub fn milestones() -> &'static [Milestone] {
    static MILESTONES: OnceLock<Vec<Milestone>> = OnceLock::new();
    MILESTONES.get_or_init(content::milestones)
}

pub fn hero_slides() -> &'static [Slide] {
    static SLIDES: OnceLock<Vec<Slide>> = OnceLock::new();
    SLIDES.get_or_init(content::hero_slides)
}

pub fn nav_items() -> &'static [NavItem] {
    static NAV: OnceLock<Vec<NavItem>> = OnceLock::new();
    NAV.get_or_init(content::nav_items)
}

pub fn privacy_sections() -> &'static [PolicySection] {
    static SECTIONS: OnceLock<Vec<PolicySection>> = OnceLock::new();
    SECTIONS.get_or_init(content::privacy_sections)
}

/// Partner logos on the home page: (name, logo path)
pub const PARTNERS: [(&str, &str); 6] = [
    ("Keystone Mortgage", "/images/partner-1.svg"),
    ("Harbor Title Co.", "/images/partner-2.svg"),
    ("BrightMove Relocation", "/images/partner-3.svg"),
    ("Summit Home Inspections", "/images/partner-4.svg"),
    ("Cornerstone Insurance", "/images/partner-5.svg"),
    ("Urban Interiors", "/images/partner-6.svg"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_property_ids_unique() {
        let ids: HashSet<u32> = properties().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), properties().len());
    }

    #[test]
    fn test_properties_have_required_text() {
        for p in properties() {
            assert!(!p.title.is_empty(), "property {} has no title", p.id);
            assert!(!p.address.is_empty(), "property {} has no address", p.id);
            assert!(p.area > 0, "property {} has no area", p.id);
            assert!(p.image.starts_with("/images/"));
        }
    }

    #[test]
    fn test_properties_fit_under_price_ceiling() {
        assert!(properties().iter().all(|p| p.price <= PRICE_CEILING));
    }

    #[test]
    fn test_every_nav_target_is_absolute() {
        assert!(nav_items().iter().all(|n| n.href.starts_with('/')));
    }
}
