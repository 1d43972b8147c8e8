// web_app/data/content.rs - Marketing copy for the static pages

use chrono::NaiveDate;

use crate::web_app::model::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn blog_posts() -> Vec<BlogPost> {
    let post = |id: u32, title: &str, excerpt: &str, when: NaiveDate, author: &str, minutes: u32, category: &str, t: &[&str]| BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        image: format!("/images/blog-{}.jpg", id),
        date: when,
        author: author.to_string(),
        read_minutes: minutes,
        category: category.to_string(),
        tags: tags(t),
    };

    vec![
        post(
            1,
            "10 Tips for First-Time Home Buyers",
            "Buying your first home can be overwhelming. Here are 10 essential tips to help you navigate the process with confidence.",
            date(2023, 6, 15),
            "Sarah Johnson",
            8,
            "Buying",
            &["First-Time Buyers", "Home Buying", "Mortgage"],
        ),
        post(
            2,
            "How to Stage Your Home for a Quick Sale",
            "Learn professional staging techniques that can help you sell your home faster and potentially increase its value.",
            date(2023, 7, 3),
            "Michael Chen",
            6,
            "Selling",
            &["Home Staging", "Selling Tips", "Real Estate"],
        ),
        post(
            3,
            "Understanding Property Taxes: A Comprehensive Guide",
            "Property taxes can be confusing. This guide breaks down how they work and how they affect your homeownership.",
            date(2023, 8, 12),
            "Emily Rodriguez",
            10,
            "Finance",
            &["Property Taxes", "Homeownership", "Finance"],
        ),
        post(
            4,
            "The Rise of Smart Homes: Features Buyers Want",
            "Smart home technology matters more and more to buyers. Discover which features are in demand and how they add value.",
            date(2023, 9, 5),
            "David Thompson",
            7,
            "Technology",
            &["Smart Homes", "Technology", "Home Value"],
        ),
        post(
            5,
            "Investing in Rental Properties: A Beginner's Guide",
            "Interested in real estate investment? This guide covers the basics of buying and managing rental properties.",
            date(2023, 10, 20),
            "Jessica Williams",
            12,
            "Investment",
            &["Real Estate Investment", "Rental Properties", "Passive Income"],
        ),
        post(
            6,
            "2023 Real Estate Market Trends: What to Expect",
            "An analysis of current market conditions and predictions for the coming year, for buyers and sellers alike.",
            date(2023, 11, 8),
            "Robert Garcia",
            9,
            "Market Analysis",
            &["Market Trends", "Real Estate Market", "Housing Forecast"],
        ),
    ]
}

pub(super) fn testimonials() -> Vec<Testimonial> {
    let entry = |id: u32, name: &str, role: &str, content: &str, rating: u8| Testimonial {
        id,
        name: name.to_string(),
        role: role.to_string(),
        image: format!("/images/client-{}.jpg", id),
        content: content.to_string(),
        rating,
    };

    vec![
        entry(
            1,
            "Sarah Johnson",
            "Homeowner",
            "EstateEase made finding our dream home so simple. Their team was professional, responsive, and truly cared about our needs.",
            5,
        ),
        entry(
            2,
            "Michael Chen",
            "First-time Buyer",
            "As a first-time homebuyer, I was nervous about the process. The team guided me through every step and made it stress-free.",
            5,
        ),
        entry(
            3,
            "Emily Rodriguez",
            "Property Investor",
            "Their market knowledge and attention to detail helped me find the perfect investment properties.",
            4,
        ),
        entry(
            4,
            "David Thompson",
            "Luxury Home Buyer",
            "The luxury market requires expertise and discretion. EstateEase delivered both and found us a property beyond our expectations.",
            5,
        ),
    ]
}

pub(super) fn team() -> Vec<TeamMember> {
    [
        ("Sarah Johnson", "CEO & Founder"),
        ("Michael Chen", "Chief Operations Officer"),
        ("Emily Rodriguez", "Head of Sales"),
        ("David Thompson", "Lead Property Consultant"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, role))| TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        image: format!("/images/team-{}.jpg", i + 1),
    })
    .collect()
}

pub(super) fn milestones() -> Vec<Milestone> {
    [
        (2010, "Founded", "EstateEase opens its first office with a team of three agents."),
        (2014, "Regional Expansion", "Offices open in five new cities across the West Coast."),
        (2018, "Digital Platform", "Launch of our online listing platform and virtual tours."),
        (2023, "National Reach", "Over 10,000 families helped into their new homes."),
    ]
    .into_iter()
    .map(|(year, title, description)| Milestone {
        year,
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub(super) fn hero_slides() -> Vec<Slide> {
    [
        ("Find Your Dream Home", "Discover the perfect property that fits your lifestyle and budget."),
        ("Premium Properties", "Explore our exclusive collection of luxury homes and estates."),
        ("Expert Guidance", "Our experienced agents will help you every step of the way."),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, description))| Slide {
        image: format!("/images/hero-{}.jpg", i + 1),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub(super) fn nav_items() -> Vec<NavItem> {
    [
        ("Home", "/"),
        ("Properties", "/properties"),
        ("About", "/about"),
        ("Blog", "/blog"),
        ("Contact", "/contact"),
    ]
    .into_iter()
    .map(|(name, href)| NavItem {
        name: name.to_string(),
        href: href.to_string(),
    })
    .collect()
}

pub(super) fn privacy_sections() -> Vec<PolicySection> {
    let section = |key: &str, title: &str, paragraphs: &[&str]| PolicySection {
        key: key.to_string(),
        title: title.to_string(),
        paragraphs: tags(paragraphs),
    };

    vec![
        section(
            "overview",
            "Introduction",
            &[
                "At EstateEase, we respect your privacy and are committed to protecting your personal data. This policy explains how we look after your personal data when you visit our website.",
                "This policy applies to all information collected through our website, mobile applications, and any related services, sales, marketing, or events.",
            ],
        ),
        section(
            "collection",
            "Data Collection",
            &[
                "We collect information you provide directly, such as your name, email address and phone number when you contact an agent or create an account.",
                "We automatically collect limited technical data such as browser type and pages visited to improve our services.",
            ],
        ),
        section(
            "usage",
            "Data Usage",
            &[
                "We use your information to respond to enquiries, arrange viewings and send updates you have asked for.",
                "We never sell your personal data to third parties.",
            ],
        ),
        section(
            "rights",
            "Your Rights",
            &[
                "You may request access to, correction of, or deletion of your personal data at any time.",
                "You may withdraw consent to marketing communications by using the unsubscribe link in any email.",
            ],
        ),
        section(
            "contact",
            "Contact Us",
            &[
                "Questions about this policy can be sent to privacy@estateease.com or by phone at (555) 987-6543.",
            ],
        ),
    ]
}
