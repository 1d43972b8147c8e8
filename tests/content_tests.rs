// tests/content_tests.rs
// Static page content, navigation and contact validation

use std::collections::HashSet;

use estate_ease::error::EstateError;
use estate_ease::web_app::data;
use estate_ease::web_app::model::*;

#[test]
fn test_blog_posts_are_complete() {
    let posts = data::blog_posts();
    assert!(!posts.is_empty());

    let ids: HashSet<u32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), posts.len());

    for post in posts {
        assert!(!post.title.is_empty());
        assert!(!post.excerpt.is_empty());
        assert!(post.read_minutes > 0);
        assert!(post.read_time().ends_with("min read"));
        assert!(post.display_date().contains(&post.date.format("%Y").to_string()));
    }
}

#[test]
fn test_testimonial_ratings_are_in_range() {
    for t in data::testimonials() {
        assert!((1..=5).contains(&t.rating), "{} has rating {}", t.name, t.rating);
    }
}

#[test]
fn test_carousels_have_slides() {
    assert!(data::hero_slides().len() > 1);
    assert!(data::testimonials().len() > 1);

    let mut hero = Carousel::new(data::hero_slides().len());
    for _ in 0..data::hero_slides().len() {
        hero.next();
    }
    assert_eq!(hero.current(), 0);
}

#[test]
fn test_exactly_one_nav_item_active_per_section() {
    let active = |path: &str| -> Vec<String> {
        data::nav_items()
            .iter()
            .filter(|n| n.is_active(path))
            .map(|n| n.name.clone())
            .collect()
    };

    assert_eq!(active("/"), vec!["Home"]);
    assert_eq!(active("/properties"), vec!["Properties"]);
    assert_eq!(active("/properties/7"), vec!["Properties"]);
    assert_eq!(active("/blog"), vec!["Blog"]);
    assert!(active("/privacy").is_empty());
}

#[test]
fn test_privacy_sections() {
    let sections = data::privacy_sections();
    let keys: HashSet<&str> = sections.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys.len(), sections.len());
    assert_eq!(sections[0].key, "overview");
    assert!(sections.iter().all(|s| !s.paragraphs.is_empty()));
}

#[test]
fn test_team_and_milestones() {
    assert!(!data::team().is_empty());
    let years: Vec<u16> = data::milestones().iter().map(|m| m.year).collect();
    assert!(years.windows(2).all(|w| w[0] < w[1]), "milestones out of order: {:?}", years);
}

#[test]
fn test_contact_message_validation() {
    let valid = ContactMessage {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.org".to_string(),
        phone: String::new(),
        subject: "Viewing request".to_string(),
        message: "Could I see the cottage on Saturday?".to_string(),
    };
    assert!(valid.validate().is_ok());

    let empty = ContactMessage::default();
    assert_eq!(
        empty.missing_fields(),
        vec!["first name", "last name", "email", "subject", "message"]
    );
    assert!(matches!(empty.validate(), Err(EstateError::InvalidContact(_))));
}
