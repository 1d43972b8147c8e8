// web_app/model/content.rs - Static page content types
//
// Marketing content (blog, testimonials, team, ...) and the contact form
// payload. None of these are persisted.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EstateError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub date: NaiveDate,
    pub author: String,
    pub read_minutes: u32,
    pub category: String,
    pub tags: Vec<String>,
}

impl BlogPost {
    /// "June 15, 2023"
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    pub fn read_time(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image: String,
    pub content: String,
    /// Stars out of five
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

/// Company history entry on the about page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: u16,
    pub title: String,
    pub description: String,
}

/// Hero banner slide
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

impl NavItem {
    /// Whether this entry is the current page.
    pub fn is_active(&self, pathname: &str) -> bool {
        if self.href == "/" {
            pathname == "/"
        } else {
            pathname == self.href || pathname.starts_with(&format!("{}/", self.href))
        }
    }
}

/// Titled section of the privacy policy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicySection {
    /// Tab key ("overview", "collection", ...)
    pub key: String,
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// Contact form payload
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Names of required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Reject messages with blank required fields or an implausible email.
    pub fn validate(&self) -> crate::error::Result<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(EstateError::InvalidContact(format!("missing {}", missing.join(", "))));
        }
        if !self.has_plausible_email() {
            return Err(EstateError::InvalidContact(format!("'{}' is not an email address", self.email.trim())));
        }
        Ok(())
    }

    /// Loose sanity check: one '@' with text on both sides and a dot after it.
    pub fn has_plausible_email(&self) -> bool {
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.contains('@') && domain.contains('.') && !domain.ends_with('.')
            }
            None => false,
        }
    }
}

/// Acknowledgement shown in the confirmation dialog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub reference: Uuid,
    pub received_at: NaiveDateTime,
    pub first_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: String::new(),
            subject: "Viewing".to_string(),
            message: "Is the loft still available?".to_string(),
        }
    }

    #[test]
    fn test_complete_message_has_no_missing_fields() {
        assert!(message().missing_fields().is_empty());
        assert!(message().has_plausible_email());
    }

    #[test]
    fn test_missing_fields_ignore_phone() {
        let msg = ContactMessage {
            subject: "  ".to_string(),
            message: String::new(),
            ..message()
        };
        assert_eq!(msg.missing_fields(), vec!["subject", "message"]);
    }

    #[test]
    fn test_validate() {
        assert_eq!(message().validate(), Ok(()));

        let blank = ContactMessage { first_name: String::new(), ..message() };
        assert_eq!(
            blank.validate(),
            Err(EstateError::InvalidContact("missing first name".to_string()))
        );

        let bad_email = ContactMessage { email: "nobody".to_string(), ..message() };
        assert!(matches!(bad_email.validate(), Err(EstateError::InvalidContact(_))));
    }

    #[test]
    fn test_email_plausibility() {
        for bad in ["", "john", "john@", "@example.com", "john@example", "a@b@c.com", "john@example."] {
            let msg = ContactMessage { email: bad.to_string(), ..message() };
            assert!(!msg.has_plausible_email(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_nav_item_active() {
        let home = NavItem { name: "Home".to_string(), href: "/".to_string() };
        let props = NavItem { name: "Properties".to_string(), href: "/properties".to_string() };

        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
        assert!(props.is_active("/properties"));
        assert!(props.is_active("/properties/3"));
        assert!(!props.is_active("/propertiesx"));
    }

    #[test]
    fn test_blog_post_display() {
        let post = BlogPost {
            id: 1,
            title: "T".to_string(),
            excerpt: "E".to_string(),
            image: String::new(),
            date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
            author: "A".to_string(),
            read_minutes: 8,
            category: "Buying".to_string(),
            tags: vec![],
        };
        assert_eq!(post.display_date(), "June 5, 2023");
        assert_eq!(post.read_time(), "8 min read");
    }
}
