//! Owner Profile
//!
//! Contact details and social links shown in the footer and on the contact
//! page.

/// A social profile or mail link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Off-site links open in a new tab
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

/// One entry of the contact card list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_EMAIL: &str = "hello@example.com";

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "GitHub", href: "https://github.com" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { label: "Email", href: "mailto:hello@example.com" },
    SocialLink { label: "Instagram", href: "https://instagram.com" },
];

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Email",
        value: CONTACT_EMAIL,
        href: Some("mailto:hello@example.com"),
    },
    ContactDetail {
        label: "Phone",
        value: "+1 555 010 0000",
        href: Some("tel:+15550100000"),
    },
    ContactDetail {
        label: "Location",
        value: "Remote",
        href: None,
    },
];

/// Details with a link target (email and phone)
pub fn reachable_details() -> impl Iterator<Item = &'static ContactDetail> {
    CONTACT_DETAILS.iter().filter(|d| d.href.is_some())
}
