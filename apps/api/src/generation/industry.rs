//! Industry keyword suggestions — a fixed catalogue of industries and seed keywords
//! offered alongside the target keyword.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Industry {
    pub slug: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        slug: "technology",
        name: "Technology",
        keywords: &["software", "cloud", "automation", "cybersecurity", "saas", "ai"],
    },
    Industry {
        slug: "healthcare",
        name: "Healthcare",
        keywords: &["telehealth", "wellness", "patient", "clinic", "treatment", "prevention"],
    },
    Industry {
        slug: "finance",
        name: "Finance",
        keywords: &["investing", "budget", "savings", "fintech", "retirement", "credit"],
    },
    Industry {
        slug: "ecommerce",
        name: "E-commerce",
        keywords: &["shopping", "checkout", "discount", "shipping", "marketplace", "reviews"],
    },
    Industry {
        slug: "real_estate",
        name: "Real Estate",
        keywords: &["property", "mortgage", "listing", "realtor", "rental", "investment"],
    },
    Industry {
        slug: "education",
        name: "Education",
        keywords: &["elearning", "courses", "tutoring", "curriculum", "students", "certification"],
    },
    Industry {
        slug: "travel",
        name: "Travel",
        keywords: &["destinations", "booking", "itinerary", "hotels", "flights", "adventure"],
    },
    Industry {
        slug: "marketing",
        name: "Marketing",
        keywords: &["branding", "seo", "campaigns", "engagement", "conversion", "analytics"],
    },
];

/// Finds an industry by slug or name. Case, spaces, hyphens and underscores are ignored,
/// so "Real Estate", "real-estate" and "REAL_ESTATE" all resolve.
pub fn find_industry(query: &str) -> Option<&'static Industry> {
    let wanted = fold(query);
    if wanted.is_empty() {
        return None;
    }
    INDUSTRIES
        .iter()
        .find(|i| fold(i.slug) == wanted || fold(i.name) == wanted)
}

fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
