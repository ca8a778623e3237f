//! Static budgeting tips and location-flavored recommendations.
//!
//! The recommendations are generic placeholders; a location-based content
//! API could replace them without touching the allocator.

use serde::Serialize;

pub const TIPS: [&str; 4] = [
    "Track your spending weekly to stay on budget",
    "Look for student discounts on textbooks and software",
    "Consider meal prepping to save on food costs",
    "Use campus resources like the gym instead of paid memberships",
];

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalContent {
    /// Display label; falls back to a generic area when no location given.
    pub location: String,
    pub tips: Vec<&'static str>,
    pub restaurants: Vec<Recommendation>,
    pub entertainment: Vec<Recommendation>,
}

pub fn for_location(location: Option<&str>) -> LocalContent {
    let label = match location {
        Some(l) if !l.trim().is_empty() => l.trim().to_string(),
        _ => "Your Area".to_string(),
    };

    LocalContent {
        location: label,
        tips: TIPS.to_vec(),
        restaurants: vec![
            Recommendation {
                name: "Local Pizza Place",
                description: "Affordable pizza and casual dining",
                price: "$",
            },
            Recommendation {
                name: "Downtown Cafe",
                description: "Coffee shop with sandwiches and pastries",
                price: "$",
            },
            Recommendation {
                name: "Family Restaurant",
                description: "Comfort food at reasonable prices",
                price: "$$",
            },
            Recommendation {
                name: "Fast Casual Spot",
                description: "Quick service, build-your-own meals",
                price: "$",
            },
            Recommendation {
                name: "Special Occasion Dining",
                description: "Upscale restaurant for celebrations",
                price: "$$$",
            },
        ],
        entertainment: vec![
            Recommendation {
                name: "Local Park",
                description: "Free outdoor activities and walking trails",
                price: "Free",
            },
            Recommendation {
                name: "Downtown Area",
                description: "Shopping, galleries, and local events",
                price: "Varies",
            },
            Recommendation {
                name: "Community Center",
                description: "Fitness facilities and recreation programs",
                price: "$",
            },
            Recommendation {
                name: "Movie Theater",
                description: "Latest films and matinee discounts",
                price: "$$",
            },
            Recommendation {
                name: "Entertainment Complex",
                description: "Bowling, arcade, and activities",
                price: "$$",
            },
            Recommendation {
                name: "Public Library",
                description: "Free events, books, and community programs",
                price: "Free",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_label_fallback() {
        assert_eq!(for_location(None).location, "Your Area");
        assert_eq!(for_location(Some("   ")).location, "Your Area");
        assert_eq!(for_location(Some("Boston")).location, "Boston");
    }
}
