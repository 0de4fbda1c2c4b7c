use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed topical category assigned to every record by the upstream pipeline.
///
/// Declaration order is the display order wherever aspects are charted or
/// listed, and the tie-break order for superlatives.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Pricing,
    Delivery,
    Returns,
    Staff,
    #[serde(rename = "app/ux")]
    AppUx,
}

impl Aspect {
    /// All aspects in display order.
    pub const ALL: [Aspect; 5] = [
        Aspect::Pricing,
        Aspect::Delivery,
        Aspect::Returns,
        Aspect::Staff,
        Aspect::AppUx,
    ];

    /// The lowercase wire/string form ("pricing", ..., "app/ux").
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Pricing => "pricing",
            Aspect::Delivery => "delivery",
            Aspect::Returns => "returns",
            Aspect::Staff => "staff",
            Aspect::AppUx => "app/ux",
        }
    }

    /// Title-case label for cards, axes, and table cells.
    pub fn label(&self) -> &'static str {
        match self {
            Aspect::Pricing => "Pricing",
            Aspect::Delivery => "Delivery",
            Aspect::Returns => "Returns",
            Aspect::Staff => "Staff",
            Aspect::AppUx => "App/UX",
        }
    }

    /// The key this aspect uses in the avg-scores endpoint response,
    /// e.g. "aspect_pricing" or "aspect_app/ux".
    pub fn score_key(&self) -> String {
        format!("aspect_{}", self.as_str())
    }

    /// Parse the wire form, tolerating case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Aspect> {
        match s.trim().to_lowercase().as_str() {
            "pricing" => Some(Aspect::Pricing),
            "delivery" => Some(Aspect::Delivery),
            "returns" => Some(Aspect::Returns),
            "staff" => Some(Aspect::Staff),
            "app/ux" => Some(Aspect::AppUx),
            _ => None,
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Aspect;

    #[test]
    fn test_display_order_is_fixed() {
        let labels: Vec<&str> = Aspect::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(labels, vec!["pricing", "delivery", "returns", "staff", "app/ux"]);
    }

    #[test]
    fn test_score_keys() {
        assert_eq!(Aspect::Pricing.score_key(), "aspect_pricing");
        assert_eq!(Aspect::AppUx.score_key(), "aspect_app/ux");
    }

    #[test]
    fn test_parse_round_trips_all_variants() {
        for aspect in Aspect::ALL {
            assert_eq!(Aspect::parse(aspect.as_str()), Some(aspect));
        }
        assert_eq!(Aspect::parse("shipping"), None);
    }

    #[test]
    fn test_serde_slash_form() {
        let json = serde_json::to_string(&Aspect::AppUx).unwrap();
        assert_eq!(json, "\"app/ux\"");
        let back: Aspect = serde_json::from_str("\"app/ux\"").unwrap();
        assert_eq!(back, Aspect::AppUx);
    }
}
