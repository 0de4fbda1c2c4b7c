use serde::{Deserialize, Serialize};

/// One discovered discussion theme from the themes payload.
///
/// Payloads arrive from an external pipeline, so every field except the
/// name is defaulted: a theme missing its count renders as zero rather
/// than failing the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default, alias = "theme_id")]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tweet_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// The themes payload as served by `GET /api/themes`.
///
/// `error` is set alongside an empty `themes` list when the payload file
/// is missing; clients surface it as a banner, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemesPayload {
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub themes: Vec<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single sample tweet under a theme drill-down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeTweet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub twitterurl: String,
    #[serde(default)]
    pub text_clean: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub clean_tweet: String,
    #[serde(default)]
    pub sentiment_label: String,
    #[serde(default)]
    pub sentiment_score: f64,
    #[serde(default)]
    pub aspect_dominant: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub createdat: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub has_url: bool,
    #[serde(default)]
    pub has_hashtag: bool,
}

impl ThemeTweet {
    /// Preferred display text: first non-empty of the three text fields.
    pub fn display_text(&self) -> &str {
        if !self.text_clean.is_empty() {
            &self.text_clean
        } else if !self.text.is_empty() {
            &self.text
        } else {
            &self.clean_tweet
        }
    }

    /// Case-insensitive substring match across all three text fields.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.text_clean.to_lowercase().contains(&needle)
            || self.text.to_lowercase().contains(&needle)
            || self.clean_tweet.to_lowercase().contains(&needle)
    }
}

/// Response body for `GET /api/themes/{id}/tweets`. `theme` echoes the
/// requested id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetsResponse {
    #[serde(default)]
    pub theme: u32,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub items: Vec<ThemeTweet>,
    #[serde(default)]
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_missing_fields() {
        let theme: Theme = serde_json::from_str(r#"{"name": "Store Experience"}"#).unwrap();
        assert_eq!(theme.id, 0);
        assert_eq!(theme.name, "Store Experience");
        assert_eq!(theme.tweet_count, 0);
        assert!(theme.summary.is_none());
        assert!(theme.keywords.is_none());
    }

    #[test]
    fn test_theme_accepts_theme_id_alias() {
        let theme: Theme = serde_json::from_str(r#"{"theme_id": 7, "name": "Pricing"}"#).unwrap();
        assert_eq!(theme.id, 7);
    }

    #[test]
    fn test_payload_error_omitted_when_none() {
        let payload = ThemesPayload {
            updated_at: "2024-05-01T00:00:00Z".to_string(),
            themes: Vec::new(),
            error: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_display_text_falls_through() {
        let tweet = ThemeTweet {
            clean_tweet: "only this one".to_string(),
            ..ThemeTweet::default()
        };
        assert_eq!(tweet.display_text(), "only this one");
    }

    #[test]
    fn test_matches_query_any_field_case_insensitive() {
        let tweet = ThemeTweet {
            text: "Checkout was QUICK today".to_string(),
            ..ThemeTweet::default()
        };
        assert!(tweet.matches_query("quick"));
        assert!(!tweet.matches_query("slow"));
    }
}
