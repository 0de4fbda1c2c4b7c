use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way polarity label assigned to every record.
///
/// Declaration order is the display order: charts, legends, and summary maps
/// all present sentiments as positive, neutral, negative. Tie-breaking in the
/// stats layer also resolves in this order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All sentiments in display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// The lowercase wire/string form ("positive", "neutral", "negative").
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Title-case label for cards, legends, and table cells.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Chart color for this sentiment, shared by every page.
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#2E7D32",
            Sentiment::Neutral => "#F9A825",
            Sentiment::Negative => "#C62828",
        }
    }

    /// Parse the wire form, tolerating case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Sentiment> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
