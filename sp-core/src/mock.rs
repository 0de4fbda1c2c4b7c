//! Deterministic mock data generation.
//!
//! All generators take an explicit seed so a given (seed, theme) pair
//! always yields the same stream, which keeps demo pages stable across
//! reloads and lets tests pin exact output.

use crate::aspect::Aspect;
use crate::record::TweetRecord;
use crate::sentiment::Sentiment;
use crate::theme::ThemeTweet;
use chrono::{Days, NaiveDate};

/// SplitMix64 generator. Small, seedable, and good enough for demo data.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform draw in [0, 1) with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in [0, bound). Zero bound yields zero.
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_f64() * bound as f64) as usize
    }

    /// Uniform draw in [lo, hi).
    pub fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

/// Keyword profile for one theme.
pub struct ThemeProfile {
    pub id: u32,
    pub name: &'static str,
    pub keywords: [&'static str; 4],
}

/// Keyword profiles for every known theme. Sample tweets are built from
/// the matching profile so drill-down text stays on topic.
pub const THEME_PROFILES: [ThemeProfile; 12] = [
    ThemeProfile {
        id: 0,
        name: "Customer Service Experience",
        keywords: ["customer service", "support team", "help desk", "service call"],
    },
    ThemeProfile {
        id: 1,
        name: "Product Quality & Reliability",
        keywords: ["product quality", "build quality", "defects", "durability"],
    },
    ThemeProfile {
        id: 2,
        name: "Pricing & Promotions",
        keywords: ["prices", "discount", "promo code", "price match"],
    },
    ThemeProfile {
        id: 3,
        name: "Online Checkout & App",
        keywords: ["mobile app", "website checkout", "online order", "app update"],
    },
    ThemeProfile {
        id: 4,
        name: "In-Store Experience",
        keywords: ["store layout", "checkout line", "self-checkout", "store staff"],
    },
    ThemeProfile {
        id: 5,
        name: "Delivery & Logistics",
        keywords: ["delivery", "shipping", "courier", "package tracking"],
    },
    ThemeProfile {
        id: 6,
        name: "Returns & Refunds",
        keywords: ["return policy", "refund", "exchange", "return label"],
    },
    ThemeProfile {
        id: 7,
        name: "Stock & Availability",
        keywords: ["out of stock", "inventory", "restock", "backorder"],
    },
    ThemeProfile {
        id: 8,
        name: "Loyalty & Rewards",
        keywords: ["rewards program", "loyalty points", "membership", "cashback"],
    },
    ThemeProfile {
        id: 9,
        name: "Payment & Billing",
        keywords: ["billing", "payment failed", "double charge", "gift card"],
    },
    ThemeProfile {
        id: 10,
        name: "Sustainability & Packaging",
        keywords: ["packaging waste", "recycling", "eco friendly", "sustainability"],
    },
    ThemeProfile {
        id: 11,
        name: "Grocery & Freshness",
        keywords: ["groceries", "fresh produce", "expiry date", "bakery"],
    },
];

/// Profile for a theme id, falling back to the first when unknown.
pub fn theme_profile(theme_id: u32) -> &'static ThemeProfile {
    THEME_PROFILES
        .iter()
        .find(|p| p.id == theme_id)
        .unwrap_or(&THEME_PROFILES[0])
}

const TWEET_TEMPLATES: [&str; 10] = [
    "Just had an experience with {keyword} at Meridian and honestly it exceeded expectations",
    "Why is {keyword} at Meridian still such a mess? Someone fix this",
    "Shoutout to Meridian for the {keyword} situation today, genuinely impressed",
    "Not sure how I feel about {keyword} after today's Meridian run",
    "Meridian really needs to sort out their {keyword} before the holidays",
    "The {keyword} at my local Meridian has improved a lot this month",
    "Third time this week dealing with {keyword} issues at Meridian",
    "PSA: check the {keyword} details before you order from Meridian",
    "Meridian's {keyword} is the reason I keep coming back tbh",
    "Mixed feelings about {keyword} at Meridian lately, anyone else?",
];

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 9-character lowercase base36 token for mock status URLs.
pub fn status_token(rng: &mut SplitMix64) -> String {
    (0..9).map(|_| BASE36[rng.below(36)] as char).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score drawn from the band matching the label, rounded to 2 decimals.
fn score_for(rng: &mut SplitMix64, sentiment: Sentiment) -> f64 {
    let raw = match sentiment {
        Sentiment::Positive => rng.in_range(0.5, 1.0),
        Sentiment::Negative => rng.in_range(-0.5, 0.0),
        Sentiment::Neutral => rng.in_range(-0.1, 0.1),
    };
    round2(raw)
}

fn day_within_month(rng: &mut SplitMix64, today: NaiveDate) -> NaiveDate {
    today - Days::new(rng.below(30) as u64)
}

/// Per-theme generator stream. Mixing the theme id into the seed keeps
/// every theme's sample tweets distinct under a shared base seed.
fn theme_stream(seed: u64, theme_id: u32) -> SplitMix64 {
    SplitMix64::new(seed ^ (theme_id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Generate `limit` sample tweets for a theme.
pub fn theme_tweets(theme_id: u32, limit: usize, seed: u64, today: NaiveDate) -> Vec<ThemeTweet> {
    let profile = theme_profile(theme_id);
    let mut rng = theme_stream(seed, theme_id);
    let mut items = Vec::with_capacity(limit);

    for i in 0..limit {
        let template = *rng.pick(&TWEET_TEMPLATES);
        let keyword = *rng.pick(&profile.keywords);
        let text = template.replace("{keyword}", keyword);

        let sentiment = *rng.pick(&Sentiment::ALL);
        let score = score_for(&mut rng, sentiment);
        let aspect = *rng.pick(&Aspect::ALL);

        let date = day_within_month(&mut rng, today);
        let created_day = day_within_month(&mut rng, today);
        let createdat = format!(
            "{}T{:02}:{:02}:{:02}Z",
            created_day.format("%Y-%m-%d"),
            rng.below(24),
            rng.below(60),
            rng.below(60),
        );
        let token = status_token(&mut rng);

        items.push(ThemeTweet {
            id: format!("{}_{}", theme_id, i + 1),
            twitterurl: format!("https://twitter.com/user/status/{}", token),
            text_clean: text.clone(),
            text: text.clone(),
            clean_tweet: text,
            sentiment_label: sentiment.as_str().to_string(),
            sentiment_score: score,
            aspect_dominant: aspect.as_str().to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            createdat,
            lang: "en".to_string(),
            has_url: rng.chance(0.3),
            has_hashtag: rng.chance(0.2),
        });
    }

    items
}

/// Generate `count` browseable records for the raw-data page.
pub fn records(count: usize, seed: u64, today: NaiveDate) -> Vec<TweetRecord> {
    let mut rng = SplitMix64::new(seed);
    let mut out = Vec::with_capacity(count);

    for i in 0..count {
        let id = (i + 1) as u64;
        let sentiment = *rng.pick(&Sentiment::ALL);
        let score = round2((rng.next_f64() - 0.5) * 2.0);
        let aspect = *rng.pick(&Aspect::ALL);
        let day = day_within_month(&mut rng, today);
        let token = status_token(&mut rng);

        out.push(TweetRecord {
            id,
            text: format!("Sample post {} about Meridian products and services", id),
            created_at: day.format("%Y-%m-%d").to_string(),
            sentiment_label: sentiment,
            sentiment_score: score,
            aspect_dominant: aspect,
            twitterurl: format!("https://twitter.com/user/status/{}", token),
            user: format!("user{}", id),
            retweets: rng.below(100) as u32,
            likes: rng.below(500) as u32,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_splitmix_is_deterministic() {
        let mut a = SplitMix64::new(42);
        let mut b = SplitMix64::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut rng = SplitMix64::new(7);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_below_respects_bound() {
        let mut rng = SplitMix64::new(99);
        for _ in 0..1000 {
            assert!(rng.below(10) < 10);
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn test_theme_profile_falls_back_to_first() {
        assert_eq!(theme_profile(3).id, 3);
        assert_eq!(theme_profile(500).id, 0);
    }

    #[test]
    fn test_theme_tweets_same_seed_same_output() {
        let a = theme_tweets(2, 10, 1234, today());
        let b = theme_tweets(2, 10, 1234, today());
        assert_eq!(a.len(), 10);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.text, y.text);
            assert_eq!(x.sentiment_score, y.sentiment_score);
            assert_eq!(x.twitterurl, y.twitterurl);
        }
    }

    #[test]
    fn test_theme_tweets_distinct_per_theme() {
        let a = theme_tweets(1, 5, 1234, today());
        let b = theme_tweets(2, 5, 1234, today());
        let same = a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| x.text == y.text && x.sentiment_score == y.sentiment_score);
        assert!(!same);
    }

    #[test]
    fn test_theme_tweets_scores_match_label_band() {
        for tweet in theme_tweets(5, 50, 9, today()) {
            match tweet.sentiment_label.as_str() {
                "positive" => assert!((0.5..=1.0).contains(&tweet.sentiment_score)),
                "negative" => assert!((-0.5..=0.0).contains(&tweet.sentiment_score)),
                "neutral" => assert!((-0.1..=0.1).contains(&tweet.sentiment_score)),
                other => panic!("unexpected label {other}"),
            }
        }
    }

    #[test]
    fn test_theme_tweets_ids_and_text_shape() {
        let items = theme_tweets(3, 4, 77, today());
        assert_eq!(items[0].id, "3_1");
        assert_eq!(items[3].id, "3_4");
        for tweet in &items {
            assert_eq!(tweet.text, tweet.text_clean);
            assert_eq!(tweet.text, tweet.clean_tweet);
            assert!(!tweet.text.contains("{keyword}"));
            assert_eq!(tweet.lang, "en");
        }
    }

    #[test]
    fn test_status_token_shape() {
        let mut rng = SplitMix64::new(5);
        let token = status_token(&mut rng);
        assert_eq!(token.len(), 9);
        assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_records_deterministic_and_bounded() {
        let a = records(100, 55, today());
        let b = records(100, 55, today());
        assert_eq!(a.len(), 100);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.created_at, y.created_at);
            assert_eq!(x.sentiment_score, y.sentiment_score);
        }
        for record in &a {
            assert!((-1.0..=1.0).contains(&record.sentiment_score));
            assert!(record.retweets < 100);
            assert!(record.likes < 500);
            assert_eq!(record.user, format!("user{}", record.id));
        }
    }

    #[test]
    fn test_records_dates_within_last_month() {
        let earliest = today() - Days::new(29);
        for record in records(100, 3, today()) {
            let day = NaiveDate::parse_from_str(&record.created_at, "%Y-%m-%d").unwrap();
            assert!(day >= earliest && day <= today());
        }
    }
}
