//! Display preparation for the themes page.

use sp_core::theme::Theme;
use sp_utils::text::{clean_quotes, truncate_chars};

/// Character cap for theme summaries.
pub const SUMMARY_LIMIT: usize = 300;
/// Keywords shown before the "+N more" marker.
pub const KEYWORD_DISPLAY_CAP: usize = 8;
/// Character cap for sample tweet text in drill-down lists.
pub const TWEET_TEXT_LIMIT: usize = 280;

/// Strip surrounding double quotes and whitespace from a raw theme name.
pub fn clean_name(raw: Option<&str>) -> String {
    clean_quotes(raw)
}

/// Cleaned theme name, or `Theme {id}` when cleaning yields nothing.
pub fn display_name(theme: &Theme) -> String {
    let cleaned = clean_quotes(Some(&theme.name));
    if cleaned.is_empty() {
        format!("Theme {}", theme.id)
    } else {
        cleaned
    }
}

/// First 300 characters plus an ellipsis; shorter text passes unchanged.
/// The cut is a plain character slice, not word-boundary aware.
pub fn truncate_summary(text: &str) -> String {
    truncate_chars(text, SUMMARY_LIMIT)
}

/// Truncated summary, or the fixed placeholder when absent or blank.
pub fn display_summary(theme: &Theme) -> String {
    match theme.summary.as_deref() {
        Some(text) if !text.trim().is_empty() => truncate_summary(text),
        _ => "No summary available".to_string(),
    }
}

/// The keywords to render plus the overflow marker when the list is
/// longer than the display cap.
pub fn visible_keywords(keywords: &[String]) -> (&[String], Option<String>) {
    if keywords.len() <= KEYWORD_DISPLAY_CAP {
        (keywords, None)
    } else {
        let hidden = keywords.len() - KEYWORD_DISPLAY_CAP;
        (&keywords[..KEYWORD_DISPLAY_CAP], Some(format!("+{} more", hidden)))
    }
}

/// Sum of mention counts across all themes.
pub fn total_mentions(themes: &[Theme]) -> u64 {
    themes.iter().map(|t| t.tweet_count).sum()
}

/// Mean mention count rounded to the nearest whole, zero when empty.
pub fn average_mentions(themes: &[Theme]) -> u64 {
    if themes.is_empty() {
        return 0;
    }
    (total_mentions(themes) as f64 / themes.len() as f64).round() as u64
}

/// Largest single mention count, zero when empty.
pub fn max_mentions(themes: &[Theme]) -> u64 {
    themes.iter().map(|t| t.tweet_count).max().unwrap_or(0)
}

/// Theme with the most mentions; the first wins ties.
pub fn top_theme(themes: &[Theme]) -> Option<&Theme> {
    let mut best: Option<&Theme> = None;
    for theme in themes {
        match best {
            Some(b) if theme.tweet_count > b.tweet_count => best = Some(theme),
            None => best = Some(theme),
            _ => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(id: u32, name: &str, count: u64) -> Theme {
        Theme {
            id,
            name: name.to_string(),
            tweet_count: count,
            summary: None,
            keywords: None,
        }
    }

    #[test]
    fn test_clean_name_strips_quotes() {
        assert_eq!(clean_name(Some("\"Pricing Concerns\"")), "Pricing Concerns");
        assert_eq!(clean_name(Some("\"\"  Delivery  \"\"")), "Delivery");
        assert_eq!(clean_name(None), "");
        assert_eq!(clean_name(Some("")), "");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name(&theme(3, "\"\"", 0)), "Theme 3");
        assert_eq!(display_name(&theme(4, "Checkout", 0)), "Checkout");
    }

    #[test]
    fn test_truncate_summary_limits() {
        let long = "x".repeat(305);
        let cut = truncate_summary(&long);
        assert_eq!(cut.chars().count(), 303);
        assert!(cut.ends_with("..."));

        let exact = "y".repeat(300);
        assert_eq!(truncate_summary(&exact), exact);
    }

    #[test]
    fn test_display_summary_placeholder() {
        let mut t = theme(1, "A", 0);
        assert_eq!(display_summary(&t), "No summary available");
        t.summary = Some("   ".to_string());
        assert_eq!(display_summary(&t), "No summary available");
        t.summary = Some("Short and sweet".to_string());
        assert_eq!(display_summary(&t), "Short and sweet");
    }

    #[test]
    fn test_visible_keywords_cap() {
        let few: Vec<String> = (0..8).map(|i| format!("kw{}", i)).collect();
        let (shown, marker) = visible_keywords(&few);
        assert_eq!(shown.len(), 8);
        assert!(marker.is_none());

        let many: Vec<String> = (0..11).map(|i| format!("kw{}", i)).collect();
        let (shown, marker) = visible_keywords(&many);
        assert_eq!(shown.len(), 8);
        assert_eq!(marker.as_deref(), Some("+3 more"));
    }

    #[test]
    fn test_mention_kpis() {
        let themes = vec![theme(0, "A", 410), theme(1, "B", 364), theme(2, "C", 95)];
        assert_eq!(total_mentions(&themes), 869);
        assert_eq!(average_mentions(&themes), 290);
        assert_eq!(max_mentions(&themes), 410);
        assert_eq!(top_theme(&themes).map(|t| t.id), Some(0));
    }

    #[test]
    fn test_mention_kpis_empty() {
        assert_eq!(total_mentions(&[]), 0);
        assert_eq!(average_mentions(&[]), 0);
        assert_eq!(max_mentions(&[]), 0);
        assert!(top_theme(&[]).is_none());
    }

    #[test]
    fn test_top_theme_first_on_tie() {
        let themes = vec![theme(5, "A", 300), theme(6, "B", 300)];
        assert_eq!(top_theme(&themes).map(|t| t.id), Some(5));
    }
}
