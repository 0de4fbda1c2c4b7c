//! Filtering and pagination for the record browser.
//!
//! State is an immutable snapshot advanced by [`reduce`]; every action
//! yields a new snapshot, and anything that changes the filtered set
//! snaps the page back to 1 so a stale page can never render out of
//! bounds. Filtering never mutates or reorders the source collection.

use sp_core::aspect::Aspect;
use sp_core::record::TweetRecord;
use sp_core::sentiment::Sentiment;

/// Records shown per page in the browser table.
pub const PAGE_SIZE: usize = 20;

/// Active filters plus the 1-indexed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub query: String,
    /// `None` means "all".
    pub sentiment: Option<Sentiment>,
    /// `None` means "all".
    pub aspect: Option<Aspect>,
    pub page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        BrowseState {
            query: String::new(),
            sentiment: None,
            aspect: None,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    SetQuery(String),
    SetSentiment(Option<Sentiment>),
    SetAspect(Option<Aspect>),
    SetPage(usize),
    ClearFilters,
}

/// Advance the browse state by one action.
pub fn reduce(state: &BrowseState, action: BrowseAction) -> BrowseState {
    match action {
        BrowseAction::SetQuery(query) => BrowseState {
            query,
            page: 1,
            ..state.clone()
        },
        BrowseAction::SetSentiment(sentiment) => BrowseState {
            sentiment,
            page: 1,
            ..state.clone()
        },
        BrowseAction::SetAspect(aspect) => BrowseState {
            aspect,
            page: 1,
            ..state.clone()
        },
        BrowseAction::SetPage(page) => BrowseState {
            page: page.max(1),
            ..state.clone()
        },
        BrowseAction::ClearFilters => BrowseState::default(),
    }
}

/// Records passing the state's filters, original order preserved.
///
/// The text match is a case-insensitive substring over `text`; category
/// filters are exact matches.
pub fn filter_records<'a>(records: &'a [TweetRecord], state: &BrowseState) -> Vec<&'a TweetRecord> {
    let needle = state.query.to_lowercase();
    let filtered: Vec<&TweetRecord> = records
        .iter()
        .filter(|r| needle.is_empty() || r.text.to_lowercase().contains(&needle))
        .filter(|r| state.sentiment.map_or(true, |s| r.sentiment_label == s))
        .filter(|r| state.aspect.map_or(true, |a| r.aspect_dominant == a))
        .collect();
    log::debug!(
        "[SP Debug] filter: {} of {} records match",
        filtered.len(),
        records.len()
    );
    filtered
}

/// Index window of one page over a filtered set of `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    /// Inclusive start index into the filtered set.
    pub start: usize,
    /// Exclusive end index.
    pub end: usize,
    pub total_pages: usize,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Page window for a 1-indexed `page`, clipped to the filtered length.
///
/// `total_pages` is the rounded-up page count, zero for an empty set. A
/// page past the end yields an empty window rather than panicking.
pub fn paginate(len: usize, page: usize, page_size: usize) -> PageView {
    let total_pages = len.div_ceil(page_size);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = (start + page_size).min(len);
    PageView {
        start,
        end,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sp_core::mock;

    fn sample_records() -> Vec<TweetRecord> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        mock::records(100, 20240615, today)
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = sample_records();
        let state = BrowseState {
            sentiment: Some(Sentiment::Positive),
            ..BrowseState::default()
        };
        let filtered = filter_records(&records, &state);
        assert!(filtered.iter().all(|r| r.sentiment_label == Sentiment::Positive));
        for pair in filtered.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = sample_records();
        let state = BrowseState {
            query: "MERIDIAN".to_string(),
            ..BrowseState::default()
        };
        assert_eq!(filter_records(&records, &state).len(), 100);

        let state = BrowseState {
            query: "no such phrase anywhere".to_string(),
            ..BrowseState::default()
        };
        assert!(filter_records(&records, &state).is_empty());
    }

    #[test]
    fn test_combined_filters_intersect() {
        let records = sample_records();
        let state = BrowseState {
            sentiment: Some(Sentiment::Negative),
            aspect: Some(Aspect::Delivery),
            ..BrowseState::default()
        };
        for record in filter_records(&records, &state) {
            assert_eq!(record.sentiment_label, Sentiment::Negative);
            assert_eq!(record.aspect_dominant, Aspect::Delivery);
        }
    }

    #[test]
    fn test_paginate_33_matches_two_pages() {
        let view = paginate(33, 1, 20);
        assert_eq!(view.total_pages, 2);
        assert_eq!((view.start, view.end), (0, 20));

        let view = paginate(33, 2, 20);
        assert_eq!((view.start, view.end), (20, 33));
        assert_eq!(view.len(), 13);
    }

    #[test]
    fn test_paginate_empty_set_has_zero_pages() {
        let view = paginate(0, 1, 20);
        assert_eq!(view.total_pages, 0);
        assert!(view.is_empty());
    }

    #[test]
    fn test_paginate_exact_multiple() {
        let view = paginate(40, 2, 20);
        assert_eq!(view.total_pages, 2);
        assert_eq!((view.start, view.end), (20, 40));
    }

    #[test]
    fn test_paginate_past_end_is_empty_window() {
        let view = paginate(33, 5, 20);
        assert_eq!(view.total_pages, 2);
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_actions_reset_page() {
        let state = BrowseState {
            page: 4,
            ..BrowseState::default()
        };
        let after = reduce(&state, BrowseAction::SetQuery("late".to_string()));
        assert_eq!(after.page, 1);
        assert_eq!(after.query, "late");

        let after = reduce(&state, BrowseAction::SetSentiment(Some(Sentiment::Neutral)));
        assert_eq!(after.page, 1);

        let after = reduce(&state, BrowseAction::SetAspect(None));
        assert_eq!(after.page, 1);
    }

    #[test]
    fn test_set_page_keeps_filters() {
        let state = BrowseState {
            query: "delivery".to_string(),
            sentiment: Some(Sentiment::Negative),
            ..BrowseState::default()
        };
        let after = reduce(&state, BrowseAction::SetPage(3));
        assert_eq!(after.page, 3);
        assert_eq!(after.query, "delivery");
        assert_eq!(after.sentiment, Some(Sentiment::Negative));

        let floored = reduce(&state, BrowseAction::SetPage(0));
        assert_eq!(floored.page, 1);
    }

    #[test]
    fn test_clear_filters_resets_everything() {
        let state = BrowseState {
            query: "x".to_string(),
            sentiment: Some(Sentiment::Positive),
            aspect: Some(Aspect::Staff),
            page: 9,
        };
        assert_eq!(reduce(&state, BrowseAction::ClearFilters), BrowseState::default());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let records = sample_records();
        let state = BrowseState {
            query: "products".to_string(),
            sentiment: Some(Sentiment::Positive),
            ..BrowseState::default()
        };
        let first = filter_records(&records, &state);
        let second = filter_records(&records, &state);
        assert_eq!(first.len(), second.len());
        assert!(first.iter().zip(second.iter()).all(|(a, b)| a.id == b.id));
    }
}
