//! Summary statistics over category counts.

use sp_core::record::TweetRecord;
use sp_core::sentiment::Sentiment;

/// Round half-up to one decimal place (for non-negative display values).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Share of `value` in `total` as a percentage, rounded to one decimal.
///
/// A zero total yields 0 rather than NaN; every "no data" window renders
/// as 0% across the board.
pub fn percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round1(value / total * 100.0)
}

/// Index of the largest value; the first occurrence wins ties.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v > b => best = Some((i, v)),
            None => best = Some((i, v)),
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the smallest value; the first occurrence wins ties.
pub fn argmin(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v < b => best = Some((i, v)),
            None => best = Some((i, v)),
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}

/// Sentiment counts in fixed label order, with derived shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentBreakdown {
    pub counts: [u64; 3],
}

impl SentimentBreakdown {
    pub fn new(counts: [u64; 3]) -> Self {
        SentimentBreakdown { counts }
    }

    /// Tally labels across a record set.
    pub fn from_records(records: &[TweetRecord]) -> Self {
        let mut counts = [0u64; 3];
        for record in records {
            let idx = Sentiment::ALL
                .iter()
                .position(|s| *s == record.sentiment_label)
                .unwrap_or(0);
            counts[idx] += 1;
        }
        SentimentBreakdown { counts }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn count(&self, sentiment: Sentiment) -> u64 {
        let idx = Sentiment::ALL
            .iter()
            .position(|s| *s == sentiment)
            .unwrap_or(0);
        self.counts[idx]
    }

    pub fn percent(&self, sentiment: Sentiment) -> f64 {
        percentage(self.count(sentiment) as f64, self.total() as f64)
    }

    pub fn percents(&self) -> [f64; 3] {
        let total = self.total() as f64;
        [
            percentage(self.counts[0] as f64, total),
            percentage(self.counts[1] as f64, total),
            percentage(self.counts[2] as f64, total),
        ]
    }

    /// Sentiment with the highest count; ties resolve to the earliest
    /// label in display order.
    pub fn dominant(&self) -> Sentiment {
        let values: Vec<f64> = self.counts.iter().map(|c| *c as f64).collect();
        Sentiment::ALL[argmax(&values).unwrap_or(0)]
    }

    /// Sentiment with the lowest count; ties resolve the same way.
    pub fn weakest(&self) -> Sentiment {
        let values: Vec<f64> = self.counts.iter().map(|c| *c as f64).collect();
        Sentiment::ALL[argmin(&values).unwrap_or(0)]
    }
}

/// Mean sentiment score across a record set, zero when empty.
pub fn average_score(records: &[TweetRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| r.sentiment_score).sum();
    sum / records.len() as f64
}

/// One-line reading of a sentiment distribution.
///
/// Thresholds are strict and checked strongest-signal first, so exactly
/// one message applies to any distribution.
pub fn sentiment_insight(breakdown: &SentimentBreakdown) -> &'static str {
    let [positive, neutral, negative] = breakdown.percents();
    if positive > 50.0 {
        "Customer sentiment is strongly positive across this window."
    } else if negative > 30.0 {
        "Negative sentiment is elevated and deserves attention."
    } else if neutral > 40.0 {
        "Most posts are neutral; opinions are not strongly polarized."
    } else if positive > 30.0 {
        "Sentiment leans positive overall."
    } else if negative > 15.0 {
        "A notable share of posts are negative."
    } else if neutral > 20.0 {
        "A sizeable neutral segment keeps overall polarity muted."
    } else {
        "Sentiment is balanced with no dominant polarity."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_zero_total_is_zero() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(10.0, 0.0), 0.0);
        assert_eq!(percentage(1e9, 0.0), 0.0);
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1.0, 3.0), 33.3);
        assert_eq!(percentage(2.0, 3.0), 66.7);
        assert_eq!(percentage(1.0, 8.0), 12.5);
    }

    #[test]
    fn test_percents_sum_close_to_hundred() {
        for counts in [[1u64, 1, 1], [10, 0, 5], [7, 11, 13], [1, 0, 0]] {
            let breakdown = SentimentBreakdown::new(counts);
            let sum: f64 = breakdown.percents().iter().sum();
            assert!(
                (99.9..=100.1).contains(&sum),
                "counts {:?} summed to {}",
                counts,
                sum
            );
        }
    }

    #[test]
    fn test_argmax_first_on_tie() {
        assert_eq!(argmax(&[5.0, 5.0, 3.0]), Some(0));
        assert_eq!(argmax(&[3.0, 5.0, 5.0]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmin_first_on_tie() {
        assert_eq!(argmin(&[3.0, 5.0, 3.0]), Some(0));
        assert_eq!(argmin(&[9.0, 4.0, 4.0]), Some(1));
        assert_eq!(argmin(&[]), None);
    }

    #[test]
    fn test_dominant_and_weakest_tie_break_in_display_order() {
        let breakdown = SentimentBreakdown::new([5, 5, 3]);
        assert_eq!(breakdown.dominant(), Sentiment::Positive);
        assert_eq!(breakdown.weakest(), Sentiment::Negative);

        let tied_low = SentimentBreakdown::new([3, 5, 3]);
        assert_eq!(tied_low.weakest(), Sentiment::Positive);
    }

    #[test]
    fn test_empty_breakdown_percents_are_zero() {
        let breakdown = SentimentBreakdown::default();
        assert_eq!(breakdown.percents(), [0.0, 0.0, 0.0]);
        assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn test_average_score_empty_is_zero() {
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn test_insight_threshold_ladder() {
        let strong = SentimentBreakdown::new([60, 20, 20]);
        assert!(sentiment_insight(&strong).contains("strongly positive"));

        let bad = SentimentBreakdown::new([30, 30, 40]);
        assert!(sentiment_insight(&bad).contains("Negative sentiment is elevated"));

        let flat = SentimentBreakdown::new([25, 50, 25]);
        assert!(sentiment_insight(&flat).contains("neutral"));

        let leaning = SentimentBreakdown::new([40, 35, 25]);
        assert!(sentiment_insight(&leaning).contains("leans positive"));
    }

    #[test]
    fn test_insight_boundary_is_strict() {
        // Exactly 50% positive is not "strongly positive".
        let at_fifty = SentimentBreakdown::new([50, 40, 10]);
        assert!(!sentiment_insight(&at_fifty).contains("strongly"));
    }
}
