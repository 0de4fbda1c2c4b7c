//! Wire types for the analytics API.
//!
//! Every field is defaulted so a partially-populated backend response
//! still deserializes; pages treat missing series as empty rather than
//! failing the render.

use crate::aspect::Aspect;
use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date coverage advertised by the analytics root endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateBounds {
    #[serde(default)]
    pub min: String,
    #[serde(default)]
    pub max: String,
}

/// Response body for `GET /` on the analytics service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaResponse {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub date_range: DateBounds,
}

/// Sentiment counts and shares for a window, keyed by label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub percent: BTreeMap<String, f64>,
}

impl SentimentSummary {
    /// Counts in fixed label order, absent labels as zero.
    pub fn ordered_counts(&self) -> [u64; 3] {
        let mut out = [0u64; 3];
        for (i, sentiment) in Sentiment::ALL.iter().enumerate() {
            out[i] = self.counts.get(sentiment.as_str()).copied().unwrap_or(0);
        }
        out
    }

    /// Percent shares in fixed label order, absent labels as zero.
    pub fn ordered_percent(&self) -> [f64; 3] {
        let mut out = [0f64; 3];
        for (i, sentiment) in Sentiment::ALL.iter().enumerate() {
            out[i] = self.percent.get(sentiment.as_str()).copied().unwrap_or(0.0);
        }
        out
    }
}

/// One day of the sentiment trend series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub negative: f64,
}

/// Response body for `GET /sentiment/trend`.
///
/// Points arrive ascending by date with no gap-filling: a day with no
/// records is simply absent, never a zero point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendResponse {
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
}

/// Aspect mention counts for a window.
///
/// Newer backends send `counts`; older ones send parallel `labels` /
/// `series` arrays. [`AspectSummary::values`] reads whichever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AspectSummary {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub counts: BTreeMap<String, f64>,
    #[serde(default)]
    pub percent: BTreeMap<String, f64>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub series: Vec<f64>,
}

impl AspectSummary {
    /// Values in fixed aspect order, preferring `counts` over the legacy
    /// parallel arrays. Unknown keys in either form are ignored.
    pub fn values(&self) -> [f64; 5] {
        let mut out = [0f64; 5];
        if !self.counts.is_empty() {
            for (i, aspect) in Aspect::ALL.iter().enumerate() {
                out[i] = self.counts.get(aspect.as_str()).copied().unwrap_or(0.0);
            }
            return out;
        }
        for (label, value) in self.labels.iter().zip(self.series.iter()) {
            if let Some(aspect) = Aspect::parse(label) {
                let idx = Aspect::ALL.iter().position(|a| *a == aspect).unwrap_or(0);
                out[idx] = *value;
            }
        }
        out
    }
}

/// Response body for `GET /aspects/avg-scores`, keyed `aspect_{name}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvgScores {
    #[serde(default)]
    pub avg_scores: BTreeMap<String, f64>,
}

impl AvgScores {
    /// Average score for one aspect, zero when absent.
    pub fn score_for(&self, aspect: Aspect) -> f64 {
        self.avg_scores
            .get(&aspect.score_key())
            .copied()
            .unwrap_or(0.0)
    }
}

/// Per-sentiment value arrays, positionally aligned to a label list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitSeries {
    #[serde(default)]
    pub positive: Vec<f64>,
    #[serde(default)]
    pub neutral: Vec<f64>,
    #[serde(default)]
    pub negative: Vec<f64>,
}

impl SplitSeries {
    fn value_at(&self, series: &[f64], idx: usize) -> f64 {
        series.get(idx).copied().unwrap_or(0.0)
    }

    /// (positive, neutral, negative) at one label position, zero-filling
    /// short arrays.
    pub fn at(&self, idx: usize) -> (f64, f64, f64) {
        (
            self.value_at(&self.positive, idx),
            self.value_at(&self.neutral, idx),
            self.value_at(&self.negative, idx),
        )
    }
}

/// Response body for `GET /aspects/sentiment-split`: sentiment values per
/// aspect, arrays aligned to `labels`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitResponse {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub counts: SplitSeries,
    #[serde(default)]
    pub percent: SplitSeries,
}

impl SplitResponse {
    /// Count triple (positive, neutral, negative) for one aspect, all
    /// zeros when the aspect is not present in `labels`.
    pub fn counts_for(&self, aspect: Aspect) -> (f64, f64, f64) {
        match self.labels.iter().position(|l| l == aspect.as_str()) {
            Some(idx) => self.counts.at(idx),
            None => (0.0, 0.0, 0.0),
        }
    }

    /// Sum of one aspect's counts; the denominator for within-aspect shares.
    pub fn row_total(&self, aspect: Aspect) -> f64 {
        let (p, n, g) = self.counts_for(aspect);
        p + n + g
    }

    /// Sum of every aspect's counts; the denominator for overall shares.
    pub fn grand_total(&self) -> f64 {
        Aspect::ALL.iter().map(|a| self.row_total(*a)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_defaults_missing_bounds() {
        let meta: MetaResponse = serde_json::from_str(r#"{"total_rows": 42}"#).unwrap();
        assert_eq!(meta.total_rows, 42);
        assert_eq!(meta.date_range.min, "");
    }

    #[test]
    fn test_meta_reads_date_range() {
        let meta: MetaResponse = serde_json::from_str(
            r#"{"date_range": {"min": "2024-01-01", "max": "2024-06-30"}}"#,
        )
        .unwrap();
        assert_eq!(meta.date_range.min, "2024-01-01");
        assert_eq!(meta.date_range.max, "2024-06-30");
    }

    #[test]
    fn test_ordered_counts_fills_gaps() {
        let summary: SentimentSummary =
            serde_json::from_str(r#"{"total": 15, "counts": {"positive": 10, "negative": 5}}"#)
                .unwrap();
        assert_eq!(summary.ordered_counts(), [10, 0, 5]);
    }

    #[test]
    fn test_empty_payload_reads_all_zero() {
        let summary: SentimentSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.ordered_counts(), [0, 0, 0]);
        assert_eq!(summary.ordered_percent(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_trend_field_name() {
        let response: TrendResponse = serde_json::from_str(
            r#"{"trend": [{"date": "2024-05-01", "positive": 12.0, "neutral": 3.0, "negative": 5.0}]}"#,
        )
        .unwrap();
        assert_eq!(response.trend.len(), 1);
        assert_eq!(response.trend[0].date, "2024-05-01");
    }

    #[test]
    fn test_aspect_values_prefers_counts() {
        let summary: AspectSummary = serde_json::from_str(
            r#"{"counts": {"pricing": 3.0, "app/ux": 7.0}, "labels": ["pricing"], "series": [99.0]}"#,
        )
        .unwrap();
        assert_eq!(summary.values(), [3.0, 0.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    fn test_aspect_values_reads_legacy_series() {
        let summary: AspectSummary = serde_json::from_str(
            r#"{"labels": ["delivery", "staff", "mystery"], "series": [4.0, 6.0, 9.0]}"#,
        )
        .unwrap();
        assert_eq!(summary.values(), [0.0, 4.0, 0.0, 6.0, 0.0]);
    }

    #[test]
    fn test_avg_scores_lookup() {
        let scores: AvgScores =
            serde_json::from_str(r#"{"avg_scores": {"aspect_pricing": 0.42}}"#).unwrap();
        assert!((scores.score_for(Aspect::Pricing) - 0.42).abs() < f64::EPSILON);
        assert_eq!(scores.score_for(Aspect::Staff), 0.0);
    }

    #[test]
    fn test_split_lookup_and_totals() {
        let split: SplitResponse = serde_json::from_str(
            r#"{
                "labels": ["pricing", "staff"],
                "counts": {"positive": [5.0, 1.0], "neutral": [3.0, 0.0], "negative": [2.0, 4.0]}
            }"#,
        )
        .unwrap();
        assert_eq!(split.counts_for(Aspect::Pricing), (5.0, 3.0, 2.0));
        assert_eq!(split.counts_for(Aspect::Delivery), (0.0, 0.0, 0.0));
        assert_eq!(split.row_total(Aspect::Staff), 5.0);
        assert_eq!(split.grand_total(), 15.0);
    }

    #[test]
    fn test_split_zero_fills_short_arrays() {
        let split: SplitResponse = serde_json::from_str(
            r#"{"labels": ["pricing", "delivery"], "counts": {"positive": [5.0]}}"#,
        )
        .unwrap();
        assert_eq!(split.counts_for(Aspect::Delivery), (0.0, 0.0, 0.0));
    }
}
