//! Aspect-by-sentiment cross-tabulation for the stacked views.
//!
//! Two denominators are in play and must not be mixed: within-aspect
//! shares divide by that aspect's row total, while the overall sentiment
//! shares divide by the grand total across every aspect.

use crate::stats::percentage;
use sp_core::analytics::SplitResponse;
use sp_core::aspect::Aspect;

/// One aspect's counts with its within-row shares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRow {
    pub aspect: Aspect,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub total: f64,
    /// Shares of this row's total, one per sentiment.
    pub percents: [f64; 3],
    /// This row's share of the grand total.
    pub share: f64,
}

/// Rows for every aspect in display order. Aspects absent from the
/// response appear as all-zero rows so tables keep a fixed shape.
pub fn aspect_rows(split: &SplitResponse) -> Vec<AspectRow> {
    let grand_total = split.grand_total();
    Aspect::ALL
        .iter()
        .map(|&aspect| {
            let (positive, neutral, negative) = split.counts_for(aspect);
            let total = positive + neutral + negative;
            AspectRow {
                aspect,
                positive,
                neutral,
                negative,
                total,
                percents: [
                    percentage(positive, total),
                    percentage(neutral, total),
                    percentage(negative, total),
                ],
                share: percentage(total, grand_total),
            }
        })
        .collect()
}

/// Overall sentiment shares across all aspects, grand-total denominator.
pub fn overall_shares(split: &SplitResponse) -> [f64; 3] {
    let grand_total = split.grand_total();
    let mut sums = [0f64; 3];
    for aspect in Aspect::ALL {
        let (p, n, g) = split.counts_for(aspect);
        sums[0] += p;
        sums[1] += n;
        sums[2] += g;
    }
    [
        percentage(sums[0], grand_total),
        percentage(sums[1], grand_total),
        percentage(sums[2], grand_total),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::analytics::SplitSeries;

    fn sample() -> SplitResponse {
        SplitResponse {
            labels: vec!["pricing".to_string(), "delivery".to_string()],
            counts: SplitSeries {
                positive: vec![30.0, 10.0],
                neutral: vec![10.0, 10.0],
                negative: vec![10.0, 30.0],
            },
            percent: SplitSeries::default(),
        }
    }

    #[test]
    fn test_row_shares_use_row_total() {
        let rows = aspect_rows(&sample());
        let pricing = rows[0];
        assert_eq!(pricing.aspect, Aspect::Pricing);
        assert_eq!(pricing.total, 50.0);
        assert_eq!(pricing.percents, [60.0, 20.0, 20.0]);

        let delivery = rows[1];
        assert_eq!(delivery.percents, [20.0, 20.0, 60.0]);
    }

    #[test]
    fn test_row_share_of_grand_total() {
        let rows = aspect_rows(&sample());
        // 50 of 100 overall in each populated row.
        assert_eq!(rows[0].share, 50.0);
        assert_eq!(rows[1].share, 50.0);
        assert_eq!(rows[2].share, 0.0);
    }

    #[test]
    fn test_overall_shares_use_grand_total() {
        let shares = overall_shares(&sample());
        assert_eq!(shares, [40.0, 20.0, 40.0]);
    }

    #[test]
    fn test_absent_aspects_are_zero_rows() {
        let rows = aspect_rows(&sample());
        assert_eq!(rows.len(), 5);
        let returns = rows[2];
        assert_eq!(returns.aspect, Aspect::Returns);
        assert_eq!(returns.total, 0.0);
        assert_eq!(returns.percents, [0.0, 0.0, 0.0]);
        assert_eq!(returns.share, 0.0);
    }

    #[test]
    fn test_empty_split_is_all_zero() {
        let rows = aspect_rows(&SplitResponse::default());
        assert!(rows.iter().all(|r| r.total == 0.0 && r.share == 0.0));
        assert_eq!(overall_shares(&SplitResponse::default()), [0.0, 0.0, 0.0]);
    }
}
