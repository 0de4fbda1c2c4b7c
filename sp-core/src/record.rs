use crate::aspect::Aspect;
use crate::sentiment::Sentiment;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of columns in a records CSV row.
pub const CSV_ROW_LENGTH: usize = 10;

/// A single social-media record as browsed on the raw-data page.
///
/// Records are read-only once loaded; filtering and pagination never mutate
/// the source collection. CSV row form (headerless):
/// `id,created_at,sentiment_label,sentiment_score,aspect_dominant,retweets,likes,user,twitterurl,text`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetRecord {
    pub id: u64,
    pub text: String,
    /// Calendar day in "YYYY-MM-DD" form.
    pub created_at: String,
    pub sentiment_label: Sentiment,
    /// Model confidence in [-1, 1].
    pub sentiment_score: f64,
    pub aspect_dominant: Aspect,
    pub twitterurl: String,
    pub user: String,
    pub retweets: u32,
    pub likes: u32,
}

impl TweetRecord {
    /// Parse a headerless records CSV, skipping malformed rows.
    ///
    /// Malformed rows are dropped rather than failing the whole load; the
    /// skip count is logged so bad fixtures are visible.
    pub fn parse_csv(data: &str) -> Vec<TweetRecord> {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_bytes());

        for result in rdr.records() {
            let Ok(row) = result else {
                skipped += 1;
                continue;
            };
            match TweetRecord::try_from(row) {
                Ok(record) => records.push(record),
                Err(()) => skipped += 1,
            }
        }

        log::info!(
            "[SP Debug] parse_csv: {} records parsed, {} rows skipped",
            records.len(),
            skipped
        );
        records
    }

    /// The CSV row form of this record, field order matching `parse_csv`.
    pub fn csv_fields(&self) -> [String; CSV_ROW_LENGTH] {
        [
            self.id.to_string(),
            self.created_at.clone(),
            self.sentiment_label.as_str().to_string(),
            format!("{:.2}", self.sentiment_score),
            self.aspect_dominant.as_str().to_string(),
            self.retweets.to_string(),
            self.likes.to_string(),
            self.user.clone(),
            self.twitterurl.clone(),
            self.text.clone(),
        ]
    }
}

impl TryFrom<StringRecord> for TweetRecord {
    type Error = ();

    fn try_from(value: StringRecord) -> Result<Self, Self::Error> {
        if value.len() != CSV_ROW_LENGTH {
            return Err(());
        }
        let id = value.get(0).unwrap_or("").trim().parse::<u64>().map_err(|_| ())?;
        let created_at = value.get(1).unwrap_or("").trim().to_string();
        let sentiment_label = Sentiment::parse(value.get(2).unwrap_or("")).ok_or(())?;
        let sentiment_score = value
            .get(3)
            .unwrap_or("")
            .trim()
            .parse::<f64>()
            .map_err(|_| ())?;
        let aspect_dominant = Aspect::parse(value.get(4).unwrap_or("")).ok_or(())?;
        let retweets = value.get(5).unwrap_or("").trim().parse::<u32>().map_err(|_| ())?;
        let likes = value.get(6).unwrap_or("").trim().parse::<u32>().map_err(|_| ())?;
        let user = value.get(7).unwrap_or("").trim().to_string();
        let twitterurl = value.get(8).unwrap_or("").trim().to_string();
        let text = value.get(9).unwrap_or("").to_string();

        if created_at.is_empty() {
            return Err(());
        }

        Ok(TweetRecord {
            id,
            text,
            created_at,
            sentiment_label,
            sentiment_score,
            aspect_dominant,
            twitterurl,
            user,
            retweets,
            likes,
        })
    }
}

impl Ord for TweetRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.created_at
            .cmp(&other.created_at)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for TweetRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for TweetRecord {}

impl PartialEq for TweetRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.created_at == other.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV_SAMPLE: &str = "\
1,2024-05-01,positive,0.82,pricing,14,120,user1,https://twitter.com/user/status/abc123def,Great deal on groceries today
2,2024-05-02,negative,-0.40,delivery,3,9,user2,https://twitter.com/user/status/ghi456jkl,Package arrived two days late
3,2024-05-02,neutral,0.02,app/ux,0,1,user3,https://twitter.com/user/status/mno789pqr,The app update changed the layout
";

    #[test]
    fn test_parse_csv_round_trip() {
        let records = TweetRecord::parse_csv(CSV_SAMPLE);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].sentiment_label, Sentiment::Positive);
        assert_eq!(records[2].aspect_dominant, Aspect::AppUx);
        assert_eq!(records[1].retweets, 3);
    }

    #[test]
    fn test_parse_csv_skips_malformed_rows() {
        let with_bad_rows = format!(
            "{}not-a-number,2024-05-03,positive,0.5,staff,1,2,user4,url,text\n4,2024-05-03,confused,0.5,staff,1,2,user4,url,text\n",
            CSV_SAMPLE
        );
        let records = TweetRecord::parse_csv(&with_bad_rows);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_parse_csv_rejects_short_rows() {
        let records = TweetRecord::parse_csv("1,2024-05-01,positive\n");
        assert!(records.is_empty());
    }

    #[test]
    fn test_csv_fields_parse_back() {
        let records = TweetRecord::parse_csv(CSV_SAMPLE);
        let fields = records[0].csv_fields();
        let line = fields.join(",");
        let reparsed = TweetRecord::parse_csv(&line);
        assert_eq!(reparsed.len(), 1);
        assert_eq!(reparsed[0], records[0]);
    }

    #[test]
    fn test_ordering_by_day_then_id() {
        let mut records = TweetRecord::parse_csv(CSV_SAMPLE);
        records.reverse();
        records.sort();
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[2].id, 3);
    }
}
