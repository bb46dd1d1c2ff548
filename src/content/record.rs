//! Content record model

use chrono::NaiveDate;
use serde::Serialize;

use super::filename;

/// One dated content file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    /// Filename without extension, unique within a discovery pass
    pub slug: String,

    /// Ordering key, higher is newer
    pub sequence: i64,

    /// Raw date token from the filename, e.g. `feb-08-2026`
    pub date_token: String,

    /// Readable date, e.g. `February 8, 2026`
    pub date_label: String,

    /// Full body text
    pub raw_content: String,
}

impl ContentRecord {
    /// Calendar date of the record, when the date token is a valid date
    pub fn date(&self) -> Option<NaiveDate> {
        filename::parse_date_token(&self.date_token)
    }

    /// In-page anchor used by the blog index
    pub fn anchor(&self) -> String {
        format!("post-{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_and_anchor() {
        let record = ContentRecord {
            slug: "003_mar-14-2026".to_string(),
            sequence: 3,
            date_token: "mar-14-2026".to_string(),
            date_label: "March 14, 2026".to_string(),
            raw_content: String::new(),
        };
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2026, 3, 14));
        assert_eq!(record.anchor(), "post-003_mar-14-2026");
    }
}
