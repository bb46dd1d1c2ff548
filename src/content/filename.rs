//! Filename metadata parsing
//!
//! Content files are named `<sequence>_<mon>-<dd>-<yyyy>.<ext>`, for example
//! `003_mar-14-2026.mdx`. The sequence number orders posts (higher is newer)
//! and the date part is turned into a readable label like `March 14, 2026`.

use chrono::NaiveDate;

/// Three-letter month abbreviations and their full names
const MONTHS: [(&str, &str); 12] = [
    ("jan", "January"),
    ("feb", "February"),
    ("mar", "March"),
    ("apr", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
];

/// Why a sequence token could not be read as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// No leading digits at all
    NotNumeric,
    /// Digits present but too large for an `i64`
    OutOfRange,
}

/// Metadata derived from a content filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMeta {
    /// Leading sequence number, or why the token is not one
    pub sequence: Result<i64, SequenceError>,
    /// Raw date token, e.g. `feb-08-2026`
    pub date_token: String,
    /// Human readable date, e.g. `February 8, 2026`
    pub date_label: String,
}

impl FilenameMeta {
    /// Parse a filename such as `001_feb-08-2026.mdx`.
    ///
    /// Best effort: malformed names never fail, missing parts simply end up
    /// empty and a bad sequence token is carried in `sequence` as an error.
    pub fn parse(filename: &str, extension: &str) -> Self {
        let base = strip_extension(filename, extension);
        let (seq_token, date_token) = base.split_once('_').unwrap_or((base, ""));

        Self {
            sequence: parse_leading_int(seq_token),
            date_token: date_token.to_string(),
            date_label: date_label(date_token),
        }
    }
}

/// Remove a trailing `.{extension}` from a filename
pub fn strip_extension<'a>(filename: &'a str, extension: &str) -> &'a str {
    filename
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(filename)
}

/// Full month name for a three-letter abbreviation (case-insensitive)
pub fn month_name(abbrev: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(short, _)| short.eq_ignore_ascii_case(abbrev))
        .map(|(_, full)| *full)
}

/// Build the readable label for a `mon-dd-yyyy` token.
///
/// Unknown months are kept verbatim, and so is a day that does not parse.
pub fn date_label(date_token: &str) -> String {
    let mut parts = date_token.split('-');
    let month = parts.next().unwrap_or("");
    let day = parts.next().unwrap_or("");
    let year = parts.next().unwrap_or("");

    let month = month_name(month).unwrap_or(month);
    let day = parse_leading_int(day)
        .map(|d| d.to_string())
        .ok()
        .unwrap_or_else(|| day.to_string());

    format!("{} {}, {}", month, day, year)
}

/// Parse a `mon-dd-yyyy` token into a date
pub fn parse_date_token(date_token: &str) -> Option<NaiveDate> {
    let mut parts = date_token.split('-');
    let month = parts.next()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    let year = parts.next()?.parse::<i32>().ok()?;

    let month = MONTHS
        .iter()
        .position(|(short, _)| short.eq_ignore_ascii_case(month))? as u32
        + 1;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a date back into a `mon-dd-yyyy` token
pub fn date_token(date: NaiveDate) -> String {
    date.format("%b-%d-%Y").to_string().to_lowercase()
}

/// Parse the leading decimal integer of a token, ignoring trailing garbage.
///
/// `"003"` gives 3, `"12abc"` gives 12, `"abc"` is not numeric.
fn parse_leading_int(token: &str) -> Result<i64, SequenceError> {
    let token = token.trim_start();
    let (sign, digits) = match token.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, token.strip_prefix('+').unwrap_or(token)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(SequenceError::NotNumeric);
    }

    digits[..end]
        .parse::<i64>()
        .map(|n| sign * n)
        .map_err(|_| SequenceError::OutOfRange)
}
