//! Calendar helpers. Dates travel as zero-padded `YYYY-MM-DD` strings, so
//! plain string comparison orders them chronologically.

use chrono::{Duration, Local, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_iso() -> String {
    iso(today())
}

pub fn iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

pub fn parse_iso(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), ISO_FORMAT).ok()
}

/// The `n` days ending at `today`, oldest first.
pub fn last_n_days(today: NaiveDate, n: usize) -> Vec<String> {
    (0..n)
        .rev()
        .map(|offset| iso(today - Duration::days(offset as i64)))
        .collect()
}
