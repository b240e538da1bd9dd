use crate::dates::{iso, last_n_days, today};
use crate::models::{Entry, SeriesPoint, StatsResponse};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

const AVERAGE_DAYS: usize = 7;
const TREND_DAYS: usize = 14;

pub fn build_stats(entries: &[Entry]) -> StatsResponse {
    build_stats_at(today(), entries)
}

pub fn build_stats_at(today: NaiveDate, entries: &[Entry]) -> StatsResponse {
    StatsResponse {
        total: entries.len(),
        average_7: rolling_average_at(today, entries, AVERAGE_DAYS),
        streak: streak_at(today, entries),
        trend: series_at(today, entries, TREND_DAYS),
    }
}

/// Mean score over the trailing days that have an entry. Days without one
/// are left out rather than counted as zero.
pub fn rolling_average_at(today: NaiveDate, entries: &[Entry], days: usize) -> Option<f64> {
    let scores = scores_by_date(entries);
    let present: Vec<u8> = last_n_days(today, days)
        .iter()
        .filter_map(|date| scores.get(date.as_str()).copied())
        .collect();

    if present.is_empty() {
        return None;
    }
    let sum: u32 = present.iter().map(|score| u32::from(*score)).sum();
    Some(f64::from(sum) / present.len() as f64)
}

/// Consecutive days with an entry, counting back from `today` inclusive.
pub fn streak_at(today: NaiveDate, entries: &[Entry]) -> u32 {
    let scores = scores_by_date(entries);
    let mut count = 0;
    let mut day = today;
    while scores.contains_key(iso(day).as_str()) {
        count += 1;
        day -= Duration::days(1);
    }
    count
}

pub fn series_at(today: NaiveDate, entries: &[Entry], days: usize) -> Vec<SeriesPoint> {
    let scores = scores_by_date(entries);
    last_n_days(today, days)
        .into_iter()
        .map(|date| {
            let score = scores.get(date.as_str()).copied();
            SeriesPoint { date, score }
        })
        .collect()
}

fn scores_by_date(entries: &[Entry]) -> HashMap<&str, u8> {
    entries
        .iter()
        .map(|entry| (entry.date.as_str(), entry.score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(today: NaiveDate, offset: i64) -> String {
        iso(today - Duration::days(offset))
    }

    fn entry(date: String, score: u8) -> Entry {
        Entry {
            id: format!("id-{date}"),
            date,
            mood_key: "ok".to_string(),
            score,
            note: String::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn average_ignores_days_without_entries() {
        let today = today();
        let entries: Vec<Entry> = (0..3).map(|offset| entry(day(today, offset), 5)).collect();
        assert_eq!(rolling_average_at(today, &entries, 7), Some(5.0));
    }

    #[test]
    fn average_only_looks_at_window() {
        let today = today();
        let entries = vec![
            entry(day(today, 0), 4),
            entry(day(today, 6), 1),
            entry(day(today, 7), 5),
            entry(day(today, 30), 5),
        ];
        assert_eq!(rolling_average_at(today, &entries, 7), Some(2.5));
    }

    #[test]
    fn average_without_data_is_none() {
        let today = today();
        assert_eq!(rolling_average_at(today, &[], 7), None);
        let stale = vec![entry(day(today, 10), 3)];
        assert_eq!(rolling_average_at(today, &stale, 7), None);
    }

    #[test]
    fn streak_counts_back_from_today() {
        let today = today();
        let entries = vec![
            entry(day(today, 0), 3),
            entry(day(today, 1), 3),
            entry(day(today, 3), 3),
            entry(day(today, 4), 3),
        ];
        assert_eq!(streak_at(today, &entries), 2);
    }

    #[test]
    fn streak_is_zero_without_entry_today() {
        let today = today();
        let entries: Vec<Entry> = (1..10).map(|offset| entry(day(today, offset), 4)).collect();
        assert_eq!(streak_at(today, &entries), 0);
        assert_eq!(streak_at(today, &[]), 0);
    }

    #[test]
    fn streak_crosses_month_boundary() {
        let today = today();
        let entries: Vec<Entry> = (0..8).map(|offset| entry(day(today, offset), 2)).collect();
        assert_eq!(streak_at(today, &entries), 8);
    }

    #[test]
    fn series_keeps_gaps_in_place() {
        let today = today();
        let entries = vec![entry(day(today, 0), 5), entry(day(today, 2), 1)];
        let points = series_at(today, &entries, 14);

        assert_eq!(points.len(), 14);
        assert_eq!(points[0].date, day(today, 13));
        assert_eq!(points[13].date, day(today, 0));
        assert!(points.windows(2).all(|pair| pair[0].date < pair[1].date));
        assert_eq!(points[13].score, Some(5));
        assert_eq!(points[12].score, None);
        assert_eq!(points[11].score, Some(1));
    }

    #[test]
    fn series_of_empty_store_has_full_length() {
        let points = series_at(today(), &[], 14);
        assert_eq!(points.len(), 14);
        assert!(points.iter().all(|point| point.score.is_none()));
    }

    #[test]
    fn stats_panel_collects_everything() {
        let today = today();
        let entries = vec![
            entry(day(today, 0), 4),
            entry(day(today, 1), 2),
            entry(day(today, 40), 5),
        ];
        let stats = build_stats_at(today, &entries);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_7, Some(3.0));
        assert_eq!(stats.streak, 2);
        assert_eq!(stats.trend.len(), 14);
    }
}
