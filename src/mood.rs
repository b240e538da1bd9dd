use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodLevel {
    pub key: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub score: u8,
}

/// Ordered worst to best; `score` doubles as the position on the chart axis.
pub static MOODS: [MoodLevel; 5] = [
    MoodLevel {
        key: "very-bad",
        label: "Very Bad",
        emoji: "😞",
        score: 1,
    },
    MoodLevel {
        key: "bad",
        label: "Bad",
        emoji: "🙁",
        score: 2,
    },
    MoodLevel {
        key: "ok",
        label: "Okay",
        emoji: "😐",
        score: 3,
    },
    MoodLevel {
        key: "good",
        label: "Good",
        emoji: "🙂",
        score: 4,
    },
    MoodLevel {
        key: "great",
        label: "Great",
        emoji: "😀",
        score: 5,
    },
];

impl MoodLevel {
    pub fn from_key(key: &str) -> Option<&'static MoodLevel> {
        MOODS.iter().find(|mood| mood.key == key)
    }
}
