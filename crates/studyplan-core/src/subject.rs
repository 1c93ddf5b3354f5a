//! Subjects, topics, and exam difficulty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-topic hour budget tier for an exam.
///
/// Difficulty tags are mapped from stored strings at the record boundary;
/// unknown or absent tags fall back to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a stored difficulty tag, case-insensitively.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_uppercase()).as_deref() {
            Some("EASY") => Self::Easy,
            Some("HARD") => Self::Hard,
            _ => Self::Medium,
        }
    }

    /// Total study hours budgeted for a subject of this difficulty.
    pub fn hours(self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 2.0,
            Self::Hard => 3.0,
        }
    }
}

/// Smallest unit of schedulable work. Belongs to exactly one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
}

/// One exam to prepare for.
///
/// Topic order is insertion order and doubles as scheduling priority
/// within the subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub exam_date: Option<NaiveDate>,
    pub difficulty: Difficulty,
    pub topics: Vec<Topic>,
}

impl Subject {
    /// Days available for new learning. The day before the exam is
    /// reserved for review, so `(exam_date - today) - 1`.
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.exam_date.map(|exam| (exam - today).num_days() - 1)
    }

    /// Study hours each topic receives from the difficulty budget.
    pub fn hours_per_topic(&self) -> f64 {
        if self.topics.is_empty() {
            return 0.0;
        }
        self.difficulty.hours() / self.topics.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_subject(exam_date: Option<NaiveDate>, difficulty: Difficulty, topics: &[&str]) -> Subject {
        Subject {
            name: "Algebra".to_string(),
            exam_date,
            difficulty,
            topics: topics
                .iter()
                .map(|name| Topic { name: name.to_string() })
                .collect(),
        }
    }

    #[test]
    fn difficulty_tag_mapping_is_case_insensitive() {
        assert_eq!(Difficulty::from_tag(Some("easy")), Difficulty::Easy);
        assert_eq!(Difficulty::from_tag(Some("HARD")), Difficulty::Hard);
        assert_eq!(Difficulty::from_tag(Some("Medium")), Difficulty::Medium);
    }

    #[test]
    fn unknown_or_absent_difficulty_defaults_to_medium() {
        assert_eq!(Difficulty::from_tag(Some("impossible")), Difficulty::Medium);
        assert_eq!(Difficulty::from_tag(None), Difficulty::Medium);
    }

    #[test]
    fn days_left_reserves_the_day_before_the_exam() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let exam = NaiveDate::from_ymd_opt(2025, 3, 13).unwrap();
        let subject = make_subject(Some(exam), Difficulty::Easy, &["a"]);

        assert_eq!(subject.days_left(today), Some(2));
    }

    #[test]
    fn days_left_is_none_without_an_exam_date() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let subject = make_subject(None, Difficulty::Easy, &["a"]);

        assert_eq!(subject.days_left(today), None);
    }

    #[test]
    fn hours_per_topic_divides_the_difficulty_budget() {
        let exam = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let subject = make_subject(Some(exam), Difficulty::Hard, &["a", "b", "c"]);

        assert_eq!(subject.hours_per_topic(), 1.0);
    }

    #[test]
    fn hours_per_topic_is_zero_for_empty_topics() {
        let subject = make_subject(None, Difficulty::Medium, &[]);
        assert_eq!(subject.hours_per_topic(), 0.0);
    }
}
