//! Partitions subjects into urgency tiers ahead of allocation.
//!
//! Classification is a pure function of the subjects and the planning
//! date: it sorts by exam date, filters out subjects that cannot be
//! scheduled, and totals the hours the surviving subjects require.

use chrono::NaiveDate;

use crate::plan::SubjectStatus;
use crate::subject::Subject;

/// A subject admitted to the normal tier, with its remaining learning days.
#[derive(Debug, Clone)]
pub struct NormalSubject {
    pub subject: Subject,
    pub days_left: i64,
}

/// Result of one classification pass.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Exam tomorrow: scheduled as one flat topic pool on day 1.
    pub urgent: Vec<Subject>,
    /// Exam further out, kept in exam-date order.
    pub normal: Vec<NormalSubject>,
    /// Hours needed to fully cover every admitted subject.
    pub total_required_hours: f64,
    /// Notices for subjects excluded up front.
    pub warnings: Vec<String>,
    /// Zeroed completion counters, one per admitted subject.
    pub statuses: Vec<SubjectStatus>,
}

/// Partition `subjects` into urgency tiers as of `today`.
///
/// Subjects with an empty topic list are skipped with a warning; subjects
/// without an exam date, or whose exam is today or already past, are
/// skipped silently.
pub fn classify(subjects: &[Subject], today: NaiveDate) -> Classification {
    let mut ordered: Vec<&Subject> = subjects.iter().collect();
    // Date-less subjects sort after every dated one.
    ordered.sort_by_key(|s| (s.exam_date.is_none(), s.exam_date));

    let mut result = Classification::default();

    for subject in ordered {
        if subject.topics.is_empty() {
            result.warnings.push(format!(
                "Warning: subject '{}' has no topics added.",
                subject.name
            ));
            continue;
        }

        let Some(days_left) = subject.days_left(today) else {
            continue;
        };
        if days_left <= 0 {
            continue;
        }

        result.total_required_hours += subject.difficulty.hours() * subject.topics.len() as f64;
        result
            .statuses
            .push(SubjectStatus::new(&subject.name, subject.topics.len()));

        if days_left == 1 {
            result.urgent.push(subject.clone());
        } else {
            result.normal.push(NormalSubject {
                subject: subject.clone(),
                days_left,
            });
        }
    }

    result
}
