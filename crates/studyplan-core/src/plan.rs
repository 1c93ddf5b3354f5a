//! Structured plan output and its text rendering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One scheduled (day, window, subject, topic, hours) tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub day: u32,
    pub window_label: String,
    pub subject: String,
    pub topic: String,
    pub allocated_hours: f64,
}

/// Completion display tier for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionTier {
    /// Every topic received study time.
    Complete,
    /// At least 70% of topics received study time.
    OnTrack,
    /// Less than 70% of topics received study time.
    AtRisk,
}

/// Per-subject completion counters.
///
/// `scheduled_topics` is incremented once per topic the first time any
/// study time lands on it, not per allocation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStatus {
    pub subject: String,
    pub total_topics: usize,
    pub scheduled_topics: usize,
}

impl SubjectStatus {
    pub fn new(subject: &str, total_topics: usize) -> Self {
        Self {
            subject: subject.to_string(),
            total_topics,
            scheduled_topics: 0,
        }
    }

    /// Percentage of topics that received study time.
    pub fn completion_percent(&self) -> f64 {
        if self.total_topics == 0 {
            return 0.0;
        }
        self.scheduled_topics as f64 / self.total_topics as f64 * 100.0
    }

    pub fn tier(&self) -> CompletionTier {
        let percent = self.completion_percent();
        if percent >= 100.0 {
            CompletionTier::Complete
        } else if percent >= 70.0 {
            CompletionTier::OnTrack
        } else {
            CompletionTier::AtRisk
        }
    }

    fn summary_line(&self) -> String {
        let percent = self.completion_percent() as u32;
        match self.tier() {
            CompletionTier::Complete => format!("- {}: 100% completed", self.subject),
            CompletionTier::OnTrack => format!("- {}: {}% completed", self.subject, percent),
            CompletionTier::AtRisk => {
                format!("- {}: {}% completed - needs urgent focus!", self.subject, percent)
            }
        }
    }
}

/// Output of one planning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    /// Window labels in routine order.
    pub learning_windows: Vec<String>,
    /// Infeasibility notices collected across classification and both
    /// allocation passes.
    pub warnings: Vec<String>,
    /// Scheduled allocations, in emission order.
    pub entries: Vec<PlanEntry>,
    /// Completion counters, one per classified subject.
    pub statuses: Vec<SubjectStatus>,
    /// Whether day 1 was claimed by subjects with an exam tomorrow.
    pub urgent_first_day: bool,
}

impl Plan {
    /// Render the plan as text lines: warnings first, then each day's
    /// allocations in ascending day order, then the completion summary.
    pub fn render(&self) -> Vec<String> {
        let mut lines = self.warnings.clone();

        let mut days: BTreeMap<u32, Vec<&PlanEntry>> = BTreeMap::new();
        for entry in &self.entries {
            days.entry(entry.day).or_default().push(entry);
        }

        for (day, entries) in days {
            if day == 1 && self.urgent_first_day {
                lines.push("Day 1 Plan (URGENT - exam tomorrow):".to_string());
            } else {
                lines.push(format!("Day {day} Plan:"));
            }
            for entry in entries {
                lines.push(format!(
                    "- {}: {} -> {} ({} hrs)",
                    entry.window_label, entry.subject, entry.topic, entry.allocated_hours
                ));
            }
        }

        if !self.statuses.is_empty() {
            lines.push("Subject Completion Summary:".to_string());
            for status in &self.statuses {
                lines.push(status.summary_line());
            }
        }

        lines
    }
}
