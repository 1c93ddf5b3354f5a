//! Greedy allocation of topic study-time to window capacity.
//!
//! Two sequential passes share one set of window capacities: the urgent
//! pass (exams tomorrow) runs first and may exhaust capacity the normal
//! pass would otherwise use. No allocation failure is fatal; every
//! infeasibility becomes a warning line in the plan.

use crate::classifier::{Classification, NormalSubject};
use crate::plan::{Plan, PlanEntry, SubjectStatus};
use crate::subject::{Subject, Topic};
use crate::window::{round2, TimeWindow};

/// Capacities at or below this are treated as exhausted. Guards the float
/// residue left by repeated subtraction.
const EPS: f64 = 1e-9;

/// Mutable state for one planning run: the per-window remaining capacity
/// and the running day counter shared by both passes. Inputs are never
/// mutated; concurrent runs each own their own context.
struct AllocationContext<'a> {
    windows: &'a [TimeWindow],
    remaining: Vec<f64>,
    day: u32,
    entries: Vec<PlanEntry>,
    warnings: Vec<String>,
    statuses: Vec<SubjectStatus>,
}

/// Run both allocation passes and assemble the plan.
///
/// `total_available_hours` is the sum of the windows' full parsed
/// durations; the capacity-shortfall check runs against it before either
/// pass touches capacity.
pub fn allocate(
    classification: Classification,
    windows: &[TimeWindow],
    total_available_hours: f64,
) -> Plan {
    let Classification {
        urgent,
        normal,
        total_required_hours,
        warnings: classifier_warnings,
        statuses,
    } = classification;

    let mut ctx = AllocationContext {
        windows,
        remaining: windows.iter().map(|w| w.duration_hours).collect(),
        day: 1,
        entries: Vec::new(),
        warnings: Vec::new(),
        statuses,
    };

    let mut plan_warnings = Vec::new();
    if total_available_hours < total_required_hours {
        plan_warnings.push(format!(
            "Warning: available time ({} hrs) is less than the required time ({} hrs). Adjust your learning windows.",
            round2(total_available_hours),
            round2(total_required_hours)
        ));
    }
    plan_warnings.extend(classifier_warnings);

    ctx.urgent_pass(&urgent, total_available_hours);
    ctx.normal_pass(&normal);
    plan_warnings.append(&mut ctx.warnings);

    Plan {
        learning_windows: windows.iter().map(|w| w.label.clone()).collect(),
        warnings: plan_warnings,
        entries: ctx.entries,
        statuses: ctx.statuses,
        urgent_first_day: !urgent.is_empty(),
    }
}

impl AllocationContext<'_> {
    /// Urgent pass: all urgent subjects' topics form one flat pool
    /// assigned to day 1, each receiving an equal share of the total
    /// capacity. The window cursor only ever advances; leftover capacity
    /// behind it is not revisited.
    fn urgent_pass(&mut self, urgent: &[Subject], total_available_hours: f64) {
        if urgent.is_empty() {
            return;
        }

        let total_topics: usize = urgent.iter().map(|s| s.topics.len()).sum();

        if total_topics == 0 || total_available_hours <= 0.0 {
            self.warnings
                .push("No time available or no topics to schedule for tomorrow's exams.".to_string());
        } else {
            let hours_per_topic = round2(total_available_hours / total_topics as f64);
            let mut cursor = 0usize;

            for subject in urgent {
                for topic in &subject.topics {
                    let mut needed = hours_per_topic;

                    while needed > EPS && cursor < self.remaining.len() {
                        if self.remaining[cursor] <= EPS {
                            cursor += 1;
                            continue;
                        }

                        let allocated = needed.min(self.remaining[cursor]);
                        // A topic counts as scheduled on its first
                        // allocation, even when later windows finish it.
                        if needed == hours_per_topic {
                            self.mark_scheduled(&subject.name);
                        }
                        self.push_entry(cursor, &subject.name, topic, allocated);

                        self.remaining[cursor] -= allocated;
                        needed -= allocated;

                        if self.remaining[cursor] <= EPS {
                            cursor += 1;
                        }
                    }

                    // Partial allocations stay in place; only the
                    // shortfall is reported.
                    if needed > EPS {
                        self.warnings.push(format!(
                            "Warning: could not fully allocate time for topic '{}' in '{}'.",
                            topic.name, subject.name
                        ));
                    }
                }
            }
        }

        // Day 1 belongs to the urgent tier whenever it exists.
        self.day += 1;
    }

    /// Normal pass: subjects in exam-date order, each topic granted up to
    /// `days_left` attempts over the (already partially drained) windows.
    /// Capacities are never reset between attempts.
    fn normal_pass(&mut self, normal: &[NormalSubject]) {
        for NormalSubject { subject, days_left } in normal {
            let hours_per_topic = subject.hours_per_topic();

            // A topic that exceeds every window's full duration can never
            // be satisfied, so the whole subject is skipped up front.
            let fits_somewhere = self
                .windows
                .iter()
                .any(|w| hours_per_topic <= w.duration_hours + EPS);
            if !fits_somewhere {
                self.warnings.push(format!(
                    "Warning: cannot schedule '{}' (each topic needs {} hrs), which exceeds every learning window.",
                    subject.name,
                    round2(hours_per_topic)
                ));
                continue;
            }

            for topic in &subject.topics {
                let mut scheduled = false;

                for _attempt in 0..*days_left {
                    let mut needed = hours_per_topic;

                    for idx in 0..self.remaining.len() {
                        if needed <= EPS {
                            break;
                        }
                        if self.remaining[idx] <= EPS {
                            continue;
                        }

                        let allocated = needed.min(self.remaining[idx]);
                        if needed == hours_per_topic {
                            self.mark_scheduled(&subject.name);
                        }
                        self.push_entry(idx, &subject.name, topic, allocated);

                        self.remaining[idx] -= allocated;
                        needed -= allocated;
                    }

                    if needed <= EPS {
                        scheduled = true;
                        break;
                    }
                    // A failed attempt leaves every window drained, so the
                    // per-attempt reset of `needed` cannot double-count the
                    // first-touch increment above.
                }

                if scheduled {
                    self.day += 1;
                } else {
                    self.warnings.push(format!(
                        "Warning: could not fit topic '{}' from '{}' in the available learning windows.",
                        topic.name, subject.name
                    ));
                }
            }
        }
    }

    fn mark_scheduled(&mut self, subject: &str) {
        if let Some(status) = self.statuses.iter_mut().find(|s| s.subject == subject) {
            status.scheduled_topics += 1;
        }
    }

    fn push_entry(&mut self, window_idx: usize, subject: &str, topic: &Topic, hours: f64) {
        self.entries.push(PlanEntry {
            day: self.day,
            window_label: self.windows[window_idx].label.clone(),
            subject: subject.to_string(),
            topic: topic.name.clone(),
            allocated_hours: round2(hours),
        });
    }
}
