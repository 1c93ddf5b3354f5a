//! One-shot planning runs over the record store.
//!
//! The planner is the engine's invocation surface: validate the user id,
//! fetch records, parse windows, classify, allocate, render, and
//! optionally summarize. Each run owns private copies of all mutable
//! state, so concurrent runs for different users never interfere.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::allocator::allocate;
use crate::classifier::classify;
use crate::error::PlanError;
use crate::plan::SubjectStatus;
use crate::store::RecordStore;
use crate::subject::Subject;
use crate::summarizer::Summarizer;
use crate::window::TimeWindow;

/// Final response for a successful planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub user_id: String,
    pub learning_windows: Vec<String>,
    pub study_plan: Vec<String>,
    pub subject_statuses: Vec<SubjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Outcome of a planning run that did not hard-fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanOutcome {
    Plan(Box<PlanResponse>),
    /// The user exists but has no learning windows configured.
    /// Informational, not an error.
    NoLearningWindows { message: String },
}

/// One-shot study-plan generator over a record store.
pub struct Planner<S> {
    store: S,
    summarizer: Option<Box<dyn Summarizer>>,
    summarizer_model: String,
}

impl<S: RecordStore> Planner<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            summarizer: None,
            summarizer_model: String::new(),
        }
    }

    /// Attach a summarizer collaborator and the model id to pass it.
    pub fn with_summarizer(mut self, summarizer: Box<dyn Summarizer>, model: &str) -> Self {
        self.summarizer = Some(summarizer);
        self.summarizer_model = model.to_string();
        self
    }

    /// Generate a plan as of today.
    pub fn generate_plan(&self, user_id: &str) -> Result<PlanOutcome, PlanError> {
        self.generate_plan_at(user_id, Local::now().date_naive())
    }

    /// Generate a plan as of a specific date. Split out so runs are
    /// reproducible in tests.
    pub fn generate_plan_at(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<PlanOutcome, PlanError> {
        validate_user_id(user_id)?;

        let user = self
            .store
            .user(user_id)?
            .ok_or_else(|| PlanError::UserNotFound(user_id.to_string()))?;

        let labels = user.learning_window_labels();
        if labels.is_empty() {
            return Ok(PlanOutcome::NoLearningWindows {
                message: "No learning windows configured for this user.".to_string(),
            });
        }

        let windows = labels
            .iter()
            .map(|label| TimeWindow::parse(label))
            .collect::<Result<Vec<_>, _>>()?;
        let total_available_hours: f64 = windows.iter().map(|w| w.duration_hours).sum();

        let subjects: Vec<Subject> = self
            .store
            .subjects(user_id)?
            .into_iter()
            .map(|record| record.into_subject())
            .collect();

        let classification = classify(&subjects, today);
        let plan = allocate(classification, &windows, total_available_hours);

        let study_plan = plan.render();
        let summary = self.summarize(&study_plan);

        Ok(PlanOutcome::Plan(Box::new(PlanResponse {
            user_id: user_id.to_string(),
            learning_windows: plan.learning_windows,
            study_plan,
            subject_statuses: plan.statuses,
            summary,
        })))
    }

    /// Best-effort prose summary. Collaborator failures are logged and
    /// never propagated.
    fn summarize(&self, study_plan: &[String]) -> Option<String> {
        let summarizer = self.summarizer.as_ref()?;
        match summarizer.summarize(&study_plan.join("\n"), &self.summarizer_model) {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("summarizer failed, returning plan without prose: {err}");
                None
            }
        }
    }
}

/// User ids follow the stored 24-character hex identifier shape.
fn validate_user_id(user_id: &str) -> Result<(), PlanError> {
    let valid = user_id.len() == 24 && user_id.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(PlanError::InvalidUserId(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const USER: &str = "64b1f0c2a58e4d2f9c3b7a10";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn store_with(windows: &[&str], subjects_json: &str) -> MemoryStore {
        let routine: Vec<String> = windows
            .iter()
            .map(|w| format!(r#"{{"action": "learning", "time": "{w}"}}"#))
            .collect();
        let json = format!(
            r#"{{
                "users": [{{"_id": "{USER}", "dailyRoutine": [{}]}}],
                "subjects": {subjects_json}
            }}"#,
            routine.join(",")
        );
        MemoryStore::from_json(&json).unwrap()
    }

    fn expect_plan(outcome: PlanOutcome) -> PlanResponse {
        match outcome {
            PlanOutcome::Plan(response) => *response,
            PlanOutcome::NoLearningWindows { message } => {
                panic!("expected a plan, got: {message}")
            }
        }
    }

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        fn summarize(&self, _: &str, _: &str) -> Result<String, Box<dyn std::error::Error>> {
            Err("summarizer offline".into())
        }
    }

    struct EchoSummarizer;

    impl Summarizer for EchoSummarizer {
        fn summarize(
            &self,
            plan_text: &str,
            model: &str,
        ) -> Result<String, Box<dyn std::error::Error>> {
            Ok(format!("{model}: {} lines", plan_text.lines().count()))
        }
    }

    #[test]
    fn rejects_malformed_user_ids() {
        let planner = Planner::new(MemoryStore::new());

        let err = planner.generate_plan_at("not-hex", today()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidUserId(_)));

        let err = planner
            .generate_plan_at("64b1f0c2a58e4d2f9c3b7a1", today())
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidUserId(_)));
    }

    #[test]
    fn unknown_user_is_not_found() {
        let planner = Planner::new(MemoryStore::new());

        let err = planner.generate_plan_at(USER, today()).unwrap_err();
        assert!(matches!(err, PlanError::UserNotFound(_)));
    }

    #[test]
    fn user_without_learning_windows_gets_the_soft_outcome() {
        let store = store_with(&[], "[]");
        let planner = Planner::new(store);

        let outcome = planner.generate_plan_at(USER, today()).unwrap();
        assert!(matches!(outcome, PlanOutcome::NoLearningWindows { .. }));
    }

    #[test]
    fn malformed_window_label_fails_the_run() {
        let store = store_with(&["09:00 to 11:00"], "[]");
        let planner = Planner::new(store);

        let err = planner.generate_plan_at(USER, today()).unwrap_err();
        assert!(matches!(err, PlanError::Format(_)));
    }

    #[test]
    fn end_to_end_plan_for_one_subject() {
        let store = store_with(
            &["09:00 - 11:00"],
            &format!(
                r#"[{{
                    "userId": "{USER}",
                    "subjectName": "Algebra",
                    "examDifficulty": "EASY",
                    "examDate": "2025-03-13",
                    "topics": [{{"name": "Matrices"}}, {{"name": "Vectors"}}]
                }}]"#
            ),
        );
        let planner = Planner::new(store);

        let response = expect_plan(planner.generate_plan_at(USER, today()).unwrap());

        assert_eq!(response.user_id, USER);
        assert_eq!(response.learning_windows, vec!["09:00 - 11:00"]);
        assert!(response
            .study_plan
            .iter()
            .any(|line| line.contains("Matrices")));
        assert!(response
            .study_plan
            .iter()
            .any(|line| line == "- Algebra: 100% completed"));
        assert_eq!(response.subject_statuses.len(), 1);
        assert_eq!(response.summary, None);
    }

    #[test]
    fn summarizer_failure_does_not_block_the_plan() {
        let store = store_with(&["09:00 - 11:00"], "[]");
        let planner =
            Planner::new(store).with_summarizer(Box::new(FailingSummarizer), "test-model");

        let response = expect_plan(planner.generate_plan_at(USER, today()).unwrap());
        assert_eq!(response.summary, None);
    }

    #[test]
    fn summarizer_output_is_attached_when_it_succeeds() {
        let store = store_with(
            &["09:00 - 11:00"],
            &format!(
                r#"[{{
                    "userId": "{USER}",
                    "subjectName": "Algebra",
                    "examDifficulty": "EASY",
                    "examDate": "2025-03-13",
                    "topics": [{{"name": "Matrices"}}]
                }}]"#
            ),
        );
        let planner = Planner::new(store).with_summarizer(Box::new(EchoSummarizer), "test-model");

        let response = expect_plan(planner.generate_plan_at(USER, today()).unwrap());
        let summary = response.summary.unwrap();
        assert!(summary.starts_with("test-model:"));
    }

    #[test]
    fn empty_subject_list_still_produces_a_plan() {
        let store = store_with(&["09:00 - 11:00"], "[]");
        let planner = Planner::new(store);

        let response = expect_plan(planner.generate_plan_at(USER, today()).unwrap());
        assert!(response.study_plan.is_empty());
        assert!(response.subject_statuses.is_empty());
    }
}
