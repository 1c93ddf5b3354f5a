//! # Studyplan Core Library
//!
//! This library provides the study-time allocation engine behind Studyplan.
//! Given a user's recurring daily learning windows and their subjects (exam
//! date, difficulty, topic list), it produces a day-by-day assignment of
//! topics to windows, prioritizing subjects with imminent exams and
//! reporting everything that could not be scheduled.
//!
//! ## Architecture
//!
//! One planning run is a fully sequential pipeline:
//!
//! - **Window parsing**: `"HH:MM - HH:MM"` labels become [`TimeWindow`]s
//!   with a numeric duration
//! - **Classification**: subjects are partitioned into urgency tiers and
//!   the required-vs-available hour totals are computed
//! - **Allocation**: tiers are walked in priority order, greedily draining
//!   window capacity into per-topic assignments
//!
//! The engine is a pure function of its inputs plus the planning date; it
//! holds no state across runs. Records come from a [`RecordStore`]
//! collaborator and the finished plan can optionally be narrated by a
//! [`Summarizer`] collaborator, whose failures never block the plan.
//!
//! ## Key Components
//!
//! - [`Planner`]: one-shot planning runs over a record store
//! - [`allocate`]: the greedy two-pass allocator
//! - [`MemoryStore`]: in-memory record store for tests and the CLI
//! - [`Config`]: TOML configuration for the summarizer collaborator

pub mod window;
pub mod subject;
pub mod classifier;
pub mod allocator;
pub mod plan;
pub mod planner;
pub mod store;
pub mod summarizer;
pub mod config;
pub mod error;

pub use window::TimeWindow;
pub use subject::{Difficulty, Subject, Topic};
pub use classifier::{classify, Classification, NormalSubject};
pub use allocator::allocate;
pub use plan::{CompletionTier, Plan, PlanEntry, SubjectStatus};
pub use planner::{PlanOutcome, PlanResponse, Planner};
pub use store::{MemoryStore, RecordStore, RoutineEntry, SubjectRecord, TopicRecord, UserRecord};
pub use summarizer::{HttpSummarizer, Summarizer};
pub use config::Config;
pub use error::{FormatError, PlanError, StoreError};
