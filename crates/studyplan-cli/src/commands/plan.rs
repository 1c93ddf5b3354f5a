use std::path::PathBuf;

use clap::Subcommand;
use studyplan_core::{
    Config, HttpSummarizer, MemoryStore, PlanOutcome, Planner, RecordStore, TimeWindow,
};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a study plan for a user
    Generate {
        /// User id (24-character hex)
        #[arg(long)]
        user: String,
        /// JSON records file with users and subjects
        #[arg(long)]
        data: PathBuf,
        /// Plan as of this date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
        /// Ask the configured summarizer for a prose summary
        #[arg(long)]
        summarize: bool,
        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
    /// List a user's parsed learning windows
    Windows {
        /// User id (24-character hex)
        #[arg(long)]
        user: String,
        /// JSON records file with users and subjects
        #[arg(long)]
        data: PathBuf,
        /// Print the windows as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Generate {
            user,
            data,
            date,
            summarize,
            json,
        } => {
            let store = MemoryStore::from_json_file(&data)?;
            let mut planner = Planner::new(store);

            let config = Config::load_or_default();
            if summarize || config.summarizer.enabled {
                match config.summarizer.endpoint.as_deref() {
                    Some(endpoint) => {
                        let summarizer =
                            HttpSummarizer::new(endpoint, config.summarizer.api_key.clone())?;
                        planner = planner
                            .with_summarizer(Box::new(summarizer), &config.summarizer.model);
                    }
                    None if summarize => {
                        eprintln!("no summarizer endpoint configured, skipping summary");
                    }
                    None => {}
                }
            }

            let today = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let outcome = planner.generate_plan_at(&user, today)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }

            match outcome {
                PlanOutcome::NoLearningWindows { message } => println!("{message}"),
                PlanOutcome::Plan(response) => {
                    println!("Learning windows:");
                    for window in &response.learning_windows {
                        println!("- {window}");
                    }
                    println!();
                    for line in &response.study_plan {
                        println!("{line}");
                    }
                    if let Some(summary) = &response.summary {
                        println!();
                        println!("Summary: {summary}");
                    }
                }
            }
        }
        PlanAction::Windows { user, data, json } => {
            let store = MemoryStore::from_json_file(&data)?;
            let record = store
                .user(&user)?
                .ok_or_else(|| format!("user '{user}' not found"))?;

            let windows = record
                .learning_window_labels()
                .iter()
                .map(|label| TimeWindow::parse(label))
                .collect::<Result<Vec<_>, _>>()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&windows)?);
            } else if windows.is_empty() {
                println!("no learning windows configured");
            } else {
                for window in &windows {
                    println!("{} ({} hrs)", window.label, window.duration_hours);
                }
            }
        }
    }
    Ok(())
}
