use clap::Subcommand;
use studyplan_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Configure the summarizer collaborator
    Summarizer {
        /// Text-generation endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
        /// Model identifier to request
        #[arg(long)]
        model: Option<String>,
        /// Bearer token for the endpoint
        #[arg(long)]
        api_key: Option<String>,
        /// Summarize every generated plan
        #[arg(long)]
        enabled: Option<bool>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Summarizer {
            endpoint,
            model,
            api_key,
            enabled,
        } => {
            let mut config = Config::load_or_default();
            if let Some(endpoint) = endpoint {
                config.summarizer.endpoint = Some(endpoint);
            }
            if let Some(model) = model {
                config.summarizer.model = model;
            }
            if let Some(api_key) = api_key {
                config.summarizer.api_key = Some(api_key);
            }
            if let Some(enabled) = enabled {
                config.summarizer.enabled = enabled;
            }
            config.save()?;
            println!("summarizer configuration updated");
        }
    }
    Ok(())
}
