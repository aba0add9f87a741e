pub mod toml_config;

pub use toml_config::WizardConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "booking-wizard")]
#[command(about = "Walk a service booking through the service, staff and schedule steps")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Backend base URL (overrides the configuration file)")]
    pub base_url: Option<String>,

    #[arg(long, help = "Booking page URL; its `service` query parameter pre-selects a service")]
    pub page_url: Option<String>,

    #[arg(long, help = "Service id to select")]
    pub service: Option<String>,

    #[arg(long, help = "Staff id to select")]
    pub staff: Option<String>,

    #[arg(long, help = "Schedule id to select")]
    pub schedule: Option<String>,

    #[arg(long, help = "Load the service list from /api/services/ instead of the configuration")]
    pub fetch_services: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file (or defaults) and applies command-line overrides.
    pub fn load_wizard_config(&self) -> crate::Result<WizardConfig> {
        let mut config = match &self.config {
            Some(path) => WizardConfig::from_file(path)?,
            None => WizardConfig::default(),
        };
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        Ok(config)
    }
}
