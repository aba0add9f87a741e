pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::WizardConfig;

pub use adapters::{console::ConsolePresenter, http::HttpBookingApi};
pub use core::wizard::{BookingForm, BookingWizard, NoticeTimings, SubmitOutcome};
pub use utils::error::{BookingError, Result};
