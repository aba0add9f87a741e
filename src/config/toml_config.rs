use crate::core::wizard::NoticeTimings;
use crate::domain::model::{Service, ServiceCatalog};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub api: ApiConfig,
    pub notices: NoticeConfig,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

/// Auto-dismiss delays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub staff_empty_ms: u64,
    pub schedule_empty_ms: u64,
    pub error_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        let timings = NoticeTimings::default();
        Self {
            staff_empty_ms: timings.staff_empty.as_millis() as u64,
            schedule_empty_ms: timings.schedule_empty.as_millis() as u64,
            error_ms: timings.error.as_millis() as u64,
        }
    }
}

impl WizardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BOOKING_API_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigValidation {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        validation::validate_positive_number("notices.staff_empty_ms", self.notices.staff_empty_ms, 1)?;
        validation::validate_positive_number(
            "notices.schedule_empty_ms",
            self.notices.schedule_empty_ms,
            1,
        )?;
        validation::validate_positive_number("notices.error_ms", self.notices.error_ms, 1)?;
        // 時段空白提示必須比員工空白提示停留更久
        if self.notices.schedule_empty_ms <= self.notices.staff_empty_ms {
            return Err(BookingError::InvalidConfigValue {
                field: "notices.schedule_empty_ms".to_string(),
                value: self.notices.schedule_empty_ms.to_string(),
                reason: format!(
                    "Must be longer than notices.staff_empty_ms ({})",
                    self.notices.staff_empty_ms
                ),
            });
        }

        validation::validate_unique("services.id", self.services.iter().map(|s| s.id))?;
        for service in &self.services {
            validation::validate_non_empty_string("services.name", &service.name)?;
            validation::validate_positive_number("services.duration", service.duration.into(), 1)?;
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_seconds.map(Duration::from_secs)
    }

    pub fn timings(&self) -> NoticeTimings {
        NoticeTimings {
            staff_empty: Duration::from_millis(self.notices.staff_empty_ms),
            schedule_empty: Duration::from_millis(self.notices.schedule_empty_ms),
            error: Duration::from_millis(self.notices.error_ms),
        }
    }

    pub fn catalog(&self) -> ServiceCatalog {
        ServiceCatalog::new(self.services.clone())
    }
}

impl Validate for WizardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://salon.example"
timeout_seconds = 10

[notices]
staff_empty_ms = 2000
schedule_empty_ms = 4000
error_ms = 6000

[[services]]
id = 3
name = "Hair Coloring"
price = "45.00"
duration = 30

[[services]]
id = 4
name = "Manicure"
price = "20"
duration = 45
description = "Classic manicure"
"#;

        let config = WizardConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "https://salon.example");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.timings().schedule_empty, Duration::from_millis(4000));

        let catalog = config.catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(4).unwrap().price.to_string(), "$20.00");
        assert_eq!(
            catalog.get(4).unwrap().description.as_deref(),
            Some("Classic manicure")
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = WizardConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.timings(), NoticeTimings::default());
        assert!(config.catalog().is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BOOKING_WIZARD_TEST_URL", "http://10.0.0.5:8000");
        let config = WizardConfig::from_toml_str(
            r#"
[api]
base_url = "${BOOKING_WIZARD_TEST_URL}"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = WizardConfig::from_toml_str(
            r#"
[api]
base_url = "${BOOKING_WIZARD_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "${BOOKING_WIZARD_TEST_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_price_is_a_parse_error() {
        let result = WizardConfig::from_toml_str(
            r#"
[[services]]
id = 1
name = "Haircut"
price = "twenty"
duration = 30
"#,
        );
        assert!(matches!(
            result,
            Err(BookingError::ConfigValidation { ref field, .. }) if field == "toml_parsing"
        ));
    }

    #[test]
    fn test_validation_rejects_duplicates_and_zero_delays() {
        let duplicate = WizardConfig::from_toml_str(
            r#"
[[services]]
id = 1
name = "Haircut"
price = "25.00"
duration = 30

[[services]]
id = 1
name = "Braiding"
price = "80.00"
duration = 120
"#,
        )
        .unwrap();
        assert!(duplicate.validate().is_err());

        let zero_delay = WizardConfig::from_toml_str(
            r#"
[notices]
error_ms = 0
"#,
        )
        .unwrap();
        assert!(zero_delay.validate().is_err());
    }

    #[test]
    fn test_schedule_advisory_must_outlast_staff_advisory() {
        for schedule_empty_ms in [3000, 1000] {
            let config = WizardConfig::from_toml_str(&format!(
                "[notices]\nstaff_empty_ms = 3000\nschedule_empty_ms = {}\n",
                schedule_empty_ms
            ))
            .unwrap();
            let err = config.validate().unwrap_err();
            assert!(matches!(
                err,
                BookingError::InvalidConfigValue { ref field, .. } if field == "notices.schedule_empty_ms"
            ));
        }

        let longer = WizardConfig::from_toml_str(
            r#"
[notices]
staff_empty_ms = 3000
schedule_empty_ms = 3001
"#,
        )
        .unwrap();
        assert!(longer.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "http://localhost:9000"
"#
        )
        .unwrap();

        let config = WizardConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = WizardConfig::from_file("/nonexistent/booking-wizard.toml");
        assert!(matches!(result, Err(BookingError::Io(_))));
    }
}
