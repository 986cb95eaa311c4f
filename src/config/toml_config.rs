use crate::utils::error::{Result, UiError};
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Every tunable of the site. Missing tables and keys take the defaults the
/// pages shipped with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub listing: ListingConfig,
    pub notices: NoticeConfig,
    pub chrome: ChromeConfig,
    pub forms: FormsConfig,
    pub submission: SubmissionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub debounce_ms: u64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub toast_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self { toast_ms: 5000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub menu_breakpoint_px: u32,
    pub header_scroll_threshold: f64,
    pub anchor_offset_px: f64,
    pub counter_steps: u32,
    pub counter_interval_ms: u64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            menu_breakpoint_px: 768,
            header_scroll_threshold: 50.0,
            anchor_offset_px: 20.0,
            counter_steps: 50,
            counter_interval_ms: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub max_upload_bytes: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub submit_delay_ms: u64,
    pub application_delay_ms: u64,
    /// Chance that a simulated contact or application submission fails.
    pub failure_rate: f64,
    /// When set, forms post to this API instead of the simulator.
    pub api_base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            application_delay_ms: 3000,
            failure_rate: 0.1,
            api_base_url: None,
            timeout_seconds: None,
        }
    }
}

impl UiConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UiError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UiError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UiError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.listing.debounce_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.notices.toast_ms)
    }

    pub fn counter_interval(&self) -> Duration {
        Duration::from_millis(self.chrome.counter_interval_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submission.submit_delay_ms)
    }

    pub fn application_delay(&self) -> Duration {
        Duration::from_millis(self.submission.application_delay_ms)
    }
}

impl Validate for UiConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("notices.toast_ms", self.notices.toast_ms, 1)?;
        validate_positive_number(
            "chrome.menu_breakpoint_px",
            u64::from(self.chrome.menu_breakpoint_px),
            1,
        )?;
        validate_positive_number("chrome.counter_steps", u64::from(self.chrome.counter_steps), 1)?;
        validate_positive_number("chrome.counter_interval_ms", self.chrome.counter_interval_ms, 1)?;
        validate_positive_number("forms.max_upload_bytes", self.forms.max_upload_bytes, 1)?;
        validate_range("submission.failure_rate", self.submission.failure_rate, 0.0, 1.0)?;

        if let Some(base_url) = &self.submission.api_base_url {
            validate_url("submission.api_base_url", base_url)?;
        }
        if let Some(timeout) = self.submission.timeout_seconds {
            validate_positive_number("submission.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = UiConfig::from_toml_str("").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.toast_lifetime(), Duration::from_secs(5));
        assert_eq!(config.chrome.menu_breakpoint_px, 768);
        assert_eq!(config.forms.max_upload_bytes, 5 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let toml_content = r#"
[listing]
debounce_ms = 150

[submission]
failure_rate = 0.0
"#;
        let config = UiConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.listing.debounce_ms, 150);
        assert_eq!(config.submission.failure_rate, 0.0);
        assert_eq!(config.submission.submit_delay_ms, 2000);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MONTELO_TEST_API", "https://api.montelo.test");

        let toml_content = r#"
[submission]
api_base_url = "${MONTELO_TEST_API}"
"#;
        let config = UiConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.submission.api_base_url.as_deref(),
            Some("https://api.montelo.test")
        );

        std::env::remove_var("MONTELO_TEST_API");
    }

    #[test]
    fn test_config_validation() {
        let invalid_rate = UiConfig::from_toml_str("[submission]\nfailure_rate = 1.5\n").unwrap();
        assert!(invalid_rate.validate().is_err());

        let invalid_url =
            UiConfig::from_toml_str("[submission]\napi_base_url = \"invalid-url\"\n").unwrap();
        assert!(invalid_url.validate().is_err());

        let zero_steps = UiConfig::from_toml_str("[chrome]\ncounter_steps = 0\n").unwrap();
        assert!(zero_steps.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = UiConfig::from_toml_str("[listing\n").unwrap_err();
        assert!(matches!(err, UiError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[notices]\ntoast_ms = 1000\n")
            .unwrap();

        let config = UiConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.toast_lifetime(), Duration::from_secs(1));
    }
}
