//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by an optional user file, which only needs the keys it wants to
//! change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [form]
//! endpoint = "https://formspree.io/f/your-form-id"  # Form relay URL
//! thank_you_page = "thank-you.html"                 # Redirect after success
//! redirect_delay_ms = 2000
//!
//! [uploads]
//! max_files = 5
//! max_file_size = 10485760  # Bytes (10 MiB)
//!
//! [notifications]
//! timeout_ms = 5000
//!
//! [pricing]
//! currency = "KSH"
//!
//! [support]
//! mpesa_business_number = "000000"
//! mpesa_account = "LEVIART"
//! paypal_email = "leviart9@gmail.com"
//! paypal_url = "https://paypal.me/leviart9"
//!
//! [portfolio]
//! contact_page = "../pages/contact.html"   # "Commission Similar" target
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Contact form relay and post-submit navigation.
    pub form: FormConfig,
    /// Attachment limits for the contact form's file input.
    pub uploads: UploadLimits,
    /// Notification lifetime.
    pub notifications: NotificationConfig,
    /// Price estimator display settings.
    pub pricing: PricingConfig,
    /// Donation modal payment identifiers.
    pub support: SupportConfig,
    /// Portfolio lightbox links.
    pub portfolio: PortfolioConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = url::Url::parse(&self.form.endpoint) {
            return Err(ConfigError::Validation(format!(
                "form.endpoint is not a valid URL: {e}"
            )));
        }
        if let Err(e) = url::Url::parse(&self.support.paypal_url) {
            return Err(ConfigError::Validation(format!(
                "support.paypal_url is not a valid URL: {e}"
            )));
        }
        if self.form.thank_you_page.trim().is_empty() {
            return Err(ConfigError::Validation(
                "form.thank_you_page must not be empty".into(),
            ));
        }
        if self.uploads.max_files == 0 {
            return Err(ConfigError::Validation(
                "uploads.max_files must be at least 1".into(),
            ));
        }
        if self.uploads.max_file_size == 0 {
            return Err(ConfigError::Validation(
                "uploads.max_file_size must be non-zero".into(),
            ));
        }
        if self.notifications.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "notifications.timeout_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Contact form relay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Third-party form relay that receives the multipart POST.
    pub endpoint: String,
    /// Page the visitor lands on after a successful submission.
    pub thank_you_page: String,
    /// Delay between the success notice and the redirect.
    pub redirect_delay_ms: u64,
}

impl FormConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://formspree.io/f/your-form-id".to_string(),
            thank_you_page: "thank-you.html".to_string(),
            redirect_delay_ms: 2000,
        }
    }
}

/// Constraints on a batch of attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadLimits {
    /// Maximum number of files in one selection.
    pub max_files: usize,
    /// Maximum size of a single file, in bytes.
    pub max_file_size: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_files: 5,
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    /// How long a notification stays on screen unless closed.
    pub timeout_ms: u64,
}

impl NotificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { timeout_ms: 5000 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// Currency label printed before every amount.
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "KSH".to_string(),
        }
    }
}

/// Payment identifiers shown in the donation modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SupportConfig {
    pub mpesa_business_number: String,
    pub mpesa_account: String,
    pub paypal_email: String,
    /// External page opened by "Continue to PayPal".
    pub paypal_url: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            mpesa_business_number: "000000".to_string(),
            mpesa_account: "LEVIART".to_string(),
            paypal_email: "leviart9@gmail.com".to_string(),
            paypal_url: "https://paypal.me/leviart9".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Target of the lightbox's "Commission Similar" call to action.
    pub contact_page: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            contact_page: "../pages/contact.html".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# LeviArt Site Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[form]
# Form relay that receives the multipart POST (e.g. a Formspree form URL).
endpoint = "https://formspree.io/f/your-form-id"

# Page shown after a successful submission.
thank_you_page = "thank-you.html"

# Milliseconds between the success notice and the redirect.
redirect_delay_ms = 2000

# ---------------------------------------------------------------------------
# Reference photo uploads
# ---------------------------------------------------------------------------
[uploads]
# Maximum number of images per submission.
max_files = 5

# Maximum size of each image in bytes (10 MiB).
max_file_size = 10485760

# ---------------------------------------------------------------------------
# Notifications
# ---------------------------------------------------------------------------
[notifications]
# Milliseconds before a notification closes itself.
timeout_ms = 5000

# ---------------------------------------------------------------------------
# Price estimator
# ---------------------------------------------------------------------------
[pricing]
currency = "KSH"

# ---------------------------------------------------------------------------
# Support / donation modal
# ---------------------------------------------------------------------------
[support]
mpesa_business_number = "000000"
mpesa_account = "LEVIART"
paypal_email = "leviart9@gmail.com"
paypal_url = "https://paypal.me/leviart9"

# ---------------------------------------------------------------------------
# Portfolio
# ---------------------------------------------------------------------------
[portfolio]
# Where the lightbox's "Commission Similar" button points.
contact_page = "../pages/contact.html"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_form_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.form.thank_you_page, "thank-you.html");
        assert_eq!(config.form.redirect_delay(), Duration::from_secs(2));
    }

    #[test]
    fn default_config_has_upload_limits() {
        let config = SiteConfig::default();
        assert_eq!(config.uploads.max_files, 5);
        assert_eq!(config.uploads.max_file_size, 10_485_760);
    }

    #[test]
    fn default_config_validates() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[pricing]
currency = "USD"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.pricing.currency, "USD");
        // Everything else keeps its default
        assert_eq!(config.uploads.max_files, 5);
        assert_eq!(config.support.mpesa_account, "LEVIART");
    }

    #[test]
    fn stock_config_toml_matches_defaults() {
        let parsed: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.form.endpoint, defaults.form.endpoint);
        assert_eq!(parsed.uploads, defaults.uploads);
        assert_eq!(parsed.notifications.timeout_ms, defaults.notifications.timeout_ms);
        assert_eq!(parsed.support.paypal_url, defaults.support.paypal_url);
        assert_eq!(parsed.portfolio.contact_page, defaults.portfolio.contact_page);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.pricing.currency, "KSH");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[form]
endpoint = "https://formspree.io/f/abc123"

[uploads]
max_files = 3
"#,
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.form.endpoint, "https://formspree.io/f/abc123");
        assert_eq!(config.uploads.max_files, 3);
        // Sibling key from stock defaults survives the merge
        assert_eq!(config.uploads.max_file_size, 10_485_760);
        assert_eq!(config.form.thank_you_page, "thank-you.html");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[form\nendpoint = ").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_endpoint_fails_validation() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[form]
endpoint = "not a url"
"#,
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn zero_limits_fail_validation() {
        let mut config = SiteConfig::default();
        config.uploads.max_files = 0;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.notifications.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_paypal_url_fails_validation() {
        let mut config = SiteConfig::default();
        config.support.paypal_url = "paypal.me/someone".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("support.paypal_url"), "{err}");
    }

    #[test]
    fn blank_thank_you_page_fails_validation() {
        let mut config = SiteConfig::default();
        config.form.thank_you_page = "   ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("form.thank_you_page"), "{err}");
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_overlay_wins() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_nested_tables() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r#"
[support]
paypal_email = "studio@example.com"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let support = merged.get("support").unwrap();
        assert_eq!(
            support.get("paypal_email").unwrap().as_str(),
            Some("studio@example.com")
        );
        assert_eq!(support.get("mpesa_account").unwrap().as_str(), Some("LEVIART"));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[uploads]
max_filez = 9
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r##"
[colors]
background = "#fff"
"##;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[pricing]
currency = "KSH"
symbol = "Sh"
"#,
        )
        .unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }
}
