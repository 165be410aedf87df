//! Application configuration
//!
//! Configuration loaded from .foodie-hub.toml file.

use serde::{Deserialize, Serialize};

use crate::config_file::{ConfigSource, CONFIG_FILE};

/// Application configuration loaded from .foodie-hub.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Symbol printed in front of every amount
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Email used by the scripted sign-in
    #[serde(default = "default_demo_email")]
    pub demo_email: String,

    /// Delivery fee and tax rules applied at checkout
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Simulated backend delays
    #[serde(default)]
    pub latency: LatencyConfig,
}

/// Pricing rules for order totals
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PricingConfig {
    /// Fee charged when the subtotal does not exceed the threshold
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: f64,

    /// Delivery is free only when the subtotal is strictly greater than this
    #[serde(default = "default_free_delivery_threshold")]
    pub free_delivery_threshold: f64,

    /// Tax rate applied to the subtotal (0.08 = 8%)
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

/// Durations (in milliseconds) of the simulated network calls
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,

    #[serde(default = "default_place_order_ms")]
    pub place_order_ms: u64,

    #[serde(default = "default_tracking_ms")]
    pub tracking_ms: u64,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_demo_email() -> String {
    "john@example.com".to_string()
}

fn default_delivery_fee() -> f64 {
    3.99
}

fn default_free_delivery_threshold() -> f64 {
    25.0
}

fn default_tax_rate() -> f64 {
    0.08
}

fn default_login_ms() -> u64 {
    1000
}

fn default_place_order_ms() -> u64 {
    2000
}

fn default_tracking_ms() -> u64 {
    1500
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            delivery_fee: default_delivery_fee(),
            free_delivery_threshold: default_free_delivery_threshold(),
            tax_rate: default_tax_rate(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: default_login_ms(),
            place_order_ms: default_place_order_ms(),
            tracking_ms: default_tracking_ms(),
        }
    }
}

impl LatencyConfig {
    /// All delays set to zero (used by `--no-delay`)
    pub fn none() -> Self {
        Self {
            login_ms: 0,
            place_order_ms: 0,
            tracking_ms: 0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            demo_email: default_demo_email(),
            pricing: PricingConfig::default(),
            latency: LatencyConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(source) => Self::from_source(&source),
            None => {
                log::debug!("No {} found, using default app config", CONFIG_FILE);
                Self::default()
            }
        }
    }

    /// Parse a loaded config file, falling back to defaults if it is malformed
    pub fn from_source(source: &ConfigSource) -> Self {
        match toml::from_str(&source.content) {
            Ok(config) => {
                log::info!("Loaded app config from {}", source.path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse config file {}: {}",
                    source.path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.pricing.delivery_fee, 3.99);
        assert_eq!(config.pricing.free_delivery_threshold, 25.0);
        assert_eq!(config.pricing.tax_rate, 0.08);
        assert_eq!(config.latency.login_ms, 1000);
        assert_eq!(config.latency.place_order_ms, 2000);
        assert_eq!(config.latency.tracking_ms, 1500);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            currency_symbol = "€"

            [pricing]
            delivery_fee = 2.5
            tax_rate = 0.2
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.pricing.delivery_fee, 2.5);
        assert_eq!(config.pricing.tax_rate, 0.2);
        // threshold should use default
        assert_eq!(config.pricing.free_delivery_threshold, 25.0);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            [latency]
            login_ms = 0
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.latency.login_ms, 0);
        assert_eq!(config.latency.tracking_ms, 1500);
        assert_eq!(config.pricing, PricingConfig::default());
        assert_eq!(config.demo_email, "john@example.com");
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_format_amount() {
        let config = AppConfig::default();
        assert_eq!(config.format_amount(322.92), "$322.92");
        assert_eq!(config.format_amount(3.99), "$3.99");
        assert_eq!(config.format_amount(0.0), "$0.00");
    }

    #[test]
    fn test_latency_none() {
        let latency = LatencyConfig::none();
        assert_eq!(latency.login_ms, 0);
        assert_eq!(latency.place_order_ms, 0);
        assert_eq!(latency.tracking_ms, 0);
    }

    #[test]
    fn test_from_source() {
        let source = ConfigSource {
            path: std::path::PathBuf::from(CONFIG_FILE),
            content: "demo_email = \"jane@example.com\"".to_string(),
        };
        assert_eq!(AppConfig::from_source(&source).demo_email, "jane@example.com");

        let malformed = ConfigSource {
            content: "[pricing\ntax_rate = ".to_string(),
            ..source
        };
        assert_eq!(AppConfig::from_source(&malformed), AppConfig::default());
    }
}
