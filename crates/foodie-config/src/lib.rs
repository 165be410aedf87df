//! Configuration and file management for foodie-hub
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Session flag persistence (signed in / guest)

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod session;

pub use app_config::{AppConfig, LatencyConfig, PricingConfig};
pub use config_file::{load_config_file, ConfigSource};
pub use paths::{cache_dir, config_dir};
pub use session::{Session, SessionStatus};
