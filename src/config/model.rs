//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! default so the board runs without a config file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::catalog::{default_categories, default_products, ImageSpec, Product};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default = "default_products")]
    pub products: Vec<Product>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            timing: TimingConfig::default(),
            gallery: GalleryConfig::default(),
            products: default_products(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Animation frame interval.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// Fixed delays and animation lengths, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    #[serde(default = "default_ripple_ms")]
    pub ripple_ms: u64,
    #[serde(default = "default_todo_enter_ms")]
    pub todo_enter_ms: u64,
    #[serde(default = "default_todo_exit_ms")]
    pub todo_exit_ms: u64,
    #[serde(default = "default_card_exit_stagger_ms")]
    pub card_exit_stagger_ms: u64,
    #[serde(default = "default_card_exit_ms")]
    pub card_exit_ms: u64,
    #[serde(default = "default_gallery_settle_ms")]
    pub gallery_settle_ms: u64,
    #[serde(default = "default_card_enter_stagger_ms")]
    pub card_enter_stagger_ms: u64,
    #[serde(default = "default_card_enter_ms")]
    pub card_enter_ms: u64,
    #[serde(default = "default_cart_feedback_ms")]
    pub cart_feedback_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            notification_ms: default_notification_ms(),
            ripple_ms: default_ripple_ms(),
            todo_enter_ms: default_todo_enter_ms(),
            todo_exit_ms: default_todo_exit_ms(),
            card_exit_stagger_ms: default_card_exit_stagger_ms(),
            card_exit_ms: default_card_exit_ms(),
            gallery_settle_ms: default_gallery_settle_ms(),
            card_enter_stagger_ms: default_card_enter_stagger_ms(),
            card_enter_ms: default_card_enter_ms(),
            cart_feedback_ms: default_cart_feedback_ms(),
        }
    }
}

impl TimingConfig {
    pub fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }
}

/// Gallery settings and image sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Drop pending card insertions from a load that a newer load or clear
    /// has replaced. Off keeps the interleaving of overlapping loads.
    #[serde(default)]
    pub supersede_stale_loads: bool,
    #[serde(default = "default_categories")]
    pub categories: BTreeMap<String, Vec<ImageSpec>>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            supersede_stale_loads: false,
            categories: default_categories(),
        }
    }
}

/// Diagnostic log settings. The terminal is owned by the UI, so logs only
/// ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_tick_ms() -> u64 {
    33
}
fn default_notification_ms() -> u64 {
    3000
}
fn default_ripple_ms() -> u64 {
    600
}
fn default_todo_enter_ms() -> u64 {
    300
}
fn default_todo_exit_ms() -> u64 {
    300
}
fn default_card_exit_stagger_ms() -> u64 {
    50
}
fn default_card_exit_ms() -> u64 {
    300
}
fn default_gallery_settle_ms() -> u64 {
    300
}
fn default_card_enter_stagger_ms() -> u64 {
    100
}
fn default_card_enter_ms() -> u64 {
    400
}
fn default_cart_feedback_ms() -> u64 {
    1000
}
fn default_log_file() -> String {
    "~/.local/share/widgetboard/widgetboard.log".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
