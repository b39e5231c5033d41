use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::theme::Mode;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Content API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the content API (scheme + host + optional port).
    pub base_url: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds as u64)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds as u64)
    }
}

/// Carousel timing and gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Rotate automatically while the pointer is away.
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    /// Seconds between automatic advances (default: 5).
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_seconds: u64,
    /// Horizontal travel in pixels a swipe must exceed (default: 50).
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f32,
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_secs(self.autoplay_interval_seconds)
    }
}

/// Persisted theme preference the UI is initialized from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: Mode,
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_autoplay() -> bool {
    true
}

fn default_autoplay_interval() -> u64 {
    5
}

fn default_swipe_threshold() -> f32 {
    50.0
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            autoplay_interval_seconds: default_autoplay_interval(),
            swipe_threshold_px: default_swipe_threshold(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            carousel: CarouselConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}
