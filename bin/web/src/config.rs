//! Centralized application configuration.
//!
//! Loaded via the `config` crate from `WAYMARK_*` environment variables on
//! the server. Leptos' own settings (site address, asset paths) come from
//! `[package.metadata.leptos]` and `LEPTOS_*` variables instead.
//!
//! The browser has no environment of its own. The server writes the toast
//! settings into a `<meta name="waymark-toast">` tag in the page shell and
//! the hydrate entry point reads them back with [`toast_config_from_meta`].

use serde::{Deserialize, Serialize};
use std::time::Duration;
use waymark_core::ToastConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebConfig {
    /// Toast notification settings.
    #[serde(default)]
    pub toast: ToastSettings,
}

/// Name of the `<meta>` tag that carries [`ToastSettings`] to the browser.
pub const TOAST_META_NAME: &str = "waymark-toast";

/// Toast-related configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastSettings {
    /// How long a visible toast stays on screen, in milliseconds.
    #[serde(default = "default_display_duration_ms")]
    pub display_duration_ms: u64,

    /// How many toasts are shown at once; the rest wait in line.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_display_duration_ms() -> u64 {
    4000
}

fn default_max_visible() -> usize {
    3
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            display_duration_ms: default_display_duration_ms(),
            max_visible: default_max_visible(),
        }
    }
}

impl From<ToastSettings> for ToastConfig {
    fn from(settings: ToastSettings) -> Self {
        Self {
            display_duration: Duration::from_millis(settings.display_duration_ms),
            max_visible: settings.max_visible,
        }
    }
}

impl From<ToastConfig> for ToastSettings {
    fn from(config: ToastConfig) -> Self {
        Self {
            display_duration_ms: u64::try_from(config.display_duration.as_millis())
                .unwrap_or(u64::MAX),
            max_visible: config.max_visible,
        }
    }
}

impl ToastSettings {
    /// Encodes the settings as the `content` of the toast `<meta>` tag.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_meta_content(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Decodes the toast `<meta>` tag written by the server.
///
/// A missing or malformed tag yields the defaults.
#[must_use]
pub fn toast_config_from_meta(content: Option<&str>) -> ToastConfig {
    let Some(content) = content else {
        tracing::debug!("No toast settings in page, using defaults");
        return ToastConfig::default();
    };

    match serde_json::from_str::<ToastSettings>(content) {
        Ok(settings) => settings.into(),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed toast settings");
            ToastConfig::default()
        }
    }
}

impl WebConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("WAYMARK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the toast settings in the form the toast queue expects.
    #[must_use]
    pub fn toast_config(&self) -> ToastConfig {
        self.toast.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_settings_have_correct_defaults() {
        let settings = ToastSettings::default();
        assert_eq!(settings.display_duration_ms, 4000);
        assert_eq!(settings.max_visible, 3);
    }

    #[test]
    fn toast_config_matches_core_defaults() {
        assert_eq!(WebConfig::default().toast_config(), ToastConfig::default());
    }

    #[test]
    fn toast_settings_convert_to_durations() {
        let settings = ToastSettings {
            display_duration_ms: 1500,
            max_visible: 1,
        };
        let config = ToastConfig::from(settings);
        assert_eq!(config.display_duration, Duration::from_millis(1500));
        assert_eq!(config.max_visible, 1);
    }

    #[test]
    fn meta_content_carries_settings_to_the_client() {
        let settings = ToastSettings {
            display_duration_ms: 1500,
            max_visible: 2,
        };
        let content = settings.to_meta_content().expect("settings serialize");

        let config = toast_config_from_meta(Some(&content));
        assert_eq!(config.display_duration, Duration::from_millis(1500));
        assert_eq!(config.max_visible, 2);
    }

    #[test]
    fn missing_or_malformed_meta_falls_back_to_defaults() {
        assert_eq!(toast_config_from_meta(None), ToastConfig::default());
        assert_eq!(
            toast_config_from_meta(Some("not json")),
            ToastConfig::default()
        );

        let partial = toast_config_from_meta(Some(r#"{"max_visible":5}"#));
        assert_eq!(partial.display_duration, Duration::from_millis(4000));
        assert_eq!(partial.max_visible, 5);
    }

    #[test]
    fn toast_config_converts_back_to_settings() {
        let config = ToastConfig {
            display_duration: Duration::from_millis(2500),
            max_visible: 4,
        };
        assert_eq!(
            ToastSettings::from(config),
            ToastSettings {
                display_duration_ms: 2500,
                max_visible: 4,
            }
        );
    }
}
