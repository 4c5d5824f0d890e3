//! Render configuration types
//!
//! This module defines the options the renderer needs. Everything here is a
//! plain value passed into [`crate::render::render_html`]; the renderer keeps
//! no state between calls.

use crate::render::Theme;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Configuration for one rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page and header title
    #[serde(default = "default_title")]
    pub title: String,

    /// Optional line under the title
    #[serde(default)]
    pub subtitle: String,

    /// Prefix shown before the title (empty for none)
    #[serde(default = "default_emoji")]
    pub emoji: String,

    /// Light or dark palette
    #[serde(default)]
    pub theme: Theme,

    /// Date printed in the header (default: today, local time)
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

fn default_title() -> String {
    "Momentum Scan".to_string()
}

fn default_emoji() -> String {
    "📡".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: String::new(),
            emoji: default_emoji(),
            theme: Theme::default(),
            date: None,
        }
    }
}

impl RenderConfig {
    /// Create a render configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method: set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Builder method: set the title prefix
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Builder method: choose the palette
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Builder method: pin the header date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Header date, falling back to today
    pub fn display_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let config = RenderConfig::new()
            .with_title("Semis")
            .with_subtitle("Top movers")
            .with_emoji("")
            .with_theme(Theme::Dark)
            .with_date(date);

        assert_eq!(config.title, "Semis");
        assert_eq!(config.subtitle, "Top movers");
        assert!(config.emoji.is_empty());
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.display_date(), date);
    }

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.title, "Momentum Scan");
        assert_eq!(config.emoji, "📡");
        assert_eq!(config.theme, Theme::Light);
        assert!(config.date.is_none());
    }
}
