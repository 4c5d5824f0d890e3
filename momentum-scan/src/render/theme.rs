//! Light and dark color palettes

use serde::{Deserialize, Serialize};

/// Page theme selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

/// Fixed set of colors substituted into the page stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub container_bg: &'static str,
    pub container_border: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub row_alt: &'static str,
    pub hover: &'static str,
    pub thead_bg: &'static str,
    pub tooltip_bg: &'static str,
    pub tooltip_text: &'static str,
    pub rs_elite_bg: &'static str,
    pub rs_elite_text: &'static str,
    pub rs_high_bg: &'static str,
    pub rs_high_text: &'static str,
    pub rs_mid_bg: &'static str,
    pub rs_mid_text: &'static str,
    pub rs_low_bg: &'static str,
    pub rs_low_text: &'static str,
    pub strong: &'static str,
    pub moderate: &'static str,
    pub weak: &'static str,
    pub from_open_mid: &'static str,
    pub negative: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        bg: "#ffffff",
        container_bg: "#ffffff",
        container_border: "#e0e0e0",
        text: "#111111",
        text_secondary: "#333333",
        text_muted: "#666666",
        border: "#e8e8e8",
        row_alt: "#fafafa",
        hover: "#f5f5f5",
        thead_bg: "#f8f8f8",
        tooltip_bg: "#1f2937",
        tooltip_text: "#ffffff",
        rs_elite_bg: "#16a34a",
        rs_elite_text: "#ffffff",
        rs_high_bg: "#4ade80",
        rs_high_text: "#052e16",
        rs_mid_bg: "#fbbf24",
        rs_mid_text: "#422006",
        rs_low_bg: "#e5e5e5",
        rs_low_text: "#737373",
        strong: "#16a34a",
        moderate: "#d97706",
        weak: "#9ca3af",
        from_open_mid: "#6b7280",
        negative: "#dc2626",
    };

    pub const DARK: Palette = Palette {
        bg: "#0f0f0f",
        container_bg: "#1a1a1a",
        container_border: "#2a2a2a",
        text: "#ffffff",
        text_secondary: "#e0e0e0",
        text_muted: "#888888",
        border: "#2a2a2a",
        row_alt: "#151515",
        hover: "#222222",
        thead_bg: "#252525",
        tooltip_bg: "#333333",
        tooltip_text: "#ffffff",
        rs_elite_bg: "#22c55e",
        rs_elite_text: "#ffffff",
        rs_high_bg: "#4ade80",
        rs_high_text: "#052e16",
        rs_mid_bg: "#fbbf24",
        rs_mid_text: "#422006",
        rs_low_bg: "#404040",
        rs_low_text: "#a0a0a0",
        strong: "#22c55e",
        moderate: "#fbbf24",
        weak: "#666666",
        from_open_mid: "#888888",
        negative: "#ef4444",
    };

    /// `(token, color)` pairs; `{{token}}` in the stylesheet is replaced by the color
    pub fn entries(&self) -> [(&'static str, &'static str); 25] {
        [
            ("bg", self.bg),
            ("container_bg", self.container_bg),
            ("container_border", self.container_border),
            ("text", self.text),
            ("text_secondary", self.text_secondary),
            ("text_muted", self.text_muted),
            ("border", self.border),
            ("row_alt", self.row_alt),
            ("hover", self.hover),
            ("thead_bg", self.thead_bg),
            ("tooltip_bg", self.tooltip_bg),
            ("tooltip_text", self.tooltip_text),
            ("rs_elite_bg", self.rs_elite_bg),
            ("rs_elite_text", self.rs_elite_text),
            ("rs_high_bg", self.rs_high_bg),
            ("rs_high_text", self.rs_high_text),
            ("rs_mid_bg", self.rs_mid_bg),
            ("rs_mid_text", self.rs_mid_text),
            ("rs_low_bg", self.rs_low_bg),
            ("rs_low_text", self.rs_low_text),
            ("strong", self.strong),
            ("moderate", self.moderate),
            ("weak", self.weak),
            ("from_open_mid", self.from_open_mid),
            ("negative", self.negative),
        ]
    }
}
