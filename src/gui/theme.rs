//! Custom styles layered over iced's built-in light and dark themes
//!
//! Colors come from the active theme's extended palette so the sidebar and
//! panels follow the appearance switch.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// Status colors, readable on both light and dark backgrounds
pub const SUCCESS: Color = Color::from_rgb(0.063, 0.725, 0.506); // Emerald
pub const DANGER: Color = Color::from_rgb(0.937, 0.267, 0.267); // Red
pub const MUTED: Color = Color::from_rgb(0.420, 0.447, 0.502); // Gray 500

/// Appearance choices offered in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppearanceMode {
    Dark,
    Light,
    /// No OS theme detection; follows iced's default (light) theme
    #[default]
    System,
}

impl AppearanceMode {
    pub const ALL: [AppearanceMode; 3] = [
        AppearanceMode::Dark,
        AppearanceMode::Light,
        AppearanceMode::System,
    ];

    pub fn theme(&self) -> Theme {
        match self {
            AppearanceMode::Dark => Theme::Dark,
            AppearanceMode::Light | AppearanceMode::System => Theme::Light,
        }
    }
}

impl std::fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AppearanceMode::Dark => "Dark",
            AppearanceMode::Light => "Light",
            AppearanceMode::System => "System",
        })
    }
}

// --- Container Styles ---

pub struct SidebarContainer;

impl container::StyleSheet for SidebarContainer {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> container::Appearance {
        let palette = style.extended_palette();

        container::Appearance {
            text_color: Some(palette.background.weak.text),
            background: Some(Background::Color(palette.background.weak.color)),
            ..Default::default()
        }
    }
}

pub struct PanelContainer;

impl container::StyleSheet for PanelContainer {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> container::Appearance {
        let palette = style.extended_palette();

        container::Appearance {
            text_color: Some(palette.background.base.text),
            background: Some(Background::Color(palette.background.base.color)),
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub enum SidebarButtonStyle {
    Active,
    Inactive,
}

impl button::StyleSheet for SidebarButtonStyle {
    type Style = Theme;

    fn active(&self, style: &Self::Style) -> button::Appearance {
        let palette = style.extended_palette();

        match self {
            Self::Active => button::Appearance {
                background: Some(Background::Color(palette.background.strong.color)),
                text_color: palette.background.strong.text,
                border: Border {
                    radius: 0.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Self::Inactive => button::Appearance {
                background: None,
                text_color: palette.background.weak.text,
                border: Border {
                    radius: 0.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let palette = style.extended_palette();

        match self {
            Self::Active => self.active(style),
            Self::Inactive => button::Appearance {
                background: Some(Background::Color(palette.background.strong.color)),
                ..self.active(style)
            },
        }
    }
}
