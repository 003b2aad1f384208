//! Emerald theme system for Spendwise
//!
//! Light/dark palettes lifted from the app's brand colors, with runtime
//! switching and a single `Element` -> `Style` mapping for the TUI.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme variants supported by Spendwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeVariant {
    /// Emerald Light theme (default)
    EmeraldLight,
    /// Emerald Dark theme
    EmeraldDark,
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::EmeraldLight
    }
}

/// Color palette for a theme variant
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub secondary: Color,
    pub info: Color,
    pub border: Color,
    pub selection: Color,
    pub warning: Color,
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Normal text content
    Text,
    /// Titles and headers
    Title,
    /// Borders and frames
    Border,
    /// Highlighted/selected items
    Highlight,
    /// Accent elements (buttons, active indicator dots)
    Accent,
    /// Secondary elements (errors, destructive affordances)
    Secondary,
    /// Information/status elements
    Info,
    /// Background fill
    Background,
    /// Inactive/disabled elements (muted dots, hints)
    Inactive,
    /// Warning elements (alerts, unconfigured state)
    Warning,
}

/// Main theme structure managing all UI styling
#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    /// Create a new theme with the specified variant
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::EmeraldLight => ColorPalette {
                background: Color::Rgb(255, 255, 255), // #ffffff
                foreground: Color::Rgb(31, 41, 55),    // #1f2937 (ink)
                accent: Color::Rgb(16, 185, 129),      // #10b981 (emerald)
                secondary: Color::Rgb(239, 68, 68),    // #ef4444 (red)
                info: Color::Rgb(66, 133, 244),        // #4285f4 (google blue)
                border: Color::Rgb(209, 213, 219),     // #d1d5db (mist)
                selection: Color::Rgb(243, 244, 246),  // #f3f4f6
                warning: Color::Rgb(245, 158, 11),     // #f59e0b (amber)
            },
            ThemeVariant::EmeraldDark => ColorPalette {
                background: Color::Rgb(17, 24, 39),    // #111827
                foreground: Color::Rgb(229, 231, 235), // #e5e7eb
                accent: Color::Rgb(52, 211, 153),      // #34d399 (emerald, lifted)
                secondary: Color::Rgb(248, 113, 113),  // #f87171
                info: Color::Rgb(96, 165, 250),        // #60a5fa
                border: Color::Rgb(55, 65, 81),        // #374151
                selection: Color::Rgb(31, 41, 55),     // #1f2937
                warning: Color::Rgb(251, 191, 36),     // #fbbf24
            },
        };

        Self { variant, colors }
    }

    /// Get the current theme variant
    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Toggle between light and dark variants
    pub fn toggle(&mut self) {
        self.variant = match self.variant {
            ThemeVariant::EmeraldLight => ThemeVariant::EmeraldDark,
            ThemeVariant::EmeraldDark => ThemeVariant::EmeraldLight,
        };
        *self = Self::new(self.variant);
    }

    /// Get a ratatui Style for the specified UI element
    pub fn ratatui_style(&self, element: Element) -> Style {
        match element {
            Element::Text => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Title => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Border => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Highlight => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),

            Element::Accent => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Secondary => Style::default()
                .fg(self.colors.secondary)
                .bg(self.colors.background),

            Element::Info => Style::default()
                .fg(self.colors.info)
                .bg(self.colors.background),

            Element::Background => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Inactive => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Warning => Style::default()
                .fg(self.colors.warning)
                .bg(self.colors.background),
        }
    }

    /// Get style for block titles
    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    /// Get style for block borders
    pub fn border_style(&self) -> Style {
        self.ratatui_style(Element::Border)
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    /// Get style for highlighted/selected items
    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }

    /// Get style for accent elements
    pub fn accent_style(&self) -> Style {
        self.ratatui_style(Element::Accent)
    }

    /// Get style for warning elements
    pub fn warning_style(&self) -> Style {
        self.ratatui_style(Element::Warning)
    }
}
