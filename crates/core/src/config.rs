//! Carousel configuration types.
//!
//! The UI sends style parameters with several fields optional; this
//! module resolves them into a [`CarouselConfig`] where every field is
//! present, so defaults live in one place instead of being scattered
//! through the renderer.

use serde::{Deserialize, Serialize};

/// Slide frame width in pixels.
pub const SLIDE_WIDTH: f64 = 1080.0;

/// Slide frame height in pixels.
pub const SLIDE_HEIGHT: f64 = 1350.0;

/// Lowest slide count a request may ask for.
pub const MIN_SLIDE_COUNT: usize = 1;

/// Highest slide count a request may ask for.
pub const MAX_SLIDE_COUNT: usize = 30;

const DEFAULT_PADDING: f64 = 80.0;
const DEFAULT_FONT_SIZE: f64 = 32.0;
const DEFAULT_LINE_HEIGHT: f64 = 1.5;
const DEFAULT_FONT_WEIGHT: u16 = 400;

/// How slide text is laid out on the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    Centered,
    LeftAligned,
    RightAligned,
}

impl LayoutStyle {
    /// The horizontal text alignment this layout maps to.
    pub fn alignment(self) -> TextAlignment {
        match self {
            Self::Centered => TextAlignment::Center,
            Self::RightAligned => TextAlignment::Right,
            Self::LeftAligned => TextAlignment::Left,
        }
    }
}

/// Horizontal text alignment understood by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextAlignment {
    Center,
    Left,
    Right,
}

/// Fully resolved carousel style configuration.
///
/// Every field is present; optional request fields have already been
/// replaced with their defaults by [`CarouselConfig::new`] or the
/// message-resolution layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Font family name, as the host canvas knows it.
    pub font_family: String,

    /// Slide background color (hex string, e.g. "#1A1A2E").
    pub primary_color: String,

    /// Accent color for decorations (hex string). Empty string means
    /// "derive a darker shade of the primary color".
    pub secondary_color: String,

    /// Text color (hex string).
    pub text_color: String,

    /// Text layout on the slide.
    pub layout_style: LayoutStyle,

    /// Whether to stamp `current/total` page numbers on each slide.
    pub include_page_numbers: bool,

    /// Font weight (400 = regular).
    pub font_weight: u16,

    /// Font size in pixels.
    pub font_size: f64,

    /// Line height as a multiple of the font size.
    pub line_height: f64,

    /// Horizontal padding between the frame edge and the text, in pixels.
    pub padding: f64,
}

impl CarouselConfig {
    /// Build a config from the required style fields, resolving every
    /// optional field to its default.
    pub fn new(
        font_family: impl Into<String>,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
        text_color: impl Into<String>,
        layout_style: LayoutStyle,
        include_page_numbers: bool,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            primary_color: primary_color.into(),
            secondary_color: secondary_color.into(),
            text_color: text_color.into(),
            layout_style,
            include_page_numbers,
            font_weight: DEFAULT_FONT_WEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            padding: DEFAULT_PADDING,
        }
    }

    /// Override the font weight.
    pub fn with_font_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    /// Override the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Override the line height multiplier.
    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = height;
        self
    }

    /// Override the horizontal padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Line height in pixels, as the renderer consumes it.
    pub fn line_height_px(&self) -> f64 {
        self.font_size * self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CarouselConfig {
        CarouselConfig::new(
            "Inter",
            "#1A1A2E",
            "",
            "#FFFFFF",
            LayoutStyle::Centered,
            true,
        )
    }

    #[test]
    fn test_defaults_resolved() {
        let config = base_config();
        assert_eq!(config.padding, 80.0);
        assert_eq!(config.font_size, 32.0);
        assert_eq!(config.line_height, 1.5);
        assert_eq!(config.font_weight, 400);
    }

    #[test]
    fn test_overrides() {
        let config = base_config()
            .with_font_size(48.0)
            .with_line_height(1.2)
            .with_padding(100.0)
            .with_font_weight(700);

        assert_eq!(config.font_size, 48.0);
        assert_eq!(config.line_height, 1.2);
        assert_eq!(config.padding, 100.0);
        assert_eq!(config.font_weight, 700);
    }

    #[test]
    fn test_line_height_px() {
        let config = base_config();
        assert_eq!(config.line_height_px(), 48.0);
    }

    #[test]
    fn test_layout_alignment_mapping() {
        assert_eq!(LayoutStyle::Centered.alignment(), TextAlignment::Center);
        assert_eq!(LayoutStyle::LeftAligned.alignment(), TextAlignment::Left);
        assert_eq!(LayoutStyle::RightAligned.alignment(), TextAlignment::Right);
    }

    #[test]
    fn test_layout_style_serde_names() {
        let json = serde_json::to_string(&LayoutStyle::LeftAligned).unwrap();
        assert_eq!(json, "\"left-aligned\"");

        let parsed: LayoutStyle = serde_json::from_str("\"centered\"").unwrap();
        assert_eq!(parsed, LayoutStyle::Centered);
    }
}
