//! Messages arriving from the UI layer.
//!
//! The UI speaks a small tagged protocol: a `create-carousel` request
//! carrying text and style parameters, or a `cancel`. The enum is
//! closed and dispatch sites match exhaustively, so a new message kind
//! cannot be silently ignored.

use crate::color::Rgb;
use crate::config::{CarouselConfig, LayoutStyle, MAX_SLIDE_COUNT, MIN_SLIDE_COUNT};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A message from the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Request to build a carousel from text.
    #[serde(rename_all = "camelCase")]
    CreateCarousel {
        text: String,
        slide_count: usize,
        font_family: String,
        primary_color: String,
        #[serde(default)]
        secondary_color: String,
        text_color: String,
        layout_style: LayoutStyle,
        include_page_numbers: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_weight: Option<u16>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line_height: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        padding: Option<f64>,
    },

    /// The user dismissed the UI; nothing to do.
    Cancel,
}

/// A validated carousel request with every default resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselRequest {
    /// The raw text to partition.
    pub text: String,

    /// How many slides to produce (guaranteed in 1..=30).
    pub slide_count: usize,

    /// Fully resolved style configuration.
    pub config: CarouselConfig,
}

impl CarouselRequest {
    /// Validate a `create-carousel` payload and resolve defaults.
    ///
    /// Rejects empty text, a slide count outside 1..=30, and colors
    /// that do not parse as hex. The secondary color may be left blank;
    /// the renderer derives a darker shade of the primary color.
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        text: String,
        slide_count: usize,
        font_family: String,
        primary_color: String,
        secondary_color: String,
        text_color: String,
        layout_style: LayoutStyle,
        include_page_numbers: bool,
        font_weight: Option<u16>,
        font_size: Option<f64>,
        line_height: Option<f64>,
        padding: Option<f64>,
    ) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }

        if !(MIN_SLIDE_COUNT..=MAX_SLIDE_COUNT).contains(&slide_count) {
            return Err(Error::InvalidSlideCount {
                got: slide_count,
                min: MIN_SLIDE_COUNT,
                max: MAX_SLIDE_COUNT,
            });
        }

        Rgb::from_hex(&primary_color)?;
        Rgb::from_hex(&text_color)?;
        if !secondary_color.is_empty() {
            Rgb::from_hex(&secondary_color)?;
        }

        let mut config = CarouselConfig::new(
            font_family,
            primary_color,
            secondary_color,
            text_color,
            layout_style,
            include_page_numbers,
        );

        if let Some(weight) = font_weight {
            config = config.with_font_weight(weight);
        }
        if let Some(size) = font_size {
            config = config.with_font_size(size);
        }
        if let Some(height) = line_height {
            config = config.with_line_height(height);
        }
        if let Some(pad) = padding {
            config = config.with_padding(pad);
        }

        Ok(Self {
            text,
            slide_count,
            config,
        })
    }

    /// Resolve a [`UiMessage::CreateCarousel`] into a request; returns
    /// `None` for [`UiMessage::Cancel`].
    pub fn from_message(msg: UiMessage) -> Result<Option<Self>> {
        match msg {
            UiMessage::CreateCarousel {
                text,
                slide_count,
                font_family,
                primary_color,
                secondary_color,
                text_color,
                layout_style,
                include_page_numbers,
                font_weight,
                font_size,
                line_height,
                padding,
            } => Self::resolve(
                text,
                slide_count,
                font_family,
                primary_color,
                secondary_color,
                text_color,
                layout_style,
                include_page_numbers,
                font_weight,
                font_size,
                line_height,
                padding,
            )
            .map(Some),
            UiMessage::Cancel => Ok(None),
        }
    }
}
