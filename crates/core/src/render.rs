//! Rendering seam for carousel slides.
//!
//! The partitioner hands an ordered fragment sequence to a
//! [`SlideRenderer`]; the renderer is passed in explicitly rather than
//! reached through ambient host state, so the core stays pure and any
//! backend (canvas, test double, plain text) can sit behind the trait.
//!
//! [`TextRenderer`] is the built-in backend: one text block per slide
//! with an optional `current/total` page-number stamp.

use crate::color::Rgb;
use crate::config::CarouselConfig;
use crate::error::{Error, Result};
use crate::message::{CarouselRequest, UiMessage};
use crate::splitter::TextSplitter;
use std::io::Write;

/// What a render pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of slides materialized.
    pub slide_count: usize,

    /// Empty trailing fragments that were skipped rather than drawn.
    pub skipped: usize,
}

/// A consumer that turns fragments into visual artifacts.
pub trait SlideRenderer {
    /// Materialize one slide per fragment.
    ///
    /// Fragments arrive in display order and may be empty; how empties
    /// are treated is the renderer's call.
    fn render(&mut self, fragments: &[String], config: &CarouselConfig) -> Result<RenderSummary>;
}

/// Renders slides as plain text blocks separated by a rule.
///
/// Empty fragments after the first are skipped, matching how the
/// canvas renderer leaves blank trailing slides undrawn.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    writer: W,
}

const SLIDE_RULE: &str = "----------------------------------------";

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the renderer and hand back its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SlideRenderer for TextRenderer<W> {
    fn render(&mut self, fragments: &[String], config: &CarouselConfig) -> Result<RenderSummary> {
        let total = fragments.len();
        let mut rendered = 0usize;
        let mut skipped = 0usize;

        // The accent color is derived when the request left it blank.
        let secondary = if config.secondary_color.is_empty() {
            Rgb::from_hex(&config.primary_color)?.darker()
        } else {
            Rgb::from_hex(&config.secondary_color)?
        };
        log::debug!("rendering {} fragments, accent {:?}", total, secondary);

        for (index, fragment) in fragments.iter().enumerate() {
            if fragment.trim().is_empty() && index > 0 {
                skipped += 1;
                continue;
            }

            if rendered > 0 {
                writeln!(self.writer, "{}", SLIDE_RULE)?;
            }

            writeln!(self.writer, "{}", fragment)?;

            if config.include_page_numbers {
                writeln!(self.writer, "{}/{}", index + 1, total)?;
            }

            rendered += 1;
        }

        Ok(RenderSummary {
            slide_count: rendered,
            skipped,
        })
    }
}

/// Outcome of dispatching a UI message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A carousel was created.
    Created(RenderSummary),

    /// The user cancelled; nothing was rendered.
    Cancelled,
}

/// Dispatch a UI message: validate, partition, render.
///
/// An empty fragment sequence after validation passed is reported as
/// [`Error::EmptyText`]; the caller surfaces it rather than rendering
/// nothing silently.
pub fn handle_message<R: SlideRenderer>(msg: UiMessage, renderer: &mut R) -> Result<Outcome> {
    match CarouselRequest::from_message(msg)? {
        Some(request) => {
            let splitter = TextSplitter::new();
            let fragments = splitter.split_into_slides(&request.text, request.slide_count);

            if fragments.is_empty() {
                return Err(Error::EmptyText);
            }

            let summary = renderer.render(&fragments, &request.config)?;
            log::info!(
                "carousel created: {} slides ({} skipped)",
                summary.slide_count,
                summary.skipped
            );
            Ok(Outcome::Created(summary))
        }
        None => {
            log::info!("carousel request cancelled");
            Ok(Outcome::Cancelled)
        }
    }
}
