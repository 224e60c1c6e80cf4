//! Core text partitioning, configuration, and rendering seam for
//! turning free-form text into carousel slides.

pub mod color;
pub mod config;
pub mod error;
pub mod message;
pub mod render;
pub mod splitter;

pub use color::Rgb;
pub use config::{CarouselConfig, LayoutStyle, TextAlignment};
pub use error::{Error, Result};
pub use message::{CarouselRequest, UiMessage};
pub use render::{handle_message, Outcome, RenderSummary, SlideRenderer, TextRenderer};
pub use splitter::TextSplitter;
