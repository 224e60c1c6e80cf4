//! CLI tool for turning text into carousel slide fragments.

use anyhow::{Context, Result};
use carousel_core::{
    handle_message, CarouselRequest, LayoutStyle, Outcome, TextRenderer, TextSplitter, UiMessage,
};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Partition text into carousel slides.
#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file, or "-" to read from stdin
    #[arg(required_unless_present = "request", conflicts_with = "request")]
    input: Option<PathBuf>,

    /// JSON request file carrying a full UI message instead of flags
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// Number of slides to produce (1-30)
    #[arg(short, long, default_value = "5")]
    slides: usize,

    /// Font family name
    #[arg(long, default_value = "Inter")]
    font_family: String,

    /// Slide background color (hex)
    #[arg(long, default_value = "#1A1A2E")]
    primary_color: String,

    /// Accent color (hex); derived from the primary color if omitted
    #[arg(long, default_value = "")]
    secondary_color: String,

    /// Text color (hex)
    #[arg(long, default_value = "#FFFFFF")]
    text_color: String,

    /// Text layout on the slide
    #[arg(long, value_parser = parse_layout, default_value = "centered")]
    layout: LayoutStyle,

    /// Stamp current/total page numbers on each slide
    #[arg(long)]
    page_numbers: bool,

    /// Font weight override
    #[arg(long)]
    font_weight: Option<u16>,

    /// Font size override, in pixels
    #[arg(long)]
    font_size: Option<f64>,

    /// Line height override, as a multiple of the font size
    #[arg(long)]
    line_height: Option<f64>,

    /// Horizontal padding override, in pixels
    #[arg(long)]
    padding: Option<f64>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit fragments as JSON instead of rendered text
    #[arg(short, long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_layout(s: &str) -> std::result::Result<LayoutStyle, String> {
    match s {
        "centered" => Ok(LayoutStyle::Centered),
        "left-aligned" => Ok(LayoutStyle::LeftAligned),
        "right-aligned" => Ok(LayoutStyle::RightAligned),
        other => Err(format!(
            "unknown layout '{}' (expected centered, left-aligned, or right-aligned)",
            other
        )),
    }
}

/// JSON shape for `--json` output.
#[derive(Debug, Serialize)]
struct FragmentOutput {
    slide_count: usize,
    fragments: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let message = build_message(&args)?;
    let output = process_message(message, &args)?;

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            file.write_all(output.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            if args.verbose {
                eprintln!("Written to: {}", path.display());
            }
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Build the UI message, either from a JSON request file or from flags.
fn build_message(args: &Args) -> Result<UiMessage> {
    if let Some(request_path) = &args.request {
        let raw = std::fs::read_to_string(request_path)
            .with_context(|| format!("Failed to read {}", request_path.display()))?;
        let msg: UiMessage =
            serde_json::from_str(&raw).with_context(|| "Failed to parse request JSON")?;
        return Ok(msg);
    }

    let input = args
        .input
        .as_ref()
        .context("An input file (or '-' for stdin) is required")?;
    let text = read_text(input)?;

    Ok(UiMessage::CreateCarousel {
        text,
        slide_count: args.slides,
        font_family: args.font_family.clone(),
        primary_color: args.primary_color.clone(),
        secondary_color: args.secondary_color.clone(),
        text_color: args.text_color.clone(),
        layout_style: args.layout,
        include_page_numbers: args.page_numbers,
        font_weight: args.font_weight,
        font_size: args.font_size,
        line_height: args.line_height,
        padding: args.padding,
    })
}

/// Read the input text from a file or stdin.
fn read_text(input: &PathBuf) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .with_context(|| "Failed to read from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
    }
}

/// Dispatch the message and produce the requested output form.
fn process_message(message: UiMessage, args: &Args) -> Result<String> {
    if args.json {
        // JSON output bypasses the text renderer; validate, partition,
        // and emit the raw fragment sequence. A cancel produces no
        // output, same as the text path.
        let request = match CarouselRequest::from_message(message)? {
            Some(request) => request,
            None => return Ok(String::new()),
        };

        if args.verbose {
            eprintln!(
                "Partitioning {} chars into {} slides",
                request.text.chars().count(),
                request.slide_count
            );
        }

        let fragments = TextSplitter::new().split_into_slides(&request.text, request.slide_count);
        let output = FragmentOutput {
            slide_count: fragments.len(),
            fragments,
        };

        let mut rendered = serde_json::to_string_pretty(&output)?;
        rendered.push('\n');
        return Ok(rendered);
    }

    let mut renderer = TextRenderer::new(Vec::new());
    match handle_message(message, &mut renderer)? {
        Outcome::Created(summary) => {
            if args.verbose {
                eprintln!(
                    "Rendered {} slides ({} empty fragments skipped)",
                    summary.slide_count, summary.skipped
                );
            }
            let bytes = renderer.into_inner();
            String::from_utf8(bytes).context("Renderer emitted invalid UTF-8")
        }
        Outcome::Cancelled => Ok(String::new()),
    }
}
