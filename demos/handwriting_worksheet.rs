//! Example generating a handwriting practice worksheet
//!
//! Usage: cargo run --example handwriting_worksheet -- [TEXT_FILE]
//!
//! Reads practice text from TEXT_FILE (or stdin when the argument is `-`),
//! falling back to a sample sentence. Environment variables:
//! - WORKSHEET_FONT_SIZE: font size in points (default 32)
//! - WORKSHEET_FONT: path to a TrueType font to embed, e.g. a dotted tracing font
//! - WORKSHEET_PAGE_SIZE: `letter` (default) or `a4`
//! - WORKSHEET_TEXT_COLOR: hex text color such as `#374151`
//! - WORKSHEET_OUTPUT: output path (default handwriting_worksheet.pdf)

use std::io::Read;

use lopdf_worksheet::{Color, PageSize, Worksheet, WorksheetConfig, constants::DEFAULT_FONT_SIZE};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog.\n\nPack my box with five dozen liquor jugs.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let text = match std::env::args().nth(1).as_deref() {
        Some("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_TEXT.to_string(),
    };

    let font_size = match std::env::var("WORKSHEET_FONT_SIZE") {
        Ok(value) => value.parse::<f32>()?,
        Err(_) => DEFAULT_FONT_SIZE,
    };

    let page_size = match std::env::var("WORKSHEET_PAGE_SIZE").as_deref() {
        Ok("a4") | Ok("A4") => PageSize::A4,
        _ => PageSize::Letter,
    };

    let output = std::env::var("WORKSHEET_OUTPUT")
        .unwrap_or_else(|_| "handwriting_worksheet.pdf".to_string());

    let text_color = match std::env::var("WORKSHEET_TEXT_COLOR") {
        Ok(hex) => Color::from_hex(&hex)?,
        Err(_) => Color::slate(),
    };

    let config = WorksheetConfig::new()
        .with_font_size(font_size)
        .with_page_size(page_size)
        .with_text_color(text_color);
    let mut worksheet = Worksheet::new(text).with_config(config);

    if let Ok(font_path) = std::env::var("WORKSHEET_FONT") {
        let metrics = lopdf_worksheet::TtfFontMetrics::from_file(&font_path)?;
        let name = std::path::Path::new(&font_path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("WorksheetFont")
            .to_string();
        info!("Embedding font {} from {}", name, font_path);
        worksheet = worksheet.with_embedded_font(name, metrics);
    }

    let preview = worksheet.preview()?;
    info!("Worksheet layout uses {} draw calls", preview.len());

    worksheet.save(&output)?;
    println!("PDF created successfully: {output}");

    Ok(())
}
