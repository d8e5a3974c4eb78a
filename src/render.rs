//! End-to-end conversion of a parsed Figma document.

use serde::Serialize;
use serde_json::Value;

use crate::compile::{compile_with, encode_runs, Run};
use crate::config::Config;
use crate::document::assemble_document;
use crate::figma::{extract_container, extract_text_node, TextNodeInput};
use crate::style::{build_css_table, build_font_inventory_with, CssTable, FontInventory};
use crate::Result;

/// A rendered page plus the intermediate tables it was built from.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub html: String,
    pub css_table: CssTable,
    pub fonts: FontInventory,
}

/// Style diagnostics for a text node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNodeReport {
    pub node_id: String,
    pub characters: String,
    pub style_map: Vec<u32>,
    pub css_table: CssTable,
    pub fonts: FontInventory,
    pub runs: Vec<Run>,
}

/// Render the configured text node and container as a standalone HTML page.
pub fn render_document(document: &Value, config: &Config) -> Result<RenderedDocument> {
    let text = extract_text_node(document, &config.nodes.text)?;
    let container = extract_container(document, &config.nodes.container)?;

    let (css_table, fonts) = style_tables(&text, config)?;
    let pre = compile_with(
        &text.characters,
        &text.style_map,
        &css_table,
        config.break_sentinels,
    )?;
    let html = assemble_document(&text, &container, &fonts, &config.fonts, &pre);
    log::info!(
        "Rendered text node {} ({} characters, {} styles, {} font families)",
        text.node_id,
        text.style_map.len(),
        css_table.len(),
        fonts.len()
    );

    Ok(RenderedDocument {
        html,
        css_table,
        fonts,
    })
}

/// Build the style tables and runs of the configured text node without rendering.
pub fn inspect_text_node(document: &Value, config: &Config) -> Result<TextNodeReport> {
    let text = extract_text_node(document, &config.nodes.text)?;
    let (css_table, fonts) = style_tables(&text, config)?;
    let runs = encode_runs(&text.style_map, config.break_sentinels);

    Ok(TextNodeReport {
        node_id: text.node_id,
        characters: text.characters,
        style_map: text.style_map,
        css_table,
        fonts,
        runs,
    })
}

fn style_tables(text: &TextNodeInput, config: &Config) -> Result<(CssTable, FontInventory)> {
    let css_table = build_css_table(&text.style_table)?;
    let fonts = build_font_inventory_with(&text.style_table, config.fonts.weight_order);
    Ok((css_table, fonts))
}
