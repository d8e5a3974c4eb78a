//! Run compiler: characters plus a per-character style map into HTML.
//!
//! Compilation happens in two steps so boundary logic and markup can be
//! tested on their own:
//! - [`encode_runs`] turns the style map into [`Run`] descriptors
//! - [`html::write_spans`] turns runs into `<span>` markup
//!
//! [`compile`] wraps the spans in a `<pre>` carrying the base style.

pub mod html;
pub mod runs;

pub use html::{escape_attr, escape_text, PARAGRAPH_BREAK};
pub use runs::{encode_runs, BreakSentinels, Run, RunKind};

use crate::style::{CssTable, BASE_STYLE_INDEX};
use crate::{FigspanError, Result};

/// Compile `text` into a `<pre>` block using the default break sentinels.
pub fn compile(text: &str, style_map: &[u32], css: &CssTable) -> Result<String> {
    compile_with(text, style_map, css, BreakSentinels::DEFAULT)
}

pub fn compile_with(
    text: &str,
    style_map: &[u32],
    css: &CssTable,
    sentinels: BreakSentinels,
) -> Result<String> {
    let base = css
        .get(BASE_STYLE_INDEX)
        .ok_or(FigspanError::MissingBaseStyle)?;
    let spans = compile_spans_with(text, style_map, css, sentinels)?;
    Ok(format!(
        "<pre style=\"{} white-space: pre-wrap;\">{spans}</pre>",
        escape_attr(base.trim())
    ))
}

/// Compile `text` into bare `<span>` markup using the default break sentinels.
pub fn compile_spans(text: &str, style_map: &[u32], css: &CssTable) -> Result<String> {
    compile_spans_with(text, style_map, css, BreakSentinels::DEFAULT)
}

pub fn compile_spans_with(
    text: &str,
    style_map: &[u32],
    css: &CssTable,
    sentinels: BreakSentinels,
) -> Result<String> {
    let units: Vec<u16> = text.encode_utf16().collect();
    if units.len() != style_map.len() {
        return Err(FigspanError::StyleMapLength {
            characters: units.len(),
            entries: style_map.len(),
        });
    }
    let runs = encode_runs(style_map, sentinels);
    log::debug!(
        "Encoded {} code units into {} runs ({} breaks)",
        units.len(),
        runs.len(),
        runs.iter().filter(|run| run.is_break()).count()
    );
    html::write_spans(&units, &runs, css)
}
