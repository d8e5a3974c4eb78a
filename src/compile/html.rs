//! HTML formatting of encoded runs.

use super::runs::{Run, RunKind};
use crate::style::CssTable;
use crate::{FigspanError, Result};

/// Markup substituted for a break run that is followed by text.
pub const PARAGRAPH_BREAK: &str = "<br /> <br />";

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Render runs over `units` (the text as UTF-16 code units) as `<span>` markup.
///
/// A trailing break run renders nothing; any other break run renders
/// [`PARAGRAPH_BREAK`] ahead of the run that follows it. The break goes
/// before the next span opens rather than in place of the sentinel character
/// inside the current one.
///
/// A run boundary that splits a surrogate pair leaves each half in its own
/// span, decoded as U+FFFD.
pub fn write_spans(units: &[u16], runs: &[Run], css: &CssTable) -> Result<String> {
    let mut out = String::with_capacity(units.len() * 2);
    for (position, run) in runs.iter().enumerate() {
        match run.kind {
            RunKind::Break => {
                if position + 1 < runs.len() {
                    out.push_str(PARAGRAPH_BREAK);
                }
            }
            RunKind::Styled(index) => {
                let style = css.get(index).ok_or(FigspanError::MissingStyleIndex {
                    index,
                    offset: run.start,
                })?;
                let text = units
                    .get(run.start..run.end)
                    .map(String::from_utf16_lossy)
                    .ok_or(FigspanError::StyleMapLength {
                        characters: units.len(),
                        entries: run.end,
                    })?;
                out.push_str("<span style=\"");
                out.push_str(&escape_attr(style.trim()));
                out.push_str("\">");
                out.push_str(&escape_text(&text));
                out.push_str("</span>");
            }
        }
    }
    Ok(out)
}
