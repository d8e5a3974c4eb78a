//! One Figma style record to one inline CSS declaration string.

use serde_json::Value;

use super::color::color_from_fills;
use super::value::display_value;
use super::StyleRecord;
use crate::{FigspanError, Result};

/// Keys with no per-run inline equivalent. Font family is loaded through
/// `<link>` tags instead; the rest are container-level layout.
pub const EXCLUDED_KEYS: &[&str] = &[
    "fontFamily",
    "fontPostScriptName",
    "paragraphSpacing",
    "textAutoResize",
    "textAlignHorizontal",
    "textAlignVertical",
    "lineHeightPercent",
    "lineHeightUnit",
    "whiteSpace",
];

/// Declaration label emitted for the `italic` flag. Downstream output has
/// always carried this exact label.
pub const ITALIC_PROPERTY: &str = "font-tyle";

/// Convert a camelCase key to kebab-case.
pub fn kebab_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for ch in camel.chars() {
        let lower = ch.to_lowercase();
        if lower.clone().eq(std::iter::once(ch)) {
            out.push(ch);
        } else {
            out.push('-');
            out.extend(lower);
        }
    }
    out
}

/// Normalize a style record into ` prop: value;` declarations, in record order.
///
/// A malformed `fills` or `textDecoration` value is an error rather than a
/// dropped declaration.
pub fn normalize(record: &StyleRecord) -> Result<String> {
    let mut inline = String::new();
    for (key, value) in record {
        if EXCLUDED_KEYS.contains(&key.as_str()) {
            continue;
        }
        let declaration = match key.as_str() {
            "fills" => format!(" color: {};", color_from_fills(value)?),
            "fontSize" | "letterSpacing" => {
                format!(" {}: {}px;", kebab_case(key), display_value(value))
            }
            "lineHeightPx" => {
                let kebab = kebab_case(key);
                let property = kebab.strip_suffix("-px").unwrap_or(&kebab);
                format!(" {}: {}px;", property, display_value(value))
            }
            "italic" => format!(" {}: {};", ITALIC_PROPERTY, display_value(value)),
            "textDecoration" => format!(" {}: {};", kebab_case(key), text_decoration(value)?),
            _ => format!(" {}: {};", kebab_case(key), display_value(value)),
        };
        inline.push_str(&declaration);
    }
    Ok(inline)
}

fn text_decoration(value: &Value) -> Result<String> {
    match value {
        Value::String(s) if s == "STRIKETHROUGH" => Ok("line-through".to_string()),
        Value::String(s) => Ok(s.to_lowercase()),
        other => Err(FigspanError::malformed_style(
            "textDecoration",
            format!("expected a string, got {other}"),
        )),
    }
}
