//! Figma unit-range colors to CSS `rgba()`.

use serde::Deserialize;
use serde_json::Value;

use super::value::{format_number, round_half_up};
use crate::figma::FigmaColor;
use crate::{FigspanError, Result};

/// Format a Figma color as `rgba(r, g, b, a)`.
///
/// Channels are scaled to 0-255 and rounded; `opacity` is rounded to two
/// decimals. The color's own `a` is ignored, opacity comes from the paint.
pub fn css_rgba(color: &FigmaColor, opacity: f64) -> String {
    let channel = |c: f64| format_number(round_half_up(c * 255.0));
    let alpha = round_half_up(opacity * 100.0) / 100.0;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        format_number(alpha)
    )
}

/// Text color declared by a raw `fills` array: first paint's color and opacity.
pub fn color_from_fills(fills: &Value) -> Result<String> {
    let first = fills
        .as_array()
        .and_then(|paints| paints.first())
        .ok_or_else(|| FigspanError::malformed_style("fills", "expected at least one paint"))?;
    let color = first
        .get("color")
        .ok_or_else(|| FigspanError::malformed_style("fills", "first paint has no color"))?;
    let color = FigmaColor::deserialize(color)
        .map_err(|e| FigspanError::malformed_style("fills", format!("invalid color: {e}")))?;
    let opacity = match first.get("opacity") {
        None => 1.0,
        // `null * 100` rounds to zero.
        Some(Value::Null) => 0.0,
        Some(other) => other.as_f64().ok_or_else(|| {
            FigspanError::malformed_style("fills", "opacity is not a number")
        })?,
    };
    Ok(css_rgba(&color, opacity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn color(r: f64, g: f64, b: f64) -> FigmaColor {
        FigmaColor { r, g, b, a: None }
    }

    #[test]
    fn rounds_channels_and_alpha() {
        assert_eq!(
            css_rgba(&color(1.0, 0.0, 0.5), 0.333),
            "rgba(255, 0, 128, 0.33)"
        );
    }

    #[test]
    fn full_opacity_prints_as_integer() {
        assert_eq!(css_rgba(&color(0.0, 0.0, 0.0), 1.0), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn fills_default_to_full_opacity() {
        let fills = json!([{ "type": "SOLID", "color": { "r": 0.2, "g": 0.4, "b": 0.6, "a": 1 } }]);
        assert_eq!(
            color_from_fills(&fills).expect("color"),
            "rgba(51, 102, 153, 1)"
        );
    }

    #[test]
    fn fills_use_first_paint_opacity() {
        let fills = json!([
            { "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 }, "opacity": 0.5 },
            { "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }
        ]);
        assert_eq!(
            color_from_fills(&fills).expect("color"),
            "rgba(255, 255, 255, 0.5)"
        );
    }

    #[test]
    fn empty_fills_are_malformed() {
        let err = color_from_fills(&json!([])).unwrap_err();
        assert!(matches!(err, FigspanError::MalformedStyle { .. }));
    }

    #[test]
    fn missing_channel_is_malformed() {
        let err = color_from_fills(&json!([{ "color": { "r": 1, "g": 0 } }])).unwrap_err();
        assert!(matches!(err, FigspanError::MalformedStyle { .. }));
    }
}
