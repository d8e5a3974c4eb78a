//! Tests for node extraction against a document export.

#[cfg(test)]
mod tests {
    use crate::compile::compile_spans;
    use crate::figma::api_types::{FigmaBounds, FigmaColor};
    use crate::figma::extract::{extract_container, extract_text_node};
    use crate::figma::query::find_all_by_key;
    use crate::style::build_css_table;
    use crate::FigspanError;
    use serde_json::{json, Value};

    fn sample() -> Value {
        serde_json::from_str(include_str!("../../test_assets/sample_document.json"))
            .expect("sample document")
    }

    #[test]
    fn extracts_text_node_and_pads_style_map() {
        let text = extract_text_node(&sample(), "1:4").expect("text node");

        assert_eq!(text.characters, "Hello\nWorld!");
        assert_eq!(text.style_map, vec![1, 1, 1, 1, 1, 133, 2, 2, 0, 0, 0, 0]);
        assert_eq!(
            text.color,
            FigmaColor {
                r: 0.2,
                g: 0.2,
                b: 0.2,
                a: Some(1.0)
            }
        );
        assert_eq!(
            text.bounds,
            FigmaBounds {
                x: 0.0,
                y: 0.0,
                width: 160.0,
                height: 58.0
            }
        );
    }

    #[test]
    fn base_style_is_injected_at_index_zero() {
        let text = extract_text_node(&sample(), "1:4").expect("text node");

        let indices: Vec<u32> = text.style_table.iter().map(|(index, _)| index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        let base = text.style_table.get(0).expect("base style");
        assert_eq!(base["fontFamily"], json!("Inter"));
        let keys: Vec<&str> = base.keys().map(String::as_str).collect();
        assert_eq!(keys.first(), Some(&"fontFamily"));
        assert_eq!(keys.last(), Some(&"lineHeightUnit"));
    }

    #[test]
    fn extracts_container_rectangle() {
        let container = extract_container(&sample(), "0:1").expect("container");

        assert!((container.background.r - 0.898_039_221_763_610_8).abs() < 1e-12);
        assert!((container.rectangle.stroke_weight - 2.0).abs() < f64::EPSILON);
        assert_eq!(container.rectangle.paint.paint_type, "SOLID");
        assert!((container.rectangle.bounds.width - 320.0).abs() < f64::EPSILON);
        assert!((container.rectangle.bounds.height - 160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_text_node_is_not_found() {
        let err = extract_text_node(&sample(), "9:9").unwrap_err();
        assert!(matches!(err, FigspanError::NodeNotFound(id) if id == "9:9"));
    }

    #[test]
    fn text_node_without_fills_reports_field() {
        let doc = json!({
            "id": "1:4",
            "characters": "a",
            "style": { "fontSize": 12 },
            "absoluteBoundingBox": { "x": 0, "y": 0, "width": 1, "height": 1 }
        });
        let err = extract_text_node(&doc, "1:4").unwrap_err();
        assert!(
            matches!(&err, FigspanError::MissingField { field, .. } if field == "fills"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn text_node_without_overrides_uses_base_only() {
        let doc = json!({
            "id": "1:4",
            "characters": "ab",
            "style": { "fontSize": 12 },
            "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0, "a": 1 } }],
            "absoluteBoundingBox": { "x": 0, "y": 0, "width": 10, "height": 10 }
        });
        let text = extract_text_node(&doc, "1:4").expect("text node");
        assert_eq!(text.style_map, vec![0, 0]);
        assert_eq!(text.style_table.len(), 1);
    }

    fn emoji_node(style_map: Value) -> Value {
        json!({
            "id": "1:4",
            "characters": "😀a",
            "characterStyleOverrides": style_map,
            "styleOverrideTable": { "1": { "fontWeight": 700 } },
            "style": { "fontSize": 12 },
            "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0, "a": 1 } }],
            "absoluteBoundingBox": { "x": 0, "y": 0, "width": 10, "height": 10 }
        })
    }

    #[test]
    fn astral_characters_count_as_two_map_entries() {
        let text = extract_text_node(&emoji_node(json!([1, 1, 0])), "1:4").expect("text node");
        assert_eq!(text.style_map, vec![1, 1, 0]);

        let css = build_css_table(&text.style_table).expect("css");
        assert_eq!(
            compile_spans(&text.characters, &text.style_map, &css).expect("spans"),
            r#"<span style="font-weight: 700;">😀</span><span style="font-size: 12px;">a</span>"#
        );
    }

    #[test]
    fn dropped_trailing_zero_after_emoji_pads_to_base_style() {
        let text = extract_text_node(&emoji_node(json!([1, 1])), "1:4").expect("text node");
        assert_eq!(text.style_map, vec![1, 1, 0]);

        let css = build_css_table(&text.style_table).expect("css");
        let spans = compile_spans(&text.characters, &text.style_map, &css).expect("spans");
        assert!(
            spans.ends_with(r#"<span style="font-size: 12px;">a</span>"#),
            "unexpected spans: {spans}"
        );
    }

    #[test]
    fn invalid_style_map_reports_field() {
        let doc = json!({
            "id": "1:4",
            "characters": "a",
            "characterStyleOverrides": ["x"],
            "style": {},
            "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }],
            "absoluteBoundingBox": { "x": 0, "y": 0, "width": 1, "height": 1 }
        });
        let err = extract_text_node(&doc, "1:4").unwrap_err();
        assert!(
            matches!(&err, FigspanError::InvalidField { field, .. } if field == "characterStyleOverrides")
        );
    }

    #[test]
    fn container_without_children_reports_field() {
        let doc = json!({ "id": "0:1", "backgroundColor": { "r": 1, "g": 1, "b": 1, "a": 1 } });
        let err = extract_container(&doc, "0:1").unwrap_err();
        assert!(matches!(&err, FigspanError::MissingField { field, .. } if field == "children"));
    }

    #[test]
    fn render_bounds_are_found_across_the_document() {
        let doc = sample();
        let bounds = find_all_by_key(&doc, "absoluteRenderBounds");
        assert_eq!(bounds.len(), 2);
    }
}
