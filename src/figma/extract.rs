//! Locating the text node and its container in a Figma document export.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::api_types::{FigmaBounds, FigmaColor, FigmaPaint};
use super::query::{find_by_id, find_first_by_key};
use crate::style::{StyleRecord, StyleTable, BASE_STYLE_INDEX};
use crate::{FigspanError, Result};

/// Everything the compiler needs from the text node.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNodeInput {
    pub node_id: String,
    pub characters: String,
    /// One style index per character of `characters`.
    pub style_map: Vec<u32>,
    /// Override table with the node's base style injected at index 0.
    pub style_table: StyleTable,
    pub color: FigmaColor,
    pub bounds: FigmaBounds,
}

/// The bordered rectangle drawn around the text.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleInput {
    pub stroke_weight: f64,
    pub paint: FigmaPaint,
    pub bounds: FigmaBounds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerInput {
    pub node_id: String,
    pub background: FigmaColor,
    pub rectangle: RectangleInput,
}

/// Extract the text node `node_id`.
///
/// Figma omits trailing `0` entries of `characterStyleOverrides`; a shorter
/// map is padded with the base index. A longer map is kept as is and fails
/// later in the compiler.
pub fn extract_text_node(document: &Value, node_id: &str) -> Result<TextNodeInput> {
    let node =
        find_by_id(document, node_id).ok_or_else(|| FigspanError::NodeNotFound(node_id.into()))?;

    let characters: String = parse(required(node, node_id, "characters")?, node_id, "characters")?;
    let mut style_map: Vec<u32> = match node.get("characterStyleOverrides") {
        Some(value) if !value.is_null() => parse(value, node_id, "characterStyleOverrides")?,
        _ => Vec::new(),
    };
    // One entry per UTF-16 code unit, as Figma counts string length.
    let unit_count = characters.encode_utf16().count();
    if style_map.len() < unit_count {
        log::debug!(
            "Padding style map of {} from {} to {} entries",
            node_id,
            style_map.len(),
            unit_count
        );
        style_map.resize(unit_count, BASE_STYLE_INDEX);
    }

    let overrides: Map<String, Value> = match find_first_by_key(node, "styleOverrideTable") {
        Some(value) if !value.is_null() => parse(value, node_id, "styleOverrideTable")?,
        _ => Map::new(),
    };
    let base: StyleRecord = parse(
        find_first_by_key(node, "style").ok_or_else(|| FigspanError::missing_field(node_id, "style"))?,
        node_id,
        "style",
    )?;
    let style_table = StyleTable::from_overrides(&overrides)?.with_base(base);

    let fills: Vec<FigmaPaint> = parse(required(node, node_id, "fills")?, node_id, "fills")?;
    let color = fills
        .first()
        .and_then(|paint| paint.color)
        .ok_or_else(|| FigspanError::missing_field(node_id, "fills[0].color"))?;

    let bounds: FigmaBounds = parse(
        find_first_by_key(node, "absoluteBoundingBox")
            .ok_or_else(|| FigspanError::missing_field(node_id, "absoluteBoundingBox"))?,
        node_id,
        "absoluteBoundingBox",
    )?;

    Ok(TextNodeInput {
        node_id: node_id.to_string(),
        characters,
        style_map,
        style_table,
        color,
        bounds,
    })
}

/// Extract the container node `node_id` and its first child rectangle.
pub fn extract_container(document: &Value, node_id: &str) -> Result<ContainerInput> {
    let node =
        find_by_id(document, node_id).ok_or_else(|| FigspanError::NodeNotFound(node_id.into()))?;

    let background: FigmaColor = parse(
        find_first_by_key(node, "backgroundColor")
            .ok_or_else(|| FigspanError::missing_field(node_id, "backgroundColor"))?,
        node_id,
        "backgroundColor",
    )?;

    let rectangle = required(node, node_id, "children")?
        .as_array()
        .and_then(|children| children.first())
        .ok_or_else(|| FigspanError::missing_field(node_id, "children[0]"))?;
    let rect_id = rectangle
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(node_id)
        .to_string();

    let stroke_weight: f64 = parse(
        required(rectangle, &rect_id, "strokeWeight")?,
        &rect_id,
        "strokeWeight",
    )?;
    let fills: Vec<FigmaPaint> = parse(required(rectangle, &rect_id, "fills")?, &rect_id, "fills")?;
    let paint = fills
        .into_iter()
        .next()
        .filter(|paint| paint.color.is_some())
        .ok_or_else(|| FigspanError::missing_field(&rect_id, "fills[0].color"))?;
    let bounds: FigmaBounds = parse(
        required(rectangle, &rect_id, "absoluteRenderBounds")?,
        &rect_id,
        "absoluteRenderBounds",
    )?;

    Ok(ContainerInput {
        node_id: node_id.to_string(),
        background,
        rectangle: RectangleInput {
            stroke_weight,
            paint,
            bounds,
        },
    })
}

fn required<'a>(node: &'a Value, node_id: &str, field: &str) -> Result<&'a Value> {
    node.get(field)
        .filter(|value| !value.is_null())
        .ok_or_else(|| FigspanError::missing_field(node_id, field))
}

fn parse<T: DeserializeOwned>(value: &Value, node_id: &str, field: &str) -> Result<T> {
    serde_json::from_value(value.clone())
        .map_err(|e| FigspanError::invalid_field(node_id, field, e))
}
