//! Typed pieces of a Figma document export.
//!
//! Only the shapes the converter reads are typed; everything else stays as
//! `serde_json::Value` and is reached through [`super::query`].

use serde::{Deserialize, Serialize};

/// RGBA color from Figma (0.0-1.0 range).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

/// Paint/fill data from Figma.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaPaint {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub color: Option<FigmaColor>,
    pub opacity: Option<f64>,
}

/// Bounding box coordinates from Figma.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
