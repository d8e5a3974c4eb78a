use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::compile::Run;
use crate::error::ErrorPayload;
use crate::style::{CssTable, FontInventory};

/// Schema version for output payloads.
pub const FIGSPAN_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum FigspanOutput {
    Render(RenderOutput),
    Inspect(InspectOutput),
    Error(ErrorOutput),
}

/// Where the document came from: a file path or `-` for stdin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    pub version: String,
    pub input: InputDescriptor,
    pub text_node_id: String,
    pub container_node_id: String,
    pub fonts: FontInventory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    /// Omitted when the page was written to `output_path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectOutput {
    pub version: String,
    pub input: InputDescriptor,
    pub text_node_id: String,
    pub characters: String,
    pub css_table: CssTable,
    pub fonts: FontInventory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}
