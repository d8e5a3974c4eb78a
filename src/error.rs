use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FigspanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No matching block found for node id {0}")]
    NodeNotFound(String),

    #[error("Node {node_id} is missing required field `{field}`")]
    MissingField { node_id: String, field: String },

    #[error("Node {node_id} has an invalid `{field}`: {message}")]
    InvalidField {
        node_id: String,
        field: String,
        message: String,
    },

    #[error("Style table has no base entry (index 0)")]
    MissingBaseStyle,

    #[error("Style index {index} (character {offset}) has no entry in the CSS table")]
    MissingStyleIndex { index: u32, offset: usize },

    #[error("Style map has {entries} entries but the text has {characters} UTF-16 code units")]
    StyleMapLength { characters: usize, entries: usize },

    #[error("Malformed style record ({key}): {message}")]
    MalformedStyle { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl FigspanError {
    pub fn missing_field(node_id: impl Into<String>, field: impl Into<String>) -> Self {
        FigspanError::MissingField {
            node_id: node_id.into(),
            field: field.into(),
        }
    }

    pub fn invalid_field(
        node_id: impl Into<String>,
        field: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        FigspanError::InvalidField {
            node_id: node_id.into(),
            field: field.into(),
            message: message.to_string(),
        }
    }

    pub fn malformed_style(key: impl Into<String>, message: impl Into<String>) -> Self {
        FigspanError::MalformedStyle {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            FigspanError::Io(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check the input path/permissions, or pass `-` to read from stdin.",
            ),
            FigspanError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check that the input is a valid Figma JSON export.",
            ),
            FigspanError::NodeNotFound(id) => ErrorPayload::new(
                ErrorCategory::Document,
                format!("No matching block found for node id {id}"),
                "Pass the right ids with --text-node/--container-node or set them in the config file.",
            ),
            FigspanError::MissingField { .. } | FigspanError::InvalidField { .. } => ErrorPayload::new(
                ErrorCategory::Document,
                self.to_string(),
                "Make sure the ids point at a TEXT node and its bordered container frame.",
            ),
            FigspanError::MissingBaseStyle
            | FigspanError::MissingStyleIndex { .. }
            | FigspanError::StyleMapLength { .. } => {
                ErrorPayload::new(
                    ErrorCategory::Style,
                    self.to_string(),
                    "The characterStyleOverrides and styleOverrideTable of the text node disagree; re-export the document.",
                )
            }
            FigspanError::MalformedStyle { .. } => ErrorPayload::new(
                ErrorCategory::Style,
                self.to_string(),
                "Inspect the style record with `figspan inspect`; fills need a color with r/g/b channels.",
            ),
            FigspanError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("sentinel") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Break sentinels must be two distinct style indices (defaults: 132, 133).",
                    )
                } else if lower.contains("url") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use an absolute URL such as https://fonts.googleapis.com/css2.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags and the config file (TOML) for typos.",
                    )
                }
            }
            FigspanError::Unknown(msg) => ErrorPayload::new(
                ErrorCategory::Unknown,
                msg.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, FigspanError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Input,
    Document,
    Style,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
