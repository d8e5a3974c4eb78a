use std::path::Path;

use figspan_lib::{FigspanError, InputDescriptor};
use serde_json::Value;
use tokio::io::AsyncReadExt;

/// Input value that selects stdin.
pub const STDIN_INPUT: &str = "-";

/// Read and parse a Figma JSON export from a path or stdin.
pub async fn load_document(input: &str) -> Result<Value, FigspanError> {
    let raw = if input == STDIN_INPUT {
        log::debug!("Reading document from stdin");
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        log::debug!("Reading document from {input}");
        tokio::fs::read_to_string(Path::new(input)).await?
    };
    let document: Value = serde_json::from_str(&raw)?;
    Ok(document)
}

pub fn describe_input(input: &str) -> InputDescriptor {
    InputDescriptor {
        source: input.to_string(),
    }
}
