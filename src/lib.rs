//! Figspan Library
//!
//! Converts the rich text of a Figma TEXT node (a JSON document export) into
//! HTML: per-character style overrides become inline-styled `<span>` runs
//! inside a `<pre>` block, and the page links every Google Font the styles use.
//!
//! # Module Overview
//!
//! - [`figma`] - Node search over the export and typed render inputs
//! - [`style`] - Style normalization, CSS table and font inventory
//! - [`compile`] - Run encoding and span emission
//! - [`document`] - Standalone HTML page and font links
//! - [`render`] - End-to-end conversion
//! - [`config`] - Configuration file support
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use figspan_lib::{render_document, Config};
//!
//! # fn example() -> figspan_lib::Result<()> {
//! let raw = std::fs::read_to_string("export.json")?;
//! let document: serde_json::Value = serde_json::from_str(&raw)?;
//! let rendered = render_document(&document, &Config::default())?;
//! std::fs::write("text.html", rendered.html)?;
//! # Ok(())
//! # }
//! ```

pub mod compile;
pub mod config;
pub mod document;
pub mod error;
pub mod figma;
pub mod output;
pub mod render;
pub mod style;

pub use compile::{
    compile, compile_spans, compile_spans_with, compile_with, encode_runs, BreakSentinels, Run,
    RunKind,
};
pub use config::{Config, FontSettings, NodeIds};
pub use document::{assemble_document, google_font_links, google_font_url};
pub use error::{ErrorCategory, ErrorPayload, FigspanError, Result};
pub use figma::{
    extract_container, extract_text_node, find_all_by_key, find_by_id, ContainerInput,
    TextNodeInput,
};
pub use output::{
    ErrorOutput, FigspanOutput, InputDescriptor, InspectOutput, RenderOutput,
    FIGSPAN_OUTPUT_VERSION,
};
pub use render::{inspect_text_node, render_document, RenderedDocument, TextNodeReport};
pub use style::{
    build_css_table, build_font_inventory, build_font_inventory_with, normalize, CssTable,
    FontFamily, FontInventory, FontWeightOrder, StyleRecord, StyleTable,
};
