//! Reading Figma document exports.
//!
//! This module provides:
//! - [`find_by_id`] / [`find_all_by_key`] - searches over the untyped JSON tree
//! - [`extract_text_node`] / [`extract_container`] - typed render inputs
//! - API types for the parts of a Figma node the converter reads

pub mod api_types;
pub mod extract;
pub mod query;

#[cfg(test)]
mod tests;

pub use api_types::{FigmaBounds, FigmaColor, FigmaPaint};
pub use extract::{
    extract_container, extract_text_node, ContainerInput, RectangleInput, TextNodeInput,
};
pub use query::{find_all_by_key, find_by_id, find_first_by_key, NodeRef};
