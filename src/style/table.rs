//! Style tables keyed by style index, raw and normalized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::normalize::normalize;
use super::StyleRecord;
use crate::{FigspanError, Result};

/// Index of the node's own base style.
pub const BASE_STYLE_INDEX: u32 = 0;

/// Raw style records keyed by style index, in ascending index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    entries: BTreeMap<u32, StyleRecord>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `styleOverrideTable` object. Keys must be style indices and
    /// values must be objects.
    pub fn from_overrides(overrides: &Map<String, Value>) -> Result<Self> {
        let mut table = Self::new();
        for (key, value) in overrides {
            let index: u32 = key.parse().map_err(|_| {
                FigspanError::malformed_style(key.clone(), "style index is not an integer")
            })?;
            let record = value.as_object().cloned().ok_or_else(|| {
                FigspanError::malformed_style(key.clone(), "style record is not an object")
            })?;
            table.insert(index, record);
        }
        Ok(table)
    }

    /// Inject the base style under [`BASE_STYLE_INDEX`], replacing any entry there.
    pub fn with_base(mut self, base: StyleRecord) -> Self {
        self.insert(BASE_STYLE_INDEX, base);
        self
    }

    pub fn insert(&mut self, index: u32, record: StyleRecord) -> Option<StyleRecord> {
        self.entries.insert(index, record)
    }

    pub fn get(&self, index: u32) -> Option<&StyleRecord> {
        self.entries.get(&index)
    }

    pub fn has_base(&self) -> bool {
        self.entries.contains_key(&BASE_STYLE_INDEX)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &StyleRecord)> {
        self.entries.iter().map(|(index, record)| (*index, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, StyleRecord)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (u32, StyleRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Inline CSS declaration strings keyed by style index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssTable {
    entries: BTreeMap<u32, String>,
}

impl CssTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: u32, declarations: impl Into<String>) -> Option<String> {
        self.entries.insert(index, declarations.into())
    }

    pub fn get(&self, index: u32) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries
            .iter()
            .map(|(index, declarations)| (*index, declarations.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for CssTable {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(index, declarations)| (index, declarations.into()))
                .collect(),
        }
    }
}

/// Normalize every record of `table`, keeping its indices.
///
/// The base entry must already be injected.
pub fn build_css_table(table: &StyleTable) -> Result<CssTable> {
    if !table.has_base() {
        return Err(FigspanError::MissingBaseStyle);
    }
    let mut css = CssTable::new();
    for (index, record) in table.iter() {
        css.insert(index, normalize(record)?);
    }
    log::debug!("Built CSS table with {} entries", css.len());
    Ok(css)
}
