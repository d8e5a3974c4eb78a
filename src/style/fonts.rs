//! Font families and weights referenced by a style table.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::table::StyleTable;
use super::value::{display_value, is_truthy};

/// How the weights of one family are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeightOrder {
    /// Plain string order. Agrees with numeric order for three-digit CSS weights.
    #[default]
    Lexicographic,
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamily {
    pub family: String,
    pub weights: Vec<String>,
}

/// Font families in first-seen order, each with its distinct weights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontInventory {
    families: Vec<FontFamily>,
}

impl FontInventory {
    pub fn weights(&self, family: &str) -> Option<&[String]> {
        self.families
            .iter()
            .find(|entry| entry.family == family)
            .map(|entry| entry.weights.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontFamily> {
        self.families.iter()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// Collect font families and weights with the default weight order.
pub fn build_font_inventory(table: &StyleTable) -> FontInventory {
    build_font_inventory_with(table, FontWeightOrder::default())
}

pub fn build_font_inventory_with(table: &StyleTable, order: FontWeightOrder) -> FontInventory {
    let mut seen: Vec<(String, BTreeSet<String>)> = Vec::new();

    for (_, record) in table.iter() {
        let family = match record.get("fontFamily") {
            Some(value) if is_truthy(value) => display_value(value),
            _ => continue,
        };
        let position = match seen.iter().position(|(name, _)| *name == family) {
            Some(position) => position,
            None => {
                seen.push((family, BTreeSet::new()));
                seen.len() - 1
            }
        };
        if let Some(weight) = record.get("fontWeight").filter(|value| is_truthy(value)) {
            seen[position].1.insert(display_value(weight));
        }
    }

    let families = seen
        .into_iter()
        .map(|(family, weights)| {
            let mut weights: Vec<String> = weights.into_iter().collect();
            if order == FontWeightOrder::Numeric {
                weights.sort_by(|a, b| compare_numeric(a, b));
            }
            FontFamily { family, weights }
        })
        .collect();

    FontInventory { families }
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
