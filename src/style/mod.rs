//! Figma style records to inline CSS.
//!
//! - [`normalize`] - one record to a declaration string
//! - [`build_css_table`] - every record of a [`StyleTable`]
//! - [`build_font_inventory`] - font families and weights for `<link>` tags

pub mod color;
pub mod fonts;
pub mod normalize;
pub mod table;
pub mod value;

pub use color::{color_from_fills, css_rgba};
pub use fonts::{
    build_font_inventory, build_font_inventory_with, FontFamily, FontInventory, FontWeightOrder,
};
pub use normalize::{kebab_case, normalize};
pub use table::{build_css_table, CssTable, StyleTable, BASE_STYLE_INDEX};

/// Raw style properties of one style index, in document order.
pub type StyleRecord = serde_json::Map<String, serde_json::Value>;
