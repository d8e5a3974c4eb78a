use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::compile::BreakSentinels;
use crate::style::FontWeightOrder;

/// Ids of the two nodes a render reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeIds {
    pub text: String,
    pub container: String,
}

impl Default for NodeIds {
    fn default() -> Self {
        Self {
            text: "1:4".to_string(),
            container: "0:1".to_string(),
        }
    }
}

/// Web font settings for the generated document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSettings {
    /// Google Fonts CSS2 endpoint used for per-family `<link>` tags.
    pub endpoint: String,
    /// Stylesheet pulled in with `@import` for the page default font.
    pub default_import: String,
    pub default_family: String,
    pub weight_order: FontWeightOrder,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://fonts.googleapis.com/css2".to_string(),
            default_import: "//fonts.googleapis.com/earlyaccess/jejugothic.css".to_string(),
            default_family: "'Jeju Gothic', sans-serif".to_string(),
            weight_order: FontWeightOrder::Lexicographic,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub nodes: NodeIds,
    pub break_sentinels: BreakSentinels,
    pub fonts: FontSettings,
}

impl Config {
    /// Load from `path`, else the central config file if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::central_config_path().filter(|p| p.is_file()) {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        let raw = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    /// `$HOME/.config/figspan/config.toml`, when `HOME` is set.
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("figspan")
                    .join("config.toml")
            })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.text.trim().is_empty() {
            return Err("text node id must not be empty".to_string());
        }
        if self.nodes.container.trim().is_empty() {
            return Err("container node id must not be empty".to_string());
        }
        if self.nodes.text == self.nodes.container {
            return Err(format!(
                "text and container node ids must differ (both are {})",
                self.nodes.text
            ));
        }
        let [first, second] = self.break_sentinels.0;
        if first == second {
            return Err(format!("break sentinels must differ (both are {first})"));
        }
        if first == 0 || second == 0 {
            return Err("break sentinel 0 would hide the base style".to_string());
        }
        Url::parse(&self.fonts.endpoint)
            .map_err(|e| format!("invalid fonts endpoint URL {}: {e}", self.fonts.endpoint))?;
        // Protocol-relative imports are valid in the document; resolve them against https.
        let import = if self.fonts.default_import.starts_with("//") {
            format!("https:{}", self.fonts.default_import)
        } else {
            self.fonts.default_import.clone()
        };
        Url::parse(&import).map_err(|e| {
            format!(
                "invalid default font import URL {}: {e}",
                self.fonts.default_import
            )
        })?;
        Ok(())
    }
}
