use std::path::Path;

use figspan_lib::{Config, FigspanError};

/// Tracks which node id flags were explicitly provided vs. defaulted.
#[derive(Debug, Default)]
pub struct NodeFlagSources {
    pub text_node: bool,
    pub container_node: bool,
}

impl NodeFlagSources {
    pub fn from_args(args: &[String]) -> Self {
        Self {
            text_node: flag_present(args, "--text-node"),
            container_node: flag_present(args, "--container-node"),
        }
    }
}

/// Checks if a flag was present in the command-line arguments.
pub fn flag_present(args: &[String], flag: &str) -> bool {
    args.iter()
        .any(|arg| arg == flag || arg.starts_with(&format!("{flag}=")))
}

/// Overwrite the config node ids with CLI values when their flags were given.
pub fn apply_node_overrides(
    config: &mut Config,
    cli_text_node: String,
    cli_container_node: Option<String>,
    flags: &NodeFlagSources,
) {
    if flags.text_node {
        config.nodes.text = cli_text_node;
    }
    if flags.container_node {
        if let Some(container) = cli_container_node {
            config.nodes.container = container;
        }
    }
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/figspan/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, FigspanError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        FigspanError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;
    validate(&cfg, path)?;
    Ok(cfg)
}

/// Validate a config, naming its source in the error.
pub fn validate(cfg: &Config, path: Option<&Path>) -> Result<(), FigspanError> {
    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        FigspanError::Config(prefix)
    })
}

/// Format effective config as a single-line string.
pub fn format_effective_config(config: &Config, config_source: Option<&Path>) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let [first, second] = config.break_sentinels.0;
    format!(
        "Effective config [{source}]: text node={}, container node={}, break sentinels={first}/{second}, weight order={:?}, fonts endpoint={}",
        config.nodes.text, config.nodes.container, config.fonts.weight_order, config.fonts.endpoint
    )
}
