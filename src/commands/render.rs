use std::path::PathBuf;
use std::process::ExitCode;

use figspan_lib::output::FIGSPAN_OUTPUT_VERSION;
use figspan_lib::{render_document, FigspanError, FigspanOutput, RenderOutput};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::pipeline::{describe_input, load_document};
use crate::settings::{
    apply_node_overrides, format_effective_config, load_config, validate, NodeFlagSources,
};

/// Run the render command.
pub async fn run_render(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    input: String,
    text_node: String,
    container_node: String,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let mut config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format),
    };
    let flags = NodeFlagSources::from_args(raw_args);
    apply_node_overrides(&mut config, text_node, Some(container_node), &flags);
    if let Err(err) = validate(&config, config_path.as_deref()) {
        return render_error(err, format);
    }
    log::debug!(
        "{}",
        format_effective_config(&config, config_path.as_deref())
    );

    let document = match load_document(&input).await {
        Ok(doc) => doc,
        Err(err) => return render_error(err, format),
    };
    let rendered = match render_document(&document, &config) {
        Ok(rendered) => rendered,
        Err(err) => return render_error(err, format),
    };

    if let Some(path) = &output {
        log::debug!("Writing HTML to {}", path.display());
        if let Err(err) = tokio::fs::write(path, rendered.html.as_bytes()).await {
            return render_error(FigspanError::Io(err), format);
        }
    }

    if format == OutputFormat::Html {
        if output.is_none() {
            print!("{}", rendered.html);
        }
        return ExitCode::SUCCESS;
    }

    let html = if output.is_some() {
        None
    } else {
        Some(rendered.html)
    };
    let body = FigspanOutput::Render(RenderOutput {
        version: FIGSPAN_OUTPUT_VERSION.to_string(),
        input: describe_input(&input),
        text_node_id: config.nodes.text,
        container_node_id: config.nodes.container,
        fonts: rendered.fonts,
        output_path: output,
        html,
    });
    if let Err(err) = write_output(&body, format) {
        return render_error(FigspanError::Unknown(err.to_string()), format);
    }
    ExitCode::SUCCESS
}
