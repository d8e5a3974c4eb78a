use std::path::PathBuf;
use std::process::ExitCode;

use figspan_lib::output::FIGSPAN_OUTPUT_VERSION;
use figspan_lib::{inspect_text_node, FigspanError, FigspanOutput, InspectOutput};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::pipeline::{describe_input, load_document};
use crate::settings::{apply_node_overrides, load_config, NodeFlagSources};

/// Run the inspect command.
pub async fn run_inspect(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    input: String,
    text_node: String,
    format: OutputFormat,
) -> ExitCode {
    if format == OutputFormat::Html {
        return render_error(
            FigspanError::Config("inspect does not produce HTML; use --format json or pretty".into()),
            OutputFormat::Json,
        );
    }
    let mut config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format),
    };
    apply_node_overrides(
        &mut config,
        text_node,
        None,
        &NodeFlagSources::from_args(raw_args),
    );

    let document = match load_document(&input).await {
        Ok(doc) => doc,
        Err(err) => return render_error(err, format),
    };
    let report = match inspect_text_node(&document, &config) {
        Ok(report) => report,
        Err(err) => return render_error(err, format),
    };
    log::debug!(
        "Text node {} has {} styles and {} runs",
        report.node_id,
        report.css_table.len(),
        report.runs.len()
    );

    let body = FigspanOutput::Inspect(InspectOutput {
        version: FIGSPAN_OUTPUT_VERSION.to_string(),
        input: describe_input(&input),
        text_node_id: report.node_id,
        characters: report.characters,
        css_table: report.css_table,
        fonts: report.fonts,
        runs: report.runs,
    });
    if let Err(err) = write_output(&body, format) {
        return render_error(FigspanError::Unknown(err.to_string()), format);
    }
    ExitCode::SUCCESS
}
