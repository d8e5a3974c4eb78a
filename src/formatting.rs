use std::fmt::Write as FmtWrite;
use std::io::IsTerminal;
use std::process::ExitCode;

use figspan_lib::output::FIGSPAN_OUTPUT_VERSION;
use figspan_lib::{ErrorOutput, FigspanError, FigspanOutput, RunKind};

use crate::cli::OutputFormat;

/// Write output in the requested format to stdout.
///
/// `Html` has no report shape of its own; callers print the page directly and
/// only reach this for the JSON fallback.
pub fn write_output(
    body: &FigspanOutput,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json | OutputFormat::Html => write_json_output(body)?,
        OutputFormat::Pretty => write_pretty_output(body),
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: FigspanError, format: OutputFormat) -> ExitCode {
    log::debug!("Command failed: {err:?}");
    let error_payload = err.to_payload();
    let payload = FigspanOutput::Error(ErrorOutput {
        version: FIGSPAN_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json | OutputFormat::Html => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            println!("{content}");
        }
        OutputFormat::Pretty => write_pretty_output(&payload),
    };

    ExitCode::from(2)
}

fn write_json_output(body: &FigspanOutput) -> Result<(), serde_json::Error> {
    let content = serde_json::to_string(body)?;
    println!("{content}");
    Ok(())
}

/// Human output on a terminal, pretty JSON when piped.
fn write_pretty_output(body: &FigspanOutput) {
    let content = if std::io::stdout().is_terminal() {
        format_pretty(body, true)
    } else {
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string())
    };
    println!("{content}");
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &FigspanOutput, colorize: bool) -> String {
    let format_fonts = |buf: &mut String, fonts: &figspan_lib::FontInventory| {
        if fonts.is_empty() {
            return;
        }
        writeln!(buf, "Fonts:").ok();
        for font in fonts.iter() {
            writeln!(buf, "- {:16} {}", font.family, font.weights.join(", ")).ok();
        }
    };

    match body {
        FigspanOutput::Render(out) => {
            let mut buf = String::new();
            let header = color("[RENDER]", "32", colorize);
            writeln!(
                buf,
                "{} Text node {} in container {}",
                header, out.text_node_id, out.container_node_id
            )
            .ok();
            writeln!(buf, "Input: {}", out.input.source).ok();
            format_fonts(&mut buf, &out.fonts);
            if let Some(path) = &out.output_path {
                writeln!(buf, "Written to: {}", path.display()).ok();
            } else if let Some(html) = &out.html {
                writeln!(buf, "HTML ({} bytes):", html.len()).ok();
                writeln!(buf, "{html}").ok();
            }
            buf
        }
        FigspanOutput::Inspect(out) => {
            let mut buf = String::new();
            let units: Vec<u16> = out.characters.encode_utf16().collect();
            let header = color("[INSPECT]", "36", colorize);
            writeln!(
                buf,
                "{} Text node {} ({} UTF-16 units)",
                header,
                out.text_node_id,
                units.len()
            )
            .ok();
            writeln!(buf, "Input: {}", out.input.source).ok();
            if !out.css_table.is_empty() {
                writeln!(buf, "Styles:").ok();
                for (index, css) in out.css_table.iter() {
                    writeln!(buf, "- {:>4} {}", index, css.trim()).ok();
                }
            }
            format_fonts(&mut buf, &out.fonts);
            if !out.runs.is_empty() {
                writeln!(buf, "Runs:").ok();
                for run in &out.runs {
                    let label = match run.kind {
                        RunKind::Styled(index) => format!("style {index}"),
                        RunKind::Break => color("break", "33", colorize),
                    };
                    let text = units
                        .get(run.start..run.end)
                        .map(String::from_utf16_lossy)
                        .unwrap_or_default();
                    writeln!(buf, "- {:>4}..{:<4} {} {:?}", run.start, run.end, label, text).ok();
                }
            }
            buf
        }
        FigspanOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
