mod cli;
mod commands;
mod formatting;
mod pipeline;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_inspect, run_render};

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let args = cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Render {
            input,
            text_node,
            container_node,
            format,
            output,
        } => {
            run_render(
                &raw_args,
                args.config,
                input,
                text_node,
                container_node,
                format,
                output,
            )
            .await
        }
        Commands::Inspect {
            input,
            text_node,
            format,
        } => run_inspect(&raw_args, args.config, input, text_node, format).await,
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity default.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .try_init();
}
