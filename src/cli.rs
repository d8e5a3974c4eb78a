use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "figspan")]
#[command(
    version,
    about = "Figspan - Render Figma text nodes as styled HTML",
    long_about = "Figspan\n\nReads a Figma file export (JSON) and turns the rich text of one TEXT node into HTML spans.\n\nModes:\n- render: build a standalone HTML page (fonts, container rectangle, styled text).\n- inspect: show the CSS table, font inventory and style runs of the text node.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose (debug) logging on stderr")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set node ids, break sentinels and font settings; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the text node as a standalone HTML page
    Render {
        #[arg(long, help = "Figma JSON export (path, or - for stdin)")]
        input: String,

        #[arg(
            long,
            value_name = "ID",
            default_value = "1:4",
            help = "Id of the TEXT node (overrides config when given)"
        )]
        text_node: String,

        #[arg(
            long,
            value_name = "ID",
            default_value = "0:1",
            help = "Id of the container whose first child is the border rectangle (overrides config when given)"
        )]
        container_node: String,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(
            long,
            short,
            help = "Write the HTML page to this path (stdout report only if omitted)"
        )]
        output: Option<PathBuf>,
    },

    /// Show the style tables and runs of the text node
    Inspect {
        #[arg(long, help = "Figma JSON export (path, or - for stdin)")]
        input: String,

        #[arg(
            long,
            value_name = "ID",
            default_value = "1:4",
            help = "Id of the TEXT node (overrides config when given)"
        )]
        text_node: String,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
    /// Raw HTML page (render only)
    Html,
}

pub fn parse() -> Cli {
    Cli::parse()
}
