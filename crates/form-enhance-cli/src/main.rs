use anyhow::Result;
use clap::{Parser, Subcommand};
use form_enhance_cli::cli::{self, steps::Step};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "form-enhance",
    version,
    about = "Apply password toggles and inline validation to an HTML page and replay user actions"
)]
struct Cli {
    /// Print machine-readable JSON to stdout
    #[arg(long, global = true)]
    json: bool,

    /// Suppress the human-readable report
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// JSON file overriding the default marker classes and attributes
    #[arg(long, global = true, value_name = "FILE")]
    markers: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the toggle pairs and validated fields the enhancer binds
    Inspect {
        /// Rendered HTML page
        file: PathBuf,
    },
    /// Replay user actions and report the resulting state
    Run {
        /// Rendered HTML page
        file: PathBuf,

        /// Action to replay: click:<id>, fill:<id>=<value>, blur:<id>, submit:<id>
        #[arg(long = "step", short = 's', value_name = "STEP")]
        steps: Vec<Step>,

        /// Also print the enhanced <body> markup
        #[arg(long)]
        html: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("form_enhance=warn".parse()?),
        )
        .init();

    // Output helpers read these, as with every subcommand.
    if args.json {
        std::env::set_var("FORM_ENHANCE_JSON", "1");
    }
    if args.quiet {
        std::env::set_var("FORM_ENHANCE_QUIET", "1");
    }
    if args.no_color {
        std::env::set_var("FORM_ENHANCE_NO_COLOR", "1");
    }

    let markers = cli::load_markers(args.markers.as_deref())?;

    match args.command {
        Command::Inspect { file } => {
            cli::inspect_cmd::run(&file, &markers)?;
        }
        Command::Run { file, steps, html } => {
            cli::run_cmd::run(&file, &markers, &steps, html)?;
        }
    }

    Ok(())
}
