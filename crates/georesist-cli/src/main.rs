mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "georesist",
    version,
    about = "Soil resistivity tables from model replies, with corrosion classification"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a model reply into a normalized, classified table
    Process {
        /// Text file holding the model reply
        reply_file: PathBuf,

        /// Output language: ru, en or uz
        #[arg(short, long, default_value = "ru")]
        lang: String,

        /// Custom JSON band table (default: built-in soil table)
        #[arg(short, long, value_name = "FILE")]
        bands: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the processed report to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// The reply file holds an upstream failure message, not a completion
        #[arg(long)]
        upstream_error: bool,
    },
    /// Classify a single resistivity value (Ohm·m)
    Classify {
        /// Value to classify, e.g. "62,83"
        value: String,

        /// Output language: ru, en or uz
        #[arg(short, long, default_value = "ru")]
        lang: String,

        /// Custom JSON band table
        #[arg(short, long, value_name = "FILE")]
        bands: Option<PathBuf>,
    },
    /// Inspect and validate band tables
    Bands {
        #[command(subcommand)]
        action: BandsAction,
    },
    /// Print the prompt to send to the text-generation service
    Prompt {
        /// Text file holding the extracted document text
        document_file: PathBuf,

        /// Test name, e.g. "Direct Shear Test" (see `georesist standards`)
        #[arg(short, long)]
        test: Option<String>,

        /// Ask for the resistivity table instead of a compliance analysis
        #[arg(long)]
        resistivity: bool,

        /// Prompt language: ru, en or uz
        #[arg(short, long, default_value = "ru")]
        lang: String,
    },
    /// List the supported tests and their ASTM standards
    Standards,
}

#[derive(Subcommand)]
enum BandsAction {
    /// List predefined band tables
    List,
    /// Show the bands of a predefined table
    Explain {
        /// Preset name (e.g., "soil")
        #[arg(default_value = "soil")]
        preset: String,

        /// Label language: ru, en or uz
        #[arg(short, long, default_value = "ru")]
        lang: String,
    },
    /// Validate a custom band table file
    Validate {
        /// Path to JSON band table
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Process {
            reply_file,
            lang,
            bands,
            output,
            out,
            upstream_error,
        } => commands::process::run(
            reply_file,
            &lang,
            bands.as_deref(),
            &output,
            out,
            upstream_error,
        ),
        Commands::Classify { value, lang, bands } => {
            commands::classify::run(&value, &lang, bands.as_deref())
        }
        Commands::Bands { action } => match action {
            BandsAction::List => commands::bands::list(),
            BandsAction::Explain { preset, lang } => commands::bands::explain(&preset, &lang),
            BandsAction::Validate { file } => commands::bands::validate(&file),
        },
        Commands::Prompt {
            document_file,
            test,
            resistivity,
            lang,
        } => commands::prompt::run(document_file, test.as_deref(), resistivity, &lang),
        Commands::Standards => commands::prompt::standards(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
