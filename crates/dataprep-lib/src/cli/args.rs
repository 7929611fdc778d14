use crate::logging::init_console_logging;
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch {
        config_path: Option<String>,
        output_dir: Option<String>,
        base_url: Option<String>,
    },
    Verify {
        config_path: Option<String>,
        output_dir: Option<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "dataprep",
    version,
    about = "Download the Inside Airbnb Madrid dataset and verify it against a checksum manifest"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file overriding the built-in dataset definition",
        global = true
    )]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Download, extract, write the checksum manifest and validate it (default)
    Fetch {
        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the data directory"
        )]
        output_dir: Option<String>,

        #[arg(
            long = "base-url",
            value_name = "URL",
            help = "Overrides the base URL the source files are fetched from"
        )]
        base_url: Option<String>,
    },

    /// Rewrite the checksum manifest for files already on disk and validate it
    Verify {
        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the data directory"
        )]
        output_dir: Option<String>,
    },
}

fn log_level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn into_command(cli: Cli) -> Command {
    match cli.command {
        None => Command::Fetch {
            config_path: cli.config,
            output_dir: None,
            base_url: None,
        },
        Some(CliCommand::Fetch {
            output_dir,
            base_url,
        }) => Command::Fetch {
            config_path: cli.config,
            output_dir,
            base_url,
        },
        Some(CliCommand::Verify { output_dir }) => Command::Verify {
            config_path: cli.config,
            output_dir,
        },
    }
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = log_level_for(cli.verbose);
    init_console_logging(log_level);

    Args {
        command: into_command(cli),
        log_level,
    }
}
