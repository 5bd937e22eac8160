//! Folio Quest CLI - explore the portfolio in a terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use folioquest::Language;
use std::path::PathBuf;
use std::process::ExitCode;

/// Folio Quest - a portfolio you explore as a tiny RPG
#[derive(Parser, Debug)]
#[command(name = "folioquest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play in the terminal
    Play {
        /// Language: it, en or es (default: saved language, then it)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Save slot file (default: per-user data directory)
        #[arg(long)]
        save_file: Option<PathBuf>,

        /// Frames per second (default: 60)
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Start with sound effects muted
        #[arg(long)]
        mute: bool,

        /// Never ring the terminal bell
        #[arg(long)]
        no_bell: bool,

        /// Skip the start menu
        #[arg(long)]
        skip_menu: bool,

        /// Ignore the existing save
        #[arg(long)]
        fresh: bool,

        /// World pixels per terminal column (default: 8)
        #[arg(long, default_value = "8")]
        cell_width: f64,

        /// World pixels per terminal row (default: 16)
        #[arg(long, default_value = "16")]
        cell_height: f64,
    },

    /// Inspect or delete the save slot
    Save {
        #[command(subcommand)]
        action: SaveAction,
    },

    /// Print the card grid for a viewport size
    Layout {
        /// Viewport width in pixels (default: 1280)
        #[arg(short, long, default_value = "1280")]
        width: f64,

        /// Viewport height in pixels (default: 720)
        #[arg(long, default_value = "720")]
        height: f64,

        /// Language for card titles
        #[arg(short, long, default_value = "it")]
        lang: Language,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

/// Save slot actions
#[derive(Subcommand, Debug)]
enum SaveAction {
    /// Show the saved record
    Show {
        /// Save slot file (default: per-user data directory)
        #[arg(long)]
        save_file: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Delete the saved record
    Clear {
        /// Save slot file (default: per-user data directory)
        #[arg(long)]
        save_file: Option<PathBuf>,
    },
}

fn run(args: Args) -> Result<(), cli::CliError> {
    let tui = matches!(args.command, Commands::Play { .. });
    cli::init_logging(args.log_file.as_deref(), tui)?;

    match args.command {
        Commands::Play {
            lang,
            save_file,
            fps,
            mute,
            no_bell,
            skip_menu,
            fresh,
            cell_width,
            cell_height,
        } => cli::play::execute(cli::play::PlayConfig {
            language: lang,
            save_file: cli::resolve_save_path(save_file)?,
            fps,
            mute,
            bell: !no_bell,
            skip_menu,
            fresh,
            cell_width,
            cell_height,
        }),

        Commands::Save { action } => match action {
            SaveAction::Show { save_file, format } => {
                cli::save::show(cli::resolve_save_path(save_file)?, format)
            }
            SaveAction::Clear { save_file } => cli::save::clear(cli::resolve_save_path(save_file)?),
        },

        Commands::Layout {
            width,
            height,
            lang,
            format,
        } => cli::layout::execute(width, height, lang, format),
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
