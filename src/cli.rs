//! Command-line interface
//!
//! ```bash
//! # Show the squares of a move
//! qxiangqi parse a1b1^c2
//!
//! # Classify a move on the opening board with a3 in superposition
//! qxiangqi classify --player black --entangled a3 a0a4
//!
//! # Write default settings
//! qxiangqi config --write
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use qxiangqi_engine::{parse_fen, parse_move, validate_move, Color, Location};
use tracing::debug;

use crate::core::{save_settings, try_load_settings, CoreError, Settings};

#[derive(Parser, Debug)]
#[command(name = "qxiangqi")]
#[command(about = "Quantum Xiangqi move parser, rule checker and classifier")]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a move string and print its sources and targets
    Parse {
        #[arg(value_name = "MOVE")]
        input: String,
    },

    /// Validate a move on a position and print its classification as JSON
    Classify {
        /// Position to play on (defaults to the configured start position)
        #[arg(long, value_name = "FEN")]
        fen: Option<String>,

        /// Side making the move
        #[arg(long, value_name = "red|black")]
        player: Option<Color>,

        /// Squares to flag as entangled, comma separated
        #[arg(long, value_name = "SQUARES", value_delimiter = ',')]
        entangled: Vec<String>,

        #[arg(value_name = "MOVE")]
        input: String,
    },

    /// Show the settings file, or write the defaults to it
    Config {
        #[arg(long)]
        write: bool,
    },
}

/// Run `cli` and return what should be printed on success
pub fn run(cli: &Cli, settings: &Settings, settings_file: &Path) -> anyhow::Result<String> {
    match &cli.command {
        Command::Parse { input } => {
            let request = parse_move(input)?;
            Ok(format!(
                "sources: {}\ntargets: {}",
                join(&request.sources),
                join(&request.targets)
            ))
        }
        Command::Classify {
            fen,
            player,
            entangled,
            input,
        } => {
            let (mut board, side) = match fen {
                Some(fen) => parse_fen(fen)?,
                None => {
                    let (board, _) = parse_fen(&settings.start_fen)
                        .context("configured start_fen is not a valid position")?;
                    (board, settings.first_player)
                }
            };
            for token in entangled {
                let loc: Location = token.trim().parse().map_err(CoreError::from)?;
                board.set_entangled(loc, true);
            }
            let player = player.unwrap_or(side);
            debug!("[CLI] classify {} for {}", input, player);

            let request = parse_move(input)?;
            let mv = validate_move(&board, player, &request)?;
            Ok(serde_json::to_string_pretty(&mv)?)
        }
        Command::Config { write } => {
            if *write {
                save_settings(settings_file, &Settings::default())?;
                Ok(format!("wrote default settings to {}", settings_file.display()))
            } else {
                let current = try_load_settings(settings_file)?;
                Ok(format!(
                    "{}\n{}",
                    settings_file.display(),
                    serde_json::to_string_pretty(&current)?
                ))
            }
        }
    }
}

fn join(locations: &[Location]) -> String {
    locations
        .iter()
        .map(Location::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
