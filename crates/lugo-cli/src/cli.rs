use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use lugo_core::TeamSide;

use crate::commands::{formation::print_formation, replay::replay};

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Play recorded snapshots (one JSON object per line) and write the orders as JSON
    /// lines.
    #[clap(name = "replay")]
    Replay {
        #[clap(long, default_value = "home")]
        side: Side,
        #[clap(long, short)]
        number: u32,
        /// Snapshot file, or `-` for stdin.
        #[clap(short, long, default_value = "-")]
        input: PathBuf,
        /// Orders file. Defaults to stdout.
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the formation slots of every player and phase.
    #[clap(name = "formation")]
    Formation {
        #[clap(long, default_value = "home")]
        side: Side,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Side {
    Home,
    Away,
}

impl From<Side> for TeamSide {
    fn from(val: Side) -> Self {
        match val {
            Side::Home => TeamSide::Home,
            Side::Away => TeamSide::Away,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lugo-bot")]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(long, short = 'f', default_value = "bot-settings.json")]
    pub settings_file: PathBuf,

    #[clap(long, default_value = "info")]
    pub log_level: String,

    #[clap(long, default_value = "auto")]
    pub log_file: String,
}

impl Cli {
    pub fn start(self) -> ExitCode {
        match self.command {
            Command::Replay {
                side,
                number,
                input,
                output,
            } => match replay(&self.settings_file, side.into(), number, &input, output.as_deref()) {
                Ok(stats) => {
                    log::info!(
                        "Replayed {} turns: {} played, {} skipped, {} idle",
                        stats.turns,
                        stats.played,
                        stats.skipped,
                        stats.idle
                    );
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("Error replaying snapshots: {:#}", err);
                    ExitCode::FAILURE
                }
            },
            Command::Formation { side } => match print_formation(&self.settings_file, side.into()) {
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error printing formation: {:#}", err);
                    ExitCode::FAILURE
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "lugo-bot",
            "--log-level",
            "debug",
            "replay",
            "--side",
            "away",
            "-n",
            "7",
            "-i",
            "match.jsonl",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.settings_file, PathBuf::from("bot-settings.json"));
        match cli.command {
            Command::Replay {
                side,
                number,
                input,
                output,
            } => {
                assert_eq!(TeamSide::from(side), TeamSide::Away);
                assert_eq!(number, 7);
                assert_eq!(input, PathBuf::from("match.jsonl"));
                assert!(output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_replay_requires_a_number() {
        assert!(Cli::try_parse_from(["lugo-bot", "replay"]).is_err());
    }
}
