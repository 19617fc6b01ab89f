use anyhow::Context;
use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(about = "Convert Minecraft coordinates between the Overworld and the Nether", long_about = None)]
pub struct Cli {
    /// History file (defaults to the user data directory)
    #[arg(long, global = true, env = "PORTAL_HISTORY_FILE")]
    pub history_file: Option<PathBuf>,
    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Parser, Debug)]
pub enum Commands {
    /// Print the coordinates on the other side of the portal
    Convert(Coordinates),
    /// Print the clipboard text for a conversion and save it to the history
    Copy(Coordinates),
    /// List saved conversions, newest first
    History,
    /// Restore a saved conversion and print its result
    Load {
        /// Position in the history list (1 is the newest)
        index: usize,
    },
    /// Delete all saved conversions
    Clear,
}

#[derive(Args, Debug)]
pub struct Coordinates {
    #[arg(allow_negative_numbers = true)]
    pub x: String,
    #[arg(allow_negative_numbers = true)]
    pub y: String,
    #[arg(allow_negative_numbers = true)]
    pub z: String,
    /// Dimension the coordinates are in
    #[arg(short, long, default_value = "overworld", value_parser = clap::builder::PossibleValuesParser::new(["overworld", "nether"]))]
    pub d: String,
}

impl Cli {
    pub fn history_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.history_file {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir().context("No data directory found, use --history-file")?;
        Ok(data_dir.join("portal-coords").join("history.json"))
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_coordinates_are_positional() {
        let cli = Cli::try_parse_from(["portal", "convert", "-120", "64", "-8", "-d", "nether"]).unwrap();
        let Commands::Convert(coords) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!((coords.x.as_str(), coords.y.as_str(), coords.z.as_str()), ("-120", "64", "-8"));
        assert_eq!(coords.d, "nether");
    }

    #[test]
    fn explicit_history_file_wins() {
        let cli = Cli::try_parse_from(["portal", "--history-file", "/tmp/h.json", "-vv", "history"]).unwrap();
        assert_eq!(cli.history_path().unwrap(), PathBuf::from("/tmp/h.json"));
        assert_eq!(cli.log_level(), "debug");
    }
}
