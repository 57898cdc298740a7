//! Command line argument parsing for the typogly CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// typogly - scrambles the interior letters of words in a text file
#[derive(Parser, Debug, Clone)]
#[command(name = "typogly")]
#[command(about = "Scrambles the interior letters of words in a text file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TypoglyArgs {
    /// Input text file (UTF-8)
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Destination file for the scrambled text
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Seed for the random source, for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl TypoglyArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Print the usage banner shown on malformed invocations.
pub fn print_usage() {
    println!("Usage: typogly <INPUT_FILE> <OUTPUT_FILE>");
    println!("Example: typogly text.txt scrambled_text.txt");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_args() {
        let args = TypoglyArgs::try_parse_from(["typogly", "in.txt", "out.txt"]).unwrap();
        assert_eq!(args.input_file, PathBuf::from("in.txt"));
        assert_eq!(args.output_file, PathBuf::from("out.txt"));
        assert_eq!(args.seed, None);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_missing_output_is_an_error() {
        assert!(TypoglyArgs::try_parse_from(["typogly", "in.txt"]).is_err());
    }

    #[test]
    fn test_extra_args_are_an_error() {
        assert!(TypoglyArgs::try_parse_from(["typogly", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_seed_and_format() {
        let args =
            TypoglyArgs::try_parse_from(["typogly", "in.txt", "out.txt", "--seed", "7", "-f", "json"])
                .unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            TypoglyArgs::try_parse_from(["typogly", "in.txt", "out.txt", "-q", "-vv"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
