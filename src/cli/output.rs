//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TypoglyArgs};
use crate::error::Result;

/// Result structure for a scramble run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScrambleReport {
    pub input: String,
    pub output: String,
    pub lines: usize,
    pub words: usize,
}

/// Output a result in the specified format.
pub fn output_result(message: &str, report: &ScrambleReport, args: &TypoglyArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, report, args),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output in human-readable format.
fn output_human(message: &str, report: &ScrambleReport, args: &TypoglyArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }
    println!("Result saved to: {}", report.output);

    if args.verbosity() > 1 {
        println!("Lines: {}", report.lines);
        println!("Words: {}", report.words);
    }

    Ok(())
}

/// Output in JSON format.
fn output_json(report: &ScrambleReport, args: &TypoglyArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes() {
        let report = ScrambleReport {
            input: "in.txt".to_string(),
            output: "out.txt".to_string(),
            lines: 3,
            words: 12,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"output\":\"out.txt\""));
        assert!(json.contains("\"lines\":3"));
    }
}
