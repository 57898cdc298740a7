//! Command implementations for the typogly CLI.

use log::info;

use crate::cli::args::TypoglyArgs;
use crate::cli::output::{ScrambleReport, output_result};
use crate::error::Result;
use crate::scrambler::Scrambler;

/// Execute the scramble run described by the parsed arguments.
pub fn execute_command(args: TypoglyArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("Scrambling: {}", args.input_file.display());
    }

    let scrambler = match args.seed {
        Some(seed) => Scrambler::with_seed(seed),
        None => Scrambler::new(),
    };

    let report = scrambler.process_file(&args.input_file, &args.output_file)?;
    info!(
        "scrambled {} words across {} lines",
        report.words, report.lines
    );

    output_result(
        "File has been successfully processed!",
        &ScrambleReport {
            input: args.input_file.to_string_lossy().to_string(),
            output: args.output_file.to_string_lossy().to_string(),
            lines: report.lines,
            words: report.words,
        },
        &args,
    )?;

    Ok(())
}
