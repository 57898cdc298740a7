//! Scrambling pipeline that combines a tokenizer and filters.
//!
//! [`Scrambler`] wires the analysis pieces together and turns them back into
//! text: each line is tokenized on spaces, run through the filter chain, and
//! rejoined with single spaces. Because the tokenizer keeps empty tokens and
//! the filters never add or drop tokens, line counts, word counts, and
//! character counts all round-trip exactly.
//!
//! # Examples
//!
//! ```
//! use typogly::scrambler::Scrambler;
//!
//! let scrambler = Scrambler::with_seed(42);
//! let out = scrambler.process_line("the quick brown fox").unwrap();
//!
//! assert_eq!(out.split(' ').count(), 4);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::analysis::token_filter::{Filter, ScrambleFilter};
use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use crate::error::{Result, TypoglyError};

/// Counts gathered during a successful [`Scrambler::process_file`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Number of lines processed.
    pub lines: usize,
    /// Number of non-empty space-delimited words processed.
    pub words: usize,
}

/// A pipeline that scrambles the interior letters of every word in a text.
///
/// Holds a tokenizer and a chain of filters, applied in order. The default
/// chain is a single [`ScrambleFilter`].
pub struct Scrambler {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl Scrambler {
    /// Create a scrambler with an OS-seeded random source.
    pub fn new() -> Self {
        Self::with_filter(Arc::new(ScrambleFilter::new()))
    }

    /// Create a scrambler with a fixed seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_filter(Arc::new(ScrambleFilter::with_seed(seed)))
    }

    fn with_filter(filter: Arc<dyn Filter>) -> Self {
        Scrambler {
            tokenizer: Arc::new(SpaceTokenizer::new()),
            filters: vec![filter],
        }
    }

    /// Add a filter to the end of the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this scrambler.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this scrambler.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Scramble a single line.
    ///
    /// Tokenizes on single spaces, applies the filter chain, rejoins with
    /// single spaces. The number and order of space-delimited tokens is
    /// invariant, including empty tokens from consecutive spaces.
    pub fn process_line(&self, line: &str) -> Result<String> {
        let mut tokens = self.tokenizer.tokenize(line)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        let words: Vec<String> = tokens.map(|token| token.text).collect();
        Ok(words.join(" "))
    }

    /// Scramble a whole document.
    ///
    /// Splits on `\n`, processes each line, rejoins with `\n`. A trailing
    /// newline in the input produces a trailing empty line that round-trips
    /// unchanged.
    pub fn process_text(&self, text: &str) -> Result<String> {
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| self.process_line(line))
            .collect::<Result<_>>()?;

        Ok(lines.join("\n"))
    }

    /// Scramble a file, reading `input` and writing the result to `output`.
    ///
    /// The whole input is read into memory as UTF-8, transformed, and
    /// written in one pass. Fails with [`TypoglyError::InputNotFound`] when
    /// the input path does not exist, [`TypoglyError::InputUnreadable`] when
    /// it cannot be read or decoded, and [`TypoglyError::OutputUnwritable`]
    /// when the output cannot be written. Any failure aborts the operation;
    /// the output may be partially written on a write failure.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<ProcessReport> {
        if !input.exists() {
            return Err(TypoglyError::input_not_found(input));
        }

        let content = fs::read_to_string(input)
            .map_err(|source| TypoglyError::input_unreadable(input, source))?;

        let report = ProcessReport {
            lines: content.split('\n').count(),
            words: content
                .split('\n')
                .map(|line| line.split(' ').filter(|word| !word.is_empty()).count())
                .sum(),
        };
        debug!(
            "scrambling {} lines ({} words) from '{}'",
            report.lines,
            report.words,
            input.display()
        );

        let transformed = self.process_text(&content)?;

        fs::write(output, transformed)
            .map_err(|source| TypoglyError::output_unwritable(output, source))?;

        Ok(report)
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}
