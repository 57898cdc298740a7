//! # Typogly
//!
//! A small text-scrambling library and CLI implementing the "typoglycemia"
//! effect: every word longer than three letters keeps its first and last
//! letter while its interior letters are shuffled, leaving the text oddly
//! readable.
//!
//! ## Features
//!
//! - Unicode-aware word handling (code points, not bytes)
//! - Leading/trailing punctuation stays in place
//! - Exact round-trip of line counts, word counts, and character counts
//! - Deterministic output with a fixed seed
//!
//! ## Example
//!
//! ```
//! use typogly::scrambler::Scrambler;
//!
//! let scrambler = Scrambler::with_seed(42);
//! let line = scrambler.process_line("hello (world)").unwrap();
//!
//! assert_eq!(line.chars().count(), "hello (world)".chars().count());
//! assert!(line.starts_with('h'));
//! assert!(line.ends_with(')'));
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod scrambler;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
