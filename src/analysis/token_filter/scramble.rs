//! Scramble filter implementation.
//!
//! This module holds the core of the typoglycemia transform. A word is split
//! into three contiguous regions — leading non-letter prefix, interior
//! letter run, trailing non-letter suffix — and only the letter run is
//! shuffled, keeping its first and last letter fixed:
//!
//! ```text
//! "(reading)," → prefix "("  core "reading"  suffix "),"
//!             → "("  +  "rdaeing"  +  "),"
//! ```
//!
//! All operations work on code points, never bytes, so multi-byte letters
//! such as Polish ą/ę/ć/ł/ń/ó/ś/ź/ż move as single units.
//!
//! # Examples
//!
//! ```
//! use typogly::analysis::token_filter::scramble::scramble_word;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let scrambled = scramble_word("(world)", &mut rng);
//!
//! assert!(scrambled.starts_with("(w"));
//! assert!(scrambled.ends_with("d)"));
//! assert_eq!(scrambled.chars().count(), 7);
//! ```

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Check whether a code point is a letter (Unicode categories Lu, Ll, Lt,
/// Lm, Lo).
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Find the code-point indices of the first and last letter in `chars`,
/// both inclusive. Returns `None` when the word contains no letter.
pub fn letter_span(chars: &[char]) -> Option<(usize, usize)> {
    let start = chars.iter().position(|&c| is_letter(c))?;
    let end = chars.iter().rposition(|&c| is_letter(c))?;
    Some((start, end))
}

/// Shuffle the interior of a letter run.
///
/// Words of three code points or fewer are returned unchanged. Longer words
/// keep their first and last code point while the interior is permuted
/// uniformly (Fisher–Yates, via [`SliceRandom::shuffle`]).
///
/// Operates on code points: a decomposed diacritic (base letter plus
/// combining mark) counts as two code points and may separate.
pub fn shuffle_interior<R: Rng + ?Sized>(core: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = core.chars().collect();
    if chars.len() <= 3 {
        return core.to_string();
    }

    let last = chars.len() - 1;
    chars[1..last].shuffle(rng);

    chars.into_iter().collect()
}

/// Scramble a single word, leaving non-letter prefix and suffix in place.
///
/// The word is scanned from the front for the first letter and from the back
/// for the last letter; everything between them (inclusive) is the letter
/// run handed to [`shuffle_interior`]. A word with no letters at all, and
/// the empty word, are returned unchanged.
pub fn scramble_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    if word.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = word.chars().collect();
    let Some((start, end)) = letter_span(&chars) else {
        return word.to_string();
    };

    let prefix: String = chars[..start].iter().collect();
    let core: String = chars[start..=end].iter().collect();
    let suffix: String = chars[end + 1..].iter().collect();

    let mut result = prefix;
    result.push_str(&shuffle_interior(&core, rng));
    result.push_str(&suffix);
    result
}

/// A filter that scrambles the interior letters of each token.
///
/// The RNG lives behind a mutex so the filter stays `Send + Sync` like the
/// rest of the pipeline. By default it is seeded from the OS; use
/// [`ScrambleFilter::with_seed`] for reproducible output.
#[derive(Debug)]
pub struct ScrambleFilter {
    rng: Mutex<StdRng>,
}

impl ScrambleFilter {
    /// Create a new scramble filter seeded from the operating system.
    pub fn new() -> Self {
        ScrambleFilter {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a scramble filter with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        ScrambleFilter {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for ScrambleFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for ScrambleFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut rng = self.rng.lock();
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_empty() {
                    token
                } else {
                    let scrambled = scramble_word(&token.text, &mut *rng);
                    token.with_text(scrambled)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "scramble"
    }
}
