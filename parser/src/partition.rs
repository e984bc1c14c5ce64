//! Token classification.
//!
//! A [`Partition`] is built once from the raw tokens and then consumed by
//! the binding calls. Classification is purely syntactic: it never looks at
//! what has been declared, so declarations can be made in any order
//! relative to the input.
//!
//! Token indices are positions in the post-program-name token list. Claims
//! are destructive: an index handed out by [`Partition::get_and_pop_pos`],
//! [`Partition::pop_first`] or [`Partition::drain`] is never available
//! again, and [`Partition::take_supplied`] removes a key's occurrences.

use std::collections::{BTreeMap, BTreeSet};

use clarg_core::{Error, key_display};
use tracing::debug;

/// How one token was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Skipped,
    Terminator,
    Shorts,
    Long,
    Positional,
}

/// Classified input tokens.
///
/// # Examples
///
/// ```
/// use clarg::Partition;
///
/// let (mut partition, err) = Partition::classify(
///     ["-vvv", "--output", "foo.bin", "--", "-x", "pos1"].map(String::from).to_vec(),
///     "--",
/// );
/// assert!(err.is_none());
/// assert_eq!(partition.supplied("v"), Some(&[0, 0, 0][..]));
/// assert_eq!(partition.get_and_pop_pos(1), Some(2));
/// assert_eq!(partition.drain(), vec![4, 5]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Partition {
    tokens: Vec<String>,
    supplied: BTreeMap<String, Vec<usize>>,
    available: BTreeSet<usize>,
    skipped: BTreeSet<usize>,
}

impl Partition {
    /// Classifies `tokens` in a single left-to-right pass.
    ///
    /// - Zero-length tokens are skipped.
    /// - Every token equal to `terminator` is dropped. After the first one,
    ///   every other token is positional.
    /// - `-abc` supplies the short keys `a`, `b` and `c`, each with this
    ///   token's index.
    /// - `--name` supplies the long key `name`.
    /// - Anything else is positional.
    ///
    /// A long option is always followed by its value, so one in the last
    /// position stops classification and is reported as
    /// [`Error::MissingValue`] alongside the partition built so far.
    pub fn classify(tokens: Vec<String>, terminator: &str) -> (Self, Option<Error>) {
        let mut partition = Self {
            tokens,
            ..Self::default()
        };
        let mut terminated = false;
        let last = partition.tokens.len().saturating_sub(1);

        for index in 0..partition.tokens.len() {
            let token = partition.tokens[index].as_str();
            let class = if token.is_empty() {
                Class::Skipped
            } else if token == terminator {
                Class::Terminator
            } else if terminated {
                Class::Positional
            } else if is_long(token) {
                Class::Long
            } else if is_short(token) {
                Class::Shorts
            } else {
                Class::Positional
            };
            debug!(index, token, class = ?class, "Classified token");

            match class {
                Class::Skipped => {
                    partition.skipped.insert(index);
                }
                Class::Terminator => terminated = true,
                Class::Positional => {
                    partition.available.insert(index);
                }
                Class::Shorts => {
                    let keys: Vec<String> = token.chars().skip(1).map(String::from).collect();
                    for key in keys {
                        partition.supplied.entry(key).or_default().push(index);
                    }
                }
                Class::Long => {
                    let key = token[2..].to_string();
                    if index == last {
                        let err = Error::MissingValue(key_display(None, Some(&key)));
                        return (partition, Some(err));
                    }
                    partition.supplied.entry(key).or_default().push(index);
                }
            }
        }

        debug!(
            keys = partition.supplied.len(),
            positionals = partition.available.len(),
            "Partitioned arguments"
        );
        (partition, None)
    }

    /// Removes and returns the occurrences of `key`; `None` when the key
    /// was never supplied.
    pub fn take_supplied(&mut self, key: &str) -> Option<Vec<usize>> {
        self.supplied.remove(key).filter(|indices| !indices.is_empty())
    }

    /// Occurrences of `key` that have not been taken.
    pub fn supplied(&self, key: &str) -> Option<&[usize]> {
        self.supplied.get(key).map(Vec::as_slice)
    }

    /// Claims the value slot of the option at `index`.
    ///
    /// The value is the smallest available index after `index`, and it must
    /// be the immediate next token: only skipped zero-length tokens may sit
    /// in between. Returns `None` (and claims nothing) otherwise.
    pub fn get_and_pop_pos(&mut self, index: usize) -> Option<usize> {
        let next = *self.available.range(index + 1..).next()?;
        if !(index + 1..next).all(|between| self.skipped.contains(&between)) {
            return None;
        }
        self.available.remove(&next);
        Some(next)
    }

    /// Claims the earliest available index.
    pub fn pop_first(&mut self) -> Option<usize> {
        self.available.pop_first()
    }

    /// Claims every available index, ascending.
    pub fn drain(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.available).into_iter().collect()
    }

    /// Number of available (unclaimed positional) indices.
    pub fn unclaimed(&self) -> usize {
        self.available.len()
    }

    /// Returns `true` if `index` is available.
    pub fn is_available(&self, index: usize) -> bool {
        self.available.contains(&index)
    }

    /// The raw token at `index`.
    pub fn token(&self, index: usize) -> &str {
        self.tokens.get(index).map_or("", String::as_str)
    }

    /// All input tokens, program name excluded.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

fn is_short(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && chars.next().is_some_and(|c| c != '-')
}

fn is_long(token: &str) -> bool {
    token.starts_with("--") && token.len() >= 3
}
