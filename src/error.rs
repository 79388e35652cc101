//! Crate error types
//!
//! Invalid arguments fail fast; statistical degeneracies (untrained
//! classifier, empty corpus) never error and resolve to zero/empty results
//! instead.

use thiserror::Error;

/// Errors produced by the analysis engines
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Collocation extraction only supports bigrams and trigrams
    #[error("unsupported n-gram length {n}: only 2 and 3 word collocations are supported")]
    UnsupportedNgramLength {
        /// The rejected n-gram length
        n: usize,
    },
}

/// Convenience alias for crate results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_the_length() {
        let err = Error::UnsupportedNgramLength { n: 4 };
        assert!(err.to_string().contains('4'));
    }
}
