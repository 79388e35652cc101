//! Statistical text-analysis engines
//!
//! Two independent components:
//!
//! - [`Classifier`] — a bag-of-words probabilistic document classifier in
//!   the naive-Bayes family. Feed it tokenized documents with labels via
//!   [`Classifier::train`], then rank labels for unseen documents with
//!   [`Classifier::classify`].
//! - [`CollocationExtractor`] — finds statistically or frequency-significant
//!   two- and three-word phrases in a token sequence, filtered by
//!   part-of-speech patterns.
//!
//! Tokenization and POS tagging are collaborator capabilities: the engines
//! consume them through [`nlp::tokenizer::Tokenizer`] and the
//! [`nlp::tagger::PosTagger`] trait.
//!
//! # Example
//!
//! ```
//! use nlp_stats::{Classifier, DEFAULT_CLASSIFY_LIMIT};
//!
//! let mut classifier = Classifier::new();
//! classifier.train(&["money", "free"], &["spam"]);
//! classifier.train(&["hello", "friend"], &["ham"]);
//!
//! let ranking = classifier.classify(&["money", "free"], DEFAULT_CLASSIFY_LIMIT);
//! assert_eq!(ranking[0].0, "spam");
//! ```

pub mod classifier;
pub mod collocation;
pub mod error;
pub mod nlp;
pub mod types;

pub use classifier::{Classifier, Smoothing, DEFAULT_CLASSIFY_LIMIT};
pub use collocation::{distinguishing_terms, CollocationExtractor, DEFAULT_TOP, T_CRITICAL_99};
pub use error::{Error, Result};
pub use types::{PosTag, ScoredPhrase, TaggedToken};
