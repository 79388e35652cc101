//! Natural language collaborators
//!
//! Tokenization and part-of-speech tagging are consumed by the analysis
//! engines as black-box capabilities. This module provides the seam
//! ([`PosTagger`](tagger::PosTagger)) plus simple working defaults.

pub mod tagger;
pub mod tokenizer;
