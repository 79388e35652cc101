//! Core types shared across the crate
//!
//! Defines the part-of-speech tag vocabulary, tagged tokens produced by the
//! tagging collaborator, and scored phrases returned by the collocation
//! extractor.

use serde::{Deserialize, Serialize};

/// Part-of-speech tag, a closed vocabulary derived from the Penn Treebank
/// tagset.
///
/// Only the tags the collocation patterns care about get their own variants;
/// everything else collapses into the coarse `Verb`/`Adverb`/`Determiner`/
/// `Other` buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    /// Adjective (JJ)
    Adjective,
    /// Comparative adjective (JJR)
    AdjectiveComparative,
    /// Superlative adjective (JJS)
    AdjectiveSuperlative,
    /// Singular or mass noun (NN)
    Noun,
    /// Plural noun (NNS)
    NounPlural,
    /// Singular proper noun (NNP)
    ProperNoun,
    /// Plural proper noun (NNPS)
    ProperNounPlural,
    /// Preposition or subordinating conjunction (IN)
    Preposition,
    /// Any verb form
    Verb,
    /// Any adverb form
    Adverb,
    /// Determiner (DT)
    Determiner,
    /// Anything else
    Other,
}

impl PosTag {
    /// Check if this tag is any adjective variant
    pub fn is_adjective(&self) -> bool {
        matches!(
            self,
            PosTag::Adjective | PosTag::AdjectiveComparative | PosTag::AdjectiveSuperlative
        )
    }

    /// Check if this tag is any noun variant (common or proper, singular or
    /// plural)
    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::NounPlural | PosTag::ProperNoun | PosTag::ProperNounPlural
        )
    }

    /// Check if this tag is a preposition
    pub fn is_preposition(&self) -> bool {
        matches!(self, PosTag::Preposition)
    }

    /// Parse a Penn Treebank tag string
    ///
    /// Returns `None` for tags outside the recognized set.
    pub fn from_penn(tag: &str) -> Option<PosTag> {
        let parsed = match tag {
            "JJ" => PosTag::Adjective,
            "JJR" => PosTag::AdjectiveComparative,
            "JJS" => PosTag::AdjectiveSuperlative,
            "NN" => PosTag::Noun,
            "NNS" => PosTag::NounPlural,
            "NNP" => PosTag::ProperNoun,
            "NNPS" => PosTag::ProperNounPlural,
            "IN" => PosTag::Preposition,
            "DT" => PosTag::Determiner,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => PosTag::Verb,
            "RB" | "RBR" | "RBS" => PosTag::Adverb,
            _ => return None,
        };
        Some(parsed)
    }

    /// Canonical Penn Treebank spelling of this tag
    pub fn as_penn(&self) -> &'static str {
        match self {
            PosTag::Adjective => "JJ",
            PosTag::AdjectiveComparative => "JJR",
            PosTag::AdjectiveSuperlative => "JJS",
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Preposition => "IN",
            PosTag::Verb => "VB",
            PosTag::Adverb => "RB",
            PosTag::Determiner => "DT",
            PosTag::Other => "XX",
        }
    }
}

/// A token paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface text of the token
    pub text: String,
    /// Part-of-speech tag assigned by the tagger
    pub tag: PosTag,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// A phrase with its ranking score
///
/// The score's meaning depends on the producing method: a raw occurrence
/// count for frequency rankings, a t-statistic for significance rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPhrase {
    /// Space-joined phrase text
    pub text: String,
    /// Ranking score (higher is better)
    pub score: f64,
}

impl ScoredPhrase {
    /// Create a new scored phrase
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}
