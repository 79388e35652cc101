//! Part-of-speech tagging seam
//!
//! The collocation extractor consumes tagging through the [`PosTagger`]
//! trait so any backend (lexicon lookup, statistical tagger, precomputed
//! annotations) can be plugged in. [`LexiconTagger`] is the built-in
//! context-free implementation.

use rustc_hash::FxHashMap;

use crate::types::{PosTag, TaggedToken};

/// A part-of-speech tagging backend
///
/// # Contract
///
/// - **Input**: an ordered token sequence.
/// - **Output**: one [`TaggedToken`] per input token, in the same order.
/// - Implementations must tag every token; use a fallback tag rather than
///   dropping tokens.
pub trait PosTagger {
    /// Annotate a token sequence with part-of-speech tags
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

/// Context-free lexicon tagger
///
/// Looks each token up in an owned word→tag table (case-insensitive) and
/// falls back to a configurable default tag for unknown words. The noun
/// default follows the usual convention for baseline taggers.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    /// Lowercased word → tag table
    lexicon: FxHashMap<String, PosTag>,
    /// Tag assigned to words missing from the lexicon
    default_tag: PosTag,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    /// Create an empty tagger (every word gets the default tag)
    pub fn new() -> Self {
        Self {
            lexicon: FxHashMap::default(),
            default_tag: PosTag::Noun,
        }
    }

    /// Create a tagger from (word, tag) entries
    pub fn from_entries(entries: &[(&str, PosTag)]) -> Self {
        let lexicon = entries
            .iter()
            .map(|(word, tag)| (word.to_lowercase(), *tag))
            .collect();
        Self {
            lexicon,
            default_tag: PosTag::Noun,
        }
    }

    /// Set the tag assigned to unknown words
    pub fn with_default_tag(mut self, tag: PosTag) -> Self {
        self.default_tag = tag;
        self
    }

    /// Add or replace a lexicon entry
    pub fn insert(&mut self, word: &str, tag: PosTag) {
        self.lexicon.insert(word.to_lowercase(), tag);
    }

    /// Number of lexicon entries
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// Check if the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Look up the tag for a single word
    pub fn lookup(&self, word: &str) -> PosTag {
        self.lexicon
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(self.default_tag)
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|token| TaggedToken::new(token.clone(), self.lookup(token)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_lookup() {
        let tagger = LexiconTagger::from_entries(&[
            ("quick", PosTag::Adjective),
            ("fox", PosTag::Noun),
            ("jumps", PosTag::Verb),
        ]);

        assert_eq!(tagger.lookup("quick"), PosTag::Adjective);
        assert_eq!(tagger.lookup("fox"), PosTag::Noun);
        assert_eq!(tagger.lookup("jumps"), PosTag::Verb);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let tagger = LexiconTagger::from_entries(&[("york", PosTag::ProperNoun)]);
        assert_eq!(tagger.lookup("York"), PosTag::ProperNoun);
        assert_eq!(tagger.lookup("YORK"), PosTag::ProperNoun);
    }

    #[test]
    fn test_unknown_words_default_to_noun() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.lookup("flibbertigibbet"), PosTag::Noun);
    }

    #[test]
    fn test_custom_default_tag() {
        let tagger = LexiconTagger::new().with_default_tag(PosTag::Other);
        assert_eq!(tagger.lookup("anything"), PosTag::Other);
    }

    #[test]
    fn test_tag_preserves_order_and_length() {
        let tagger = LexiconTagger::from_entries(&[("brown", PosTag::Adjective)]);
        let tokens: Vec<String> = ["quick", "brown", "fox"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let tagged = tagger.tag(&tokens);

        assert_eq!(tagged.len(), 3);
        assert_eq!(tagged[0].text, "quick");
        assert_eq!(tagged[1].tag, PosTag::Adjective);
        assert_eq!(tagged[2].text, "fox");
    }

    #[test]
    fn test_insert_overrides() {
        let mut tagger = LexiconTagger::from_entries(&[("light", PosTag::Noun)]);
        tagger.insert("light", PosTag::Adjective);
        assert_eq!(tagger.lookup("light"), PosTag::Adjective);
    }
}
