//! POS-pattern filtering for collocation candidates
//!
//! A candidate n-gram qualifies only if it is grammatically plausible:
//! bigrams must look like adjective-noun or noun-noun compounds, trigrams
//! additionally allow a noun-preposition-noun bridge. Tokens carrying
//! punctuation and the stray possessive token `s` are rejected outright.

use crate::error::{Error, Result};
use crate::types::{PosTag, TaggedToken};

/// Punctuation characters that disqualify a token
pub const PUNCTUATION: &str = "!?\".-,:;";

/// Check whether any character of `str1` appears in `str2`
pub fn overlap(str1: &str, str2: &str) -> bool {
    str1.chars().any(|c| str2.contains(c))
}

/// Check a tagged n-gram against the collocation filter rules
///
/// Returns `Ok(true)` when the n-gram is a plausible collocation,
/// `Ok(false)` when any rejection rule fires, and
/// [`Error::UnsupportedNgramLength`] for n outside {2, 3}.
pub fn valid_collocation(ngram: &[TaggedToken], n: usize) -> Result<bool> {
    if n != 2 && n != 3 {
        return Err(Error::UnsupportedNgramLength { n });
    }
    if ngram.len() != n {
        return Ok(false);
    }

    for token in ngram {
        if overlap(&token.text, PUNCTUATION) {
            return Ok(false);
        }
    }
    // Some tokenizers split possessives into a bare "s" token
    for token in ngram {
        if token.text == "s" {
            return Ok(false);
        }
    }

    let valid = match n {
        2 => matches_bigram_pattern(ngram[0].tag, ngram[1].tag),
        3 => matches_trigram_pattern(ngram[0].tag, ngram[1].tag, ngram[2].tag),
        _ => unreachable!("n validated above"),
    };
    Ok(valid)
}

/// Allowed bigram shapes: (adjective | noun) followed by a noun
fn matches_bigram_pattern(first: PosTag, second: PosTag) -> bool {
    (first.is_adjective() || first.is_noun()) && second.is_noun()
}

/// Allowed trigram shapes: adj-adj-noun, adj-noun-noun, noun-adj-noun,
/// noun-noun-noun, noun-prep-noun
fn matches_trigram_pattern(first: PosTag, second: PosTag, third: PosTag) -> bool {
    if !third.is_noun() {
        return false;
    }
    if first.is_adjective() {
        second.is_adjective() || second.is_noun()
    } else if first.is_noun() {
        second.is_adjective() || second.is_noun() || second.is_preposition()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, PosTag)]) -> Vec<TaggedToken> {
        pairs
            .iter()
            .map(|(text, tag)| TaggedToken::new(*text, *tag))
            .collect()
    }

    #[test]
    fn test_overlap() {
        assert!(overlap("end.", PUNCTUATION));
        assert!(overlap("a-b", PUNCTUATION));
        assert!(!overlap("clean", PUNCTUATION));
        assert!(!overlap("", PUNCTUATION));
    }

    #[test]
    fn test_adjective_noun_bigram_accepted() {
        let ngram = tagged(&[("brown", PosTag::Adjective), ("fox", PosTag::Noun)]);
        assert_eq!(valid_collocation(&ngram, 2), Ok(true));
    }

    #[test]
    fn test_noun_noun_bigram_accepted() {
        let ngram = tagged(&[("machine", PosTag::Noun), ("learning", PosTag::Noun)]);
        assert_eq!(valid_collocation(&ngram, 2), Ok(true));
    }

    #[test]
    fn test_proper_and_plural_nouns_count_as_nouns() {
        let ngram = tagged(&[
            ("York", PosTag::ProperNoun),
            ("streets", PosTag::NounPlural),
        ]);
        assert_eq!(valid_collocation(&ngram, 2), Ok(true));
    }

    #[test]
    fn test_adjective_adjective_bigram_rejected() {
        let ngram = tagged(&[("quick", PosTag::Adjective), ("brown", PosTag::Adjective)]);
        assert_eq!(valid_collocation(&ngram, 2), Ok(false));
    }

    #[test]
    fn test_noun_verb_bigram_rejected() {
        let ngram = tagged(&[("fox", PosTag::Noun), ("jumps", PosTag::Verb)]);
        assert_eq!(valid_collocation(&ngram, 2), Ok(false));
    }

    #[test]
    fn test_punctuation_rejected() {
        let ngram = tagged(&[("brown", PosTag::Adjective), ("fox.", PosTag::Noun)]);
        assert_eq!(valid_collocation(&ngram, 2), Ok(false));
    }

    #[test]
    fn test_bare_s_token_rejected() {
        let ngram = tagged(&[("s", PosTag::Noun), ("fox", PosTag::Noun)]);
        assert_eq!(valid_collocation(&ngram, 2), Ok(false));
    }

    #[test]
    fn test_trigram_patterns() {
        let cases = [
            (
                [PosTag::Adjective, PosTag::Adjective, PosTag::Noun],
                true,
            ),
            ([PosTag::Adjective, PosTag::Noun, PosTag::Noun], true),
            ([PosTag::Noun, PosTag::Adjective, PosTag::Noun], true),
            ([PosTag::Noun, PosTag::Noun, PosTag::Noun], true),
            ([PosTag::Noun, PosTag::Preposition, PosTag::Noun], true),
            ([PosTag::Adjective, PosTag::Preposition, PosTag::Noun], false),
            ([PosTag::Preposition, PosTag::Noun, PosTag::Noun], false),
            ([PosTag::Noun, PosTag::Noun, PosTag::Verb], false),
            ([PosTag::Verb, PosTag::Noun, PosTag::Noun], false),
        ];

        for (tags, expected) in cases {
            let ngram = tagged(&[("a", tags[0]), ("b", tags[1]), ("c", tags[2])]);
            assert_eq!(
                valid_collocation(&ngram, 3),
                Ok(expected),
                "tags {tags:?}"
            );
        }
    }

    #[test]
    fn test_unsupported_lengths_fail_fast() {
        let ngram = tagged(&[("a", PosTag::Noun)]);
        assert_eq!(
            valid_collocation(&ngram, 1),
            Err(Error::UnsupportedNgramLength { n: 1 })
        );
        assert_eq!(
            valid_collocation(&ngram, 4),
            Err(Error::UnsupportedNgramLength { n: 4 })
        );
        assert_eq!(
            valid_collocation(&ngram, 0),
            Err(Error::UnsupportedNgramLength { n: 0 })
        );
    }

    #[test]
    fn test_length_mismatch_is_invalid_not_error() {
        let ngram = tagged(&[("machine", PosTag::Noun)]);
        assert_eq!(valid_collocation(&ngram, 2), Ok(false));
    }
}
