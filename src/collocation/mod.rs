//! Collocation extraction
//!
//! Finds contiguous bigrams and trigrams in a token sequence that are both
//! grammatically plausible (POS-pattern filter, see [`patterns`]) and
//! statistically notable, either by raw frequency or by a Student's-t
//! significance test against the word-independence null hypothesis.

pub mod patterns;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::nlp::tagger::PosTagger;
use crate::types::{ScoredPhrase, TaggedToken};

pub use self::patterns::{overlap, valid_collocation};

/// Default number of ranked collocations kept per extraction
pub const DEFAULT_TOP: usize = 100;

/// Student's-t critical value at 99% confidence
pub const T_CRITICAL_99: f64 = 2.576;

/// Share of combined occurrences above which a bigram counts as
/// distinguishing for one corpus half
const DISTINGUISHING_SHARE: f64 = 0.8;

/// Extracts ranked collocations from a tokenized corpus
///
/// The token sequence is fixed at construction; each extraction method
/// recomputes from scratch and overwrites the stored ranking for its n-gram
/// length, so repeated calls with unchanged tokens are idempotent.
#[derive(Debug, Clone)]
pub struct CollocationExtractor<T: PosTagger> {
    /// Input corpus, already tokenized
    tokens: Vec<String>,
    /// POS-tagging collaborator
    tagger: T,
    /// n-gram length → ranked phrases, populated lazily per extraction call
    results: FxHashMap<usize, Vec<ScoredPhrase>>,
}

impl<T: PosTagger> CollocationExtractor<T> {
    /// Create an extractor over an already-tokenized corpus
    pub fn new(tokens: Vec<String>, tagger: T) -> Self {
        Self {
            tokens,
            tagger,
            results: FxHashMap::default(),
        }
    }

    /// Create an extractor from raw text using the crate tokenizer
    pub fn from_text(text: &str, tagger: T) -> Self {
        let tokens = crate::nlp::tokenizer::Tokenizer::new().tokenize(text);
        Self::new(tokens, tagger)
    }

    /// The input token sequence
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Read back the stored ranking for an n-gram length, if one has been
    /// computed
    pub fn results(&self, n: usize) -> Option<&[ScoredPhrase]> {
        self.results.get(&n).map(Vec::as_slice)
    }

    /// Rank collocations by raw occurrence count
    ///
    /// Every contiguous n-gram passing the POS-pattern filter contributes
    /// one count to its space-joined phrase text. The `top` highest-count
    /// phrases are stored under `results[n]` and returned; ties are broken
    /// by ascending phrase text. Fails fast for n outside {2, 3}.
    pub fn frequency_collocations(&mut self, n: usize, top: usize) -> Result<&[ScoredPhrase]> {
        let tagged = self.tagger.tag(&self.tokens);
        let counts = count_valid_ngrams(&tagged, n)?;

        let ranked = rank_phrases(
            counts
                .into_iter()
                .map(|(phrase, count)| ScoredPhrase::new(phrase, count as f64)),
            top,
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(n, kept = ranked.len(), "ranked frequency collocations");

        Ok(self.store(n, ranked))
    }

    /// Rank bigrams by Student's-t significance
    ///
    /// Tests each distinct bigram against the null hypothesis that its two
    /// words co-occur by chance: `t = (sample − expected) / sqrt(sample / N)`
    /// where `sample` is the bigram's relative frequency, `expected` the
    /// product of the word relative frequencies, and `N` the number of
    /// distinct bigram types. Bigrams with `t ≥` [`T_CRITICAL_99`] that also
    /// pass the POS-pattern filter are ranked by t-value, stored under
    /// `results[2]`, and returned.
    ///
    /// The statistic references exactly two positions, so this path is
    /// bigram-only.
    pub fn t_squared_collocations(&mut self, top: usize) -> Result<&[ScoredPhrase]> {
        let tagged = self.tagger.tag(&self.tokens);

        // Bigram type frequencies, remembering the tags of the first
        // occurrence for the pattern filter
        let mut bigram_freqs: FxHashMap<String, (u64, usize)> = FxHashMap::default();
        for (position, window) in tagged.windows(2).enumerate() {
            let phrase = join_phrase(window);
            bigram_freqs
                .entry(phrase)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, position));
        }

        let mut word_freqs: FxHashMap<&str, u64> = FxHashMap::default();
        for token in &self.tokens {
            *word_freqs.entry(token.as_str()).or_insert(0) += 1;
        }

        let type_count = bigram_freqs.len() as f64;
        let mut significant = Vec::new();
        for (phrase, (freq, position)) in &bigram_freqs {
            let window = &tagged[*position..*position + 2];
            let sample = *freq as f64 / type_count;
            let expected = (word_freqs[window[0].text.as_str()] as f64 / type_count)
                * (word_freqs[window[1].text.as_str()] as f64 / type_count);
            let t = t_statistic(sample, expected, sample, type_count);

            if t >= T_CRITICAL_99 && valid_collocation(window, 2)? {
                significant.push(ScoredPhrase::new(phrase.clone(), t));
            }
        }

        let ranked = rank_phrases(significant.into_iter(), top);

        #[cfg(feature = "tracing")]
        tracing::debug!(kept = ranked.len(), "ranked t-test collocations");

        Ok(self.store(2, ranked))
    }

    fn store(&mut self, n: usize, ranked: Vec<ScoredPhrase>) -> &[ScoredPhrase] {
        self.results.insert(n, ranked);
        self.results[&n].as_slice()
    }
}

/// Find bigrams concentrated in one half of a split corpus
///
/// Splits `corpus` at `split`, ranks frequency bigrams independently for
/// each half (in parallel), and returns per half the phrases holding more
/// than 80% of their combined occurrences. Phrases appearing in only one
/// half are included unconditionally for that half. Each returned list is
/// sorted lexicographically.
pub fn distinguishing_terms<T>(
    corpus: &[String],
    split: usize,
    tagger: &T,
) -> Result<(Vec<String>, Vec<String>)>
where
    T: PosTagger + Sync,
{
    let split = split.min(corpus.len());
    let (first, second) = corpus.split_at(split);

    let (first_counts, second_counts) = rayon::join(
        || half_bigram_counts(first, tagger),
        || half_bigram_counts(second, tagger),
    );
    let first_counts = first_counts?;
    let second_counts = second_counts?;

    let one_sided = |own: &FxHashMap<String, f64>, other: &FxHashMap<String, f64>| {
        let mut phrases: Vec<String> = own
            .iter()
            .filter(|(phrase, count)| match other.get(*phrase) {
                Some(other_count) => **count / (**count + other_count) > DISTINGUISHING_SHARE,
                None => true,
            })
            .map(|(phrase, _)| phrase.clone())
            .collect();
        phrases.sort_unstable();
        phrases
    };

    Ok((
        one_sided(&first_counts, &second_counts),
        one_sided(&second_counts, &first_counts),
    ))
}

/// Top-ranked frequency bigram counts for one corpus half
fn half_bigram_counts<T: PosTagger>(
    tokens: &[String],
    tagger: &T,
) -> Result<FxHashMap<String, f64>> {
    let tagged = tagger.tag(tokens);
    let counts = count_valid_ngrams(&tagged, 2)?;
    let ranked = rank_phrases(
        counts
            .into_iter()
            .map(|(phrase, count)| ScoredPhrase::new(phrase, count as f64)),
        DEFAULT_TOP,
    );
    Ok(ranked
        .into_iter()
        .map(|phrase| (phrase.text, phrase.score))
        .collect())
}

/// Count every valid contiguous n-gram, keyed by space-joined phrase text
fn count_valid_ngrams(tagged: &[TaggedToken], n: usize) -> Result<FxHashMap<String, u64>> {
    if n != 2 && n != 3 {
        return Err(Error::UnsupportedNgramLength { n });
    }

    let mut counts: FxHashMap<String, u64> = FxHashMap::default();
    for window in tagged.windows(n) {
        if valid_collocation(window, n)? {
            *counts.entry(join_phrase(window)).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

/// Sort by score descending, break ties by ascending phrase text, keep `top`
fn rank_phrases(phrases: impl Iterator<Item = ScoredPhrase>, top: usize) -> Vec<ScoredPhrase> {
    let mut ranked: Vec<ScoredPhrase> = phrases.collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.text.cmp(&b.text))
    });
    ranked.truncate(top);
    ranked
}

fn join_phrase(window: &[TaggedToken]) -> String {
    window
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-sample Student's-t statistic
fn t_statistic(sample_mean: f64, dist_mean: f64, sample_variance: f64, sample_size: f64) -> f64 {
    (sample_mean - dist_mean) / (sample_variance / sample_size).sqrt()
}
