//! Naive-Bayes-style document classifier
//!
//! Accumulates co-occurrence counts between textual features and categorical
//! labels, then scores unseen documents against every learned label under a
//! bag-of-features independence assumption. Raw per-feature estimates are
//! smoothed toward an assumed prior so rarely-seen features cannot dominate
//! the product.
//!
//! An untrained classifier never fails: probabilities resolve to `0` and
//! [`Classifier::classify`] returns an empty ranking. Callers should read a
//! zero score as "no evidence", not as an error.

use rustc_hash::FxHashMap;

/// Default number of ranked labels returned by [`Classifier::classify`]
pub const DEFAULT_CLASSIFY_LIMIT: usize = 5;

/// Smoothing parameters for [`Classifier::weighted_probability`]
///
/// `prior` is the assumed probability of a feature/label association before
/// any evidence; `weight` controls how much evidence it takes to move away
/// from the prior. The defaults (weight 1.0, prior 0.5) treat every feature
/// as one imaginary occurrence split evenly across labels.
#[derive(Debug, Clone, Copy)]
pub struct Smoothing {
    /// Strength of the prior, in units of feature occurrences
    pub weight: f64,
    /// Assumed probability before any evidence
    pub prior: f64,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            weight: 1.0,
            prior: 0.5,
        }
    }
}

/// Bag-of-words probabilistic classifier
///
/// All counters start at zero and only ever increase; there is no untraining
/// or decay. Absent entries read as zero without being materialized, so
/// read-only queries never grow the tables.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    /// feature → total occurrences across all training calls
    feature_totals: FxHashMap<String, u64>,
    /// label → number of training documents carrying it
    label_totals: FxHashMap<String, u64>,
    /// feature → label → co-occurrence count
    feature_label_counts: FxHashMap<String, FxHashMap<String, u64>>,
    /// Total number of training calls
    document_count: u64,
    smoothing: Smoothing,
}

impl Classifier {
    /// Create an empty classifier with default smoothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smoothing weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.smoothing.weight = weight;
        self
    }

    /// Set the smoothing prior
    pub fn with_prior(mut self, prior: f64) -> Self {
        self.smoothing.prior = prior;
        self
    }

    /// Record one training document
    ///
    /// Every label in `labels` is credited with the full feature list. The
    /// document counter advances once per call regardless of how many labels
    /// are given. Empty `features` or `labels` is a no-op along that
    /// dimension.
    pub fn train<F, L>(&mut self, features: &[F], labels: &[L])
    where
        F: AsRef<str>,
        L: AsRef<str>,
    {
        for label in labels {
            let label = label.as_ref();
            for feature in features {
                let feature = feature.as_ref();
                *self
                    .feature_label_counts
                    .entry(feature.to_string())
                    .or_default()
                    .entry(label.to_string())
                    .or_insert(0) += 1;
                *self.feature_totals.entry(feature.to_string()).or_insert(0) += 1;
            }
            *self.label_totals.entry(label.to_string()).or_insert(0) += 1;
        }
        self.document_count += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            features = features.len(),
            labels = labels.len(),
            documents = self.document_count,
            "trained document"
        );
    }

    /// Maximum-likelihood estimate of P(feature | label)
    ///
    /// `feature_label_counts[feature][label] / label_totals[label]`, or `0`
    /// when either count is zero.
    pub fn feature_probability(&self, feature: &str, label: &str) -> f64 {
        let feature_count = self.feature_label_count(feature, label);
        let label_count = self.label_count(label);
        if feature_count > 0 && label_count > 0 {
            feature_count as f64 / label_count as f64
        } else {
            0.0
        }
    }

    /// Smoothed estimate of P(feature | label)
    ///
    /// Pulls the raw estimate toward the configured prior when the feature
    /// has little overall evidence, converging to the raw estimate as total
    /// occurrences grow. A never-seen feature scores exactly the prior.
    pub fn weighted_probability(&self, feature: &str, label: &str) -> f64 {
        let Smoothing { weight, prior } = self.smoothing;
        let raw = self.feature_probability(feature, label);
        let total = self.feature_count(feature) as f64;
        (weight * prior + total * raw) / (weight + total)
    }

    /// Joint probability of a feature list under a label
    ///
    /// Product of smoothed per-feature probabilities. Accumulated as a sum
    /// of logs so long documents cannot underflow; a zero factor
    /// short-circuits the whole product to zero.
    pub fn document_probability<F: AsRef<str>>(&self, features: &[F], label: &str) -> f64 {
        let mut log_sum = 0.0;
        for feature in features {
            let p = self.weighted_probability(feature.as_ref(), label);
            if p <= 0.0 {
                return 0.0;
            }
            log_sum += p.ln();
        }
        log_sum.exp()
    }

    /// Unnormalized posterior P(label | features)
    ///
    /// Document probability times the label's training prior. Zero when no
    /// documents have been trained.
    pub fn probability<F: AsRef<str>>(&self, features: &[F], label: &str) -> f64 {
        if self.document_count == 0 {
            return 0.0;
        }
        let label_prior = self.label_count(label) as f64 / self.document_count as f64;
        self.document_probability(features, label) * label_prior
    }

    /// Rank all learned labels against a document
    ///
    /// Returns `(label, score)` pairs sorted by score descending, ties
    /// broken by ascending label text, truncated to `limit`. An untrained
    /// classifier yields an empty ranking.
    pub fn classify<F: AsRef<str>>(&self, features: &[F], limit: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .label_totals
            .keys()
            .map(|label| (label.clone(), self.probability(features, label)))
            .collect();

        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(limit);
        ranked
    }

    /// Total number of training calls
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    /// Number of training documents carrying a label (0 if never seen)
    pub fn label_count(&self, label: &str) -> u64 {
        self.label_totals.get(label).copied().unwrap_or(0)
    }

    /// Total occurrences of a feature across all training (0 if never seen)
    pub fn feature_count(&self, feature: &str) -> u64 {
        self.feature_totals.get(feature).copied().unwrap_or(0)
    }

    /// Iterate over all labels seen in training
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.label_totals.keys().map(String::as_str)
    }

    /// Check if the classifier has never been trained
    pub fn is_empty(&self) -> bool {
        self.document_count == 0
    }

    fn feature_label_count(&self, feature: &str, label: &str) -> u64 {
        self.feature_label_counts
            .get(feature)
            .and_then(|by_label| by_label.get(label))
            .copied()
            .unwrap_or(0)
    }
}
