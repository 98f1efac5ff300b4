//! TF-IDF vectorizer
//!
//! Fit once on a corpus to build the [`VectorSpace`], then transform any text
//! into a vector of that space. Weights use smoothed inverse document
//! frequency, `ln((1 + n) / (1 + df)) + 1`, and every output vector is
//! L2-normalized.

use crate::tokenize::{is_english_stop_word, tokenize};
use crate::{Error, Result, Vector};
use ahash::AHashMap;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Stop-word list applied after tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopWords {
    #[default]
    English,
    None,
}

/// Configuration for a vectorizer
#[derive(Debug, Clone)]
pub struct VectorizerConfig {
    pub stop_words: StopWords,
    /// Tokens shorter than this many characters are ignored
    pub min_token_chars: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::English,
            min_token_chars: 2,
        }
    }
}

/// Fitted vocabulary and per-term IDF weights
#[derive(Debug, Clone)]
pub struct VectorSpace {
    // term -> dimension index
    vocabulary: AHashMap<String, usize>,
    // dimension index -> term, lexicographic order
    terms: Vec<String>,
    idf: Vec<f64>,
    num_docs: usize,
}

impl VectorSpace {
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|i| self.idf[i])
    }
}

/// TF-IDF vectorizer over a fixed vocabulary
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
    space: Option<VectorSpace>,
}

impl TfIdfVectorizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: VectorizerConfig) -> Self {
        Self {
            config,
            space: None,
        }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.space.is_some()
    }

    /// The fitted vector space, or `NotInitialized` before `fit`
    pub fn space(&self) -> Result<&VectorSpace> {
        self.space.as_ref().ok_or(Error::NotInitialized)
    }

    /// Tokenize and drop stop words
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let mut tokens = tokenize(text, self.config.min_token_chars);
        if self.config.stop_words == StopWords::English {
            tokens.retain(|t| !is_english_stop_word(t));
        }
        tokens
    }

    /// Build vocabulary and IDF weights from the corpus.
    ///
    /// Replaces any previously fitted space. An empty corpus is rejected; a
    /// corpus with no usable terms fits to a zero-dimensional space.
    pub fn fit<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<()> {
        if texts.is_empty() {
            return Err(Error::InvalidInput(
                "cannot fit vectorizer on an empty corpus".to_string(),
            ));
        }

        // term -> document frequency
        let mut term_dfs: AHashMap<String, u32> = AHashMap::new();
        for text in texts {
            let unique: BTreeSet<String> = self.analyze(text.as_ref()).into_iter().collect();
            for term in unique {
                *term_dfs.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<String> = term_dfs.keys().cloned().collect();
        terms.sort_unstable();

        let n = texts.len() as f64;
        let idf = terms
            .iter()
            .map(|t| {
                let df = f64::from(term_dfs.get(t).copied().unwrap_or(0));
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        self.space = Some(VectorSpace {
            vocabulary,
            terms,
            idf,
            num_docs: texts.len(),
        });
        Ok(())
    }

    /// Map each text into the fitted space. Output order matches input order.
    pub fn transform<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Vector>> {
        let space = self.space()?;
        Ok(texts
            .par_iter()
            .map(|text| self.vectorize(space, text.as_ref()))
            .collect())
    }

    pub fn transform_one(&self, text: &str) -> Result<Vector> {
        let space = self.space()?;
        Ok(self.vectorize(space, text))
    }

    /// Fit on the corpus, then transform that same corpus
    pub fn fit_transform<S: AsRef<str> + Sync>(&mut self, texts: &[S]) -> Result<Vec<Vector>> {
        self.fit(texts)?;
        self.transform(texts)
    }

    fn vectorize(&self, space: &VectorSpace, text: &str) -> Vector {
        // Unseen terms contribute nothing
        let mut term_freqs: AHashMap<usize, f64> = AHashMap::new();
        for token in self.analyze(text) {
            if let Some(i) = space.index_of(&token) {
                *term_freqs.entry(i).or_insert(0.0) += 1.0;
            }
        }

        let entries = term_freqs
            .into_iter()
            .map(|(i, tf)| (i, tf * space.idf[i]))
            .collect();

        let mut vector = Vector::new(space.dim(), entries);
        vector.normalize();
        vector
    }
}
