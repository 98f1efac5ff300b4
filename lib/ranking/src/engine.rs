//! Ranking engine
//!
//! Fits the vectorizer on template display names once at construction and
//! keeps the template vectors co-indexed with the catalog. Queries are
//! scored by cosine similarity against every template, sorted descending with
//! ties kept in catalog order, truncated to `top_k` and annotated with a
//! business-value explanation.
//!
//! The engine is immutable after construction. To load a different catalog,
//! build a new engine (see [`crate::EngineHandle`]).

use crate::business_value::explain_business_value;
use crate::query::Query;
use crate::result::{RecommendResponse, RecommendationResult};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde_json::Value;
use std::cmp::Reverse;
use std::path::Path;
use tracing::debug;
use zapgenius_core::{
    Catalog, Error, Result, TfIdfVectorizer, Vector, VectorSpace,
    VectorizerConfig,
};

/// Scores are compared at this resolution when ranking, so summation-order
/// noise never breaks a tie between mathematically equal scores
const RANK_SCALE: f64 = 1e6;

#[inline]
fn rank_key(score: f64) -> Reverse<OrderedFloat<f64>> {
    Reverse(OrderedFloat((score * RANK_SCALE).round()))
}

/// Configuration for a ranking engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Result count used by [`RankingEngine::recommend_default`]
    pub default_top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { default_top_k: 10 }
    }
}

/// Immutable catalog + fitted vector space + precomputed template vectors
#[derive(Debug, Clone)]
pub struct RankingEngine {
    config: EngineConfig,
    catalog: Catalog,
    vectorizer: TfIdfVectorizer,
    // co-indexed with catalog
    template_vectors: Vec<Vector>,
}

impl RankingEngine {
    pub fn new(vectorizer: TfIdfVectorizer, catalog: Catalog) -> Result<Self> {
        Self::with_config(vectorizer, catalog, EngineConfig::default())
    }

    pub fn with_config(
        mut vectorizer: TfIdfVectorizer,
        catalog: Catalog,
        config: EngineConfig,
    ) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let names = catalog.display_names();
        let template_vectors = vectorizer.fit_transform(&names)?;

        debug!(
            templates = catalog.len(),
            vocabulary = vectorizer.space()?.dim(),
            "ranking engine built"
        );

        Ok(Self {
            config,
            catalog,
            vectorizer,
            template_vectors,
        })
    }

    /// Build from already-parsed catalog records
    pub fn from_records(vectorizer: TfIdfVectorizer, records: &[Value]) -> Result<Self> {
        Self::new(vectorizer, Catalog::from_records(records)?)
    }

    /// Build from a JSON catalog file
    pub fn from_path(vectorizer: TfIdfVectorizer, path: impl AsRef<Path>) -> Result<Self> {
        Self::new(vectorizer, Catalog::from_path(path)?)
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn vectorizer_config(&self) -> &VectorizerConfig {
        self.vectorizer.config()
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Always false: construction rejects empty catalogs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn vector_space(&self) -> Result<&VectorSpace> {
        self.vectorizer.space()
    }

    #[inline]
    pub fn template_vectors(&self) -> &[Vector] {
        &self.template_vectors
    }

    /// Raw similarity of `text` to every template, in catalog order, clamped to [0, 1]
    pub fn score(&self, text: &str) -> Result<Vec<f64>> {
        let query = self.vectorizer.transform_one(text)?;
        Ok(self
            .template_vectors
            .par_iter()
            .map(|template| query.cosine_similarity(template).clamp(0.0, 1.0))
            .collect())
    }

    /// Top-`top_k` templates for the query, best first
    pub fn recommend(&self, query: impl Into<Query>, top_k: usize) -> Result<Vec<RecommendationResult>> {
        if top_k == 0 {
            return Err(Error::InvalidInput("top_k must be a positive integer".to_string()));
        }

        let text = query.into().to_text();
        let scores = self.score(&text)?;

        // Stable sort: ties keep catalog order
        let mut ranked: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
        ranked.sort_by_key(|&(_, score)| rank_key(score));
        ranked.truncate(top_k);

        let results: Vec<RecommendationResult> = ranked
            .into_iter()
            .filter_map(|(index, score)| {
                self.catalog.get(index).map(|template| {
                    RecommendationResult::new(
                        index,
                        template,
                        score,
                        explain_business_value(&template.name),
                    )
                })
            })
            .collect();

        debug!(query = %text, results = results.len(), "recommend");
        Ok(results)
    }

    /// Like [`recommend`](Self::recommend) for a loosely-typed JSON query
    pub fn recommend_value(&self, query: &Value, top_k: usize) -> Result<Vec<RecommendationResult>> {
        self.recommend(Query::from_value(query)?, top_k)
    }

    /// Recommend with the configured default result count
    pub fn recommend_default(&self, query: impl Into<Query>) -> Result<Vec<RecommendationResult>> {
        self.recommend(query, self.config.default_top_k)
    }

    /// Recommend and attach summary statistics
    pub fn recommend_response(&self, query: impl Into<Query>, top_k: usize) -> Result<RecommendResponse> {
        let results = self.recommend(query, top_k)?;
        Ok(RecommendResponse::new(results, self.len()))
    }
}
