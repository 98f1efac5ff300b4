//! # ZapGenius
//!
//! Recommends automation templates ("zaps") from a free-text description of
//! a repetitive task.
//!
//! ZapGenius fits a TF-IDF space on the template catalog, scores each query by
//! cosine similarity, returns the top matches in a stable order and explains
//! each one with a rule-based business-value line.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! zapgenius --catalog zaps/zap_database.json "save email attachments to google drive"
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use zapgenius::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Template::new("Slack Alert on New GitHub Issue"),
//!     Template::new("Save Gmail Attachments to Google Drive"),
//! ]);
//! let engine = RankingEngine::new(TfIdfVectorizer::new(), catalog).unwrap();
//!
//! let results = engine.recommend(["gmail attachments", "google drive"], 1).unwrap();
//! assert_eq!(results[0].zap, "Save Gmail Attachments to Google Drive");
//! ```
//!
//! ## Crate Structure
//!
//! - `zapgenius-core` - Templates, catalog normalization, TF-IDF vectorizer, vectors
//! - `zapgenius-ranking` - Ranking engine, business-value rules, engine handle
//! - `zapgenius` - Usage-data extraction, result views and the CLI

pub mod usage;
pub mod view;

// Re-export core types
pub use zapgenius_core::{
    Catalog, Error, Result, StopWords, Template, TfIdfVectorizer, Vector, VectorSpace,
    VectorizerConfig,
};

// Re-export ranking
pub use zapgenius_ranking::{
    explain_business_value, EngineConfig, EngineHandle, Query, RankingEngine, RecommendResponse,
    RecommendationResult, RecommendationStats,
};

pub use view::{ResultView, SortBy};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, Template, TfIdfVectorizer, VectorizerConfig,
        RankingEngine, EngineConfig, EngineHandle, Query, RecommendationResult,
        ResultView, SortBy,
        Error, Result,
    };
}
