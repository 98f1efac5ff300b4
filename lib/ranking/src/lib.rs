//! # ZapGenius Ranking
//!
//! Ranks catalog templates against a free-text task description.
//!
//! ## Overview
//!
//! 1. The engine fits a TF-IDF vectorizer on template display names
//! 2. Template vectors are computed once and kept co-indexed with the catalog
//! 3. Each query is vectorized in the same space and scored by cosine similarity
//! 4. Results are sorted (stable), truncated to `top_k` and explained
//!
//! ## Example
//!
//! ```rust
//! use zapgenius_ranking::RankingEngine;
//! use zapgenius_core::TfIdfVectorizer;
//! use serde_json::json;
//!
//! let engine = RankingEngine::from_records(TfIdfVectorizer::new(), &[
//!     json!({"title": "Slack Alert on New GitHub Issue"}),
//!     json!({"title": "Save Gmail Attachments to Google Drive"}),
//! ]).unwrap();
//!
//! let results = engine.recommend("notify team in slack when github issue opens", 5).unwrap();
//! assert_eq!(results[0].zap, "Slack Alert on New GitHub Issue");
//! assert_eq!(results[0].business_value, "Instant team visibility and faster response");
//! ```
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│  Vectorizer │────>│  Template   │
//! │  (records)  │     │    (fit)    │     │   vectors   │
//! └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                │
//!        query ──> transform ──> cosine ──> stable top-k
//!                                                │
//!                                         ┌──────┴──────┐
//!                                         │  Explained  │
//!                                         │   Results   │
//!                                         └─────────────┘
//! ```

pub mod business_value;
pub mod engine;
pub mod handle;
pub mod query;
pub mod result;

pub use business_value::{explain_business_value, BusinessValueRule, FALLBACK_EXPLANATION, RULES};
pub use engine::{EngineConfig, RankingEngine};
pub use handle::EngineHandle;
pub use query::Query;
pub use result::{round_score, RecommendResponse, RecommendationResult, RecommendationStats};
