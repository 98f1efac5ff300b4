//! # ZapGenius Core
//!
//! Core library for the ZapGenius template recommender.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Template`] / [`Catalog`] - Strongly-typed automation templates normalized from JSON records
//! - [`TfIdfVectorizer`] - TF-IDF vectorizer fit once on the catalog
//! - [`VectorSpace`] - The fitted vocabulary and IDF weights
//! - [`Vector`] - Sparse term-weight vector with cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use zapgenius_core::{TfIdfVectorizer, Catalog};
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"title": "Slack Alert on New GitHub Issue"},
//!     {"title": "Save Gmail Attachments to Google Drive"}
//! ]"#).unwrap();
//!
//! let mut vectorizer = TfIdfVectorizer::new();
//! let templates = vectorizer.fit_transform(&catalog.display_names()).unwrap();
//! let query = vectorizer.transform_one("slack github issue").unwrap();
//!
//! assert!(query.cosine_similarity(&templates[0]) > query.cosine_similarity(&templates[1]));
//! ```

pub mod error;
pub mod template;
pub mod tfidf;
pub mod tokenize;
pub mod vector;

pub use error::{Error, Result};
pub use template::{Catalog, Template, UNTITLED};
pub use tfidf::{StopWords, TfIdfVectorizer, VectorSpace, VectorizerConfig};
pub use vector::Vector;
