//! Recommendation output records
//!
//! The serialized field names are the contract consumed by presentation
//! layers (CLI, dashboards).

use serde::{Deserialize, Serialize};
use zapgenius_core::Template;

/// One ranked template with its rounded score and business value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Catalog position of the template
    #[serde(skip)]
    pub index: usize,
    /// Template display name
    pub zap: String,
    pub description: String,
    pub apps_involved: Vec<String>,
    pub zapier_url: String,
    /// Similarity in [0, 1], rounded to 3 decimals
    pub score: f64,
    pub business_value: String,
}

impl RecommendationResult {
    pub fn new(index: usize, template: &Template, score: f64, business_value: &str) -> Self {
        Self {
            index,
            zap: template.name.clone(),
            description: template.description.clone(),
            apps_involved: template.apps_involved.clone(),
            zapier_url: template.reference_url.clone(),
            score: round_score(score),
            business_value: business_value.to_string(),
        }
    }
}

/// Clamp to [0, 1] and round to 3 decimal places
#[inline]
pub fn round_score(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    (score.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

/// Summary statistics for a recommendation query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationStats {
    /// Number of templates scored
    pub candidates_count: usize,
    pub results_count: usize,
    pub avg_score: f64,
    pub best_score: f64,
}

impl RecommendationStats {
    pub fn compute(results: &[RecommendationResult], candidates_count: usize) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
            };
        }

        let avg_score = results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64;
        let best_score = results.iter().map(|r| r.score).fold(0.0f64, f64::max);

        Self {
            candidates_count,
            results_count: results.len(),
            avg_score,
            best_score,
        }
    }
}

/// Results plus summary, as returned to API-style callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendResponse {
    pub result: Vec<RecommendationResult>,
    pub stats: RecommendationStats,
}

impl RecommendResponse {
    pub fn new(result: Vec<RecommendationResult>, candidates_count: usize) -> Self {
        let stats = RecommendationStats::compute(&result, candidates_count);
        Self { result, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_result(name: &str, score: f64) -> RecommendationResult {
        let template = Template::new(name)
            .with_description("desc")
            .with_apps(["Slack"])
            .with_reference_url("https://zapier.com/x");
        RecommendationResult::new(0, &template, score, "value")
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(0.12345), 0.123);
        assert_eq!(round_score(0.9996), 1.0);
        assert_eq!(round_score(1.0000002), 1.0);
        assert_eq!(round_score(-0.0001), 0.0);
        assert_eq!(round_score(f64::NAN), 0.0);
    }

    #[test]
    fn test_result_serialization_keys() {
        let result = create_test_result("Slack Alert", 0.5);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["zap"], "Slack Alert");
        assert_eq!(json["description"], "desc");
        assert_eq!(json["apps_involved"][0], "Slack");
        assert_eq!(json["zapier_url"], "https://zapier.com/x");
        assert_eq!(json["score"], 0.5);
        assert_eq!(json["business_value"], "value");
        assert!(json.get("index").is_none());
    }

    #[test]
    fn test_stats() {
        let results = vec![
            create_test_result("a", 0.9),
            create_test_result("b", 0.6),
            create_test_result("c", 0.3),
        ];
        let stats = RecommendationStats::compute(&results, 10);

        assert_eq!(stats.candidates_count, 10);
        assert_eq!(stats.results_count, 3);
        assert_eq!(stats.best_score, 0.9);
        assert!((stats.avg_score - 0.6).abs() < 1e-3);
    }

    #[test]
    fn test_empty_stats() {
        let stats = RecommendationStats::compute(&[], 5);
        assert_eq!(stats.results_count, 0);
        assert_eq!(stats.best_score, 0.0);
    }

    #[test]
    fn test_response_serialization() {
        let response = RecommendResponse::new(vec![create_test_result("a", 0.9)], 4);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"result\""));
        assert!(json.contains("\"stats\""));
    }
}
