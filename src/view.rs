//! Presentation-side filtering and ordering of recommendation results

use clap::ValueEnum;
use zapgenius_ranking::RecommendationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortBy {
    /// Engine order
    #[default]
    Relevance,
    ScoreDesc,
    ScoreAsc,
    #[value(name = "az")]
    AZ,
    #[value(name = "za")]
    ZA,
}

#[derive(Debug, Clone, Default)]
pub struct ResultView {
    pub min_score: f64,
    /// Case-insensitive substring of the name or app list
    pub filter: Option<String>,
    pub sort: SortBy,
}

impl ResultView {
    pub fn apply(&self, results: Vec<RecommendationResult>) -> Vec<RecommendationResult> {
        let needle = self
            .filter
            .as_deref()
            .map(str::to_lowercase)
            .filter(|f| !f.is_empty());

        let mut results: Vec<RecommendationResult> = results
            .into_iter()
            .filter(|r| r.score >= self.min_score)
            .filter(|r| needle.as_deref().map_or(true, |n| matches_filter(r, n)))
            .collect();

        match self.sort {
            SortBy::Relevance => {}
            SortBy::ScoreDesc => results.sort_by(|a, b| b.score.total_cmp(&a.score)),
            SortBy::ScoreAsc => results.sort_by(|a, b| a.score.total_cmp(&b.score)),
            SortBy::AZ => results.sort_by_cached_key(|r| r.zap.to_lowercase()),
            SortBy::ZA => {
                results.sort_by_cached_key(|r| std::cmp::Reverse(r.zap.to_lowercase()))
            }
        }
        results
    }
}

fn matches_filter(result: &RecommendationResult, needle: &str) -> bool {
    result.zap.to_lowercase().contains(needle)
        || result.apps_involved.join(" ").to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zapgenius_core::Template;

    fn results() -> Vec<RecommendationResult> {
        vec![
            RecommendationResult::new(0, &Template::new("beta sync").with_apps(["Slack"]), 0.9, "v"),
            RecommendationResult::new(1, &Template::new("Alpha backup").with_apps(["Dropbox"]), 0.5, "v"),
            RecommendationResult::new(2, &Template::new("gamma digest"), 0.1, "v"),
        ]
    }

    fn names(results: &[RecommendationResult]) -> Vec<&str> {
        results.iter().map(|r| r.zap.as_str()).collect()
    }

    #[test]
    fn test_default_view_is_identity() {
        assert_eq!(ResultView::default().apply(results()), results());
    }

    #[test]
    fn test_min_score() {
        let view = ResultView { min_score: 0.5, ..Default::default() };
        assert_eq!(names(&view.apply(results())), vec!["beta sync", "Alpha backup"]);
    }

    #[test]
    fn test_filter_by_name_or_app() {
        let view = ResultView { filter: Some("SLACK".into()), ..Default::default() };
        assert_eq!(names(&view.apply(results())), vec!["beta sync"]);

        let view = ResultView { filter: Some("digest".into()), ..Default::default() };
        assert_eq!(names(&view.apply(results())), vec!["gamma digest"]);

        let view = ResultView { filter: Some(String::new()), ..Default::default() };
        assert_eq!(view.apply(results()).len(), 3);
    }

    #[test]
    fn test_sorts() {
        let sorted = |sort| names(&ResultView { sort, ..Default::default() }.apply(results()))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        assert_eq!(sorted(SortBy::ScoreAsc), vec!["gamma digest", "Alpha backup", "beta sync"]);
        assert_eq!(sorted(SortBy::ScoreDesc), vec!["beta sync", "Alpha backup", "gamma digest"]);
        assert_eq!(sorted(SortBy::AZ), vec!["Alpha backup", "beta sync", "gamma digest"]);
        assert_eq!(sorted(SortBy::ZA), vec!["gamma digest", "beta sync", "Alpha backup"]);
    }
}
