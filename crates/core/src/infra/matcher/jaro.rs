use strsim::jaro_winkler;

use super::Scorer;
use crate::domain::settings::TranscoderSettings;

/// Jaro-Winkler による照合。距離は `1 - 類似度`。
///
/// 候補全体と候補の各単語の両方と比べ、良い方を採用する
/// （"michael" と "michael c" を一致させるため）。
#[derive(Debug, Clone)]
pub struct JaroWinklerScorer {
    pub threshold: f64,
    pub min_match_char_length: usize,
}

impl JaroWinklerScorer {
    pub fn from_settings(settings: &TranscoderSettings) -> Self {
        Self {
            threshold: settings.jaro_winkler_threshold,
            min_match_char_length: settings.min_match_char_length,
        }
    }
}

impl Default for JaroWinklerScorer {
    fn default() -> Self {
        Self::from_settings(&TranscoderSettings::default())
    }
}

impl Scorer for JaroWinklerScorer {
    fn score(&self, query: &str, candidate: &str) -> Option<f64> {
        if query.chars().count() < self.min_match_char_length || candidate.is_empty() {
            return None;
        }

        let similarity = std::iter::once(candidate)
            .chain(candidate.split_whitespace())
            .map(|c| jaro_winkler(query, c))
            .fold(0.0, f64::max);

        Some(1.0 - similarity)
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn name(&self) -> &str {
        "jaro-winkler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(query: &str, candidate: &str) -> Option<f64> {
        JaroWinklerScorer::default().score(query, candidate)
    }

    #[test]
    fn test_exact_match_scores_zero() {
        assert_eq!(score("brendan", "brendan"), Some(0.0));
    }

    #[test]
    fn test_word_within_candidate() {
        assert_eq!(score("michael", "michael c"), Some(0.0));
    }

    #[test]
    fn test_misspelling_within_threshold() {
        let scorer = JaroWinklerScorer::default();
        let s = scorer.score("brendon", "brendan").unwrap();
        assert!(s <= scorer.threshold(), "{s}");
        let s = scorer.score("muhamad", "muhammad").unwrap();
        assert!(s <= scorer.threshold(), "{s}");
    }

    #[test]
    fn test_unrelated_name_rejected() {
        let scorer = JaroWinklerScorer::default();
        let s = scorer.score("zyxqvu", "muhammad").unwrap();
        assert!(s > scorer.threshold(), "{s}");
    }

    #[test]
    fn test_short_query_rejected() {
        assert_eq!(score("j", "jack"), None);
    }
}
