use super::Scorer;
use crate::domain::settings::TranscoderSettings;

/// 近似部分文字列照合
///
/// クエリを候補の任意の部分文字列に合わせたときの最小編集回数を求め、
/// `編集回数 / クエリ長 + |一致開始位置 - location| / distance` を距離とする。
/// 一致した文字数（クエリ長 - 編集回数）が `min_match_char_length` 未満なら不一致。
#[derive(Debug, Clone)]
pub struct ApproximateScorer {
    pub threshold: f64,
    pub location: usize,
    pub distance: usize,
    pub max_pattern_length: usize,
    pub min_match_char_length: usize,
}

impl ApproximateScorer {
    pub fn from_settings(settings: &TranscoderSettings) -> Self {
        Self {
            threshold: settings.threshold,
            location: settings.location,
            distance: settings.distance,
            max_pattern_length: settings.max_pattern_length,
            min_match_char_length: settings.min_match_char_length,
        }
    }

    fn position_penalty(&self, start: usize) -> f64 {
        let drift = start.abs_diff(self.location);
        if self.distance == 0 {
            return if drift == 0 { 0.0 } else { 1.0 };
        }
        drift as f64 / self.distance as f64
    }
}

impl Default for ApproximateScorer {
    fn default() -> Self {
        Self::from_settings(&TranscoderSettings::default())
    }
}

impl Scorer for ApproximateScorer {
    fn score(&self, query: &str, candidate: &str) -> Option<f64> {
        let pattern: Vec<char> = query.chars().take(self.max_pattern_length).collect();
        let text: Vec<char> = candidate.chars().collect();
        let m = pattern.len();
        let n = text.len();
        if m == 0 || n == 0 || m < self.min_match_char_length {
            return None;
        }

        // cost[j]: pattern[..i] を text[..j] で終わる部分文字列に合わせた最小編集回数
        // start[j]: そのときの一致開始位置
        let mut prev_cost = vec![0usize; n + 1];
        let mut prev_start: Vec<usize> = (0..=n).collect();
        let mut cost = vec![0usize; n + 1];
        let mut start = vec![0usize; n + 1];

        for i in 1..=m {
            cost[0] = i;
            start[0] = 0;
            for j in 1..=n {
                let substitute = (
                    prev_cost[j - 1] + usize::from(pattern[i - 1] != text[j - 1]),
                    prev_start[j - 1],
                );
                // クエリ側の文字を落とす
                let skip_pattern = (prev_cost[j] + 1, prev_start[j]);
                // 候補側の文字を読み飛ばす
                let skip_text = (cost[j - 1] + 1, start[j - 1]);

                let best = [skip_pattern, skip_text]
                    .into_iter()
                    .fold(substitute, |a, b| if b < a { b } else { a });
                cost[j] = best.0;
                start[j] = best.1;
            }
            std::mem::swap(&mut prev_cost, &mut cost);
            std::mem::swap(&mut prev_start, &mut start);
        }

        (0..=n)
            .filter(|&j| m.saturating_sub(prev_cost[j]) >= self.min_match_char_length)
            .map(|j| prev_cost[j] as f64 / m as f64 + self.position_penalty(prev_start[j]))
            .min_by(f64::total_cmp)
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn name(&self) -> &str {
        "approximate"
    }
}
