mod approximate;
mod index;
mod jaro;

pub use approximate::ApproximateScorer;
pub use index::{PlayerIndex, PlayerMatch};
pub use jaro::JaroWinklerScorer;

use crate::domain::settings::{ScorerChoice, TranscoderSettings};

/// 名前照合スコアラー trait
///
/// 入力はどちらも `TextNormalizer::search_key` で正規化済み。
/// 距離は小さいほど良く、照合できない場合は None。
pub trait Scorer: Send + Sync {
    fn score(&self, query: &str, candidate: &str) -> Option<f64>;

    /// この距離以下なら一致とみなす
    fn threshold(&self) -> f64;

    /// スコアラー名（例: "approximate", "jaro-winkler"）
    fn name(&self) -> &str;
}

/// 設定に応じたスコアラーを構築する
pub fn scorer_from_settings(settings: &TranscoderSettings) -> Box<dyn Scorer> {
    match settings.scorer {
        ScorerChoice::Approximate => Box::new(ApproximateScorer::from_settings(settings)),
        ScorerChoice::JaroWinkler => Box::new(JaroWinklerScorer::from_settings(settings)),
    }
}
