use serde::{Deserialize, Serialize};

use super::error::AppError;

/// 書き起こし変換の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscoderSettings {
    /// 選手名の照合アルゴリズム
    pub scorer: ScorerChoice,
    /// 近似照合の受理しきい値（0.0 = 完全一致のみ, 1.0 = 何でも一致）
    pub threshold: f64,
    /// 一致が期待される文字位置
    pub location: usize,
    /// 期待位置からのずれをどこまで許すか（ずれ / distance がスコアに加算される）
    pub distance: usize,
    /// 照合に使うクエリの最大文字数
    pub max_pattern_length: usize,
    /// 一致とみなす最小文字数
    pub min_match_char_length: usize,
    /// Jaro-Winkler 照合の受理しきい値（1 - 類似度）
    pub jaro_winkler_threshold: f64,
    /// 音声認識エンジンに渡すロケール
    pub locale: String,
    /// 両チームが揃ったら自動で聞き取りを止めるか
    pub stop_when_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerChoice {
    /// 近似部分文字列照合（編集距離 + 位置ペナルティ）
    Approximate,
    /// トークン単位の Jaro-Winkler
    JaroWinkler,
}

impl Default for TranscoderSettings {
    fn default() -> Self {
        Self {
            scorer: ScorerChoice::Approximate,
            threshold: 0.5,
            location: 0,
            distance: 100,
            max_pattern_length: 32,
            min_match_char_length: 2,
            jaro_winkler_threshold: 0.15,
            locale: "en-AU".to_string(),
            stop_when_complete: true,
        }
    }
}

impl TranscoderSettings {
    /// JSON から読み込む。欠けているフィールドはデフォルト値。
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| AppError::config(format!("設定の読み込みに失敗しました: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(AppError::config(format!(
                "threshold は 0.0〜1.0 で指定してください: {}",
                self.threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.jaro_winkler_threshold) {
            return Err(AppError::config(format!(
                "jaro_winkler_threshold は 0.0〜1.0 で指定してください: {}",
                self.jaro_winkler_threshold
            )));
        }
        if self.distance == 0 {
            return Err(AppError::config("distance は 1 以上が必要です"));
        }
        if self.max_pattern_length == 0 {
            return Err(AppError::config("max_pattern_length は 1 以上が必要です"));
        }
        if self.locale.trim().is_empty() {
            return Err(AppError::config("locale が空です"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorCode;

    #[test]
    fn test_defaults_are_valid() {
        let settings = TranscoderSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.locale, "en-AU");
        assert_eq!(settings.scorer, ScorerChoice::Approximate);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let settings =
            TranscoderSettings::from_json(r#"{"scorer": "jaro_winkler", "locale": "en-US"}"#)
                .unwrap();
        assert_eq!(settings.scorer, ScorerChoice::JaroWinkler);
        assert_eq!(settings.locale, "en-US");
        assert_eq!(settings.threshold, 0.5);
        assert_eq!(settings.min_match_char_length, 2);
    }

    #[test]
    fn test_from_json_rejects_out_of_range_threshold() {
        let err = TranscoderSettings::from_json(r#"{"threshold": 1.5}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::Config);
    }

    #[test]
    fn test_from_json_rejects_zero_distance() {
        let err = TranscoderSettings::from_json(r#"{"distance": 0}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::Config);
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        let err = TranscoderSettings::from_json("{not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::Config);
        assert!(!err.recoverable);
    }
}
