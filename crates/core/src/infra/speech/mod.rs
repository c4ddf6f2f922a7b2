mod noop;

pub use noop::{NoopRecognizer, RecognizerCall};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::error::AppError;

/// 音声認識エンジンから届くイベント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SpeechEvent {
    /// 認識開始
    Started,
    /// 発話を検出
    Recognized,
    /// 部分結果（認識候補のリスト）
    PartialResults(Vec<String>),
    /// 最終結果（認識候補のリスト）
    Results(Vec<String>),
    /// 発話終了
    End,
    /// エンジンのエラー
    Error(String),
    /// 入力音量
    VolumeChanged(f32),
}

/// 認識エンジンのエラー
#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("Recognizer not available: {0}")]
    NotAvailable(String),
    #[error("Recognizer command failed: {0}")]
    CommandFailed(String),
}

impl From<RecognizerError> for AppError {
    fn from(e: RecognizerError) -> Self {
        AppError::recognizer(e.to_string())
    }
}

/// 音声認識エンジン trait
///
/// 認識結果はこの trait ではなく `SpeechEvent` のチャンネルで届く。
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn start(&self, locale: &str) -> Result<(), RecognizerError>;

    async fn stop(&self) -> Result<(), RecognizerError>;

    async fn cancel(&self) -> Result<(), RecognizerError>;

    async fn destroy(&self) -> Result<(), RecognizerError>;

    /// エンジン名
    fn name(&self) -> &str;
}
