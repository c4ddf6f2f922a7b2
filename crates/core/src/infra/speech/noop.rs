use std::sync::Mutex;

use async_trait::async_trait;

use super::{RecognizerError, SpeechRecognizer};

/// 受け付けたコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerCall {
    Start(String),
    Stop,
    Cancel,
    Destroy,
}

/// NoopRecognizer: 何も認識せず、受け付けたコマンドだけを記録するスタブ。
/// 実機のエンジンが無い環境とテストで使う。
#[derive(Default)]
pub struct NoopRecognizer {
    calls: Mutex<Vec<RecognizerCall>>,
    unavailable: bool,
}

impl NoopRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// start が常に失敗するエンジン
    pub fn unavailable() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            unavailable: true,
        }
    }

    pub fn calls(&self) -> Vec<RecognizerCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecognizerCall) {
        log::debug!("NoopRecognizer: {:?}", call);
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SpeechRecognizer for NoopRecognizer {
    async fn start(&self, locale: &str) -> Result<(), RecognizerError> {
        if self.unavailable {
            return Err(RecognizerError::NotAvailable(
                "speech recognition is not supported on this device".to_string(),
            ));
        }
        self.record(RecognizerCall::Start(locale.to_string()));
        Ok(())
    }

    async fn stop(&self) -> Result<(), RecognizerError> {
        self.record(RecognizerCall::Stop);
        Ok(())
    }

    async fn cancel(&self) -> Result<(), RecognizerError> {
        self.record(RecognizerCall::Cancel);
        Ok(())
    }

    async fn destroy(&self) -> Result<(), RecognizerError> {
        self.record(RecognizerCall::Destroy);
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
