use serde::Serialize;

/// アプリケーション共通エラーコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "E_INVALID_STATE")]
    InvalidState,
    #[serde(rename = "E_INVALID_GAME")]
    InvalidGame,
    #[serde(rename = "E_CONFIG")]
    Config,
    #[serde(rename = "E_RECOGNIZER")]
    Recognizer,
}

/// アプリケーションエラー（UI への通知ペイロード兼用）
///
/// 書き起こしの品質に起因する問題はエラーにしない。ここに来るのは
/// 呼び出し側の誤用（不正な状態遷移・不正な設定・不完全な試合の登録）のみ。
#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub recoverable: bool,
}

impl AppError {
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidState,
            message: msg.into(),
            recoverable: true,
        }
    }

    pub fn invalid_game(msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidGame,
            message: msg.into(),
            recoverable: true,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Config,
            message: msg.into(),
            recoverable: false,
        }
    }

    pub fn recognizer(msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Recognizer,
            message: msg.into(),
            recoverable: true,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
