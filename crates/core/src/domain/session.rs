use serde::Serialize;

use super::error::AppError;
use super::types::PartialGameResult;

/// 音声入力セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DictationState {
    Idle,
    Listening,
    Stopped,
    Destroyed,
}

impl DictationState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::Listening => "listening",
            Self::Stopped => "stopped",
            Self::Destroyed => "destroyed",
        }
    }

    /// コマンド適用後の状態。実行できない場合は None。
    pub fn next(&self, command: DictationCommand) -> Option<DictationState> {
        match (self, command) {
            (Self::Idle | Self::Stopped, DictationCommand::Start) => Some(Self::Listening),
            (Self::Listening, DictationCommand::Stop | DictationCommand::Cancel) => {
                Some(Self::Stopped)
            }
            (Self::Destroyed, DictationCommand::Destroy) => None,
            (_, DictationCommand::Destroy) => Some(Self::Destroyed),
            _ => None,
        }
    }
}

/// セッションに対するコマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DictationCommand {
    Start,
    Stop,
    Cancel,
    Destroy,
}

impl DictationCommand {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Cancel => "cancel",
            Self::Destroy => "destroy",
        }
    }
}

/// 音声入力セッション
#[derive(Debug, Clone)]
pub struct DictationSession {
    pub session_id: String,
    pub state: DictationState,
    /// 直近の認識テキスト（候補を空白で連結したもの）
    pub speech: String,
    /// 直近の変換結果
    pub result: PartialGameResult,
    /// 自動停止の後、エンジンの最終結果をまだ受け付けるか
    pub awaiting_final: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl DictationSession {
    pub fn new(session_id: String, now: String) -> Self {
        Self {
            session_id,
            state: DictationState::Idle,
            speech: String::new(),
            result: PartialGameResult::default(),
            awaiting_final: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// 状態を変えずにコマンドの可否だけを確認する
    pub fn check(&self, command: DictationCommand) -> Result<DictationState, AppError> {
        self.state.next(command).ok_or_else(|| {
            AppError::invalid_state(format!(
                "{} は {} 状態では実行できません",
                command.as_str(),
                self.state.as_str()
            ))
        })
    }

    /// コマンドを適用して状態遷移する
    pub fn apply(
        &mut self,
        command: DictationCommand,
        now: String,
    ) -> Result<StateTransition, AppError> {
        let next = self.check(command)?;
        let prev = self.state.as_str().to_string();

        // start は前回の結果を破棄、cancel/destroy は途中経過を破棄
        if matches!(
            command,
            DictationCommand::Start | DictationCommand::Cancel | DictationCommand::Destroy
        ) {
            self.speech.clear();
            self.result = PartialGameResult::default();
        }

        self.state = next;
        self.awaiting_final = false;
        self.updated_at = now.clone();
        Ok(StateTransition {
            session_id: self.session_id.clone(),
            prev_state: prev,
            new_state: next,
            timestamp: now,
        })
    }

    /// 認識結果を記録してよいか。
    ///
    /// 聞き取り中は常に受け付ける。自動停止の直後は最終結果を1件だけ受け付ける。
    pub fn accepts(&self, is_final: bool) -> bool {
        match self.state {
            DictationState::Listening => true,
            DictationState::Stopped => is_final && self.awaiting_final,
            _ => false,
        }
    }

    /// 認識結果と変換結果を記録する
    pub fn record(&mut self, speech: String, result: PartialGameResult, now: String) {
        self.speech = speech;
        self.result = result;
        if self.state != DictationState::Listening {
            self.awaiting_final = false;
        }
        self.updated_at = now;
    }
}

/// 状態遷移イベントペイロード
#[derive(Debug, Clone, Serialize)]
pub struct StateTransition {
    pub session_id: String,
    pub prev_state: String,
    pub new_state: DictationState,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorCode;
    use crate::domain::types::TeamResult;

    fn now() -> String {
        "2025-01-15T10:30:00Z".to_string()
    }

    fn session() -> DictationSession {
        DictationSession::new("test-session".to_string(), now())
    }

    fn sample_result() -> PartialGameResult {
        PartialGameResult {
            team1: Some(TeamResult {
                defender_id: Some(3),
                attacker_id: Some(41),
                score: Some(10),
            }),
            team2: None,
        }
    }

    #[test]
    fn test_accepts_results_only_while_listening() {
        let mut s = session();
        assert!(!s.accepts(true));
        s.apply(DictationCommand::Start, now()).unwrap();
        assert!(s.accepts(false));
        assert!(s.accepts(true));
        s.apply(DictationCommand::Stop, now()).unwrap();
        assert!(!s.accepts(true));
    }

    #[test]
    fn test_awaiting_final_accepts_one_final_result() {
        let mut s = session();
        s.apply(DictationCommand::Start, now()).unwrap();
        s.apply(DictationCommand::Stop, now()).unwrap();
        s.awaiting_final = true;

        assert!(!s.accepts(false));
        assert!(s.accepts(true));
        s.record("brendan muhammad 10".to_string(), sample_result(), now());
        assert!(!s.accepts(true));
        assert_eq!(s.result, sample_result());
    }

    #[test]
    fn test_any_command_clears_awaiting_final() {
        let mut s = session();
        s.apply(DictationCommand::Start, now()).unwrap();
        s.apply(DictationCommand::Stop, now()).unwrap();
        s.awaiting_final = true;
        s.apply(DictationCommand::Destroy, now()).unwrap();
        assert!(!s.awaiting_final);
        assert!(!s.accepts(true));
    }

    #[test]
    fn test_idle_to_listening() {
        let mut s = session();
        let t = s.apply(DictationCommand::Start, now()).unwrap();
        assert_eq!(t.prev_state, "idle");
        assert_eq!(t.new_state, DictationState::Listening);
    }

    #[test]
    fn test_listening_to_stopped() {
        let mut s = session();
        s.apply(DictationCommand::Start, now()).unwrap();
        let t = s.apply(DictationCommand::Stop, now()).unwrap();
        assert_eq!(t.prev_state, "listening");
        assert_eq!(t.new_state, DictationState::Stopped);
    }

    #[test]
    fn test_restart_after_stop() {
        let mut s = session();
        s.apply(DictationCommand::Start, now()).unwrap();
        s.apply(DictationCommand::Stop, now()).unwrap();
        let t = s.apply(DictationCommand::Start, now()).unwrap();
        assert_eq!(t.new_state, DictationState::Listening);
    }

    #[test]
    fn test_stop_keeps_result_but_cancel_clears_it() {
        let mut s = session();
        s.apply(DictationCommand::Start, now()).unwrap();
        s.record("brendan muhammad 10".into(), sample_result(), now());
        s.apply(DictationCommand::Stop, now()).unwrap();
        assert_eq!(s.result, sample_result());

        s.apply(DictationCommand::Start, now()).unwrap();
        assert!(s.result.is_empty());
        s.record("brendan muhammad 10".into(), sample_result(), now());
        s.apply(DictationCommand::Cancel, now()).unwrap();
        assert!(s.speech.is_empty());
        assert!(s.result.is_empty());
    }

    #[test]
    fn test_invalid_stop_in_idle() {
        let mut s = session();
        let err = s.apply(DictationCommand::Stop, now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
        assert_eq!(s.state, DictationState::Idle);
    }

    #[test]
    fn test_start_while_listening_is_invalid() {
        let mut s = session();
        s.apply(DictationCommand::Start, now()).unwrap();
        assert!(s.apply(DictationCommand::Start, now()).is_err());
    }

    #[test]
    fn test_destroy_is_terminal() {
        let mut s = session();
        s.apply(DictationCommand::Start, now()).unwrap();
        let t = s.apply(DictationCommand::Destroy, now()).unwrap();
        assert_eq!(t.new_state, DictationState::Destroyed);

        for command in [
            DictationCommand::Start,
            DictationCommand::Stop,
            DictationCommand::Cancel,
            DictationCommand::Destroy,
        ] {
            assert!(s.check(command).is_err(), "{} should fail", command.as_str());
        }
    }

    #[test]
    fn test_destroy_from_idle() {
        let mut s = session();
        let t = s.apply(DictationCommand::Destroy, now()).unwrap();
        assert_eq!(t.prev_state, "idle");
        assert_eq!(t.new_state, DictationState::Destroyed);
    }
}
