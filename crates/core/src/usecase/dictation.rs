use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::sync::mpsc;

use crate::domain::error::AppError;
use crate::domain::session::{DictationCommand, DictationSession, DictationState, StateTransition};
use crate::domain::settings::TranscoderSettings;
use crate::domain::types::PartialGameResult;
use crate::infra::speech::{SpeechEvent, SpeechRecognizer};
use crate::usecase::transcoder::GameTranscoder;

/// 認識結果ごとに発行される変換結果
#[derive(Debug, Clone, Serialize)]
pub struct DictationUpdate {
    pub session_id: String,
    /// 認識候補を空白で連結したテキスト
    pub speech: String,
    pub result: PartialGameResult,
    /// 最終結果か（false = 部分結果）
    pub is_final: bool,
    /// 両チームのスコアが揃ったか
    pub complete: bool,
}

/// 音声入力サービス: 認識エンジンの操作・状態管理・書き起こし変換をまとめる
pub struct DictationService {
    recognizer: Arc<dyn SpeechRecognizer>,
    transcoder: Arc<GameTranscoder>,
    session: Mutex<DictationSession>,
    /// コマンド（状態確認 → エンジン操作 → 状態遷移）を1つずつ実行する
    commands: tokio::sync::Mutex<()>,
    locale: String,
    stop_when_complete: bool,
}

impl DictationService {
    pub fn new(
        recognizer: Arc<dyn SpeechRecognizer>,
        transcoder: Arc<GameTranscoder>,
        settings: &TranscoderSettings,
    ) -> Self {
        let session_id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            recognizer,
            transcoder,
            session: Mutex::new(DictationSession::new(session_id, now)),
            commands: tokio::sync::Mutex::new(()),
            locale: settings.locale.clone(),
            stop_when_complete: settings.stop_when_complete,
        }
    }

    pub fn session_id(&self) -> String {
        self.session.lock().unwrap().session_id.clone()
    }

    pub fn state(&self) -> DictationState {
        self.session.lock().unwrap().state
    }

    /// 直近の変換結果
    pub fn latest_result(&self) -> PartialGameResult {
        self.session.lock().unwrap().result
    }

    // ==================== Commands ====================

    pub async fn start(&self) -> Result<StateTransition, AppError> {
        self.run_command(DictationCommand::Start).await
    }

    pub async fn stop(&self) -> Result<StateTransition, AppError> {
        self.run_command(DictationCommand::Stop).await
    }

    pub async fn cancel(&self) -> Result<StateTransition, AppError> {
        self.run_command(DictationCommand::Cancel).await
    }

    pub async fn destroy(&self) -> Result<StateTransition, AppError> {
        self.run_command(DictationCommand::Destroy).await
    }

    /// 状態遷移の可否を確認 → エンジン操作 → 状態遷移 の順に行う。
    /// エンジン操作が失敗した場合は状態を変えない。
    /// 重なったコマンドは先のコマンドの完了を待ってから状態を確認する。
    async fn run_command(&self, command: DictationCommand) -> Result<StateTransition, AppError> {
        let _guard = self.commands.lock().await;
        self.session.lock().unwrap().check(command)?;

        match command {
            DictationCommand::Start => self.recognizer.start(&self.locale).await?,
            DictationCommand::Stop => self.recognizer.stop().await?,
            DictationCommand::Cancel => self.recognizer.cancel().await?,
            DictationCommand::Destroy => self.recognizer.destroy().await?,
        }

        let now = chrono::Utc::now().to_rfc3339();
        let transition = self.session.lock().unwrap().apply(command, now)?;
        log::info!(
            "dictation {}: {} -> {} (recognizer={})",
            transition.session_id,
            transition.prev_state,
            transition.new_state.as_str(),
            self.recognizer.name()
        );
        Ok(transition)
    }

    // ==================== Events ====================

    /// 認識イベントを処理する。認識結果なら変換して `DictationUpdate` を返す。
    ///
    /// 聞き取り中以外に届いた結果は無視する（自動停止直後の最終結果は除く）。
    /// 両チームのスコアが揃ったら自動で停止する。
    pub async fn handle_event(&self, event: SpeechEvent) -> Option<DictationUpdate> {
        let (results, is_final) = match event {
            SpeechEvent::PartialResults(results) => (results, false),
            SpeechEvent::Results(results) => (results, true),
            SpeechEvent::Error(message) => {
                log::warn!("音声認識エラー: {message}");
                return None;
            }
            other => {
                log::debug!("speech event: {:?}", other);
                return None;
            }
        };

        let speech = results.join(" ").trim().to_string();
        let result = self.transcoder.transcode(&speech);
        let complete = result.has_both_scores();

        let (session_id, listening) = {
            let mut session = self.session.lock().unwrap();
            if !session.accepts(is_final) {
                log::debug!("{} 状態のため認識結果を無視", session.state.as_str());
                return None;
            }
            let listening = session.state == DictationState::Listening;
            session.record(speech.clone(), result, chrono::Utc::now().to_rfc3339());
            (session.session_id.clone(), listening)
        };

        if listening && complete && self.stop_when_complete {
            log::info!("両チームのスコアが揃ったため聞き取りを停止します");
            match self.stop().await {
                // 部分結果で止めた場合はエンジンの最終結果を待つ
                Ok(_) if !is_final => {
                    let mut session = self.session.lock().unwrap();
                    if session.state == DictationState::Stopped {
                        session.awaiting_final = true;
                    }
                }
                Ok(_) => {}
                Err(e) => log::warn!("自動停止に失敗: {e}"),
            }
        }

        Some(DictationUpdate {
            session_id,
            speech,
            result,
            is_final,
            complete,
        })
    }

    /// イベントチャンネルを読み続け、変換結果を `updates` に送る。
    ///
    /// 入力チャンネルが閉じる・セッションが破棄される・受信側が閉じると終了する。
    pub async fn run(
        &self,
        mut events: mpsc::Receiver<SpeechEvent>,
        updates: mpsc::Sender<DictationUpdate>,
    ) {
        while let Some(event) = events.recv().await {
            if let Some(update) = self.handle_event(event).await {
                if updates.send(update).await.is_err() {
                    log::debug!("update receiver dropped");
                    break;
                }
            }
            if self.state() == DictationState::Destroyed {
                break;
            }
        }
    }
}
