use crate::domain::error::AppError;
use crate::domain::settings::TranscoderSettings;
use crate::domain::types::{PartialGameResult, Player, PlayerId, TeamFragment, TeamResult, TeamSide};
use crate::infra::grammar::{numbers, UtteranceParser};
use crate::infra::matcher::{scorer_from_settings, PlayerIndex, Scorer};

/// 書き起こし → 試合結果の下書き 変換器
///
/// ロースターごとに1つ作る（照合インデックスを保持する）。
/// 状態を持たないので `Arc` で共有して並行に呼び出してよい。
pub struct GameTranscoder {
    index: PlayerIndex,
}

impl GameTranscoder {
    /// デフォルト設定で構築する
    pub fn new(roster: &[Player]) -> Self {
        let settings = TranscoderSettings::default();
        Self::with_scorer(roster, scorer_from_settings(&settings))
    }

    pub fn with_settings(roster: &[Player], settings: &TranscoderSettings) -> Result<Self, AppError> {
        settings.validate()?;
        Ok(Self::with_scorer(roster, scorer_from_settings(settings)))
    }

    pub fn with_scorer(roster: &[Player], scorer: Box<dyn Scorer>) -> Self {
        let index = PlayerIndex::build(roster, scorer);
        log::debug!(
            "GameTranscoder built: {} players, scorer={}",
            index.len(),
            index.scorer_name()
        );
        Self { index }
    }

    /// 書き起こしを変換する。解析できない入力は空の結果になる。
    pub fn transcode(&self, text: &str) -> PartialGameResult {
        let fragments = UtteranceParser::parse(text);
        let mut result = PartialGameResult::default();

        for (side, fragment) in [TeamSide::Team1, TeamSide::Team2].into_iter().zip(&fragments) {
            result.set_team(side, self.resolve_team(fragment));
        }

        log::debug!("transcode {:?} -> {:?}", text, result);
        result
    }

    /// 認識候補のリストを空白で連結して変換する
    pub fn transcode_results(&self, results: &[String]) -> PartialGameResult {
        self.transcode(&results.join(" "))
    }

    /// 名前句に最も近い選手
    pub fn find_player(&self, phrase: &str) -> Option<PlayerId> {
        self.index.best_match(phrase)
    }

    fn resolve_team(&self, fragment: &TeamFragment) -> TeamResult {
        TeamResult {
            defender_id: self.find_player(&fragment.defender_phrase),
            attacker_id: self.find_player(&fragment.attacker_phrase),
            score: numbers::score_value(&fragment.score_token),
        }
    }
}
