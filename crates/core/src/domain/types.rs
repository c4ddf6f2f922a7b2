use std::fmt;

use serde::{Deserialize, Serialize};

/// 選手ID（API側の整数ID）
pub type PlayerId = i64;

/// ロースターの選手エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// 表示名
    pub name: String,
    /// 短縮名/ニックネーム（API では short_name）
    #[serde(default, alias = "shortName", skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: None,
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    /// 照合対象のフィールド（表示名 → 短縮名の順）。空の短縮名は除外。
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(
            self.short_name
                .as_deref()
                .filter(|s| !s.trim().is_empty()),
        )
    }
}

/// チーム（team1 / team2）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    #[serde(rename = "team1")]
    Team1,
    #[serde(rename = "team2")]
    Team2,
}

impl TeamSide {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Team1 => "team1",
            Self::Team2 => "team2",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ポジション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Defender,
    Attacker,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Defender => "defender",
            Self::Attacker => "attacker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 解析済みの1チーム分の断片（名前解決前）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamFragment {
    pub defender_phrase: String,
    pub attacker_phrase: String,
    pub score_token: String,
}

/// 1チーム分の結果。各フィールドは独立して欠損しうる。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defender_id: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacker_id: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

impl TeamResult {
    /// 全フィールドが未確定か
    pub fn is_empty(&self) -> bool {
        self.defender_id.is_none() && self.attacker_id.is_none() && self.score.is_none()
    }

    /// 両選手とスコアが揃っているか（スコア0も有効）
    pub fn is_complete(&self) -> bool {
        self.defender_id.is_some() && self.attacker_id.is_some() && self.score.is_some()
    }

    pub fn player(&self, role: Role) -> Option<PlayerId> {
        match role {
            Role::Defender => self.defender_id,
            Role::Attacker => self.attacker_id,
        }
    }

    /// 値のあるフィールドだけを上書きする
    fn overlay(&mut self, update: &TeamResult) {
        if update.defender_id.is_some() {
            self.defender_id = update.defender_id;
        }
        if update.attacker_id.is_some() {
            self.attacker_id = update.attacker_id;
        }
        if update.score.is_some() {
            self.score = update.score;
        }
    }
}

/// 書き起こしから得られた試合結果の下書き
///
/// 全フィールドが空のチームは保持しない。空の結果は JSON で `{}` になる。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialGameResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1: Option<TeamResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2: Option<TeamResult>,
}

impl PartialGameResult {
    pub fn is_empty(&self) -> bool {
        self.team1.is_none() && self.team2.is_none()
    }

    pub fn team(&self, side: TeamSide) -> Option<&TeamResult> {
        match side {
            TeamSide::Team1 => self.team1.as_ref(),
            TeamSide::Team2 => self.team2.as_ref(),
        }
    }

    /// チームを設定する。空のチームは None として扱う。
    pub fn set_team(&mut self, side: TeamSide, team: TeamResult) {
        let team = (!team.is_empty()).then_some(team);
        match side {
            TeamSide::Team1 => self.team1 = team,
            TeamSide::Team2 => self.team2 = team,
        }
    }

    /// 両チームの選手とスコアが全て揃ったか
    pub fn is_complete(&self) -> bool {
        matches!(
            (&self.team1, &self.team2),
            (Some(t1), Some(t2)) if t1.is_complete() && t2.is_complete()
        )
    }

    /// 両チームのスコアが揃ったか（聞き取り停止の判定）。
    ///
    /// 選手名は後から手で直せるので問わない。スコア0も揃ったとみなす。
    pub fn has_both_scores(&self) -> bool {
        matches!(
            (&self.team1, &self.team2),
            (Some(t1), Some(t2)) if t1.score.is_some() && t2.score.is_some()
        )
    }

    /// 入力フォームへの反映: 更新側で値のあるフィールドだけを上書きする
    pub fn apply_update(&mut self, update: &PartialGameResult) {
        for side in [TeamSide::Team1, TeamSide::Team2] {
            let Some(incoming) = update.team(side) else {
                continue;
            };
            let mut merged = self.team(side).copied().unwrap_or_default();
            merged.overlay(incoming);
            self.set_team(side, merged);
        }
    }
}
