use serde::Serialize;

use super::error::AppError;
use super::types::{PartialGameResult, PlayerId, Role, TeamSide};

/// 登録可能な1チーム分の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTeam {
    pub defender_id: PlayerId,
    pub attacker_id: PlayerId,
    pub score: u8,
}

/// 登録可能な試合結果（検証済み）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompleteGame {
    pub team1: CompleteTeam,
    pub team2: CompleteTeam,
}

impl CompleteGame {
    /// 勝利チーム
    pub fn winner(&self) -> TeamSide {
        if self.team1.score > self.team2.score {
            TeamSide::Team1
        } else {
            TeamSide::Team2
        }
    }
}

/// 試合結果の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameValidationError {
    #[error("{team} {role} is not selected")]
    MissingPlayer { team: TeamSide, role: Role },
    #[error("{team} score is missing")]
    MissingScore { team: TeamSide },
    #[error("Draws are not allowed")]
    Draw,
    #[error("Player {0} appears more than once")]
    DuplicatePlayer(PlayerId),
}

impl From<GameValidationError> for AppError {
    fn from(e: GameValidationError) -> Self {
        AppError::invalid_game(e.to_string())
    }
}

/// 下書きを登録可能な試合結果に変換する。
///
/// 4人全員とスコア2つが揃い、引き分けでなく、同じ選手が重複しないこと。
pub fn validate(result: &PartialGameResult) -> Result<CompleteGame, GameValidationError> {
    let team1 = complete_team(result, TeamSide::Team1)?;
    let team2 = complete_team(result, TeamSide::Team2)?;

    if team1.score == team2.score {
        return Err(GameValidationError::Draw);
    }

    let ids = [
        team1.defender_id,
        team1.attacker_id,
        team2.defender_id,
        team2.attacker_id,
    ];
    for (i, id) in ids.iter().enumerate() {
        if ids[..i].contains(id) {
            return Err(GameValidationError::DuplicatePlayer(*id));
        }
    }

    Ok(CompleteGame { team1, team2 })
}

fn complete_team(
    result: &PartialGameResult,
    side: TeamSide,
) -> Result<CompleteTeam, GameValidationError> {
    let team = result.team(side).copied().unwrap_or_default();
    let player = |role: Role| {
        team.player(role)
            .ok_or(GameValidationError::MissingPlayer { team: side, role })
    };

    Ok(CompleteTeam {
        defender_id: player(Role::Defender)?,
        attacker_id: player(Role::Attacker)?,
        score: team
            .score
            .ok_or(GameValidationError::MissingScore { team: side })?,
    })
}
