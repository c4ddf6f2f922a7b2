use std::cmp::Ordering;

use serde::Serialize;

use super::Scorer;
use crate::domain::types::{Player, PlayerId};
use crate::infra::text::TextNormalizer;

/// ロースターから構築する照合インデックス。ロースターが変わったら作り直す。
pub struct PlayerIndex {
    entries: Vec<IndexEntry>,
    scorer: Box<dyn Scorer>,
}

struct IndexEntry {
    player_id: PlayerId,
    /// 正規化済みの照合キー（表示名 → 短縮名）
    keys: Vec<String>,
}

/// 照合候補
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerMatch {
    pub player_id: PlayerId,
    pub score: f64,
    /// 一致した照合キー
    pub matched_key: String,
    #[serde(skip)]
    length_gap: usize,
    #[serde(skip)]
    roster_pos: usize,
}

impl PlayerMatch {
    /// 距離 → 長さの差 → ロースター順
    fn rank(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.length_gap.cmp(&other.length_gap))
            .then(self.roster_pos.cmp(&other.roster_pos))
    }
}

impl PlayerIndex {
    pub fn build(roster: &[Player], scorer: Box<dyn Scorer>) -> Self {
        let entries = roster
            .iter()
            .map(|p| IndexEntry {
                player_id: p.id,
                keys: p
                    .searchable_fields()
                    .map(TextNormalizer::search_key)
                    .filter(|k| !k.is_empty())
                    .collect(),
            })
            .collect();
        Self { entries, scorer }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// しきい値を満たす候補を良い順に返す（選手ごとに最良の1件）
    pub fn rank(&self, phrase: &str) -> Vec<PlayerMatch> {
        let query = TextNormalizer::search_key(phrase);
        if query.is_empty() {
            return Vec::new();
        }
        let query_len = query.chars().count();
        let threshold = self.scorer.threshold();

        let mut matches: Vec<PlayerMatch> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(roster_pos, entry)| {
                entry
                    .keys
                    .iter()
                    .filter_map(|key| {
                        let score = self.scorer.score(&query, key)?;
                        Some(PlayerMatch {
                            player_id: entry.player_id,
                            score,
                            matched_key: key.clone(),
                            length_gap: key.chars().count().abs_diff(query_len),
                            roster_pos,
                        })
                    })
                    .filter(|m| m.score <= threshold)
                    .min_by(PlayerMatch::rank)
            })
            .collect();

        matches.sort_by(PlayerMatch::rank);
        matches
    }

    /// 最も良く一致する選手ID。しきい値を満たす候補がなければ None。
    pub fn best_match(&self, phrase: &str) -> Option<PlayerId> {
        let best = self.rank(phrase).into_iter().next();
        log::debug!(
            "照合 [{}] {:?} -> {:?}",
            self.scorer.name(),
            phrase,
            best.as_ref().map(|m| (m.player_id, m.score))
        );
        best.map(|m| m.player_id)
    }
}
