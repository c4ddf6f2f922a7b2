use super::tokenizer::{Token, TokenKind, Tokenizer};
use crate::domain::types::TeamFragment;

/// 名前句の語数。長い方から試す。
const PHRASE_LENGTHS: [usize; 2] = [2, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Defender,
    Attacker,
}

/// 発話パーサ。ロースターを必要としない純粋な構文解析。
pub struct UtteranceParser;

impl UtteranceParser {
    /// 書き起こしから最大2チーム分の断片を取り出す。
    ///
    /// 文頭から1チーム目を照合し、直後から2チーム目を照合する。
    /// 照合できなければ空、2チーム目だけ失敗すれば1チーム分を返す。
    pub fn parse(text: &str) -> Vec<TeamFragment> {
        let tokens = Tokenizer::tokenize(text);
        let mut fragments = Vec::with_capacity(2);

        if let Some((first, next)) = match_team(&tokens, 0) {
            fragments.push(first);
            if let Some((second, _)) = match_team(&tokens, next) {
                fragments.push(second);
            }
        }

        fragments
    }
}

/// `pos` から1チーム分を照合する。成功時は断片と次の位置を返す。
///
/// 候補の順序は「ディフェンダー2語 → 1語」「アタッカー2語 → 1語」で、
/// 最初に成立したものを採用する。
fn match_team(tokens: &[Token], pos: usize) -> Option<(TeamFragment, usize)> {
    for defender_len in PHRASE_LENGTHS {
        let Some(defender) = name_phrase(tokens, pos, defender_len, Slot::Defender) else {
            continue;
        };

        let mut attacker_pos = pos + defender_len;
        if tokens
            .get(attacker_pos)
            .is_some_and(|t| t.kind == TokenKind::Conjunction)
        {
            attacker_pos += 1;
        }

        for attacker_len in PHRASE_LENGTHS {
            let Some(attacker) = name_phrase(tokens, attacker_pos, attacker_len, Slot::Attacker)
            else {
                continue;
            };

            let score_pos = attacker_pos + attacker_len;
            if let Some(score) = tokens.get(score_pos).filter(|t| t.is_score()) {
                let fragment = TeamFragment {
                    defender_phrase: defender,
                    attacker_phrase: attacker,
                    score_token: score.text.clone(),
                };
                return Some((fragment, score_pos + 1));
            }
        }
    }

    None
}

fn name_phrase(tokens: &[Token], start: usize, len: usize, slot: Slot) -> Option<String> {
    let words = tokens.get(start..start + len)?;
    let (first, rest) = words.split_first()?;
    if !first.can_start_name() {
        return None;
    }

    let extends = rest.iter().all(|t| match slot {
        Slot::Defender => t.can_extend_name(),
        Slot::Attacker => t.can_extend_attacker(),
    });
    if !extends {
        return None;
    }

    Some(
        words
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    )
}
