/// 発話される数詞とスコアの対応表（聞き間違えやすい同音語を含む）
const NUMBER_WORDS: &[(&str, u8)] = &[
    ("zero", 0),
    ("none", 0),
    ("donut", 0),
    ("doughnut", 0),
    ("one", 1),
    ("won", 1),
    ("two", 2),
    ("to", 2),
    ("too", 2),
    ("three", 3),
    ("four", 4),
    ("for", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("ate", 8),
    ("nine", 9),
    ("ten", 10),
];

/// 1試合の最大スコア
pub const MAX_SCORE: u8 = 10;

/// 数詞をスコアに変換する
pub fn word_value(word: &str) -> Option<u8> {
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| *n)
}

/// 数字列をスコアに変換する（0〜10 のみ）
pub fn digit_value(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u8>().ok().filter(|n| *n <= MAX_SCORE)
}

/// スコアトークンを整数に変換する。数詞表 → 数字の順に試す。
pub fn score_value(token: &str) -> Option<u8> {
    let token = token.trim().to_lowercase();
    word_value(&token).or_else(|| digit_value(&token))
}
