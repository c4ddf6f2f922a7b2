use super::numbers;
use crate::infra::text::TextNormalizer;

/// 聞き取りに混ざる言いよどみ（トークン化の時点で捨てる）
const FILLER_WORDS: &[&str] = &["um", "umm", "uh", "uhh", "er", "erm", "hmm"];

const CONJUNCTION: &str = "and";

/// トークン種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// 英字の単語（名前の一部になりうる）
    Word,
    /// 数詞（名前にもスコアにもなりうる）
    NumberWord,
    /// 0〜10 の数字
    Digits,
    /// 名前の区切りの "and"
    Conjunction,
    /// どれにも当てはまらない（照合を打ち切る）
    Noise,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn classify(text: String) -> Self {
        let kind = if text == CONJUNCTION {
            TokenKind::Conjunction
        } else if numbers::word_value(&text).is_some() {
            TokenKind::NumberWord
        } else if numbers::digit_value(&text).is_some() {
            TokenKind::Digits
        } else if is_word(&text) {
            TokenKind::Word
        } else {
            TokenKind::Noise
        };
        Self { text, kind }
    }

    /// 名前句の先頭になれるか。1文字の単語は "michael c" のような補足にしか使わない。
    pub fn can_start_name(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::NumberWord) && self.text.chars().count() > 1
    }

    /// 名前句の2語目になれるか
    pub fn can_extend_name(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::NumberWord)
    }

    /// アタッカー名の2語目になれるか。直後のスコアを飲み込まないよう数詞は除外。
    pub fn can_extend_attacker(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_score(&self) -> bool {
        matches!(self.kind, TokenKind::NumberWord | TokenKind::Digits)
    }
}

fn is_word(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(char::is_alphabetic)
        && chars.all(|c| c.is_alphabetic() || c == '\'' || c == '-')
}

/// 書き起こしテキストのトークナイザ
pub struct Tokenizer;

impl Tokenizer {
    /// 正規化 → 空白分割 → 前後の句読点除去 → 言いよどみ除去
    pub fn tokenize(text: &str) -> Vec<Token> {
        TextNormalizer::normalize(text)
            .split(' ')
            .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|t| !t.is_empty() && !FILLER_WORDS.contains(t))
            .map(|t| Token::classify(t.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        Tokenizer::tokenize(text).into_iter().map(|t| t.kind).collect()
    }

    fn texts(text: &str) -> Vec<String> {
        Tokenizer::tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            kinds("Brendan and Muhammad ten 7 r2d2"),
            vec![
                TokenKind::Word,
                TokenKind::Conjunction,
                TokenKind::Word,
                TokenKind::NumberWord,
                TokenKind::Digits,
                TokenKind::Noise,
            ]
        );
    }

    #[test]
    fn test_out_of_range_digits_are_noise() {
        assert_eq!(kinds("11 15 100"), vec![TokenKind::Noise; 3]);
    }

    #[test]
    fn test_punctuation_trimmed() {
        assert_eq!(
            texts("Brendan, Muhammad: 10. (Elliot)"),
            vec!["brendan", "muhammad", "10", "elliot"]
        );
    }

    #[test]
    fn test_lone_punctuation_dropped() {
        assert_eq!(texts("jack - greg & ten"), vec!["jack", "greg", "ten"]);
    }

    #[test]
    fn test_fillers_dropped() {
        assert_eq!(
            texts("um Jack uh Greg erm ten"),
            vec!["jack", "greg", "ten"]
        );
    }

    #[test]
    fn test_apostrophe_names_are_words() {
        assert_eq!(kinds("o'neil"), vec![TokenKind::Word]);
    }

    #[test]
    fn test_single_letter_cannot_start_name() {
        let tokens = Tokenizer::tokenize("c michael");
        assert!(!tokens[0].can_start_name());
        assert!(tokens[0].can_extend_name());
        assert!(tokens[1].can_start_name());
    }

    #[test]
    fn test_number_word_cannot_extend_attacker() {
        let tokens = Tokenizer::tokenize("greg ten");
        assert!(tokens[1].can_extend_name());
        assert!(!tokens[1].can_extend_attacker());
        assert!(tokens[1].is_score());
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(Tokenizer::tokenize("").is_empty());
        assert!(Tokenizer::tokenize("   ").is_empty());
        assert!(Tokenizer::tokenize("?! ... --").is_empty());
    }
}
