/// 書き起こしテキスト/選手名の正規化
pub struct TextNormalizer;

impl TextNormalizer {
    /// 正規化: 全角英数→半角、小文字化、空白類の圧縮、前後トリム
    pub fn normalize(text: &str) -> String {
        let mut result = String::with_capacity(text.len());

        for ch in text.chars() {
            match ch {
                // 全角英数字・記号 → 半角
                '\u{FF01}'..='\u{FF5E}' => {
                    let half = char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch);
                    result.extend(half.to_lowercase());
                }
                // 全角スペース → 半角
                '\u{3000}' => result.push(' '),
                _ => result.extend(ch.to_lowercase()),
            }
        }

        compress_whitespace(&result)
    }

    /// 選手名の照合用キー: 正規化した上で英数字と空白以外を落とす
    pub fn search_key(text: &str) -> String {
        let normalized: String = Self::normalize(text)
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();
        compress_whitespace(&normalized)
    }
}

fn compress_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fullwidth_to_halfwidth() {
        assert_eq!(TextNormalizer::normalize("Ｂｒｅｎｄａｎ　１０"), "brendan 10");
        assert_eq!(TextNormalizer::normalize("ＡＢＣ"), "abc");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(TextNormalizer::normalize("Jack   Greg\tten"), "jack greg ten");
        assert_eq!(TextNormalizer::normalize("  jack  "), "jack");
        assert_eq!(TextNormalizer::normalize("jack\ngreg"), "jack greg");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        assert_eq!(TextNormalizer::normalize("Brendan, Muhammad."), "brendan, muhammad.");
    }

    #[test]
    fn test_search_key_strips_punctuation() {
        assert_eq!(TextNormalizer::search_key("O'Neil-Smith"), "oneilsmith");
        assert_eq!(TextNormalizer::search_key(" Michael  C. "), "michael c");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(TextNormalizer::normalize(""), "");
        assert_eq!(TextNormalizer::search_key("   "), "");
        assert_eq!(TextNormalizer::search_key("?!"), "");
    }
}
