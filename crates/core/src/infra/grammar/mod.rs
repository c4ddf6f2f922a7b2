//! 発話文法: トークナイザ + バックトラッキング照合
//!
//! `<defender> [and] <attacker> <score>` を最大2チーム分、文頭から読み取る。

pub mod numbers;
mod parser;
pub mod tokenizer;

pub use parser::UtteranceParser;
pub use tokenizer::{Token, TokenKind, Tokenizer};
