//! フーズボール音声入力のコア。
//!
//! 音声認識の書き起こしテキストを解析し、ロースターの選手と照合して
//! 試合結果（ディフェンダー/アタッカー/スコア）の下書きを組み立てる。

pub mod domain;
pub mod infra;
pub mod usecase;
