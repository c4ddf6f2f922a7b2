pub mod dictation;
pub mod transcoder;
