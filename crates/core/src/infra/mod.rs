pub mod grammar;
pub mod matcher;
pub mod speech;
pub mod text;
