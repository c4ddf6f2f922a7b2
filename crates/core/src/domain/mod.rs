pub mod error;
pub mod game;
pub mod session;
pub mod settings;
pub mod types;
