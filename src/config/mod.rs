pub mod settings;

pub use settings::{AppConfig, ChessSettings, HttpSettings};
