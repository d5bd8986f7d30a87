#[macro_use]
extern crate log;

pub mod error;
pub mod models;

pub use error::DeserializationError;
pub use models::{match_turn::MatchTurn, JsonRecord, JsonSerialisable};
