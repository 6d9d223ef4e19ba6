//! Daily football-player guessing game for Telegram
//!
//! This library provides the pieces behind the bot:
//! - Player roster with alias lookup (players.json)
//! - Fixed daily puzzle order (puzzles.json)
//! - Spotle-style attribute feedback for guesses
//! - In-memory per-user daily runs with an attempt limit
//! - Environment configuration

pub mod config;
pub mod error;
pub mod feedback;
pub mod game;
pub mod puzzle;
pub mod roster;

// Re-export common types
pub use config::Config;
pub use error::{Error, Result};
pub use feedback::{Direction, Feedback, Tile, TileColor};
pub use game::{Attempt, GameEngine, GameStore, GuessOutcome, Run, DEFAULT_MAX_ATTEMPTS};
pub use puzzle::Schedule;
pub use roster::{normalize, Player, PositionGroup, Roster};
