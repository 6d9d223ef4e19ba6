//! Environment configuration for the bot
//!
//! Values come from the process environment (with `.env` support via
//! dotenvy). Only the bot token is mandatory; data paths and the attempt
//! limit have defaults.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::game::DEFAULT_MAX_ATTEMPTS;

pub const DEFAULT_PLAYERS_PATH: &str = "data/players.json";
pub const DEFAULT_PUZZLES_PATH: &str = "data/puzzles.json";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub players_path: PathBuf,
    pub puzzles_path: PathBuf,
    pub max_attempts: u32,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Reads `BOT_TOKEN` (required), `PLAYERS_PATH`, `PUZZLES_PATH` and
    /// `MAX_ATTEMPTS`.
    pub fn from_env() -> Result<Self> {
        // Load .env from the current directory first, then the parent.
        if dotenvy::dotenv().is_err() {
            let _ = dotenvy::from_filename("../.env");
        }

        let bot_token = std::env::var("BOT_TOKEN").map_err(|_| Error::TokenMissing)?;
        if bot_token.trim().is_empty() {
            return Err(Error::TokenMissing);
        }

        Ok(Self {
            bot_token,
            players_path: env_path("PLAYERS_PATH", DEFAULT_PLAYERS_PATH),
            puzzles_path: env_path("PUZZLES_PATH", DEFAULT_PUZZLES_PATH),
            max_attempts: env_or_default("MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
        })
    }
}

fn env_path(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .into()
}

fn env_or_default(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{LazyLock, Mutex};

    static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    struct EnvGuard {
        key: String,
        original: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let original = std::env::var(key).ok();
            std::env::set_var(key, value);
            Self {
                key: key.to_string(),
                original,
            }
        }

        fn unset(key: &str) -> Self {
            let original = std::env::var(key).ok();
            std::env::remove_var(key);
            Self {
                key: key.to_string(),
                original,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.original {
                Some(value) => std::env::set_var(&self.key, value),
                None => std::env::remove_var(&self.key),
            }
        }
    }

    #[test]
    fn test_from_env_requires_token() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::unset("BOT_TOKEN");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::TokenMissing));
    }

    #[test]
    fn test_from_env_rejects_blank_token() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::set("BOT_TOKEN", "   ");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::TokenMissing));
    }

    #[test]
    fn test_from_env_defaults() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guards = [
            EnvGuard::set("BOT_TOKEN", "123:abc"),
            EnvGuard::unset("PLAYERS_PATH"),
            EnvGuard::unset("PUZZLES_PATH"),
            EnvGuard::unset("MAX_ATTEMPTS"),
        ];

        let config = Config::from_env().unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.players_path, PathBuf::from(DEFAULT_PLAYERS_PATH));
        assert_eq!(config.puzzles_path, PathBuf::from(DEFAULT_PUZZLES_PATH));
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_from_env_overrides() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guards = [
            EnvGuard::set("BOT_TOKEN", "123:abc"),
            EnvGuard::set("PLAYERS_PATH", "/tmp/p.json"),
            EnvGuard::set("PUZZLES_PATH", "/tmp/q.json"),
            EnvGuard::set("MAX_ATTEMPTS", "5"),
        ];

        let config = Config::from_env().unwrap();
        assert_eq!(config.players_path, PathBuf::from("/tmp/p.json"));
        assert_eq!(config.puzzles_path, PathBuf::from("/tmp/q.json"));
        assert_eq!(config.max_attempts, 5);
    }

    #[test]
    fn test_invalid_max_attempts_falls_back_to_default() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guards = [
            EnvGuard::set("BOT_TOKEN", "123:abc"),
            EnvGuard::set("MAX_ATTEMPTS", "many"),
        ];

        let config = Config::from_env().unwrap();
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }
}
