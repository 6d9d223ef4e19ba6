//! Player roster loaded from players.json
//!
//! Each record carries a canonical name, an alias set and the attributes
//! the daily game compares guesses against. Lookups go through a single
//! normalized alias map: id, canonical name and every alias all resolve
//! to the same player.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Normalize a lookup key: trim, lowercase, collapse internal whitespace.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Position group of a player (GK/DEF/MID/FWD in the data files).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionGroup {
    /// Parse a position code, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GK" => Some(PositionGroup::Goalkeeper),
            "DEF" => Some(PositionGroup::Defender),
            "MID" => Some(PositionGroup::Midfielder),
            "FWD" => Some(PositionGroup::Forward),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "GK",
            PositionGroup::Defender => "DEF",
            PositionGroup::Midfielder => "MID",
            PositionGroup::Forward => "FWD",
        }
    }

    /// Russian label shown in feedback tiles.
    pub fn label_ru(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "Вратарь",
            PositionGroup::Defender => "Защитник",
            PositionGroup::Midfielder => "Полузащитник",
            PositionGroup::Forward => "Нападающий",
        }
    }
}

/// A player record with the attributes used for guess comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub debut_year: i32,
    pub iconic_club: String,
    pub fifa_rating: i32,
    pub top_awards: i32,
    pub position_group: PositionGroup,
    pub birth_country: String,
    pub club_emoji: String,
}

/// Raw JSON shape of a roster record.
#[derive(Debug, Deserialize)]
struct RawPlayer {
    id: String,
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    debut_year: i32,
    iconic_club: String,
    fifa_rating: i32,
    top_awards: i32,
    position_group: String,
    birth_country: String,
    #[serde(default)]
    club_emoji: String,
}

/// In-memory roster with alias lookup.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    by_id: HashMap<String, Player>,
    alias_to_id: HashMap<String, String>,
}

impl Roster {
    /// Load the roster from a players.json file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let raw: Vec<RawPlayer> = serde_json::from_str(&content)?;
        Self::from_records(raw)
    }

    fn from_records(records: Vec<RawPlayer>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::Roster("players.json is empty".to_string()));
        }

        let mut by_id = HashMap::new();
        let mut alias_to_id = HashMap::new();

        for raw in records {
            let position_group = PositionGroup::parse(&raw.position_group).ok_or_else(|| {
                Error::Roster(format!(
                    "player '{}': unknown position_group '{}'",
                    raw.id, raw.position_group
                ))
            })?;

            let player = Player {
                id: raw.id,
                name: raw.name,
                aliases: raw.aliases.iter().map(|a| normalize(a)).collect(),
                debut_year: raw.debut_year,
                iconic_club: raw.iconic_club,
                fifa_rating: raw.fifa_rating,
                top_awards: raw.top_awards,
                position_group,
                birth_country: raw.birth_country,
                club_emoji: raw.club_emoji,
            };

            // Canonical id, name and every alias all point at the player.
            alias_to_id.insert(normalize(&player.id), player.id.clone());
            alias_to_id.insert(normalize(&player.name), player.id.clone());
            for alias in &player.aliases {
                alias_to_id.insert(alias.clone(), player.id.clone());
            }

            by_id.insert(player.id.clone(), player);
        }

        Ok(Self { by_id, alias_to_id })
    }

    /// Get a player by exact id.
    pub fn get(&self, id: &str) -> Option<&Player> {
        self.by_id.get(id)
    }

    /// Resolve free-form user text to a player via the alias map.
    pub fn resolve(&self, text: &str) -> Option<&Player> {
        let id = self.alias_to_id.get(&normalize(text))?;
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
