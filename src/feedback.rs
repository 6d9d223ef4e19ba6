//! Spotle-style feedback for a guess
//!
//! Compares a guessed player against the answer attribute by attribute and
//! produces six tiles: debut year, iconic club, FIFA rating, top awards,
//! position group and birth country. Numeric tiles carry a direction arrow
//! telling the player which way to move.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::roster::{normalize, Player};

/// Near-miss window for debut year (±2 years).
pub const DEBUT_NEAR_DELTA: i32 = 2;
/// Near-miss window for FIFA rating (±20 points).
pub const FIFA_NEAR_DELTA: i32 = 20;
/// Near-miss window for top awards (±1).
pub const AWARDS_NEAR_DELTA: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileColor {
    /// Exact match.
    Green,
    /// Close: numeric value within the near-delta, or same continent.
    Yellow,
    /// Far off or no match.
    Grey,
}

impl TileColor {
    pub fn emoji(&self) -> &'static str {
        match self {
            TileColor::Green => "🟩",
            TileColor::Yellow => "🟨",
            TileColor::Grey => "⬛️",
        }
    }
}

/// Which way the answer lies relative to the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Hit,
    /// The answer is greater — aim higher / later.
    Higher,
    /// The answer is smaller — aim lower / earlier.
    Lower,
}

impl Direction {
    pub fn of(guess: i32, answer: i32) -> Self {
        if guess == answer {
            Direction::Hit
        } else if answer > guess {
            Direction::Higher
        } else {
            Direction::Lower
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Direction::Hit => "✅",
            Direction::Higher => "⬆️",
            Direction::Lower => "⬇️",
        }
    }
}

/// One attribute comparison.
#[derive(Debug, Clone)]
pub struct Tile {
    pub label: &'static str,
    pub value: String,
    pub color: TileColor,
    pub direction: Option<Direction>,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.color.emoji(), self.label, self.value)?;
        if let Some(direction) = self.direction {
            write!(f, " {}", direction.emoji())?;
        }
        Ok(())
    }
}

/// Structured match report for one guess.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub tiles: Vec<Tile>,
}

impl Feedback {
    /// Compare a guessed player against the answer.
    pub fn build(guess: &Player, answer: &Player) -> Self {
        let club_value = format!("{} {}", guess.club_emoji, guess.iconic_club)
            .trim()
            .to_string();
        let club_hit = normalize(&guess.iconic_club) == normalize(&answer.iconic_club);
        let position_hit = guess.position_group == answer.position_group;

        let tiles = vec![
            Tile {
                label: "Debut",
                value: guess.debut_year.to_string(),
                color: numeric_color(guess.debut_year, answer.debut_year, DEBUT_NEAR_DELTA),
                direction: Some(Direction::of(guess.debut_year, answer.debut_year)),
            },
            Tile {
                label: "Club",
                value: club_value,
                color: bool_color(club_hit),
                direction: None,
            },
            Tile {
                label: "FIFA",
                value: guess.fifa_rating.to_string(),
                color: numeric_color(guess.fifa_rating, answer.fifa_rating, FIFA_NEAR_DELTA),
                direction: Some(Direction::of(guess.fifa_rating, answer.fifa_rating)),
            },
            Tile {
                label: "Awards",
                value: guess.top_awards.to_string(),
                color: numeric_color(guess.top_awards, answer.top_awards, AWARDS_NEAR_DELTA),
                direction: Some(Direction::of(guess.top_awards, answer.top_awards)),
            },
            Tile {
                label: "Position",
                value: guess.position_group.label_ru().to_string(),
                color: bool_color(position_hit),
                direction: None,
            },
            Tile {
                label: "Country",
                value: guess.birth_country.clone(),
                color: country_color(&guess.birth_country, &answer.birth_country),
                direction: None,
            },
        ];

        Self { tiles }
    }
}

impl fmt::Display for Feedback {
    /// Two lines of three tiles joined by " | ".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        let lines: Vec<String> = rendered.chunks(3).map(|row| row.join(" | ")).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

fn numeric_color(guess: i32, answer: i32, near_delta: i32) -> TileColor {
    if guess == answer {
        TileColor::Green
    } else if (guess - answer).abs() <= near_delta {
        TileColor::Yellow
    } else {
        TileColor::Grey
    }
}

fn bool_color(hit: bool) -> TileColor {
    if hit {
        TileColor::Green
    } else {
        TileColor::Grey
    }
}

/// Continent lookup keyed by normalized country name.
static COUNTRY_TO_CONTINENT: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let entries: &[(&str, &str)] = &[
        // Europe
        ("italy", "europe"),
        ("france", "europe"),
        ("spain", "europe"),
        ("portugal", "europe"),
        ("england", "europe"),
        ("uk", "europe"),
        ("united kingdom", "europe"),
        ("netherlands", "europe"),
        ("germany", "europe"),
        ("croatia", "europe"),
        ("serbia", "europe"),
        ("belgium", "europe"),
        ("poland", "europe"),
        ("sweden", "europe"),
        ("norway", "europe"),
        ("denmark", "europe"),
        ("switzerland", "europe"),
        ("austria", "europe"),
        ("russia", "europe"),
        // North America
        ("usa", "north_america"),
        ("united states", "north_america"),
        ("mexico", "north_america"),
        ("canada", "north_america"),
        // South America
        ("brazil", "south_america"),
        ("argentina", "south_america"),
        ("uruguay", "south_america"),
        ("colombia", "south_america"),
        ("chile", "south_america"),
        // Asia
        ("japan", "asia"),
        ("south korea", "asia"),
        ("korea", "asia"),
        ("china", "asia"),
        ("iran", "asia"),
        ("saudi arabia", "asia"),
        ("turkey", "asia"),
        // Africa
        ("nigeria", "africa"),
        ("senegal", "africa"),
        ("egypt", "africa"),
        ("morocco", "africa"),
        ("cameroon", "africa"),
        // Oceania
        ("australia", "oceania"),
        ("new zealand", "oceania"),
    ];
    entries.iter().copied().collect()
});

/// Continent of a country, if known.
pub fn continent_of(country: &str) -> Option<&'static str> {
    COUNTRY_TO_CONTINENT.get(normalize(country).as_str()).copied()
}

/// Green on exact country match, yellow on same known continent, grey otherwise.
fn country_color(guess: &str, answer: &str) -> TileColor {
    if normalize(guess) == normalize(answer) {
        return TileColor::Green;
    }
    match (continent_of(guess), continent_of(answer)) {
        (Some(g), Some(a)) if g == a => TileColor::Yellow,
        _ => TileColor::Grey,
    }
}
