//! Daily puzzle schedule loaded from puzzles.json
//!
//! The schedule is a fixed ordered list of player ids. The target for a
//! given date is `day_number % order.len()`, where the day number is the
//! proleptic-Gregorian ordinal (0001-01-01 is day 1), so the rotation is
//! stable across restarts and deployments.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::roster::{Player, Roster};

#[derive(Debug, Deserialize)]
struct RawSchedule {
    #[serde(default)]
    order: Vec<String>,
}

/// Fixed daily puzzle order.
#[derive(Debug, Clone)]
pub struct Schedule {
    order: Vec<String>,
}

impl Schedule {
    /// Load the schedule from a puzzles.json file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let raw: RawSchedule = serde_json::from_str(&content)?;
        Self::from_order(raw.order)
    }

    pub fn from_order(order: Vec<String>) -> Result<Self> {
        if order.is_empty() {
            return Err(Error::Schedule("puzzles.json: order is empty".to_string()));
        }
        Ok(Self { order })
    }

    /// Check that every scheduled id exists in the roster.
    pub fn validate(&self, roster: &Roster) -> Result<()> {
        for id in &self.order {
            if roster.get(id).is_none() {
                return Err(Error::UnknownPlayerId(id.clone()));
            }
        }
        Ok(())
    }

    /// Id of the target player for a given date.
    pub fn player_id_for(&self, date: NaiveDate) -> &str {
        let idx = date
            .num_days_from_ce()
            .rem_euclid(self.order.len() as i32) as usize;
        &self.order[idx]
    }

    /// Target player for a given date, resolved against the roster.
    pub fn player_of_the_day<'a>(&self, roster: &'a Roster, date: NaiveDate) -> Result<&'a Player> {
        let id = self.player_id_for(date);
        roster
            .get(id)
            .ok_or_else(|| Error::UnknownPlayerId(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_order_is_error() {
        let err = Schedule::from_order(vec![]).unwrap_err();
        assert!(matches!(err, Error::Schedule(_)));
        assert!(err.to_string().contains("order is empty"));
    }

    #[test]
    fn test_player_id_for_wraps_by_day_number() {
        let schedule =
            Schedule::from_order(vec!["a".into(), "b".into(), "c".into()]).unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let first = schedule.player_id_for(day).to_string();
        let next = schedule.player_id_for(day.succ_opt().unwrap()).to_string();

        assert_ne!(first, next);
        // Full cycle length equals the order length.
        let again = schedule.player_id_for(day + chrono::Days::new(3));
        assert_eq!(first, again);
    }

    #[test]
    fn test_player_id_for_is_stable() {
        let schedule =
            Schedule::from_order(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        assert_eq!(schedule.player_id_for(day), schedule.player_id_for(day));
    }

    #[test]
    fn test_load_parses_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles.json");
        std::fs::write(&path, r#"{"order": ["messi", "buffon"]}"#).unwrap();

        let schedule = Schedule::load(&path).unwrap();
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_load_missing_order_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles.json");
        std::fs::write(&path, r#"{}"#).unwrap();

        let err = Schedule::load(&path).unwrap_err();
        assert!(matches!(err, Error::Schedule(_)));
    }

    #[test]
    fn test_validate_rejects_unknown_ids() {
        let schedule = Schedule::from_order(vec!["ghost".into()]).unwrap();
        let roster = Roster::default();

        let err = schedule.validate(&roster).unwrap_err();
        assert!(matches!(err, Error::UnknownPlayerId(ref id) if id == "ghost"));
    }
}
