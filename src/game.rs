//! Per-user daily runs and the guess flow
//!
//! Runs live in process memory only: the backing store for the game is the
//! pair of static JSON files, so a restart simply starts everyone's day
//! fresh. A stored run whose day differs from today is treated as absent.

use std::collections::HashMap;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::feedback::Feedback;
use crate::puzzle::Schedule;
use crate::roster::{Player, Roster};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// One recorded guess with its rendered feedback.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub n: u32,
    pub guess_text: String,
    pub feedback: String,
}

/// A user's run for one day.
#[derive(Debug, Clone)]
pub struct Run {
    pub day: NaiveDate,
    pub attempts: Vec<Attempt>,
    pub finished: bool,
}

impl Run {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day,
            attempts: Vec::new(),
            finished: false,
        }
    }
}

/// Result of submitting one guess.
#[derive(Debug, Clone)]
pub enum GuessOutcome {
    /// Text did not resolve to any roster player.
    UnknownPlayer,
    /// Today's run was already won or lost.
    AlreadyFinished,
    /// No attempts left before this guess; the run is closed now.
    OutOfAttempts { answer: String },
    /// Guessed the target player.
    Correct { feedback: Feedback, attempt_no: u32 },
    /// Wrong guess on the final attempt; the answer is revealed.
    LastAttempt { feedback: Feedback, answer: String },
    /// Wrong guess, attempts remain.
    Progress { feedback: Feedback },
}

/// Game rules: roster + schedule + attempt limit.
#[derive(Debug)]
pub struct GameEngine {
    roster: Roster,
    schedule: Schedule,
    max_attempts: u32,
}

impl GameEngine {
    /// Build the engine, checking the schedule against the roster up front.
    pub fn new(roster: Roster, schedule: Schedule, max_attempts: u32) -> Result<Self> {
        schedule.validate(&roster)?;
        Ok(Self {
            roster,
            schedule,
            max_attempts,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Target player for the given day.
    pub fn answer_for(&self, day: NaiveDate) -> Result<&Player> {
        self.schedule.player_of_the_day(&self.roster, day)
    }

    /// Apply one guess to a run.
    pub fn guess(&self, run: &mut Run, answer: &Player, text: &str) -> GuessOutcome {
        let Some(guessed) = self.roster.resolve(text) else {
            return GuessOutcome::UnknownPlayer;
        };

        if run.finished {
            return GuessOutcome::AlreadyFinished;
        }

        let attempts = run.attempts.len() as u32;
        if attempts >= self.max_attempts {
            run.finished = true;
            return GuessOutcome::OutOfAttempts {
                answer: answer.name.clone(),
            };
        }

        let feedback = Feedback::build(guessed, answer);
        let attempt_no = attempts + 1;
        run.attempts.push(Attempt {
            n: attempt_no,
            guess_text: text.to_string(),
            feedback: feedback.to_string(),
        });

        if guessed.id == answer.id {
            run.finished = true;
            return GuessOutcome::Correct {
                feedback,
                attempt_no,
            };
        }

        if attempt_no >= self.max_attempts {
            run.finished = true;
            return GuessOutcome::LastAttempt {
                feedback,
                answer: answer.name.clone(),
            };
        }

        GuessOutcome::Progress { feedback }
    }
}

/// In-memory run storage keyed by Telegram user id.
#[derive(Debug, Default)]
pub struct GameStore {
    runs: RwLock<HashMap<i64, Run>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start today's run over (the `/play` command).
    pub async fn reset(&self, user_id: i64, day: NaiveDate) {
        let mut runs = self.runs.write().await;
        runs.insert(user_id, Run::new(day));
    }

    /// Today's attempt history, empty if the user has no run for `day`.
    pub async fn history(&self, user_id: i64, day: NaiveDate) -> Vec<Attempt> {
        let runs = self.runs.read().await;
        match runs.get(&user_id) {
            Some(run) if run.day == day => run.attempts.clone(),
            _ => Vec::new(),
        }
    }

    /// Run `f` against the user's run for `day`, creating a fresh run when
    /// there is none or the stored one belongs to another day.
    pub async fn with_run<T>(&self, user_id: i64, day: NaiveDate, f: impl FnOnce(&mut Run) -> T) -> T {
        let mut runs = self.runs.write().await;
        let run = runs.entry(user_id).or_insert_with(|| Run::new(day));
        if run.day != day {
            *run = Run::new(day);
        }
        f(run)
    }
}
