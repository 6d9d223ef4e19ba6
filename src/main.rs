//! Footle Bot — Spotle-подобная «игра дня» про футболистов.
//!
//! Бот загадывает игрока дня из фиксированного расписания и сравнивает
//! догадки по атрибутам (дебют, клуб, рейтинг, награды, позиция, страна).
//!
//! Usage:
//!   BOT_TOKEN=... cargo run

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Parser;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use footle_bot::{Attempt, Config, GameEngine, GameStore, GuessOutcome, Roster, Schedule};

#[derive(Parser)]
#[command(name = "footle_bot")]
#[command(about = "Daily football-player guessing game for Telegram", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the player roster JSON (overrides PLAYERS_PATH)
    #[arg(long)]
    players: Option<PathBuf>,

    /// Path to the daily puzzle order JSON (overrides PUZZLES_PATH)
    #[arg(long)]
    puzzles: Option<PathBuf>,

    /// Attempts allowed per run (overrides MAX_ATTEMPTS)
    #[arg(long)]
    max_attempts: Option<u32>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    engine: Arc<GameEngine>,
    store: Arc<GameStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(players) = cli.players {
        config.players_path = players;
    }
    if let Some(puzzles) = cli.puzzles {
        config.puzzles_path = puzzles;
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.max_attempts = max_attempts;
    }

    let roster = Roster::load(&config.players_path)?;
    let schedule = Schedule::load(&config.puzzles_path)?;
    info!(
        players = roster.len(),
        schedule_days = schedule.len(),
        max_attempts = config.max_attempts,
        "Loaded game data"
    );

    let state = AppState {
        engine: Arc::new(GameEngine::new(roster, schedule, config.max_attempts)?),
        store: Arc::new(GameStore::new()),
    };

    info!("Starting Footle Bot...");

    let bot = Bot::new(config.bot_token);

    let handler = dptree::entry().branch(Update::filter_message().endpoint({
        let state = state.clone();
        move |bot, msg| handle_message(bot, state.clone(), msg)
    }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_message(bot: Bot, state: AppState, msg: Message) -> ResponseResult<()> {
    let text = match msg.text() {
        Some(t) => t.trim(),
        None => return Ok(()),
    };
    if text.is_empty() {
        return Ok(());
    }

    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(msg.chat.id.0);
    let today = Local::now().date_naive();
    info!(user_id, chat_id = msg.chat.id.0, text = %text, "incoming");

    let reply = if is_command(text, "start") {
        start_text()
    } else if is_command(text, "help") {
        help_text(state.engine.max_attempts())
    } else if is_command(text, "play") {
        state.store.reset(user_id, today).await;
        play_text(today, state.engine.max_attempts())
    } else if is_command(text, "status") {
        status_text(&state.store.history(user_id, today).await)
    } else {
        // Any other text is a guess, exactly as the original game plays.
        match guess_reply(&state, user_id, today, text).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(error = %err, "Failed to handle guess");
                "Извините, произошла техническая ошибка. Напишите ещё раз.".to_string()
            }
        }
    };

    send_and_log(&bot, msg.chat.id, user_id, &reply).await?;
    Ok(())
}

async fn guess_reply(
    state: &AppState,
    user_id: i64,
    today: NaiveDate,
    text: &str,
) -> footle_bot::Result<String> {
    let answer = state.engine.answer_for(today)?;
    let max_attempts = state.engine.max_attempts();

    let outcome = state
        .store
        .with_run(user_id, today, |run| state.engine.guess(run, answer, text))
        .await;

    Ok(render_outcome(&outcome, max_attempts))
}

fn render_outcome(outcome: &GuessOutcome, max_attempts: u32) -> String {
    match outcome {
        GuessOutcome::UnknownPlayer => {
            "❓ Не нашёл такого игрока в базе. Попробуй другое написание/алиас.".to_string()
        }
        GuessOutcome::AlreadyFinished => {
            "Этот забег уже завершён. Напиши /play чтобы начать сегодняшнюю игру заново."
                .to_string()
        }
        GuessOutcome::OutOfAttempts { answer } => format!(
            "😕 Попытки закончились. Ответ: {answer}\n\n/play — чтобы сыграть заново."
        ),
        GuessOutcome::Correct {
            feedback,
            attempt_no,
        } => format!(
            "🎉 Верно!\n{feedback}\n\n✅ Победа за {attempt_no}/{max_attempts}!\n/play — сыграть заново."
        ),
        GuessOutcome::LastAttempt { feedback, answer } => format!(
            "{feedback}\n\n😕 Попытки закончились. Ответ: {answer}\n\n/play — сыграть заново."
        ),
        GuessOutcome::Progress { feedback } => feedback.to_string(),
    }
}

fn start_text() -> String {
    "⚽️ Spotle-подобная игра про футболистов.\n\n\
     Команды:\n\
     /play — начать сегодняшнюю игру заново\n\
     /status — мои попытки сегодня\n\
     /help — помощь\n\n\
     Пиши имя игрока (пример: messi)."
        .to_string()
}

fn help_text(max_attempts: u32) -> String {
    format!(
        "Обозначения:\n\
         🟩 точно\n\
         🟨 близко\n\
         ⬛️ далеко/не совпало\n\
         ⬆️ нужно больше / позже\n\
         ⬇️ нужно меньше / раньше\n\n\
         Попыток в одном забеге: {max_attempts}\n\
         Можно перезапускать сегодня сколько угодно раз командой /play."
    )
}

fn play_text(day: NaiveDate, max_attempts: u32) -> String {
    format!(
        "🎯 Игра дня ({day}) началась заново!\n\
         Попыток: {max_attempts}\n\
         Напиши имя игрока."
    )
}

fn status_text(history: &[Attempt]) -> String {
    if history.is_empty() {
        return "Сегодня попыток ещё нет. Нажми /play".to_string();
    }

    history
        .iter()
        .map(|a| format!("{}) {}\n{}", a.n, a.guess_text, a.feedback))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn is_command(text: &str, name: &str) -> bool {
    let base = format!("/{name}");
    text == base || text.starts_with(&(base.clone() + " ")) || text.starts_with(&(base + "@"))
}

async fn send_and_log(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    text: &str,
) -> ResponseResult<Message> {
    let sent = bot.send_message(chat_id, text.to_string()).await?;
    info!(user_id, message_id = sent.id.0, "outgoing");
    Ok(sent)
}
