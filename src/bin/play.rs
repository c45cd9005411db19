// SPDX-License-Identifier: MIT

//! Terminal client for the puzzle game.
//!
//! Logs in against the API, runs the game state machine with a one-second
//! countdown, and submits the final score with the session token. One
//! cooperative loop: `select!` over stdin lines and the interval tick.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tileswap::game::{Board, Game, GameEvent, Screen};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct LeaderboardEntry {
    name: String,
    score: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_base =
        std::env::var("TILESWAP_API").unwrap_or_else(|_| "http://localhost:4000".to_string());
    let client = reqwest::Client::new();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    println!("=== Tileswap ===");
    println!("Enter your name:");
    let username = match lines.next_line().await? {
        Some(line) if !line.trim().is_empty() => line.trim().to_string(),
        _ => anyhow::bail!("A name is required to play"),
    };

    // A failed login blocks game start.
    let token = login(&client, &api_base, &username)
        .await
        .context("Login failed")?;
    println!("Welcome, {}!", username);

    let mut rng = StdRng::from_entropy();
    let mut game = Game::new();
    game.start(&mut rng);
    announce_level(&game);

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    ticker.tick().await; // first tick fires immediately; skip it

    while game.screen() == Screen::Puzzle {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(GameEvent::LevelFailed { level_score }) = game.tick() {
                    println!("Time's up! Level score: {}", level_score);
                } else if game.time_left() % 10 == 0 {
                    println!("{} seconds left", game.time_left());
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                handle_input(&mut game, &mut rng, line.trim());
            }
        }
    }

    let total = game.total_score();
    println!();
    println!("Final score: {} - {}", total, game.comment());

    // Submission failure is logged, not fatal.
    if let Err(e) = submit_score(&client, &api_base, &token, total).await {
        eprintln!("Failed to submit score: {:#}", e);
    }

    tokio::time::sleep(Duration::from_secs(2)).await;
    game.show_leaderboard();
    match fetch_leaderboard(&client, &api_base).await {
        Ok(entries) => {
            println!();
            println!("=== Leaderboard ===");
            for (i, entry) in entries.iter().enumerate() {
                println!("{}. {} - {}", i + 1, entry.name, entry.score);
            }
        }
        Err(e) => eprintln!("Failed to load leaderboard: {:#}", e),
    }

    Ok(())
}

/// Parse a tile index line and route it through the controller.
fn handle_input(game: &mut Game, rng: &mut StdRng, input: &str) {
    let Ok(index) = input.parse::<usize>() else {
        println!("Enter a tile index (0..{})", game.board().tiles().len() - 1);
        return;
    };

    match game.click_tile(index, rng) {
        GameEvent::Selection(_) | GameEvent::Moved => render_board(game.board()),
        GameEvent::LevelCleared {
            level_score,
            next_level,
        } => {
            println!("Level cleared! +{} points", level_score);
            if next_level.is_some() {
                announce_level(game);
            }
        }
        GameEvent::LevelFailed { .. } | GameEvent::Ignored => {}
    }
}

fn announce_level(game: &Game) {
    let level = game.level();
    println!();
    println!(
        "Level {} - {}x{}, {} seconds. Type two tile indices (one per line) to swap them.",
        level.id, level.size, level.size, level.time_limit
    );
    render_board(game.board());
}

fn render_board(board: &Board) {
    let n = board.size();
    let width = (n * n).to_string().len();
    for row in 0..n {
        let cells: Vec<String> = (0..n)
            .map(|col| {
                let i = row * n + col;
                let value = board.tiles()[i];
                if board.selected() == Some(i) {
                    format!("[{:>w$}]", value, w = width)
                } else {
                    format!(" {:>w$} ", value, w = width)
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }
    println!();
}

async fn login(client: &reqwest::Client, api_base: &str, username: &str) -> anyhow::Result<String> {
    let res = client
        .post(format!("{}/api/auth/login-or-register", api_base))
        .json(&json!({ "username": username }))
        .send()
        .await?;

    if !res.status().is_success() {
        anyhow::bail!("server returned {}", res.status());
    }

    Ok(res.json::<LoginResponse>().await?.token)
}

async fn submit_score(
    client: &reqwest::Client,
    api_base: &str,
    token: &str,
    score: i64,
) -> anyhow::Result<()> {
    let res = client
        .post(format!("{}/api/score", api_base))
        .bearer_auth(token)
        .json(&json!({ "score": score }))
        .send()
        .await?;

    if !res.status().is_success() {
        anyhow::bail!("server returned {}", res.status());
    }
    println!("Score submitted.");
    Ok(())
}

async fn fetch_leaderboard(
    client: &reqwest::Client,
    api_base: &str,
) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let res = client
        .get(format!("{}/api/leaderboard", api_base))
        .send()
        .await?;

    if !res.status().is_success() {
        anyhow::bail!("server returned {}", res.status());
    }
    Ok(res.json().await?)
}
