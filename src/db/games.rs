use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use super::models::{CompletedGame, GameSummary, StoredGuess, deserialize_result, serialize_result};

/// Write a finished game and all its guesses in one transaction
pub async fn record_completed_game(pool: &SqlitePool, game: &CompletedGame) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO games (timestamp, digit_count, allow_repeats, difficulty, target, guesses_count)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(game.timestamp.to_rfc3339())
    .bind(game.config.digit_count as i64)
    .bind(game.config.allow_repeats())
    .bind(game.config.difficulty.to_string())
    .bind(&game.target)
    .bind(game.guesses.len() as i64)
    .execute(&mut *tx)
    .await
    .context("Failed to create game")?;

    let game_id = result.last_insert_rowid();

    for (i, record) in game.guesses.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO game_guesses (game_id, guess_number, guess, result)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(game_id)
        .bind(i as i64 + 1)
        .bind(record.guess.to_string())
        .bind(serialize_result(&record.raw))
        .execute(&mut *tx)
        .await
        .context("Failed to add guess")?;
    }

    tx.commit().await?;

    Ok(game_id)
}

/// Most recent games first
pub async fn recent_games(pool: &SqlitePool, limit: i64) -> Result<Vec<GameSummary>> {
    let rows = sqlx::query(
        r#"
        SELECT id, timestamp, digit_count, allow_repeats, difficulty, target, guesses_count
        FROM games
        ORDER BY timestamp DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| -> Result<GameSummary> {
            let timestamp: String = row.try_get("timestamp")?;
            let timestamp = DateTime::parse_from_rfc3339(&timestamp)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now());
            let difficulty: String = row.try_get("difficulty")?;

            Ok(GameSummary {
                id: row.try_get("id")?,
                timestamp,
                digit_count: row.try_get::<i64, _>("digit_count")? as usize,
                allow_repeats: row.try_get("allow_repeats")?,
                difficulty: difficulty.parse().unwrap_or_default(),
                target: row.try_get("target")?,
                guesses_count: row.try_get::<i64, _>("guesses_count")? as usize,
            })
        })
        .collect()
}

/// Guesses of one game in submission order
pub async fn game_guesses(pool: &SqlitePool, game_id: i64) -> Result<Vec<StoredGuess>> {
    let rows = sqlx::query(
        r#"
        SELECT guess_number, guess, result
        FROM game_guesses
        WHERE game_id = ?
        ORDER BY guess_number ASC
        "#,
    )
    .bind(game_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| -> Result<StoredGuess> {
            let result: String = row.try_get("result")?;
            Ok(StoredGuess {
                guess_number: row.try_get("guess_number")?,
                guess: row.try_get("guess")?,
                result: deserialize_result(&result)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{DifficultyMode, MatchPolicy, SessionConfig},
        db::create_memory_pool,
        digits::DigitString,
        session::GameSession,
        stats::StatsTracker,
    };

    fn won_session(target: &str, misses: &[&str]) -> GameSession {
        let config = SessionConfig::new(target.len(), false).with_difficulty(DifficultyMode::Hard);
        let target = DigitString::parse(target, target.len(), MatchPolicy::Unique).unwrap();
        let mut session = GameSession::with_target(config, target.clone());
        let mut stats = StatsTracker::new();

        for miss in misses {
            session.submit_guess(miss, &mut stats).unwrap();
        }
        session.submit_guess(&target.to_string(), &mut stats).unwrap();
        session
    }

    #[tokio::test]
    async fn test_record_and_read_back() {
        let pool = create_memory_pool().await.unwrap();
        let session = won_session("4321", &["1234", "4312"]);
        let game = CompletedGame::from_session(&session, Utc::now());

        let id = record_completed_game(&pool, &game).await.unwrap();

        let games = recent_games(&pool, 10).await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, id);
        assert_eq!(games[0].target, "4321");
        assert_eq!(games[0].guesses_count, 3);
        assert_eq!(games[0].digit_count, 4);
        assert!(!games[0].allow_repeats);
        assert_eq!(games[0].difficulty, DifficultyMode::Hard);

        let guesses = game_guesses(&pool, id).await.unwrap();
        let words: Vec<&str> = guesses.iter().map(|g| g.guess.as_str()).collect();
        assert_eq!(words, vec!["1234", "4312", "4321"]);
        assert_eq!(guesses[1].result, session.history().records()[1].raw);
        assert!(guesses[2].result.is_solved());
    }

    #[tokio::test]
    async fn test_recent_games_limit_and_order() {
        let pool = create_memory_pool().await.unwrap();
        let base = Utc::now();

        for (i, target) in ["123", "456", "789"].iter().enumerate() {
            let session = won_session(target, &[]);
            let ts = base + chrono::Duration::seconds(i as i64);
            record_completed_game(&pool, &CompletedGame::from_session(&session, ts))
                .await
                .unwrap();
        }

        let games = recent_games(&pool, 2).await.unwrap();
        let targets: Vec<&str> = games.iter().map(|g| g.target.as_str()).collect();
        assert_eq!(targets, vec!["789", "456"]);
    }
}
