use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

use crate::stats::Stats;

/// Load saved counters, if any were ever written
pub async fn load_stats(pool: &SqlitePool) -> Result<Option<Stats>> {
    let row = sqlx::query(
        r#"
        SELECT games_played, games_won, current_streak, best_streak,
               total_guesses_on_win, best_score
        FROM stats
        WHERE id = 1
        "#,
    )
    .fetch_optional(pool)
    .await
    .context("Failed to load stats")?;

    let Some(row) = row else {
        return Ok(None);
    };

    let count = |name: &str| -> Result<u32> { Ok(row.try_get::<i64, _>(name)? as u32) };

    Ok(Some(Stats {
        games_played: count("games_played")?,
        games_won: count("games_won")?,
        current_streak: count("current_streak")?,
        best_streak: count("best_streak")?,
        total_guesses_on_win: count("total_guesses_on_win")?,
        best_score: row.try_get::<Option<i64>, _>("best_score")?.map(|v| v as u32),
    }))
}

/// Overwrite the saved counters
pub async fn save_stats(pool: &SqlitePool, stats: &Stats) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO stats (id, games_played, games_won, current_streak, best_streak,
                           total_guesses_on_win, best_score)
        VALUES (1, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            games_played = excluded.games_played,
            games_won = excluded.games_won,
            current_streak = excluded.current_streak,
            best_streak = excluded.best_streak,
            total_guesses_on_win = excluded.total_guesses_on_win,
            best_score = excluded.best_score
        "#,
    )
    .bind(stats.games_played as i64)
    .bind(stats.games_won as i64)
    .bind(stats.current_streak as i64)
    .bind(stats.best_streak as i64)
    .bind(stats.total_guesses_on_win as i64)
    .bind(stats.best_score.map(|v| v as i64))
    .execute(pool)
    .await
    .context("Failed to save stats")?;

    Ok(())
}
