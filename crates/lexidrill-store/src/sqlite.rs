//! SQLite-backed [`WordStore`].
//!
//! One `words` table, one single-connection pool held for the process
//! lifetime. All sampling happens in SQL with `ORDER BY RANDOM()`.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use lexidrill_core::model::{Definition, ErrorRateEntry, WordEntry};
use lexidrill_core::quiz::MAX_CORRECT_ATTEMPTS;
use lexidrill_core::traits::WordStore;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL,
    part_of_speech TEXT,
    meaning TEXT,
    total_attempts INTEGER DEFAULT 0,
    correct_attempts INTEGER DEFAULT 0
)";

const COLUMNS: &str = "id, word, part_of_speech, meaning, total_attempts, correct_attempts";

/// Row as stored; `part_of_speech`/`meaning` are nullable in the schema.
#[derive(sqlx::FromRow)]
struct WordRow {
    id: i64,
    word: String,
    part_of_speech: Option<String>,
    meaning: Option<String>,
    total_attempts: i64,
    correct_attempts: i64,
}

impl From<WordRow> for WordEntry {
    fn from(row: WordRow) -> Self {
        Self {
            id: row.id,
            word: row.word,
            part_of_speech: row.part_of_speech.unwrap_or_default(),
            meaning: row.meaning.unwrap_or_default(),
            total_attempts: row.total_attempts,
            correct_attempts: row.correct_attempts,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReportRow {
    word: String,
    total_attempts: i64,
    correct_attempts: i64,
    error_rate: f64,
}

/// The durable word store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and ensure the
    /// `words` table exists. Idempotent.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect(options)
            .await
            .with_context(|| format!("failed to open word store at {}", path.display()))
    }

    /// An in-memory store with the same schema, for tests.
    pub async fn in_memory() -> Result<Self> {
        Self::connect(SqliteConnectOptions::new().filename(":memory:")).await
    }

    async fn connect(options: SqliteConnectOptions) -> Result<Self> {
        // One writer, one reader: a single pinned connection. The pool must
        // never recycle it, or an in-memory database would vanish mid-run.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;
        tracing::debug!("word store ready");

        Ok(Self { pool })
    }

    /// Release the storage handle. Called once at normal shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl WordStore for SqliteStore {
    async fn save(&self, definition: &Definition) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO words (word, part_of_speech, meaning, total_attempts, correct_attempts)
             VALUES (?, ?, ?, 0, 0)",
        )
        .bind(&definition.word)
        .bind(&definition.part_of_speech)
        .bind(&definition.meaning)
        .execute(&self.pool)
        .await
        .context("failed to save word")?;

        Ok(result.last_insert_rowid())
    }

    async fn pick_random_eligible(&self) -> Result<Option<WordEntry>> {
        let row: Option<WordRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM words
             WHERE correct_attempts < ?
             ORDER BY RANDOM() LIMIT 1"
        ))
        .bind(MAX_CORRECT_ATTEMPTS)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(WordEntry::from))
    }

    async fn pick_random_distractors(
        &self,
        exclude_id: i64,
        count: u32,
    ) -> Result<Vec<WordEntry>> {
        let rows: Vec<WordRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM words
             WHERE id != ? AND correct_attempts < ?
             ORDER BY RANDOM() LIMIT ?"
        ))
        .bind(exclude_id)
        .bind(MAX_CORRECT_ATTEMPTS)
        .bind(i64::from(count))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WordEntry::from).collect())
    }

    async fn record_attempt(&self, id: i64, was_correct: bool) -> Result<()> {
        let result = sqlx::query(
            "UPDATE words
             SET total_attempts = total_attempts + 1,
                 correct_attempts = correct_attempts + ?
             WHERE id = ?",
        )
        .bind(if was_correct { 1i64 } else { 0 })
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(id, "recorded attempt for unknown entry");
        }
        Ok(())
    }

    async fn list_by_prefix(&self, prefix: &str) -> Result<Vec<WordEntry>> {
        // substr comparison instead of LIKE: case-sensitive, and % / _ in
        // the prefix match themselves.
        let rows: Vec<WordRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM words
             WHERE substr(word, 1, length(?)) = ?"
        ))
        .bind(prefix)
        .bind(prefix)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WordEntry::from).collect())
    }

    async fn delete_by_word(&self, word: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM words WHERE word = ?")
            .bind(word)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn error_rate_report(&self) -> Result<Vec<ErrorRateEntry>> {
        let rows: Vec<ReportRow> = sqlx::query_as(
            "SELECT word, total_attempts, correct_attempts,
                    (total_attempts - correct_attempts) * 1.0 / total_attempts AS error_rate
             FROM words
             WHERE total_attempts > 0
             ORDER BY error_rate DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ErrorRateEntry {
                word: r.word,
                total_attempts: r.total_attempts,
                correct_attempts: r.correct_attempts,
                error_rate: r.error_rate,
            })
            .collect())
    }
}
