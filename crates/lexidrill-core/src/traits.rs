//! Core trait definitions for the word store and the dictionary client.
//!
//! These async traits are implemented by the `lexidrill-store` and
//! `lexidrill-dictionary` crates respectively.

use async_trait::async_trait;

use crate::model::{Definition, ErrorRateEntry, WordEntry};

// ---------------------------------------------------------------------------
// Word store trait
// ---------------------------------------------------------------------------

/// Trait for the durable table of vocabulary entries.
///
/// There is exactly one writer by design; implementations hold the storage
/// handle for the process lifetime and release it at shutdown.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Insert a new entry with both counters at zero. Returns the new id.
    ///
    /// No uniqueness check: re-adding the same word creates a duplicate row.
    async fn save(&self, definition: &Definition) -> anyhow::Result<i64>;

    /// One uniformly random entry among rows still eligible for quizzing
    /// (`correct_attempts < MAX_CORRECT_ATTEMPTS`), or `None` if no such
    /// row exists.
    async fn pick_random_eligible(&self) -> anyhow::Result<Option<WordEntry>>;

    /// Up to `count` uniformly random eligible entries, excluding
    /// `exclude_id`. May return fewer if not enough rows qualify.
    async fn pick_random_distractors(
        &self,
        exclude_id: i64,
        count: u32,
    ) -> anyhow::Result<Vec<WordEntry>>;

    /// Increment `total_attempts` by 1, and `correct_attempts` by 1 iff
    /// `was_correct`.
    async fn record_attempt(&self, id: i64, was_correct: bool) -> anyhow::Result<()>;

    /// All entries whose `word` starts with `prefix`, case-sensitively.
    async fn list_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<WordEntry>>;

    /// Remove every entry whose `word` matches exactly. Returns the number
    /// of rows removed; 0 is a normal no-op, not an error.
    async fn delete_by_word(&self, word: &str) -> anyhow::Result<u64>;

    /// All entries with at least one attempt, annotated with their error
    /// rate and ordered descending by it. Tie order is unspecified.
    async fn error_rate_report(&self) -> anyhow::Result<Vec<ErrorRateEntry>>;
}

// ---------------------------------------------------------------------------
// Dictionary trait
// ---------------------------------------------------------------------------

/// Trait for remote dictionary backends that resolve a word to a definition.
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Human-readable backend name (e.g. "tianapi").
    fn name(&self) -> &str;

    /// Resolve `word` to a definition.
    ///
    /// Errors are `DictionaryError` values: `NotFound` when the API has no
    /// entry for the word, transport variants otherwise. Implementations do
    /// not retry.
    async fn lookup(&self, word: &str) -> anyhow::Result<Definition>;
}
