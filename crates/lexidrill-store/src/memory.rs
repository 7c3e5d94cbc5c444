//! In-memory [`WordStore`] for testing.
//!
//! Behaves like the SQLite store without touching disk, so the quiz engine
//! and CLI flows can be exercised against a store that starts empty every
//! run.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use rand::seq::{IndexedRandom, SliceRandom};

use lexidrill_core::model::{Definition, ErrorRateEntry, WordEntry};
use lexidrill_core::quiz::MAX_CORRECT_ATTEMPTS;
use lexidrill_core::statistics::{error_rate, rank_by_error_rate};
use lexidrill_core::traits::WordStore;

#[derive(Default)]
struct Inner {
    entries: Vec<WordEntry>,
    next_id: i64,
}

/// A [`WordStore`] over a plain `Vec`, guarded by a mutex.
///
/// Locks are held only across synchronous sections, never across awaits.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a single entry, for assertions in tests.
    pub fn entry(&self, id: i64) -> Option<WordEntry> {
        self.inner
            .lock()
            .unwrap()
            .entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    async fn save(&self, definition: &Definition) -> Result<i64> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.entries.push(WordEntry {
            id,
            word: definition.word.clone(),
            part_of_speech: definition.part_of_speech.clone(),
            meaning: definition.meaning.clone(),
            total_attempts: 0,
            correct_attempts: 0,
        });
        Ok(id)
    }

    async fn pick_random_eligible(&self) -> Result<Option<WordEntry>> {
        let inner = self.inner.lock().unwrap();
        let eligible: Vec<&WordEntry> = inner
            .entries
            .iter()
            .filter(|e| e.correct_attempts < MAX_CORRECT_ATTEMPTS)
            .collect();
        Ok(eligible.choose(&mut rand::rng()).map(|e| (*e).clone()))
    }

    async fn pick_random_distractors(
        &self,
        exclude_id: i64,
        count: u32,
    ) -> Result<Vec<WordEntry>> {
        let inner = self.inner.lock().unwrap();
        let mut candidates: Vec<&WordEntry> = inner
            .entries
            .iter()
            .filter(|e| e.id != exclude_id && e.correct_attempts < MAX_CORRECT_ATTEMPTS)
            .collect();
        candidates.shuffle(&mut rand::rng());
        Ok(candidates
            .into_iter()
            .take(count as usize)
            .cloned()
            .collect())
    }

    async fn record_attempt(&self, id: i64, was_correct: bool) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        let entry = inner
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| anyhow::anyhow!("no entry with id {id}"))?;
        entry.total_attempts += 1;
        if was_correct {
            entry.correct_attempts += 1;
        }
        Ok(())
    }

    async fn list_by_prefix(&self, prefix: &str) -> Result<Vec<WordEntry>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .entries
            .iter()
            .filter(|e| e.word.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn delete_by_word(&self, word: &str) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.entries.len();
        inner.entries.retain(|e| e.word != word);
        Ok((before - inner.entries.len()) as u64)
    }

    async fn error_rate_report(&self) -> Result<Vec<ErrorRateEntry>> {
        let inner = self.inner.lock().unwrap();
        let mut report: Vec<ErrorRateEntry> = inner
            .entries
            .iter()
            .filter(|e| e.total_attempts > 0)
            .map(|e| ErrorRateEntry {
                word: e.word.clone(),
                total_attempts: e.total_attempts,
                correct_attempts: e.correct_attempts,
                error_rate: error_rate(e.total_attempts, e.correct_attempts),
            })
            .collect();
        rank_by_error_rate(&mut report);
        Ok(report)
    }
}
