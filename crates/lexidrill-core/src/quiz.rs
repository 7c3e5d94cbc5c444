//! Multiple-choice quiz engine.
//!
//! Samples an eligible word from the store, pairs it with random
//! distractors, and scores the user's selection by value equality of the
//! `(part_of_speech, meaning)` pair.

use std::sync::Arc;

use anyhow::Result;
use rand::seq::SliceRandom;

use crate::model::WordEntry;
use crate::traits::WordStore;

/// A word answered correctly this many times is retired from quizzing.
///
/// The filter is on `correct_attempts`, never `total_attempts`: later
/// incorrect answers cannot bring a retired word back.
pub const MAX_CORRECT_ATTEMPTS: i64 = 5;

/// How many incorrect options accompany the correct one.
pub const DISTRACTOR_COUNT: u32 = 3;

/// One answer option: a `(part_of_speech, meaning)` pair.
///
/// Options are compared by value, so a distractor that happens to carry
/// the same pair as the correct answer also scores as correct. Duplicate
/// pairs are possible and not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub part_of_speech: String,
    pub meaning: String,
}

impl From<&WordEntry> for AnswerOption {
    fn from(entry: &WordEntry) -> Self {
        Self {
            part_of_speech: entry.part_of_speech.clone(),
            meaning: entry.meaning.clone(),
        }
    }
}

/// A single prepared question: the word plus its shuffled option set.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    /// Id of the entry being quizzed; attempts are recorded against it.
    pub entry_id: i64,
    /// The word shown to the user.
    pub word: String,
    /// Shuffled options, between 1 and `DISTRACTOR_COUNT + 1` entries.
    pub options: Vec<AnswerOption>,
    correct: AnswerOption,
}

impl QuizQuestion {
    /// The pair that scores as correct.
    pub fn correct_option(&self) -> &AnswerOption {
        &self.correct
    }
}

/// Outcome of answering a question.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub was_correct: bool,
    /// The expected pair, for display after a wrong answer.
    pub expected: AnswerOption,
}

/// The quiz engine: draws questions from a [`WordStore`] and records
/// attempt outcomes back into it.
pub struct QuizEngine {
    store: Arc<dyn WordStore>,
}

impl QuizEngine {
    pub fn new(store: Arc<dyn WordStore>) -> Self {
        Self { store }
    }

    /// Build the next question, or `None` when the pool is exhausted
    /// (store empty, or every word already answered correctly
    /// `MAX_CORRECT_ATTEMPTS` times).
    pub async fn next_question(&self) -> Result<Option<QuizQuestion>> {
        let Some(entry) = self.store.pick_random_eligible().await? else {
            return Ok(None);
        };

        let distractors = self
            .store
            .pick_random_distractors(entry.id, DISTRACTOR_COUNT)
            .await?;
        tracing::debug!(
            word = %entry.word,
            distractors = distractors.len(),
            "drew quiz question"
        );

        let correct = AnswerOption::from(&entry);
        let mut options: Vec<AnswerOption> =
            distractors.iter().map(AnswerOption::from).collect();
        options.push(correct.clone());
        options.shuffle(&mut rand::rng());

        Ok(Some(QuizQuestion {
            entry_id: entry.id,
            word: entry.word,
            options,
            correct,
        }))
    }

    /// Score the selection at `choice` (0-based) and record the attempt.
    ///
    /// The caller validates the range before calling; an out-of-range
    /// index is still rejected here rather than panicking.
    pub async fn answer(&self, question: &QuizQuestion, choice: usize) -> Result<Verdict> {
        let selected = question
            .options
            .get(choice)
            .ok_or_else(|| anyhow::anyhow!("choice {} out of range", choice + 1))?;

        let was_correct = *selected == question.correct;
        self.store
            .record_attempt(question.entry_id, was_correct)
            .await?;

        Ok(Verdict {
            was_correct,
            expected: question.correct.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::model::{Definition, ErrorRateEntry};
    use crate::statistics::{error_rate, rank_by_error_rate};

    /// Deterministic in-memory store: picks the first eligible row instead
    /// of a random one, which is all these tests need.
    #[derive(Default)]
    struct StubStore {
        entries: Mutex<Vec<WordEntry>>,
    }

    impl StubStore {
        fn with_entries(entries: Vec<WordEntry>) -> Self {
            Self {
                entries: Mutex::new(entries),
            }
        }

        fn entry(&self, id: i64) -> WordEntry {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .unwrap()
        }
    }

    fn word(id: i64, word: &str, pos: &str, meaning: &str) -> WordEntry {
        WordEntry {
            id,
            word: word.into(),
            part_of_speech: pos.into(),
            meaning: meaning.into(),
            total_attempts: 0,
            correct_attempts: 0,
        }
    }

    #[async_trait]
    impl WordStore for StubStore {
        async fn save(&self, definition: &Definition) -> anyhow::Result<i64> {
            let mut entries = self.entries.lock().unwrap();
            let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            entries.push(WordEntry {
                id,
                word: definition.word.clone(),
                part_of_speech: definition.part_of_speech.clone(),
                meaning: definition.meaning.clone(),
                total_attempts: 0,
                correct_attempts: 0,
            });
            Ok(id)
        }

        async fn pick_random_eligible(&self) -> anyhow::Result<Option<WordEntry>> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.correct_attempts < MAX_CORRECT_ATTEMPTS)
                .cloned())
        }

        async fn pick_random_distractors(
            &self,
            exclude_id: i64,
            count: u32,
        ) -> anyhow::Result<Vec<WordEntry>> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.id != exclude_id && e.correct_attempts < MAX_CORRECT_ATTEMPTS)
                .take(count as usize)
                .cloned()
                .collect())
        }

        async fn record_attempt(&self, id: i64, was_correct: bool) -> anyhow::Result<()> {
            let mut entries = self.entries.lock().unwrap();
            let entry = entries
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| anyhow::anyhow!("no entry {id}"))?;
            entry.total_attempts += 1;
            if was_correct {
                entry.correct_attempts += 1;
            }
            Ok(())
        }

        async fn list_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<WordEntry>> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.word.starts_with(prefix))
                .cloned()
                .collect())
        }

        async fn delete_by_word(&self, word: &str) -> anyhow::Result<u64> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| e.word != word);
            Ok((before - entries.len()) as u64)
        }

        async fn error_rate_report(&self) -> anyhow::Result<Vec<ErrorRateEntry>> {
            let mut report: Vec<ErrorRateEntry> = self
                .entries
                .lock()
                .unwrap()
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

    fn engine(store: StubStore) -> (Arc<StubStore>, QuizEngine) {
        let store = Arc::new(store);
        (Arc::clone(&store), QuizEngine::new(store))
    }

    #[tokio::test]
    async fn empty_pool_yields_none() {
        let (_, engine) = engine(StubStore::default());
        assert!(engine.next_question().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn retired_words_exhaust_the_pool() {
        let mut entry = word(1, "run", "v", "to move fast");
        entry.correct_attempts = MAX_CORRECT_ATTEMPTS;
        let (_, engine) = engine(StubStore::with_entries(vec![entry]));
        assert!(engine.next_question().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn question_contains_correct_pair() {
        let (_, engine) = engine(StubStore::with_entries(vec![
            word(1, "run", "v", "to move fast"),
            word(2, "cat", "n", "a small feline"),
            word(3, "blue", "adj", "the color of the sky"),
            word(4, "walk", "v", "to move slowly"),
            word(5, "dog", "n", "a loyal companion"),
        ]));

        let question = engine.next_question().await.unwrap().unwrap();
        assert_eq!(question.options.len(), DISTRACTOR_COUNT as usize + 1);
        assert!(question.options.contains(question.correct_option()));
    }

    #[tokio::test]
    async fn small_store_builds_smaller_option_set() {
        let (_, engine) = engine(StubStore::with_entries(vec![
            word(1, "run", "v", "to move fast"),
            word(2, "cat", "n", "a small feline"),
        ]));

        let question = engine.next_question().await.unwrap().unwrap();
        assert_eq!(question.options.len(), 2);
    }

    #[tokio::test]
    async fn correct_answer_updates_both_counters() {
        let (store, engine) = engine(StubStore::with_entries(vec![
            word(1, "run", "v", "to move fast"),
            word(2, "cat", "n", "a small feline"),
        ]));

        let question = engine.next_question().await.unwrap().unwrap();
        let index = question
            .options
            .iter()
            .position(|o| o == question.correct_option())
            .unwrap();

        let verdict = engine.answer(&question, index).await.unwrap();
        assert!(verdict.was_correct);

        let entry = store.entry(question.entry_id);
        assert_eq!(entry.total_attempts, 1);
        assert_eq!(entry.correct_attempts, 1);
    }

    #[tokio::test]
    async fn wrong_answer_updates_only_total() {
        let (store, engine) = engine(StubStore::with_entries(vec![
            word(1, "run", "v", "to move fast"),
            word(2, "cat", "n", "a small feline"),
        ]));

        let question = engine.next_question().await.unwrap().unwrap();
        let index = question
            .options
            .iter()
            .position(|o| o != question.correct_option())
            .unwrap();

        let verdict = engine.answer(&question, index).await.unwrap();
        assert!(!verdict.was_correct);
        assert_eq!(&verdict.expected, question.correct_option());

        let entry = store.entry(question.entry_id);
        assert_eq!(entry.total_attempts, 1);
        assert_eq!(entry.correct_attempts, 0);
    }

    #[tokio::test]
    async fn duplicate_pair_scores_as_correct() {
        // Two entries carrying the same (part_of_speech, meaning) pair:
        // selecting the distractor copy still matches by value.
        let (_, engine) = engine(StubStore::with_entries(vec![
            word(1, "quick", "adj", "fast"),
            word(2, "rapid", "adj", "fast"),
        ]));

        let question = engine.next_question().await.unwrap().unwrap();
        let matching: Vec<usize> = question
            .options
            .iter()
            .enumerate()
            .filter(|(_, o)| *o == question.correct_option())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(matching.len(), 2);

        let verdict = engine.answer(&question, matching[1]).await.unwrap();
        assert!(verdict.was_correct);
    }

    #[tokio::test]
    async fn out_of_range_choice_is_an_error() {
        let (_, engine) = engine(StubStore::with_entries(vec![word(
            1,
            "run",
            "v",
            "to move fast",
        )]));

        let question = engine.next_question().await.unwrap().unwrap();
        assert!(engine.answer(&question, 99).await.is_err());
    }
}
