//! Mock dictionary for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use lexidrill_core::error::DictionaryError;
use lexidrill_core::model::Definition;
use lexidrill_core::traits::Dictionary;

/// A mock dictionary for exercising ingest and quiz flows without real
/// API calls.
///
/// Returns configured definitions by exact word match and a `NotFound`
/// error for everything else.
pub struct MockDictionary {
    /// Map of word → definition.
    definitions: HashMap<String, Definition>,
    /// Message carried by the `NotFound` error for unknown words.
    not_found_message: String,
    /// Number of lookups made.
    call_count: AtomicU32,
    /// Last word looked up.
    last_word: Mutex<Option<String>>,
}

impl MockDictionary {
    pub fn new(definitions: HashMap<String, Definition>) -> Self {
        Self {
            definitions,
            not_found_message: "word error".to_string(),
            call_count: AtomicU32::new(0),
            last_word: Mutex::new(None),
        }
    }

    /// Convenience constructor from `(word, meaning)` pairs; the part of
    /// speech stays empty like the real endpoint's.
    pub fn with_words(words: &[(&str, &str)]) -> Self {
        let definitions = words
            .iter()
            .map(|(word, meaning)| {
                (
                    (*word).to_string(),
                    Definition {
                        word: (*word).to_string(),
                        part_of_speech: String::new(),
                        meaning: (*meaning).to_string(),
                    },
                )
            })
            .collect();
        Self::new(definitions)
    }

    /// Get the number of lookups made against this mock.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last word looked up.
    pub fn last_word(&self) -> Option<String> {
        self.last_word.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dictionary for MockDictionary {
    fn name(&self) -> &str {
        "mock"
    }

    async fn lookup(&self, word: &str) -> anyhow::Result<Definition> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_word.lock().unwrap() = Some(word.to_string());

        match self.definitions.get(word) {
            Some(definition) => Ok(definition.clone()),
            None => Err(DictionaryError::NotFound {
                message: self.not_found_message.clone(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_word_resolves() {
        let mock = MockDictionary::with_words(&[("run", "to move fast")]);

        let definition = mock.lookup("run").await.unwrap();
        assert_eq!(definition.meaning, "to move fast");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.last_word().as_deref(), Some("run"));
    }

    #[tokio::test]
    async fn unknown_word_is_not_found() {
        let mock = MockDictionary::with_words(&[("run", "to move fast")]);

        let err = mock.lookup("ghost").await.unwrap_err();
        assert!(err
            .downcast_ref::<DictionaryError>()
            .unwrap()
            .is_not_found());
        assert_eq!(mock.call_count(), 1);
    }
}
