//! Core data model types for lexidrill.
//!
//! These are the fundamental types that the entire lexidrill system uses
//! to represent vocabulary entries and their quiz history.

use serde::{Deserialize, Serialize};

/// A stored vocabulary entry with its quiz counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Unique, stable identifier assigned by the store.
    pub id: i64,
    /// The word itself. Duplicates are allowed; nothing deduplicates
    /// re-added words.
    pub word: String,
    /// Part of speech. May be empty.
    #[serde(default)]
    pub part_of_speech: String,
    /// Definition or translation.
    pub meaning: String,
    /// How many times this word has been quizzed.
    #[serde(default)]
    pub total_attempts: i64,
    /// How many of those attempts were answered correctly.
    /// Intended to stay <= `total_attempts`; not enforced.
    #[serde(default)]
    pub correct_attempts: i64,
}

/// A dictionary lookup result, ready to be saved as a new entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// The word as the dictionary returned it.
    pub word: String,
    /// Part of speech. May be empty (the tianapi endpoint never fills it).
    #[serde(default)]
    pub part_of_speech: String,
    /// Definition or translation text.
    pub meaning: String,
}

/// One row of the error-rate report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRateEntry {
    pub word: String,
    pub total_attempts: i64,
    pub correct_attempts: i64,
    /// `(total - correct) / total`, in `[0, 1]` under correct usage.
    pub error_rate: f64,
}
