//! lexidrill-dictionary — remote dictionary integration.
//!
//! Implements the `Dictionary` trait for the tianapi English-words
//! endpoint, provides a mock dictionary for tests, and loads the trainer
//! configuration (API key, database location).

pub mod config;
pub mod mock;
pub mod tianapi;

pub use config::{create_dictionary, load_config, load_config_from, TrainerConfig};
pub use mock::MockDictionary;
pub use tianapi::TianapiDictionary;
