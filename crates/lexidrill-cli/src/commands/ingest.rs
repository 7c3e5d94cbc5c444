//! Menu 1: look words up and save them.

use anyhow::Result;

use lexidrill_core::traits::{Dictionary, WordStore};

use crate::prompt;

pub async fn execute(store: &dyn WordStore, dictionary: &dyn Dictionary) -> Result<()> {
    loop {
        let Some(word) = prompt::read_line("Word to add ('0' to return): ")? else {
            return Ok(());
        };
        if word == "0" {
            return Ok(());
        }
        if word.is_empty() {
            continue;
        }

        match dictionary.lookup(&word).await {
            Ok(definition) => {
                store.save(&definition).await?;
                println!("Saved '{}'.", definition.word);
            }
            Err(e) => {
                tracing::debug!(word = %word, error = %e, "lookup failed");
                println!("Could not fetch word info: {e:#}");
            }
        }
    }
}
