//! Menu 5: delete every entry matching a word.

use anyhow::Result;

use lexidrill_core::traits::WordStore;

use crate::prompt;

pub async fn execute(store: &dyn WordStore) -> Result<()> {
    let Some(word) = prompt::read_line("Word to delete: ")? else {
        return Ok(());
    };
    if word.is_empty() {
        return Ok(());
    }

    let removed = store.delete_by_word(&word).await?;
    if removed == 0 {
        println!("No entries found for '{word}'.");
    } else {
        println!(
            "Removed {} {} for '{}'.",
            removed,
            if removed == 1 { "entry" } else { "entries" },
            word
        );
    }
    Ok(())
}
