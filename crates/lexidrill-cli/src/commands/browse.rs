//! Menu 4: list words by their starting letters.

use anyhow::Result;

use lexidrill_core::traits::WordStore;

use crate::prompt;

pub async fn execute(store: &dyn WordStore) -> Result<()> {
    let Some(prefix) = prompt::read_line("Starting letters: ")? else {
        return Ok(());
    };

    let entries = store.list_by_prefix(&prefix).await?;
    if entries.is_empty() {
        println!("No words starting with '{prefix}'.");
        return Ok(());
    }

    println!("Words starting with '{prefix}':");
    for entry in &entries {
        let pos = if entry.part_of_speech.is_empty() {
            "-"
        } else {
            entry.part_of_speech.as_str()
        };
        println!("{} [{}] {}", entry.word, pos, entry.meaning);
    }
    Ok(())
}
