//! The interactive menu and its actions, one module per menu entry.

use std::sync::Arc;

use anyhow::Result;

use lexidrill_core::traits::{Dictionary, WordStore};

use crate::prompt;

pub mod browse;
pub mod delete;
pub mod ingest;
pub mod quiz;
pub mod stats;

/// Run the main menu until the user exits (or stdin closes).
pub async fn menu_loop(
    store: Arc<dyn WordStore>,
    dictionary: Arc<dyn Dictionary>,
) -> Result<()> {
    loop {
        println!();
        println!("What would you like to do?");
        println!("1. Add words");
        println!("2. Take a quiz");
        println!("3. Show error-rate statistics");
        println!("4. Browse words by starting letters");
        println!("5. Delete a word");
        println!("6. Exit");

        let Some(choice) = prompt::read_line("Your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => ingest::execute(store.as_ref(), dictionary.as_ref()).await?,
            "2" => quiz::execute(Arc::clone(&store)).await?,
            "3" => stats::execute(store.as_ref()).await?,
            "4" => browse::execute(store.as_ref()).await?,
            "5" => delete::execute(store.as_ref()).await?,
            "6" => break,
            _ => println!("Invalid choice, please enter 1-6."),
        }
    }

    Ok(())
}
