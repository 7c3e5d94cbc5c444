//! Menu 3: the error-rate report.

use anyhow::Result;
use comfy_table::{Cell, Table};

use lexidrill_core::traits::WordStore;

pub async fn execute(store: &dyn WordStore) -> Result<()> {
    let report = store.error_rate_report().await?;
    if report.is_empty() {
        println!("No quiz attempts recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Word", "Attempts", "Correct", "Error rate"]);
    for entry in &report {
        table.add_row(vec![
            Cell::new(&entry.word),
            Cell::new(entry.total_attempts),
            Cell::new(entry.correct_attempts),
            Cell::new(format!("{:.2}", entry.error_rate)),
        ]);
    }

    println!("\n{table}");
    Ok(())
}
