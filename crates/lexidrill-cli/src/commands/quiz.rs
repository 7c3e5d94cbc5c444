//! Menu 2: the multiple-choice quiz loop.

use std::sync::Arc;

use anyhow::Result;

use lexidrill_core::quiz::{AnswerOption, QuizEngine, MAX_CORRECT_ATTEMPTS};
use lexidrill_core::traits::WordStore;

use crate::prompt;

pub async fn execute(store: Arc<dyn WordStore>) -> Result<()> {
    let engine = QuizEngine::new(store);

    loop {
        let Some(question) = engine.next_question().await? else {
            println!(
                "No eligible words to quiz (each word retires after \
                 {MAX_CORRECT_ATTEMPTS} correct answers)."
            );
            return Ok(());
        };

        println!();
        println!("Word: {}", question.word);
        println!("Pick the matching part of speech and meaning:");
        for (i, option) in question.options.iter().enumerate() {
            println!("{}. {}", i + 1, format_option(option));
        }

        let count = question.options.len();
        let Some(choice) =
            prompt::read_choice(&format!("Your choice (1-{count}, 0 to stop): "), count)?
        else {
            return Ok(());
        };

        let verdict = engine.answer(&question, choice - 1).await?;
        if verdict.was_correct {
            println!("Correct!");
        } else {
            println!("Wrong - the answer is: {}", format_option(&verdict.expected));
        }
    }
}

fn format_option(option: &AnswerOption) -> String {
    if option.part_of_speech.is_empty() {
        option.meaning.clone()
    } else {
        format!("{} - {}", option.part_of_speech, option.meaning)
    }
}
