//! Line-based prompting with validated numeric input.
//!
//! Everything the trainer reads from the user goes through here, so bad
//! input is reported and reprompted instead of crashing the process. EOF
//! is surfaced as `None` and treated like an exit wherever it appears.

use std::io::{self, Write};

/// Print `prompt` and read one trimmed line. `None` on EOF.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

enum Choice {
    /// The `0` sentinel.
    Stop,
    /// A valid 1-based selection.
    Pick(usize),
    Invalid,
}

fn parse_choice(line: &str, max: usize) -> Choice {
    match line.parse::<usize>() {
        Ok(0) => Choice::Stop,
        Ok(n) if n <= max => Choice::Pick(n),
        _ => Choice::Invalid,
    }
}

/// Read a 1-based selection in `1..=max`. Returns `None` on the `0`
/// sentinel or EOF; anything else reprompts.
pub fn read_choice(prompt: &str, max: usize) -> io::Result<Option<usize>> {
    loop {
        let Some(line) = read_line(prompt)? else {
            return Ok(None);
        };
        match parse_choice(&line, max) {
            Choice::Stop => return Ok(None),
            Choice::Pick(n) => return Ok(Some(n)),
            Choice::Invalid => {
                println!("Please enter a number between 1 and {max}, or 0 to stop.");
            }
        }
    }
}
