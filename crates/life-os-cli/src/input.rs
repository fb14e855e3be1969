//! Interactive prompt helpers.

use std::io::{self, Read, Write};

use life_os_core::Result;

/// Print `question`, flush, and read one trimmed line.
pub fn prompt(question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Like [`prompt`], but an empty answer becomes `fallback`.
pub fn prompt_or(question: &str, fallback: &str) -> Result<String> {
    let answer = prompt(question)?;
    if answer.is_empty() {
        Ok(fallback.to_string())
    } else {
        Ok(answer)
    }
}

/// Read stdin to end of stream.
pub fn read_all_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
