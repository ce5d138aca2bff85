//! Interactive confirmation on the terminal

use crate::application::Confirm;
use std::io::{self, BufRead, Write};

/// Asks on stderr and reads a y/N answer from stdin
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
