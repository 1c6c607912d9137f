use std::io::{self, BufRead, Write};

use chapter_hotkeys_core::{NamePrompt, NameRequest};
use tracing::warn;

/// Prompt answered up front, from the command line.
pub struct PresetPrompt {
    answer: Option<String>,
}

impl PresetPrompt {
    /// Confirm every request with `answer`, or cancel when `None`.
    pub fn new(answer: Option<String>) -> Self {
        Self { answer }
    }
}

impl NamePrompt for PresetPrompt {
    fn ask(&self, _request: &NameRequest) -> Option<String> {
        self.answer.clone()
    }
}

/// Interactive prompt on the terminal. End of input cancels; an empty line
/// keeps the placeholder.
pub struct StdinPrompt;

impl NamePrompt for StdinPrompt {
    fn ask(&self, request: &NameRequest) -> Option<String> {
        let stdin = io::stdin();
        read_answer(request, &mut stdin.lock(), &mut io::stdout())
    }
}

pub(crate) fn read_answer(
    request: &NameRequest,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Option<String> {
    let shown = if request.placeholder.is_empty() {
        format!("{}\n{} ", request.title, request.text)
    } else {
        format!("{}\n{} [{}] ", request.title, request.text, request.placeholder)
    };
    if let Err(e) = output.write_all(shown.as_bytes()).and_then(|_| output.flush()) {
        warn!(error = %e, "Failed to show prompt");
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => {
            let answer = line.trim_end_matches(['\r', '\n']);
            if answer.is_empty() {
                Some(request.placeholder.clone())
            } else {
                Some(answer.to_string())
            }
        }
        Err(e) => {
            warn!(error = %e, "Failed to read prompt answer");
            None
        }
    }
}
