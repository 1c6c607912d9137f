use tracing::{debug, instrument};

/// Request for a single line of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRequest {
    /// Window title.
    pub title: String,
    /// Prompt shown above the text field.
    pub text: String,
    /// Pre-filled value, shown selected so typing replaces it.
    pub placeholder: String,
}

impl NameRequest {
    /// Request with an empty placeholder.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            placeholder: String::new(),
        }
    }

    /// Pre-fill the text field.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Modal text prompt provided by the host.
pub trait NamePrompt {
    /// Show the prompt. Returns the raw text on confirm, `None` on cancel.
    fn ask(&self, request: &NameRequest) -> Option<String>;
}

/// Trim leading and trailing spaces and tabs. Other whitespace is kept.
pub fn trim_name(name: &str) -> &str {
    name.trim_matches(|c| c == ' ' || c == '\t')
}

/// Ask for a name and trim the answer.
///
/// Returns `None` when the user cancels. An accepted but blank answer comes
/// back as `Some("")`; callers decide whether that is acceptable.
#[instrument(skip(prompt))]
pub fn ask_for_name(prompt: &dyn NamePrompt, request: &NameRequest) -> Option<String> {
    let Some(answer) = prompt.ask(request) else {
        debug!("Name prompt cancelled");
        return None;
    };

    Some(trim_name(&answer).to_string())
}
