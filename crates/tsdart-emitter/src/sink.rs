//! Token sinks.
//!
//! The translator decides which tokens are emitted and in what order; a sink
//! decides what to do with them. `Vec<String>` keeps the raw sequence (handy
//! for tests and for buffering), `TokenWriter` lays tokens out as Dart source.

/// Receiver of emitted tokens, in emission order.
pub trait TokenSink {
    fn emit(&mut self, token: &str);
}

impl TokenSink for Vec<String> {
    fn emit(&mut self, token: &str) {
        self.push(token.to_string());
    }
}

/// Formats a token stream as Dart source text.
///
/// Spacing rules:
/// - no space after `<`, `(`, `[`, `{`, `.` or before `>`, `)`, `]`, `}`, `.`, `,`, `:`
/// - `<` is glued to a preceding word (`List<num>`), and a literal opener is
///   glued to a preceding `>` (`<String>[]`)
/// - `|` is glued on both sides (`String|num`)
/// - `,` and `:` are followed by a space
/// - everything else is separated by one space
#[derive(Debug, Default)]
pub struct TokenWriter {
    output: String,
    last_token: Option<String>,
    token_count: usize,
}

impl TokenWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens written so far.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// The formatted text written so far.
    pub fn text(&self) -> &str {
        &self.output
    }

    /// Consume the writer, returning the formatted text.
    pub fn finish(self) -> String {
        self.output
    }

    fn needs_space(prev: &str, next: &str) -> bool {
        if matches!(prev, "<" | "(" | "[" | "{" | "." | "|") {
            return false;
        }
        if matches!(next, ">" | ")" | "]" | "}" | "." | "," | ":" | "|") {
            return false;
        }
        if next == "<" {
            return !ends_with_word_char(prev);
        }
        if prev == ">" && matches!(next, "[" | "{") {
            return false;
        }
        if next == "[" || next == "(" {
            return !ends_with_word_char(prev) && prev != ")" && prev != "]";
        }
        true
    }
}

fn ends_with_word_char(token: &str) -> bool {
    token
        .chars()
        .next_back()
        .is_some_and(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
}

impl TokenSink for TokenWriter {
    fn emit(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        if let Some(prev) = &self.last_token
            && Self::needs_space(prev, token)
        {
            self.output.push(' ');
        }
        self.output.push_str(token);
        self.last_token = Some(token.to_string());
        self.token_count += 1;
    }
}
