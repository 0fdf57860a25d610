//! Splits a query string into raw tokens.
//!
//! The scanner has two states, inside and outside a quoted phrase. Quote
//! characters switch state and are dropped; an unquoted ASCII space ends the
//! current token. Every raw token remembers whether any of its characters
//! were read inside quotes, which is what later makes it an exact phrase.

/// Un-typed substring of the query, delimited by unquoted spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    /// At least one character was accumulated while inside quotes
    pub phrase: bool,
}

impl RawToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            phrase: false,
        }
    }

    pub fn phrase(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            phrase: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Bare,
    InPhrase,
}

/// Tokenize a query string.
///
/// An odd number of quotes leaves the scanner inside a phrase until the end
/// of input, so every later space is kept as content.
pub fn tokenize(query: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut phrase = false;
    let mut state = ScanState::Bare;

    for ch in query.chars() {
        match (state, ch) {
            (ScanState::Bare, '"') => state = ScanState::InPhrase,
            (ScanState::InPhrase, '"') => state = ScanState::Bare,
            (ScanState::Bare, ' ') => {
                if !current.is_empty() {
                    tokens.push(RawToken {
                        text: std::mem::take(&mut current),
                        phrase,
                    });
                }
                phrase = false;
            }
            (ScanState::InPhrase, _) => {
                current.push(ch);
                phrase = true;
            }
            (ScanState::Bare, _) => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(RawToken {
            text: current,
            phrase,
        });
    }

    tokens
}
