//! The unit flowing from the tokenizer through the filters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One word of symptom text.
///
/// ```
/// use dosha::analysis::token::Token;
///
/// let token = Token::at("skin", 1, 4);
/// assert_eq!(token.text, "skin");
/// assert_eq!(token.end(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Index among the tokens of the same text.
    pub position: usize,
    /// Byte offset of the first character in the source text.
    pub offset: usize,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::at(text, position, 0)
    }

    pub fn at<S: Into<String>>(text: S, position: usize, offset: usize) -> Self {
        Token {
            text: text.into(),
            position,
            offset,
        }
    }

    /// Byte offset one past the last character, as long as the text has not
    /// been rewritten to a different length.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn map_text<F: FnOnce(&str) -> String>(mut self, f: F) -> Self {
        self.text = f(&self.text);
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tokens handed from one stage to the next.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
