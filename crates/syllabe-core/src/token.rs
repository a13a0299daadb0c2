// Public token types produced by the tokenizer.

/// Token types for free-text tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text.
    None,
    /// Word token (French letters, possibly with an internal hyphen).
    Word,
    /// A run of ASCII digits, candidate for number spelling.
    Number,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Character not used in French text.
    Unknown,
}

/// A text token produced by the tokenizer.
///
/// The exercise generator consumes `Word` and `Number` tokens and
/// ignores the rest; positions are kept so that answers can be mapped
/// back onto the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the input (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// Create an empty `None` token at position 0, signaling end-of-text.
    pub fn none() -> Self {
        Self {
            token_type: TokenType::None,
            text: String::new(),
            token_len: 0,
            pos: 0,
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new_counts_chars_not_bytes() {
        let t = Token::new(TokenType::Word, "\u{00E9}l\u{00E8}ve", 3); // élève
        assert_eq!(t.token_len, 5);
        assert_eq!(t.text.len(), 7); // UTF-8 bytes
        assert_eq!(t.pos, 3);
    }

    #[test]
    fn token_none() {
        let t = Token::none();
        assert_eq!(t.token_type, TokenType::None);
        assert!(t.text.is_empty());
        assert_eq!(t.token_len, 0);
    }

    #[test]
    fn token_default_is_none() {
        assert_eq!(Token::default(), Token::none());
    }
}
