// Free-text tokenizer.
//
// Cuts a line of text into the word-like fragments the exercise
// pipeline consumes: words (French letters, with internal hyphens kept
// so that compounds survive), digit runs as number tokens, and
// whitespace/punctuation/unknown as filler. Surrounding punctuation
// never joins a word, and the apostrophe is a boundary: an elision
// like "l'école" yields the two isolated fragments "l" and "école",
// each segmentable on its own.

use syllabe_core::character::{CharType, get_char_type};
use syllabe_core::token::{Token, TokenType};

/// Characters that may join two letters inside one word token.
fn is_word_joiner(c: char) -> bool {
    c == '-'
}

/// Length of the word token starting at the beginning of `text`.
/// The first character is known to be a letter.
fn find_word_end(text: &[char]) -> usize {
    let mut i = 0;
    while i < text.len() {
        match get_char_type(text[i]) {
            CharType::Letter => i += 1,
            // A joiner continues the word only between two letters;
            // a trailing hyphen stays outside the token.
            _ if is_word_joiner(text[i])
                && i + 1 < text.len()
                && get_char_type(text[i + 1]) == CharType::Letter =>
            {
                i += 1;
            }
            _ => break,
        }
    }
    i
}

/// Length of the run of characters of type `ct` at the beginning of
/// `text`.
fn find_run_end(text: &[char], ct: CharType) -> usize {
    let mut i = 0;
    while i < text.len() && get_char_type(text[i]) == ct {
        i += 1;
    }
    i
}

/// Find the next token at the beginning of `text`.
///
/// Returns the token type and its length in characters; the length is
/// zero only for `TokenType::None` at end of input.
pub fn next_token(text: &[char]) -> (TokenType, usize) {
    let Some(&first) = text.first() else {
        return (TokenType::None, 0);
    };
    match get_char_type(first) {
        CharType::Letter => (TokenType::Word, find_word_end(text)),
        CharType::Digit => (TokenType::Number, find_run_end(text, CharType::Digit)),
        CharType::Whitespace => (
            TokenType::Whitespace,
            find_run_end(text, CharType::Whitespace),
        ),
        CharType::Punctuation => (TokenType::Punctuation, 1),
        CharType::Unknown => (TokenType::Unknown, 1),
    }
}

/// Tokenize a whole text into positioned tokens.
pub fn tokens(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let (token_type, len) = next_token(&chars[pos..]);
        if len == 0 {
            break;
        }
        let text: String = chars[pos..pos + len].iter().collect();
        out.push(Token::new(token_type, text, pos));
        pos += len;
    }
    out
}

/// The word and number tokens of a text, in order. This is the exact
/// stream the exercise generator feeds into the syllabifier and the
/// numeric token handler.
pub fn word_tokens(text: &str) -> Vec<Token> {
    tokens(text)
        .into_iter()
        .filter(|t| matches!(t.token_type, TokenType::Word | TokenType::Number))
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn types_and_texts(text: &str) -> Vec<(TokenType, String)> {
        tokens(text)
            .into_iter()
            .map(|t| (t.token_type, t.text))
            .collect()
    }

    #[test]
    fn empty_text() {
        assert!(tokens("").is_empty());
        assert_eq!(next_token(&[]), (TokenType::None, 0));
    }

    #[test]
    fn reference_sentence() {
        let words: Vec<String> = word_tokens("Il regarde la voiture rouge.")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(words, vec!["Il", "regarde", "la", "voiture", "rouge"]);
    }

    #[test]
    fn final_punctuation_is_separate() {
        let ts = types_and_texts("rouge.");
        assert_eq!(
            ts,
            vec![
                (TokenType::Word, "rouge".to_string()),
                (TokenType::Punctuation, ".".to_string()),
            ]
        );
    }

    #[test]
    fn hyphenated_compound_is_one_word() {
        let ts = types_and_texts("un cerf-volant");
        assert_eq!(ts[2], (TokenType::Word, "cerf-volant".to_string()));
    }

    #[test]
    fn trailing_hyphen_stays_outside() {
        let ts = types_and_texts("rouge- bleu");
        assert_eq!(ts[0], (TokenType::Word, "rouge".to_string()));
        assert_eq!(ts[1], (TokenType::Punctuation, "-".to_string()));
    }

    #[test]
    fn apostrophe_splits_elision() {
        let ts = types_and_texts("l'\u{00E9}cole");
        assert_eq!(
            ts,
            vec![
                (TokenType::Word, "l".to_string()),
                (TokenType::Punctuation, "'".to_string()),
                (TokenType::Word, "\u{00E9}cole".to_string()),
            ]
        );
    }

    #[test]
    fn typographic_apostrophe_splits_too() {
        let words: Vec<String> = word_tokens("l\u{2019}\u{00E9}cole")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(words, vec!["l", "\u{00E9}cole"]);
    }

    #[cfg(feature = "syllabify")]
    #[test]
    fn elided_word_segments_after_tokenization() {
        // The article and the noun reach the segmenter as isolated
        // fragments, so "école" keeps its two sounds.
        let counts: Vec<usize> = word_tokens("l'\u{00E9}cole")
            .into_iter()
            .map(|t| crate::syllabifier::count_syllables(&t.text))
            .collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn digit_runs_are_number_tokens() {
        let ts = types_and_texts("il a 21 ans");
        assert_eq!(ts[4], (TokenType::Number, "21".to_string()));
    }

    #[test]
    fn digits_do_not_join_words() {
        // "mp3" tokenizes as a word then a number; the syllabifier
        // would refuse the mixed token anyway.
        let ts = types_and_texts("mp3");
        assert_eq!(
            ts,
            vec![
                (TokenType::Word, "mp".to_string()),
                (TokenType::Number, "3".to_string()),
            ]
        );
    }

    #[test]
    fn accents_and_cedilla_are_letters() {
        let ts = types_and_texts("le\u{00E7}on \u{00E9}l\u{00E8}ve");
        assert_eq!(ts[0].1, "le\u{00E7}on");
        assert_eq!(ts[2].1, "\u{00E9}l\u{00E8}ve");
    }

    #[test]
    fn foreign_letters_are_unknown() {
        let ts = types_and_texts("a\u{0431}");
        assert_eq!(ts[0], (TokenType::Word, "a".to_string()));
        assert_eq!(ts[1].0, TokenType::Unknown);
    }

    #[test]
    fn positions_are_character_offsets() {
        let ts = tokens("\u{00E9}t\u{00E9} 21");
        assert_eq!(ts[0].pos, 0);
        assert_eq!(ts[1].pos, 3); // whitespace
        assert_eq!(ts[2].pos, 4);
    }

    #[test]
    fn french_spacing_before_punctuation() {
        // Narrow no-break space before the question mark
        let ts = types_and_texts("pourquoi\u{202F}?");
        assert_eq!(ts[0].0, TokenType::Word);
        assert_eq!(ts[1].0, TokenType::Whitespace);
        assert_eq!(ts[2].0, TokenType::Punctuation);
    }
}
