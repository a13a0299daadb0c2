// WASM bindings for French syllabification and number spelling.
//
// The engine is table-driven and needs no dictionary data, so the API
// is a set of free functions exported via wasm-bindgen. Complex return
// types (Token) are serialized to JavaScript values using
// serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   syllabify("regarde");              // => ["re", "gar", "de"]
//   countSyllables("voiture");         // => 2
//   isMonosyllabic("il");              // => true
//   numberToWords("71");               // => "soixante et onze"
//   numberToWordsHyphenated("71");     // => "soixante-et-onze"
//   isNumericString("-42");            // => true
//   tokens("Il regarde.");             // => [{ tokenType: "Word", ... }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use syllabe_core::token::TokenType;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a token.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    token_type: String,
    text: String,
    token_len: usize,
    pos: usize,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn token_type_to_string(tt: TokenType) -> String {
    match tt {
        TokenType::None => "None".to_string(),
        TokenType::Word => "Word".to_string(),
        TokenType::Number => "Number".to_string(),
        TokenType::Punctuation => "Punctuation".to_string(),
        TokenType::Whitespace => "Whitespace".to_string(),
        TokenType::Unknown => "Unknown".to_string(),
    }
}

// ============================================================================
// Exported functions
// ============================================================================

/// Split a French word into syllables.
///
/// Returns an array of syllable strings. The input is always covered:
/// words the engine cannot analyze come back as a single syllable.
#[wasm_bindgen]
pub fn syllabify(word: &str) -> Vec<String> {
    syllabe_fr::syllabify_word(word)
}

/// Count the syllables of a French word.
#[wasm_bindgen(js_name = "countSyllables")]
pub fn count_syllables(word: &str) -> usize {
    syllabe_fr::count_syllables(word)
}

/// Check whether a French word has exactly one syllable.
#[wasm_bindgen(js_name = "isMonosyllabic")]
pub fn is_monosyllabic(word: &str) -> bool {
    syllabe_fr::is_monosyllabic(word)
}

/// Spell a numeric token in French words ("71" => "soixante et onze").
///
/// Returns null if the token is not numeric. Numbers too large to
/// spell come back as their decimal digits.
#[wasm_bindgen(js_name = "numberToWords")]
pub fn number_to_words(token: &str) -> Option<String> {
    if !syllabe_fr::is_numeric_string(token) {
        return None;
    }
    token
        .trim()
        .parse::<i64>()
        .ok()
        .map(syllabe_fr::number_to_words)
}

/// Spell a numeric token with hyphens joining the words, so the result
/// can be fed back into the syllabifier ("71" => "soixante-et-onze").
///
/// Returns null if the token is not numeric or cannot be spelled.
#[wasm_bindgen(js_name = "numberToWordsHyphenated")]
pub fn number_to_words_hyphenated(token: &str) -> Option<String> {
    syllabe_fr::number_to_words_hyphenated(token)
}

/// Check whether a string is a numeric token (optional sign, digits).
#[wasm_bindgen(js_name = "isNumericString")]
pub fn is_numeric_string(token: &str) -> bool {
    syllabe_fr::is_numeric_string(token)
}

/// Tokenize text into a list of tokens.
///
/// Returns a JavaScript array of token objects with fields:
/// `tokenType` ("Word", "Number", "Punctuation", "Whitespace",
/// "Unknown"), `text`, `tokenLen`, `pos`.
#[wasm_bindgen]
pub fn tokens(text: &str) -> Result<JsValue, JsError> {
    let tokens = syllabe_fr::tokenizer::tokens(text);
    let js_tokens: Vec<JsToken> = tokens
        .into_iter()
        .map(|t| JsToken {
            token_type: token_type_to_string(t.token_type),
            text: t.text,
            token_len: t.token_len,
            pos: t.pos,
        })
        .collect();
    serde_wasm_bindgen::to_value(&js_tokens).map_err(|e| JsError::new(&e.to_string()))
}

/// Tokenize text and keep only the word and number tokens, in order.
#[wasm_bindgen(js_name = "wordTokens")]
pub fn word_tokens(text: &str) -> Result<JsValue, JsError> {
    let tokens = syllabe_fr::tokenizer::word_tokens(text);
    let js_tokens: Vec<JsToken> = tokens
        .into_iter()
        .map(|t| JsToken {
            token_type: token_type_to_string(t.token_type),
            text: t.text,
            token_len: t.token_len,
            pos: t.pos,
        })
        .collect();
    serde_wasm_bindgen::to_value(&js_tokens).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the library version string.
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
