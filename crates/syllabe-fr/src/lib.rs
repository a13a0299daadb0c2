// syllabe-fr: French language engine for the syllabe literacy trainer.
//
// Everything in this crate is a pure function over one word (or one
// numeric token) at a time: no I/O, no shared state, no allocation kept
// across calls. The syllabifier decides how many spoken "sounds" a word
// has; the numerals module spells integers in French so that numeric
// tokens can be fed through the same segmentation; the tokenizer cuts
// free text into word-like fragments for both.

#[cfg(feature = "numerals")]
pub mod numerals;
#[cfg(feature = "syllabify")]
pub mod syllabifier;
#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "numerals")]
pub use numerals::{is_numeric_string, number_to_words, number_to_words_hyphenated};
#[cfg(feature = "syllabify")]
pub use syllabifier::{count_syllables, is_monosyllabic, syllabify_word};
