// syllabe-core: shared types for the syllabe French literacy engine.
//
// This crate is the dependency leaf of the workspace: character
// classification (French vowels/consonants, the contextual "y"),
// generic character types for tokenization, and the public Token types.

pub mod character;
pub mod token;
