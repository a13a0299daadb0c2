// syllabe-tokenize: Tokenize French text from stdin.
//
// Reads text from stdin and prints tokens with their types.
//
// Usage:
//   syllabe-tokenize [OPTIONS]
//
// Options:
//   --words      Only print word and number tokens
//   -h, --help   Print help

use std::io::{self, Read, Write};
use syllabe_core::token::TokenType;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if syllabe_cli::wants_help(&args) {
        println!("syllabe-tokenize: Tokenize French text.");
        println!();
        println!("Usage: syllabe-tokenize [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints tokens with types:");
        println!("  WORD:        <text>");
        println!("  NUMBER:      <text>");
        println!("  PUNCTUATION: <text>");
        println!("  WHITESPACE:  <text>");
        println!("  UNKNOWN:     <text>");
        println!();
        println!("Options:");
        println!("  --words      Only print word and number tokens");
        println!("  -h, --help   Print this help");
        return;
    }

    let words_only = args.iter().any(|a| a == "--words");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| syllabe_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let tokens = if words_only {
        syllabe_fr::tokenizer::word_tokens(&input)
    } else {
        syllabe_fr::tokenizer::tokens(&input)
    };

    for token in tokens {
        let type_str = match token.token_type {
            TokenType::Word => "WORD",
            TokenType::Number => "NUMBER",
            TokenType::Punctuation => "PUNCTUATION",
            TokenType::Whitespace => "WHITESPACE",
            TokenType::Unknown => "UNKNOWN",
            TokenType::None => "NONE",
        };
        let display_text = token
            .text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        let _ = writeln!(
            out,
            "{type_str:13} [{:>4}..{:>4}]: {display_text}",
            token.pos,
            token.pos + token.token_len
        );
    }
}
