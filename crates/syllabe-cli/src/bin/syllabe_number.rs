// syllabe-number: Spell numbers in French words.
//
// Reads numeric tokens from stdin (one per line) and prints the French
// spelling. Tokens that are not numeric, or fall outside the spellable
// range, are printed back unchanged.
//
// Usage:
//   syllabe-number [OPTIONS] [NUMBER...]
//
// Options:
//   --hyphenated   Join the spelling with hyphens (vingt-et-un)
//   -h, --help     Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if syllabe_cli::wants_help(&args) {
        println!("syllabe-number: Spell numbers in French words.");
        println!();
        println!("Usage: syllabe-number [OPTIONS] [NUMBER...]");
        println!();
        println!("If NUMBER arguments are given, spells each one.");
        println!("Otherwise reads numbers from stdin (one per line).");
        println!("Non-numeric tokens are printed back unchanged.");
        println!();
        println!("Options:");
        println!("  --hyphenated   Join the spelling with hyphens (vingt-et-un)");
        println!("  -h, --help     Print this help");
        return;
    }

    let hyphenated = args.iter().any(|a| a == "--hyphenated");
    let tokens: Vec<String> = args
        .into_iter()
        .filter(|a| !a.starts_with("--"))
        .collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in syllabe_cli::words_or_stdin(tokens) {
        let spelled = if hyphenated {
            syllabe_fr::number_to_words_hyphenated(&token)
        } else {
            token
                .trim()
                .parse::<i64>()
                .ok()
                .map(syllabe_fr::number_to_words)
        };
        match spelled {
            Some(text) => {
                let _ = writeln!(out, "{text}");
            }
            None => {
                let _ = writeln!(out, "{token}");
            }
        }
    }
}
