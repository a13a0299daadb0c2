// syllabe-syllabify: Split French words into syllables.
//
// Reads words from stdin (one per line) and prints the syllable split.
// By default uses '·' as separator.
//
// Usage:
//   syllabe-syllabify [OPTIONS] [WORD...]
//
// Options:
//   --separator SEP   Syllable separator string (default: ·)
//   -h, --help        Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if syllabe_cli::wants_help(&args) {
        println!("syllabe-syllabify: Split French words into syllables.");
        println!();
        println!("Usage: syllabe-syllabify [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, syllabifies each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --separator SEP   Syllable separator string (default: \u{00B7})");
        println!("  -h, --help        Print this help");
        return;
    }

    let mut separator = "\u{00B7}".to_string();
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--separator" => {
                if i + 1 < args.len() {
                    separator = args[i + 1].clone();
                    skip_next = true;
                }
            }
            s if !s.starts_with('-') => words.push(arg.clone()),
            _ => {}
        }
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in syllabe_cli::words_or_stdin(words) {
        let syllables = syllabe_fr::syllabify_word(&word);
        let _ = writeln!(out, "{}", syllables.join(&separator));
    }
}
