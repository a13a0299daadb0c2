// syllabe-count: Count syllables in French words.
//
// Reads words from stdin (one per line) and prints the word, its
// syllable count, and whether it is monosyllabic.
//
// Usage:
//   syllabe-count [OPTIONS] [WORD...]
//
// Options:
//   -h, --help   Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if syllabe_cli::wants_help(&args) {
        println!("syllabe-count: Count syllables in French words.");
        println!();
        println!("Usage: syllabe-count [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, counts each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Output: word, syllable count, mono/multi marker.");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let words: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in syllabe_cli::words_or_stdin(words) {
        let count = syllabe_fr::count_syllables(&word);
        let marker = if count == 1 { "mono" } else { "multi" };
        let _ = writeln!(out, "{word} {count} {marker}");
    }
}
