// syllabe-cli: shared utilities for CLI tools.

use std::io::BufRead;
use std::process;

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Collect the inputs for a word-at-a-time tool: the given positional
/// items if there are any, otherwise the non-empty lines of stdin.
pub fn words_or_stdin(words: Vec<String>) -> Vec<String> {
    if !words.is_empty() {
        return words;
    }
    let stdin = std::io::stdin();
    let mut out = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| fatal(&format!("failed to read stdin: {e}")));
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    out
}
