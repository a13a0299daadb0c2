//! Golden-file tests: compare engine output against a curated fixture.
//!
//! The fixture lives at `tests/golden/syllables.json` and holds the
//! expected syllable splits for a word list spanning every rule of the
//! engine, plus the expected spellings for the irregular number bands.
//!
//! Run: cargo test -p syllabe-fr --test golden

use std::path::PathBuf;

use serde_json::Value;

use syllabe_fr::{
    count_syllables, is_monosyllabic, number_to_words, number_to_words_hyphenated, syllabify_word,
};

/// Load and parse the golden JSON fixture.
fn load_golden() -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/syllables.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

/// Render a syllable split the way the fixture diffs read best:
/// "re·gar·de".
fn render(syllables: &[String]) -> String {
    syllables.join("\u{00B7}")
}

fn golden_words() -> Vec<(String, Vec<String>)> {
    load_golden()["words"]
        .as_array()
        .expect("words array")
        .iter()
        .map(|entry| {
            let word = entry["word"].as_str().expect("word").to_string();
            let syllables = entry["syllables"]
                .as_array()
                .expect("syllables array")
                .iter()
                .map(|s| s.as_str().expect("syllable").to_string())
                .collect();
            (word, syllables)
        })
        .collect()
}

#[test]
fn golden_syllable_splits() {
    let mut failures = Vec::new();
    for (word, expected) in golden_words() {
        let actual = syllabify_word(&word);
        if actual != expected {
            failures.push(format!(
                "  {word}: expected {}, got {}",
                render(&expected),
                render(&actual)
            ));
        }
    }
    assert!(
        failures.is_empty(),
        "golden mismatches:\n{}",
        failures.join("\n")
    );
}

#[test]
fn golden_words_satisfy_invariants() {
    for (word, _) in golden_words() {
        let syllables = syllabify_word(&word);
        assert!(!syllables.is_empty(), "{word}: empty split");
        assert!(
            syllables.iter().all(|s| !s.is_empty()),
            "{word}: empty syllable in {}",
            render(&syllables)
        );
        assert_eq!(count_syllables(&word), syllables.len(), "{word}: count");
        // Hyphenated compounds drop their hyphens; everything else
        // must reconstruct exactly.
        if !word.contains('-') {
            assert_eq!(syllables.concat(), word, "{word}: reconstruction");
        } else {
            assert_eq!(
                syllables.concat(),
                word.replace('-', ""),
                "{word}: reconstruction modulo hyphens"
            );
        }
    }
}

#[test]
fn golden_number_spellings() {
    let golden = load_golden();
    for entry in golden["numbers"].as_array().expect("numbers array") {
        let value = entry["value"].as_i64().expect("value");
        let words = entry["words"].as_str().expect("words");
        let hyphenated = entry["hyphenated"].as_str().expect("hyphenated");
        assert_eq!(number_to_words(value), words, "spelling of {value}");
        assert_eq!(
            number_to_words_hyphenated(&value.to_string()).as_deref(),
            Some(hyphenated),
            "hyphenated spelling of {value}"
        );
        // Every spellable number must survive the syllabifier.
        let syllables = syllabify_word(hyphenated);
        assert!(
            !syllables.is_empty() && syllables.iter().all(|s| !s.is_empty()),
            "{value}: bad split {}",
            render(&syllables)
        );
    }
}

#[test]
fn end_to_end_reference_sentence() {
    let words = syllabe_fr::tokenizer::word_tokens("Il regarde la voiture rouge.");
    let texts: Vec<String> = words.into_iter().map(|t| t.text.to_lowercase()).collect();
    assert_eq!(texts, vec!["il", "regarde", "la", "voiture", "rouge"]);

    let (mono, multi): (Vec<_>, Vec<_>) = texts.iter().partition(|w| is_monosyllabic(w));
    assert_eq!(mono, vec!["il", "la"]);
    assert_eq!(multi, vec!["regarde", "voiture", "rouge"]);
}

#[test]
fn adversarial_inputs_never_panic() {
    for input in [
        "",
        "-",
        "--",
        "...",
        "12a",
        "a1b2",
        "-----",
        "'",
        "\u{00E9}", // lone accented vowel
        "yyyy",
        "xxxxxxxx",
    ] {
        let syllables = syllabify_word(input);
        assert!(!syllables.is_empty(), "{input:?}: no syllables");
        assert!(count_syllables(input) >= 1);
    }
}
