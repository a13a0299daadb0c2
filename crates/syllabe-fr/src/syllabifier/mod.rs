// French rule-based syllabification.
//
// A word is segmented in four phases:
//   1. short-circuit trivial words (length <= 2, hyphenated compounds,
//      anything outside the supported alphabet);
//   2. special suffixes ("-ie", verb infinitives in "-er");
//   3. general split: detach a mute final "e", find the vowel groups of
//      the remaining word, and cut each consonant run between adjacent
//      groups;
//   4. reassemble: the detached "e" rejoins the tail of the word.
//
// All rule tables below are ordered heuristics tuned on primary-school
// reading material. Later entries are narrower exceptions to earlier,
// broader ones, so the order of the checks is part of the behavior.
// The segmentation is allowed to be linguistically imperfect; it must
// only be deterministic and total (every input yields a non-empty
// syllable list, the original word as a single syllable at worst).

use syllabe_core::character::{is_consonant, is_french_letter, is_vowel, is_y_vowel, simple_lower};

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Vowel sequences pronounced as one nucleus: diphthongs and nasal
/// spellings. Checked before every other hiatus rule. Entries that
/// spell a nasal with its consonant letter ("an", "on", ...) are part
/// of the tuned table and are kept even though a pure vowel run can
/// never equal them.
const NUCLEUS_SEQUENCES: &[&str] = &[
    "ai", "au", "eau", "ei", "eu", "ou", "oi", "ui", "ieu", "oin", "ain", "ein", "an", "en", "in",
    "on", "un", "ie",
];

/// Vowel sequences that force a split even where the general rules
/// would fuse ("jouer", "créer"). Matched as substrings of the run.
const FORCED_HIATUS: &[&str] = &["ue", "\u{00E9}r"];

/// Consonant clusters that resist being split across a syllable
/// boundary. A two-consonant run equal to one of the two-letter entries
/// stays with the following syllable; in longer runs the final pair is
/// checked against the same table.
const INSEPARABLE_CLUSTERS: &[&str] = &[
    "bl", "br", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "pl", "pr", "tr", "vr", "sc", "sk", "sl",
    "sm", "sn", "sp", "st", "sw", "th", "ch", "ph", "gh", "sh", "sch", "ndr", "ntr",
];

// ---------------------------------------------------------------------------
// Vowel groups
// ---------------------------------------------------------------------------

/// A maximal run of vowel-classified positions in a working word,
/// as a half-open character index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelGroup {
    pub start: usize,
    pub end: usize,
}

/// Check whether the character at `index` counts as a vowel for
/// segmentation: a static vowel, or a "y" pronounced as one.
fn is_vowel_position(word: &[char], index: usize) -> bool {
    is_vowel(word[index]) || is_y_vowel(word, index)
}

/// Scan a (lowercased) working word and produce its vowel groups in
/// index order. A run of two or more adjacent vowels that the hiatus
/// rules split is emitted as single-character groups, so that a
/// syllable boundary falls between each of them.
pub fn find_vowel_groups(word: &[char]) -> Vec<VowelGroup> {
    let mut groups = Vec::new();
    let mut i = 0;
    while i < word.len() {
        if !is_vowel_position(word, i) {
            i += 1;
            continue;
        }
        let start = i;
        let mut end = i + 1;
        while end < word.len() && is_vowel_position(word, end) {
            end += 1;
        }
        if end - start >= 2 && is_hiatus(&word[start..end]) {
            for k in start..end {
                groups.push(VowelGroup { start: k, end: k + 1 });
            }
        } else {
            groups.push(VowelGroup { start, end });
        }
        i = end;
    }
    groups
}

// ---------------------------------------------------------------------------
// Hiatus detection
// ---------------------------------------------------------------------------

/// Decide whether a run of adjacent vowels is a hiatus (independently
/// pronounced vowels) rather than one diphthong nucleus.
///
/// The rules fire in order, first match wins:
///   1. a known nucleus sequence is never a hiatus;
///   2. the forced-split patterns ("ue", "ér") always are;
///   3. two distinct plain vowels `[aeio][aeiou]` are;
///   4. a "y" at either end of the run is (the "y" was classified as a
///      vowel, so its neighbor inside the run is one too);
///   5. everything else fuses into one nucleus.
pub fn is_hiatus(run: &[char]) -> bool {
    if run.len() < 2 {
        return false;
    }
    let text: String = run.iter().collect();
    if NUCLEUS_SEQUENCES.contains(&text.as_str()) {
        return false;
    }
    if FORCED_HIATUS.iter().any(|p| text.contains(p)) {
        return true;
    }
    if run.len() == 2 {
        let (a, b) = (run[0], run[1]);
        if a != b
            && matches!(a, 'a' | 'e' | 'i' | 'o')
            && matches!(b, 'a' | 'e' | 'i' | 'o' | 'u')
        {
            return true;
        }
    }
    if run[0] == 'y' || run[run.len() - 1] == 'y' {
        return true;
    }
    false
}

// ---------------------------------------------------------------------------
// Consonant runs
// ---------------------------------------------------------------------------

/// Check a two-consonant string against the cluster table.
fn is_inseparable_pair(pair: &[char]) -> bool {
    let text: String = pair.iter().collect();
    INSEPARABLE_CLUSTERS.contains(&text.as_str())
}

/// Given the consonant run strictly between two adjacent vowel groups,
/// return the offset (from the start of the run) where the preceding
/// syllable ends.
///
///   - empty run (hiatus): the boundary sits between the two vowels;
///   - one consonant: it opens the following syllable (maximal onset);
///   - two consonants: an inseparable cluster opens the following
///     syllable whole, otherwise the pair splits;
///   - three or more: a cluster at the end of the run stays with the
///     following syllable, otherwise one consonant closes the
///     preceding syllable and the rest open the next.
pub fn consonant_cut(run: &[char]) -> usize {
    match run.len() {
        0 | 1 => 0,
        2 => {
            if is_inseparable_pair(run) {
                0
            } else {
                1
            }
        }
        n => {
            if is_inseparable_pair(&run[n - 2..]) {
                n - 2
            } else {
                1
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mute endings
// ---------------------------------------------------------------------------

fn ends_with(word: &[char], suffix: &str) -> bool {
    let suffix: Vec<char> = suffix.chars().collect();
    word.len() >= suffix.len() && word[word.len() - suffix.len()..] == suffix[..]
}

/// Detect a silent trailing "e" on a (lowercased) word and return the
/// number of characters to detach (0 or 1).
///
/// The "e" stays attached when the word is too short to lose it
/// ("je", "le"), when it follows another vowel in "-ée" ("idée"), when
/// the word ends in "-ie" (handled by its own suffix rule), and in the
/// "-ndre"/"-mbre" family ("prendre", "nombre") where detaching it
/// would leave the word without a second vowel group.
pub fn mute_ending_len(word: &[char]) -> usize {
    let n = word.len();
    if n <= 2 || word[n - 1] != 'e' {
        return 0;
    }
    if ends_with(word, "\u{00E9}e") || ends_with(word, "ie") {
        return 0;
    }
    if ends_with(word, "ndre") || ends_with(word, "mbre") {
        return 0;
    }
    1
}

/// Split a word into its working part and mute suffix, per
/// `mute_ending_len`. The concatenation of the two halves is always the
/// input itself.
pub fn strip_mute_ending(word: &str) -> (String, String) {
    let chars: Vec<char> = word.chars().map(simple_lower).collect();
    let keep = chars.len() - mute_ending_len(&chars);
    let mut working = String::new();
    let mut suffix = String::new();
    for (i, c) in word.chars().enumerate() {
        if i < keep {
            working.push(c);
        } else {
            suffix.push(c);
        }
    }
    (working, suffix)
}

// ---------------------------------------------------------------------------
// Word syllabification
// ---------------------------------------------------------------------------

/// Split one word into its ordered syllable sequence.
///
/// Never fails: unsegmentable input (too short, mixed alphabet, no
/// second vowel group) comes back as the whole word in a single
/// syllable. For plain words the concatenation of the result is exactly
/// the input; hyphenated compounds are the one exception, where each
/// part is segmented independently and the hyphens are dropped.
pub fn syllabify_word(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();

    // Trivial words are one syllable, verbatim.
    if n <= 2 {
        return vec![word.to_string()];
    }

    // Compound words: each hyphen-delimited part restarts the whole
    // pipeline, mute-ending and suffix rules included.
    if chars.contains(&'-') {
        let mut out = Vec::new();
        for part in word.split('-') {
            if !part.is_empty() {
                out.extend(syllabify_word(part));
            }
        }
        if out.is_empty() {
            return vec![word.to_string()];
        }
        return out;
    }

    // Segmentation is only attempted on clean alphabetic tokens; a
    // stray digit or punctuation mark downgrades the word to a single
    // syllable instead of producing garbage boundaries.
    let cleaned = chars.iter().filter(|&&c| is_french_letter(c)).count();
    if cleaned != n || cleaned <= 2 {
        return vec![word.to_string()];
    }

    let lower: Vec<char> = chars.iter().map(|&c| simple_lower(c)).collect();

    // "-ie" nouns: the final "ie" is one spoken sound ("partie",
    // "sortie"); segment the stem and keep "ie" as the last syllable.
    if n > 3 && ends_with(&lower, "ie") {
        let stem: String = chars[..n - 2].iter().collect();
        let mut out = syllabify_word(&stem);
        out.push(chars[n - 2..].iter().collect());
        return out;
    }

    // "-er" infinitives: segment the stem, then pull its trailing
    // consonant (if any) in front of the "er" so that "regarder"
    // becomes re·gar·der and not re·gard·er.
    if n > 3 && ends_with(&lower, "er") {
        let stem: String = chars[..n - 2].iter().collect();
        let mut out = syllabify_word(&stem);
        let suffix: String = chars[n - 2..].iter().collect();
        let moved = match out.last_mut() {
            Some(last) => {
                let last_chars: Vec<char> = last.chars().collect();
                match last_chars.last() {
                    Some(&c) if last_chars.len() > 1 && is_consonant(c) => {
                        *last = last_chars[..last_chars.len() - 1].iter().collect();
                        Some(c)
                    }
                    _ => None,
                }
            }
            None => None,
        };
        match moved {
            Some(c) => out.push(format!("{c}{suffix}")),
            None => out.push(suffix),
        }
        return out;
    }

    general_split(&chars, &lower)
}

/// The default segmentation path: strip the mute ending, cut every
/// consonant run between adjacent vowel groups, reattach the ending.
fn general_split(chars: &[char], lower: &[char]) -> Vec<String> {
    let n = chars.len();
    let suffix_len = mute_ending_len(lower);
    let working = &lower[..n - suffix_len];

    let groups = find_vowel_groups(working);
    if groups.len() <= 1 {
        // No internal boundary. A detached mute "e" can still open a
        // final syllable together with the consonant before it
        // ("rouge" -> rou·ge); otherwise the word stays whole.
        if suffix_len == 1 && working.len() >= 2 && is_consonant(working[working.len() - 1]) {
            let cut = working.len() - 1;
            if cut > 0 {
                return vec![
                    chars[..cut].iter().collect(),
                    chars[cut..].iter().collect(),
                ];
            }
        }
        return vec![chars.iter().collect()];
    }

    // Walk consecutive group pairs, cutting each consonant run. A cut
    // that would go backwards or past the working word is dropped so
    // that no syllable can come out empty.
    let mut cuts: Vec<usize> = Vec::new();
    let mut last_cut = 0usize;
    for pair in groups.windows(2) {
        let run = &working[pair[0].end..pair[1].start];
        let cut = pair[0].end + consonant_cut(run);
        if cut > last_cut && cut < working.len() {
            cuts.push(cut);
            last_cut = cut;
        }
    }

    let mut syllables: Vec<String> = Vec::new();
    let mut start = 0;
    for &cut in &cuts {
        syllables.push(chars[start..cut].iter().collect());
        start = cut;
    }
    syllables.push(chars[start..n - suffix_len].iter().collect());

    if suffix_len > 0 {
        reattach_mute_suffix(&mut syllables, chars, n - suffix_len);
    }

    if syllables.is_empty() {
        return vec![chars.iter().collect()];
    }
    syllables
}

/// Rejoin a detached mute "e" to the tail of the word.
///
/// When the last working syllable ends in a consonant cluster, the
/// final consonant carries the "e" as a syllable of its own
/// ("regarde" -> re·gar·de); after a single consonant the "e" simply
/// extends the syllable ("voiture" -> voi·ture).
fn reattach_mute_suffix(syllables: &mut Vec<String>, chars: &[char], suffix_start: usize) {
    let suffix: String = chars[suffix_start..].iter().collect();
    let Some(last) = syllables.pop() else {
        syllables.push(suffix);
        return;
    };
    let last_chars: Vec<char> = last.chars().collect();
    let len = last_chars.len();
    if len >= 2
        && is_consonant(simple_lower(last_chars[len - 1]))
        && is_consonant(simple_lower(last_chars[len - 2]))
    {
        let head: String = last_chars[..len - 1].iter().collect();
        syllables.push(head);
        syllables.push(format!("{}{suffix}", last_chars[len - 1]));
    } else {
        syllables.push(format!("{last}{suffix}"));
    }
}

// ---------------------------------------------------------------------------
// Derived queries
// ---------------------------------------------------------------------------

/// Number of syllables in a word.
pub fn count_syllables(word: &str) -> usize {
    syllabify_word(word).len()
}

/// Whether a word is a single spoken sound.
pub fn is_monosyllabic(word: &str) -> bool {
    count_syllables(word) == 1
}

// ===========================================================================
// Tests
// ===========================================================================
