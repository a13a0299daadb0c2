// Character classification for French literacy processing.
//
// Syllable segmentation needs exactly three character classes: vowel,
// consonant and everything else. "y" belongs to neither static set;
// its class depends on its neighbors and is decided by `is_y_vowel`.

// ---------------------------------------------------------------------------
// French phonological constants
// ---------------------------------------------------------------------------

/// French vowels (lowercase): plain and accented forms plus the
/// ligatures æ and œ. "y" is intentionally absent (contextual).
const FRENCH_VOWELS: &[char] = &[
    'a',
    'e',
    'i',
    'o',
    'u',
    '\u{00E0}', // à
    '\u{00E2}', // â
    '\u{00E4}', // ä
    '\u{00E6}', // æ
    '\u{00E9}', // é
    '\u{00E8}', // è
    '\u{00EA}', // ê
    '\u{00EB}', // ë
    '\u{00EE}', // î
    '\u{00EF}', // ï
    '\u{00F4}', // ô
    '\u{00F6}', // ö
    '\u{0153}', // œ
    '\u{00F9}', // ù
    '\u{00FB}', // û
    '\u{00FC}', // ü
    '\u{00FF}', // ÿ
];

/// French consonants (lowercase), including ç.
///
/// "y" is listed here so that the neighbor checks in `is_y_vowel` treat
/// an adjacent "y" as a consonant; a position holding a "y" itself gets
/// the contextual decision instead of the static one.
const FRENCH_CONSONANTS: &[char] = &[
    'b', 'c', '\u{00E7}', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't',
    'v', 'w', 'x', 'y', 'z',
];

// ---------------------------------------------------------------------------
// Letter classification
// ---------------------------------------------------------------------------

/// Static classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// A French vowel (plain or accented, æ/œ included).
    Vowel,
    /// A French consonant (ç included; "y" defaults here).
    Consonant,
    /// Anything else: digits, punctuation, whitespace, foreign letters.
    Other,
}

/// Classify a character without looking at its neighbors.
///
/// "y" classifies as `Consonant` here; callers that know the position
/// of the character inside a word should consult `is_y_vowel` instead.
pub fn classify(c: char) -> LetterClass {
    let lower = simple_lower(c);
    if FRENCH_VOWELS.contains(&lower) {
        LetterClass::Vowel
    } else if FRENCH_CONSONANTS.contains(&lower) {
        LetterClass::Consonant
    } else {
        LetterClass::Other
    }
}

/// Check whether a character is a French vowel (case-insensitive).
/// "y" is never a vowel here; see `is_y_vowel` for the contextual rule.
pub fn is_vowel(c: char) -> bool {
    let lower = simple_lower(c);
    FRENCH_VOWELS.contains(&lower)
}

/// Check whether a character is a French consonant (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    let lower = simple_lower(c);
    FRENCH_CONSONANTS.contains(&lower)
}

/// Check whether a character belongs to the supported French alphabet.
pub fn is_french_letter(c: char) -> bool {
    classify(c) != LetterClass::Other
}

/// Decide whether the "y" at `index` is pronounced as a vowel.
///
/// The rules are checked in order, each on the static class of the
/// already-known neighbor characters (an adjacent "y" counts as a
/// consonant; the decision never recurses):
///
/// 1. word-initial "y" is a consonant ("yaourt");
/// 2. consonant on both sides makes it a vowel ("stylo");
/// 3. a vowel immediately before makes it a consonant ("royal");
/// 4. a vowel immediately after makes it a consonant ("payer");
/// 5. otherwise it is a vowel (e.g. word-final after a consonant).
///
/// Positions that do not hold a "y" are never vowels by this rule.
pub fn is_y_vowel(word: &[char], index: usize) -> bool {
    if index >= word.len() || simple_lower(word[index]) != 'y' {
        return false;
    }
    if index == 0 {
        return false;
    }

    let before = word[index - 1];
    let after = word.get(index + 1).copied();

    if is_consonant(before) && after.map(is_consonant).unwrap_or(false) {
        return true;
    }
    if is_vowel(before) {
        return false;
    }
    if after.map(is_vowel).unwrap_or(false) {
        return false;
    }
    true
}

// ---------------------------------------------------------------------------
// Character type classification (tokenizer support)
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters are restricted to the supported French alphabet: the
/// segmentation engine downstream has rules only for those, so anything
/// else (Greek, Cyrillic, emoji) tokenizes as `Unknown`.
pub fn get_char_type(c: char) -> CharType {
    if is_french_letter(c) {
        return CharType::Letter;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Check whether a character is a punctuation character recognized by
/// the tokenizer. French quotation marks (« » and the double quotes)
/// and the apostrophe variants are included.
fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | '-'
            | '!'
            | '?'
            | ':'
            | '\''
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '/'
            | '&'
            | '"'
            | '\u{00AB}' // « LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00BB}' // » RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK (typographic apostrophe)
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Check whether a character is a whitespace character.
///
/// Besides the ASCII set this recognizes the no-break spaces French
/// typography puts before tall punctuation (U+00A0 and U+202F).
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0xA0
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x3000
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// Rust's to_lowercase / to_uppercase return iterators because some
// characters expand to several; for the one-to-one mapping used in
// classification we only take the first character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // -- Static classification --

    #[test]
    fn plain_vowels() {
        for c in ['a', 'e', 'i', 'o', 'u'] {
            assert_eq!(classify(c), LetterClass::Vowel, "{c}");
        }
    }

    #[test]
    fn accented_vowels() {
        for c in ['\u{00E9}', '\u{00E8}', '\u{00EA}', '\u{00E0}', '\u{00F4}', '\u{00FB}'] {
            assert_eq!(classify(c), LetterClass::Vowel, "{c}");
        }
    }

    #[test]
    fn ligature_vowels() {
        assert!(is_vowel('\u{00E6}')); // æ
        assert!(is_vowel('\u{0153}')); // œ
    }

    #[test]
    fn uppercase_vowels() {
        assert!(is_vowel('A'));
        assert!(is_vowel('\u{00C9}')); // É
        assert!(is_vowel('\u{0152}')); // Œ
    }

    #[test]
    fn consonants() {
        assert!(is_consonant('b'));
        assert!(is_consonant('\u{00E7}')); // ç
        assert!(is_consonant('\u{00C7}')); // Ç
        assert!(!is_consonant('a'));
        assert!(!is_consonant('1'));
    }

    #[test]
    fn y_is_statically_a_consonant() {
        assert_eq!(classify('y'), LetterClass::Consonant);
        assert!(!is_vowel('y'));
    }

    #[test]
    fn non_letters_are_other() {
        assert_eq!(classify('1'), LetterClass::Other);
        assert_eq!(classify('-'), LetterClass::Other);
        assert_eq!(classify(' '), LetterClass::Other);
        assert_eq!(classify('\u{03B1}'), LetterClass::Other); // Greek α
    }

    // -- Contextual y --

    #[test]
    fn y_word_initial_is_consonant() {
        let w = chars("yaourt");
        assert!(!is_y_vowel(&w, 0));
    }

    #[test]
    fn y_between_consonants_is_vowel() {
        let w = chars("stylo");
        assert!(is_y_vowel(&w, 2));
    }

    #[test]
    fn y_after_vowel_is_consonant() {
        let w = chars("royal");
        assert!(!is_y_vowel(&w, 2));
    }

    #[test]
    fn y_before_vowel_is_consonant() {
        let w = chars("payer");
        // "payer": the 'a' before already makes it a consonant, but the
        // vowel-after rule fires for consonant-y-vowel shapes too.
        assert!(!is_y_vowel(&w, 2));
        let w2 = chars("tyau");
        assert!(!is_y_vowel(&w2, 1));
    }

    #[test]
    fn y_word_final_after_consonant_is_vowel() {
        let w = chars("dandy");
        assert!(is_y_vowel(&w, 4));
    }

    #[test]
    fn y_word_final_after_vowel_is_consonant() {
        let w = chars("essay");
        assert!(!is_y_vowel(&w, 4));
    }

    #[test]
    fn non_y_positions_never_contextual_vowels() {
        let w = chars("stylo");
        assert!(!is_y_vowel(&w, 0));
        assert!(!is_y_vowel(&w, 4));
        assert!(!is_y_vowel(&w, 99));
    }

    // -- CharType --

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('a'), CharType::Letter);
        assert_eq!(get_char_type('Z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00E9}'), CharType::Letter); // é
        assert_eq!(get_char_type('\u{00E7}'), CharType::Letter); // ç
    }

    #[test]
    fn char_type_foreign_letter_is_unknown() {
        assert_eq!(get_char_type('\u{0431}'), CharType::Unknown); // Cyrillic б
    }

    #[test]
    fn char_type_digits() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
    }

    #[test]
    fn char_type_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
        assert_eq!(get_char_type('\u{00A0}'), CharType::Whitespace); // NBSP
        assert_eq!(get_char_type('\u{202F}'), CharType::Whitespace); // NNBSP
    }

    #[test]
    fn char_type_punctuation() {
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type('-'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{00AB}'), CharType::Punctuation); // «
        assert_eq!(get_char_type('\u{2019}'), CharType::Punctuation); // ’
    }

    // -- Case folding --

    #[test]
    fn simple_lower_basic() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('\u{00C9}'), '\u{00E9}'); // É -> é
        assert_eq!(simple_lower('a'), 'a');
    }

    #[test]
    fn simple_upper_basic() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('\u{00E9}'), '\u{00C9}'); // é -> É
    }
}
