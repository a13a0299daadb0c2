// French number spelling.
//
// Spells integers below one million the way they are written out in
// French, irregularities included: the vigesimal 70/80/90 bands, the
// "et" elision in 21/31/41/51/61/71, and the plural agreement of
// "vingt" and "cent". Larger magnitudes fall back to their decimal
// digits; that is a documented degradation, not an error.
//
// The hyphenated variant glues every word of the spelling together so
// that the syllabifier can process the result through its ordinary
// compound-word path ("21" -> "vingt-et-un" -> vingt·et·un).

/// Upper bound (exclusive) of the spellable magnitude.
const SPELLABLE_LIMIT: i64 = 1_000_000;

const UNITS: &[&str] = &[
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];

const TEENS: &[&str] = &[
    "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
    "dix-neuf",
];

/// Tens words for the regular bands (20-69); index 0 is "vingt".
const TENS: &[&str] = &["vingt", "trente", "quarante", "cinquante", "soixante"];

// ---------------------------------------------------------------------------
// Spelling
// ---------------------------------------------------------------------------

/// Spell an integer in French.
///
/// Negative numbers are prefixed with "moins" before anything else, so
/// even an unspellable magnitude keeps its word sign
/// ("moins 1000000"); magnitudes of one million and above come back as
/// their decimal digit string.
pub fn number_to_words(n: i64) -> String {
    if n == 0 {
        return "z\u{00E9}ro".to_string();
    }
    if n < 0 {
        return format!("moins {}", spell_magnitude(n.unsigned_abs()));
    }
    spell_magnitude(n as u64)
}

/// Spell a positive magnitude, falling back to decimal digits at one
/// million and above.
fn spell_magnitude(n: u64) -> String {
    if n >= SPELLABLE_LIMIT as u64 {
        return n.to_string();
    }
    spell(n as u32)
}

/// Recursive spelling over magnitude bands; `n` is in `1..1_000_000`.
fn spell(n: u32) -> String {
    debug_assert!((1..SPELLABLE_LIMIT as u32).contains(&n));
    if n < 10 {
        return UNITS[n as usize].to_string();
    }
    if n < 20 {
        return TEENS[(n - 10) as usize].to_string();
    }
    if n < 100 {
        return spell_tens(n);
    }
    if n < 1000 {
        return spell_hundreds(n);
    }
    let thousands = n / 1000;
    let rest = n % 1000;
    let mut out = if thousands == 1 {
        "mille".to_string()
    } else {
        format!("{} mille", spell(thousands))
    };
    if rest > 0 {
        out.push(' ');
        out.push_str(&spell(rest));
    }
    out
}

/// 20-99, with the irregular 70/80/90 bands.
fn spell_tens(n: u32) -> String {
    let tens = n / 10;
    let unit = n % 10;
    match tens {
        // 70-79 count on from sixty ("soixante-douze"); 71 takes "et".
        7 => match n {
            70 => "soixante-dix".to_string(),
            71 => "soixante et onze".to_string(),
            _ => format!("soixante-{}", TEENS[(n - 70) as usize]),
        },
        // 80-89: "quatre-vingt" takes a plural "s" only when bare.
        8 => {
            if unit == 0 {
                "quatre-vingts".to_string()
            } else {
                format!("quatre-vingt-{}", UNITS[unit as usize])
            }
        }
        // 90-99 count on from eighty ("quatre-vingt-treize").
        9 => {
            if n == 90 {
                "quatre-vingt-dix".to_string()
            } else {
                format!("quatre-vingt-{}", TEENS[(n - 90) as usize])
            }
        }
        _ => {
            let base = TENS[(tens - 2) as usize];
            if unit == 0 {
                base.to_string()
            } else if unit == 1 {
                format!("{base} et un")
            } else {
                format!("{base}-{}", UNITS[unit as usize])
            }
        }
    }
}

/// 100-999. "cent" agrees in number when nothing follows it.
fn spell_hundreds(n: u32) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds == 1 {
        if rest == 0 {
            "cent".to_string()
        } else {
            format!("cent {}", spell(rest))
        }
    } else if rest == 0 {
        format!("{} cents", UNITS[hundreds as usize])
    } else {
        format!("{} cent {}", UNITS[hundreds as usize], spell(rest))
    }
}

// ---------------------------------------------------------------------------
// Numeric tokens
// ---------------------------------------------------------------------------

/// Why a token could not be turned into a spelled number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// The token is not a plain (optionally signed) run of ASCII digits.
    #[error("token is not a plain integer")]
    NotNumeric,
    /// The token parses as an integer outside the spellable range.
    #[error("number is outside the spellable range")]
    OutOfRange,
}

/// Check whether a token is purely numeric: after trimming, one
/// optional leading `-` followed by at least one ASCII digit and
/// nothing else.
pub fn is_numeric_string(token: &str) -> bool {
    let trimmed = token.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a numeric token into an integer.
///
/// A token that passes `is_numeric_string` but overflows `i64` is out
/// of range rather than non-numeric; it was digits, just too many.
pub fn parse_numeric(token: &str) -> Result<i64, NumeralError> {
    let trimmed = token.trim();
    if !is_numeric_string(trimmed) {
        return Err(NumeralError::NotNumeric);
    }
    trimmed.parse::<i64>().map_err(|_| NumeralError::OutOfRange)
}

/// Turn a numeric token into a single hyphen-joined French spelling,
/// or `None` when the token is unparseable or too large to spell.
///
/// Callers treat `None` as "keep the original digits", never as an
/// error.
pub fn number_to_words_hyphenated(token: &str) -> Option<String> {
    let n = parse_numeric(token).ok()?;
    if n <= -SPELLABLE_LIMIT || n >= SPELLABLE_LIMIT {
        return None;
    }
    Some(number_to_words(n).replace(' ', "-"))
}

// ===========================================================================
// Tests
// ===========================================================================
