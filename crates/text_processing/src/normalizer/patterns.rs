//! Character classes used by the normalization stages
//!
//! Unicode ranges and the special-character set are kept as named
//! constants; the regexes are compiled once from them.

use once_cell::sync::Lazy;
use regex::Regex;

use bangla_cleaner_core::Script;

/// ASCII special characters deleted together with Latin letters and digits
pub const SPECIAL_CHARACTERS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '{', '}', ':', ';', '"', '\'',
    '<', '>', ',', '.', '?', '~', '/', '-',
];

/// Inclusive code point ranges treated as emoji
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // symbols & pictographs
    (0x1F680, 0x1F6FF), // transport & map symbols
    (0x1F700, 0x1F77F), // alchemical symbols
    (0x1F780, 0x1F7FF), // geometric shapes extended
    (0x1F800, 0x1F8FF), // supplemental arrows-c
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA00, 0x1FA6F), // chess symbols
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-a
    (0x2702, 0x27B0),   // dingbats
    (0x24C2, 0x1F251),  // enclosed characters and misc symbols
];

/// Latin letters, ASCII digits and `SPECIAL_CHARACTERS`, one or more
pub static ENGLISH_AND_SPECIAL: Lazy<Regex> = Lazy::new(|| {
    let specials: String = SPECIAL_CHARACTERS
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    Regex::new(&format!("[a-zA-Z0-9{}]+", specials)).expect("static english pattern")
});

/// Any code point in `EMOJI_RANGES`, one or more
pub static EMOJI: Lazy<Regex> = Lazy::new(|| {
    let class: String = EMOJI_RANGES
        .iter()
        .map(|(lo, hi)| format!(r"\x{{{:X}}}-\x{{{:X}}}", lo, hi))
        .collect();
    Regex::new(&format!("[{}]+", class)).expect("static emoji pattern")
});

static BENGALI_MIXED_DIGITS: Lazy<Regex> = Lazy::new(|| mixed_digit_pattern(Script::Bengali));
static DEVANAGARI_MIXED_DIGITS: Lazy<Regex> =
    Lazy::new(|| mixed_digit_pattern(Script::Devanagari));

fn mixed_digit_pattern(script: Script) -> Regex {
    let (lo, hi) = script.digit_range();
    Regex::new(&format!("[{}-{}]+[0-9]+", lo, hi)).expect("static digit pattern")
}

/// Native digits immediately followed by ASCII digits
pub fn mixed_digits(script: Script) -> &'static Regex {
    match script {
        Script::Bengali => &BENGALI_MIXED_DIGITS,
        Script::Devanagari => &DEVANAGARI_MIXED_DIGITS,
    }
}

/// Check a code point against `EMOJI_RANGES`
pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}
