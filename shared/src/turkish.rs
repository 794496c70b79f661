//! Turkish locale helpers
//!
//! Case mapping and collation for Turkish text. The standard library maps
//! `I` and `i` the English way, which breaks the dotted/dotless pair
//! (`i` ↔ `İ`, `ı` ↔ `I`). Every name comparison, search and message
//! template in this system goes through these functions instead.

use std::cmp::Ordering;

/// Turkish alphabet in collation order. Letters outside this set
/// (digits, punctuation, foreign letters) sort after all of them.
const ALPHABET: &str = "abcçdefgğhıijklmnoöprsştuüvyz";

/// Lowercase a single char under Turkish rules.
pub fn lower_char(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Uppercase a single char under Turkish rules.
pub fn upper_char(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Lowercase a string under Turkish rules.
pub fn to_lowercase(s: &str) -> String {
    s.chars().map(lower_char).collect()
}

/// Uppercase a string under Turkish rules.
pub fn to_uppercase(s: &str) -> String {
    s.chars().map(upper_char).collect()
}

/// First letter uppercase, rest lowercase (single word).
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(upper_char(first));
            out.extend(chars.map(lower_char));
            out
        }
        None => String::new(),
    }
}

/// Title-case every space-separated word: `GÜNÜN MENÜSÜ` → `Günün Menüsü`.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-folded substring containment, used by the board search.
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    to_lowercase(haystack).contains(&to_lowercase(needle))
}

/// Collation rank of a folded char; unknown chars keep their scalar value
/// after the whole alphabet so they sort last but deterministically.
fn rank(c: char) -> u32 {
    ALPHABET
        .chars()
        .position(|a| a == c)
        .map(|i| i as u32)
        .unwrap_or(1000 + c as u32)
}

/// Compare two strings under Turkish collation.
///
/// Primary: alphabet order on case-folded chars. Tie break: at the first
/// position where only the case differs, lowercase orders first (matches
/// ICU's tertiary level for `tr`). Final tie break: length.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut ia = a.chars();
    let mut ib = b.chars();
    let mut case_tie = Ordering::Equal;
    loop {
        match (ia.next(), ib.next()) {
            (Some(ca), Some(cb)) => {
                let (fa, fb) = (lower_char(ca), lower_char(cb));
                match rank(fa).cmp(&rank(fb)) {
                    Ordering::Equal => {
                        if case_tie == Ordering::Equal && ca != cb {
                            // identical letter, different case
                            case_tie = if ca == fa { Ordering::Less } else { Ordering::Greater };
                        }
                    }
                    other => return other,
                }
            }
            (None, None) => return case_tie,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
        }
    }
}
