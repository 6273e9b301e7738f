//! Character-class scan - per-class counts, adjacency runs, mid-position
//! counters and the repeat-proximity penalty.

use crate::config::SYMBOL_SET;
use crate::types::ObviousPatterns;

fn is_symbol(c: char) -> bool {
    SYMBOL_SET.contains(c)
}

/// Single left-to-right pass over the (whitespace-stripped) password.
///
/// Each character lands in exactly one class. A per-class last-seen index
/// detects adjacency: a run counter bumps only when the class was actually
/// seen at the immediately preceding position. Digits and symbols at interior
/// positions also feed the mid-position counters.
///
/// The nested scan accumulates `|len / (b - a)|` for every other position
/// holding the same character; the accumulator is normalized once after the
/// full pass by ceiling-dividing by the unique-character count (ceiling alone
/// when every character repeats).
pub fn scan_obvious_patterns(chars: &[char]) -> ObviousPatterns {
    let mut patterns = ObviousPatterns::default();
    let len = chars.len();

    let mut last_uppercase: Option<usize> = None;
    let mut last_lowercase: Option<usize> = None;
    let mut last_number: Option<usize> = None;
    let mut last_symbol: Option<usize> = None;

    let mut raw_increments = 0f64;

    for (a, &c) in chars.iter().enumerate() {
        let mid_position = a > 0 && a < len.saturating_sub(1);

        if c.is_ascii_uppercase() {
            if last_uppercase.is_some_and(|prev| prev + 1 == a) {
                patterns.consecutive_uppercase += 1;
                patterns.consecutive_characters += 1;
            }
            last_uppercase = Some(a);
            patterns.uppercase_letters += 1;
        } else if c.is_ascii_lowercase() {
            if last_lowercase.is_some_and(|prev| prev + 1 == a) {
                patterns.consecutive_lowercase += 1;
                patterns.consecutive_characters += 1;
            }
            last_lowercase = Some(a);
            patterns.lowercase_letters += 1;
        } else if c.is_ascii_digit() {
            if mid_position {
                patterns.mid_characters += 1;
                patterns.mid_numbers += 1;
            }
            if last_number.is_some_and(|prev| prev + 1 == a) {
                patterns.consecutive_numbers += 1;
                patterns.consecutive_characters += 1;
            }
            last_number = Some(a);
            patterns.numbers += 1;
        } else if is_symbol(c) {
            if mid_position {
                patterns.mid_characters += 1;
                patterns.mid_symbols += 1;
            }
            if last_symbol.is_some_and(|prev| prev + 1 == a) {
                patterns.consecutive_symbols += 1;
                patterns.consecutive_characters += 1;
            }
            last_symbol = Some(a);
            patterns.symbols += 1;
        }

        // Proximity-weighted repeat scan: the nearer an identical character,
        // the heavier the increment.
        let mut char_exists = false;
        for (b, &other) in chars.iter().enumerate() {
            if a != b && c == other {
                char_exists = true;
                raw_increments += (len as f64 / (b as f64 - a as f64)).abs();
            }
        }
        if char_exists {
            patterns.repeating_characters += 1;
        }
    }

    if patterns.repeating_characters > 0 {
        patterns.unique_characters = len - patterns.repeating_characters;
        let normalized = if patterns.unique_characters > 0 {
            (raw_increments / patterns.unique_characters as f64).ceil()
        } else {
            raw_increments.ceil()
        };
        patterns.repeating_increments = normalized as i64;
    }

    patterns
}
