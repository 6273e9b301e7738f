//! Score arithmetic - usage modifier, deductions, base-requirements bonus,
//! keyword deductions and the capped mid-character bonus.

use crate::config::PolicyConfig;
use crate::types::ObviousPatterns;

/// Hard ceiling on the mid-character bonus so long passwords cannot farm
/// unbounded points from interior digits and symbols.
const MID_CHAR_BONUS_CAP: i64 = 12;

/// Fixed penalty for a strict blocklist hit.
const STRICT_KEYWORD_PENALTY: i64 = -60;

/// Fixed penalty for a medium blocklist hit.
const MEDIUM_KEYWORD_PENALTY: i64 = -20;

/// Diversity reward. Mixed case earns points for every character *outside*
/// the class, digits and symbols earn their multiplier per occurrence, and
/// interior placement earns the mid-character weight.
pub fn usage_modifier(length: usize, patterns: &ObviousPatterns, policy: &PolicyConfig) -> i64 {
    let length = length as i64;
    let mut rolling = 0i64;

    let uppercase = patterns.uppercase_letters as i64;
    if uppercase > 0 && uppercase < length {
        rolling += (length - uppercase) * 2;
    }

    let lowercase = patterns.lowercase_letters as i64;
    if lowercase > 0 && lowercase < length {
        rolling += (length - lowercase) * 2;
    }

    let numbers = patterns.numbers as i64;
    if numbers > 0 && numbers < length {
        rolling += numbers * policy.number_multiplier;
    }

    let symbols = patterns.symbols as i64;
    if symbols > 0 {
        rolling += symbols * policy.symbol_multiplier;
    }

    let mid_characters = patterns.mid_characters as i64;
    if mid_characters > 0 {
        rolling += mid_characters * policy.num_mid_chars;
    }

    rolling
}

/// Penalties for weak composition: single-class passwords, repeated
/// characters, same-class runs and ordered sequences.
pub fn deductions(
    length: usize,
    patterns: &ObviousPatterns,
    sequential_alpha: usize,
    sequential_numbers: usize,
    sequential_symbols: usize,
    policy: &PolicyConfig,
) -> i64 {
    let mut rolling = 0i64;

    let has_letters = patterns.lowercase_letters > 0 || patterns.uppercase_letters > 0;
    let has_numbers = patterns.numbers > 0;
    let has_symbols = patterns.symbols > 0;

    // Letters only
    if has_letters && !has_symbols && !has_numbers {
        rolling -= length as i64;
    }

    // Numbers only
    if !has_letters && !has_symbols && has_numbers {
        rolling -= length as i64;
    }

    // Same character exists more than once
    if patterns.repeating_characters > 0 {
        rolling -= patterns.repeating_increments;
    }

    if patterns.consecutive_uppercase > 0 {
        rolling -= patterns.consecutive_uppercase as i64 * policy.consecutive_uppercase_chars;
    }

    if patterns.consecutive_lowercase > 0 {
        rolling -= patterns.consecutive_lowercase as i64 * policy.consecutive_lowercase_chars;
    }

    if patterns.consecutive_numbers > 0 {
        rolling -= patterns.consecutive_numbers as i64 * policy.consecutive_numbers;
    }

    if sequential_alpha > 0 {
        rolling -= sequential_alpha as i64 * policy.sequential_alpha_chars;
    }

    if sequential_numbers > 0 {
        rolling -= sequential_numbers as i64 * policy.sequential_numbers;
    }

    if sequential_symbols > 0 {
        rolling -= sequential_symbols as i64 * policy.sequential_symbols;
    }

    rolling
}

/// Bonus for clearing the base requirements. Each of {length, uppercase,
/// lowercase, digits, symbols} counts when strictly above its minimum
/// (`min_length - 1` for length, zero for the rest); the bonus only lands
/// when more than the required number of boxes are ticked.
pub fn base_requirements(length: usize, patterns: &ObviousPatterns, policy: &PolicyConfig) -> i64 {
    let checks = [
        (length, policy.min_length.saturating_sub(1)),
        (patterns.uppercase_letters, 0),
        (patterns.lowercase_letters, 0),
        (patterns.numbers, 0),
        (patterns.symbols, 0),
    ];

    let satisfied = checks.iter().filter(|&&(value, min)| value > min).count() as i64;

    let required = if length >= policy.min_length { 3 } else { 4 };

    if satisfied > required {
        satisfied * 2
    } else {
        0
    }
}

/// Blocklist deduction. The strict list is checked first and short-circuits
/// the medium list.
pub fn keyword_deductions(password: &str, policy: &PolicyConfig) -> i64 {
    if policy.common_passwords_strict.matches(password) {
        STRICT_KEYWORD_PENALTY
    } else if policy.common_passwords_medium_strict.matches(password) {
        MEDIUM_KEYWORD_PENALTY
    } else {
        0
    }
}

/// Mid-character bonus: half-weight per interior digit (floor 1) and interior
/// symbol (floor 2), a flat +2 when both kinds are present, capped hard.
pub fn mid_char_bonuses(patterns: &ObviousPatterns, policy: &PolicyConfig) -> i64 {
    let digit_weight = (policy.number_multiplier / 2).max(1);
    let symbol_weight = (policy.symbol_multiplier / 2).max(2);

    let mut bonus = patterns.mid_numbers as i64 * digit_weight
        + patterns.mid_symbols as i64 * symbol_weight;

    if patterns.mid_numbers > 0 && patterns.mid_symbols > 0 {
        bonus += 2;
    }

    bonus.min(MID_CHAR_BONUS_CAP)
}
