//! Sequence detectors - 3-character ordered runs drawn from the reference
//! alphabets, matched forward or reversed.

/// Counts reference-alphabet windows present in the password.
///
/// Slides a 3-character window across the whole reference string and bumps
/// the counter once per window whose forward or reversed form occurs anywhere
/// in the lowercased password. Counting is per reference window, so repeated
/// occurrences in the password do not double-count, and a window matching
/// both forward and reversed still counts once.
pub fn count_sequential_windows(password_lower: &str, reference: &str) -> usize {
    let reference: Vec<char> = reference.chars().collect();
    if reference.len() < 3 {
        return 0;
    }

    let mut matches = 0;
    for window in reference.windows(3) {
        let forward: String = window.iter().collect();
        let reverse: String = window.iter().rev().collect();

        if password_lower.contains(&forward) || password_lower.contains(&reverse) {
            matches += 1;
        }
    }

    matches
}
