//! Result types produced by the scorer.

use std::fmt;

/// Complexity label paired with a strength tier.
///
/// `TooShort` and `TooLong` are only ever set by the validity gate; the
/// classifier itself maps a clamped score to one of the five graded labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    VeryWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
    TooShort,
    TooLong,
}

impl Complexity {
    /// Human-readable label, as shown next to the strength meter.
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::VeryWeak => "Very Weak",
            Complexity::Weak => "Weak",
            Complexity::Good => "Good",
            Complexity::Strong => "Strong",
            Complexity::VeryStrong => "Very Strong",
            Complexity::TooShort => "Too Short",
            Complexity::TooLong => "Too Long",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counters collected by the single left-to-right character-class scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObviousPatterns {
    pub uppercase_letters: usize,
    pub consecutive_uppercase: usize,
    pub lowercase_letters: usize,
    pub consecutive_lowercase: usize,
    pub numbers: usize,
    pub consecutive_numbers: usize,
    pub symbols: usize,
    pub consecutive_symbols: usize,
    /// Characters that occur more than once anywhere in the password.
    pub repeating_characters: usize,
    /// `length - repeating_characters`, only computed once a repeat exists.
    pub unique_characters: usize,
    /// Proximity-weighted repeat penalty, normalized after the full scan.
    pub repeating_increments: i64,
    pub consecutive_characters: usize,
    /// Digits and symbols at neither the first nor the last index.
    pub mid_characters: usize,
    pub mid_numbers: usize,
    pub mid_symbols: usize,
}

/// Strength tier and complexity label derived from the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallValues {
    /// 1..=5.
    pub strength: u8,
    pub complexity: Complexity,
}

/// The user-facing verdict. This is the only part of the breakdown a
/// caller should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthOutputs {
    /// 1..=5.
    pub strength: u8,
    /// 0..=100, forced to 0 by the length gates.
    pub score: u8,
    pub complexity: Complexity,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

/// Full per-invocation breakdown. Fully determined by the password, the
/// policy and the host context; created fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub obvious_patterns: ObviousPatterns,
    pub sequential_alpha: usize,
    pub sequential_numbers: usize,
    pub sequential_symbols: usize,
    pub score_modifications: i64,
    pub score_deductions: i64,
    pub meets_base_requirements: i64,
    pub keyword_deductions: i64,
    pub score_bonuses: i64,
    /// Starting score plus every contribution, unbounded until clamped.
    pub rolling_score: i64,
    pub overall_values: OverallValues,
    pub outputs: StrengthOutputs,
}

/// Host name of the surrounding execution context, passed explicitly so the
/// validity gate stays a pure function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContext {
    host_name: String,
}

impl HostContext {
    pub fn new(host_name: impl Into<String>) -> Self {
        Self {
            host_name: host_name.into(),
        }
    }

    /// True when the host name starts with `www` (case-insensitive).
    pub fn is_www_host(&self) -> bool {
        self.host_name
            .get(..3)
            .map(|p| p.eq_ignore_ascii_case("www"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_labels() {
        assert_eq!(Complexity::VeryStrong.label(), "Very Strong");
        assert_eq!(Complexity::TooShort.to_string(), "Too Short");
    }

    #[test]
    fn test_host_context_www_detection() {
        assert!(HostContext::new("www.example.com").is_www_host());
        assert!(HostContext::new("WWW.example.com").is_www_host());
        assert!(!HostContext::new("staging.example.com").is_www_host());
        assert!(!HostContext::new("ww").is_www_host());
        assert!(!HostContext::default().is_www_host());
    }
}
