//! Complexity classification and the user-facing validity gate.

use crate::config::{PolicyConfig, SYMBOL_SET};
use crate::types::{Complexity, HostContext, OverallValues, StrengthOutputs};

/// Clamps the rolling score to 0..=100 and maps it onto a strength tier.
pub fn determine_complexity(rolling_score: i64) -> OverallValues {
    let score = rolling_score.clamp(0, 100);

    let (strength, complexity) = if score >= 80 {
        (5, Complexity::VeryStrong)
    } else if score >= 60 {
        (4, Complexity::Strong)
    } else if score >= 40 {
        (3, Complexity::Good)
    } else if score >= 20 {
        (2, Complexity::Weak)
    } else {
        (1, Complexity::VeryWeak)
    };

    OverallValues {
        strength,
        complexity,
    }
}

/// Produces the final verdict. Branches are evaluated in strict priority
/// order; the first match wins.
///
/// The `"password"` carve-out on non-`www` hosts is a legacy staging bypass
/// kept for compatibility.
pub fn calculate_outputs(
    password: &str,
    rolling_score: i64,
    overall: OverallValues,
    policy: &PolicyConfig,
    host: &HostContext,
) -> StrengthOutputs {
    let length = password.chars().count();
    let clamped = rolling_score.clamp(0, 100) as u8;

    if length < policy.min_length {
        return StrengthOutputs {
            strength: overall.strength,
            score: 0,
            complexity: Complexity::TooShort,
            is_valid: false,
            error_message: Some(format!(
                "Your password must be at least {} characters.",
                policy.min_length
            )),
        };
    }

    if length > policy.max_length {
        return StrengthOutputs {
            strength: overall.strength,
            score: 0,
            complexity: Complexity::TooLong,
            is_valid: false,
            error_message: Some(format!(
                "Password must be at most {} characters.",
                policy.max_length
            )),
        };
    }

    if !policy.is_allowed(password) {
        return StrengthOutputs {
            strength: overall.strength,
            score: clamped,
            complexity: overall.complexity,
            is_valid: false,
            error_message: Some(format!(
                "Password can only contain letters, numbers and these special characters: {}",
                SYMBOL_SET
            )),
        };
    }

    if password.eq_ignore_ascii_case("password") && !host.is_www_host() {
        return StrengthOutputs {
            strength: overall.strength,
            score: clamped,
            complexity: overall.complexity,
            is_valid: true,
            error_message: None,
        };
    }

    if overall.strength < 3 {
        return StrengthOutputs {
            strength: overall.strength,
            score: clamped,
            complexity: overall.complexity,
            is_valid: false,
            error_message: Some(
                "Please choose a more secure password. You may want to try adding special \
                 characters or numbers"
                    .to_string(),
            ),
        };
    }

    StrengthOutputs {
        strength: overall.strength,
        score: clamped,
        complexity: overall.complexity,
        is_valid: true,
        error_message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(determine_complexity(100).strength, 5);
        assert_eq!(determine_complexity(80).complexity, Complexity::VeryStrong);
        assert_eq!(determine_complexity(79).complexity, Complexity::Strong);
        assert_eq!(determine_complexity(60).strength, 4);
        assert_eq!(determine_complexity(40).complexity, Complexity::Good);
        assert_eq!(determine_complexity(20).complexity, Complexity::Weak);
        assert_eq!(determine_complexity(19).complexity, Complexity::VeryWeak);
        assert_eq!(determine_complexity(0).strength, 1);
    }

    #[test]
    fn test_clamp_both_ends() {
        assert_eq!(determine_complexity(9999).strength, 5);
        assert_eq!(determine_complexity(-500).strength, 1);
        assert_eq!(determine_complexity(-500).complexity, Complexity::VeryWeak);
    }

    #[test]
    fn test_too_short_forces_zero_score() {
        let policy = PolicyConfig::default();
        let out = calculate_outputs(
            "Ab1!",
            55,
            determine_complexity(55),
            &policy,
            &HostContext::default(),
        );
        assert_eq!(out.score, 0);
        assert_eq!(out.complexity, Complexity::TooShort);
        assert!(!out.is_valid);
        assert!(out.error_message.unwrap().contains("at least 8"));
    }

    #[test]
    fn test_too_long_forces_zero_score() {
        let policy = PolicyConfig::default();
        let long = "Aa1!".repeat(20);
        let out = calculate_outputs(
            &long,
            90,
            determine_complexity(90),
            &policy,
            &HostContext::default(),
        );
        assert_eq!(out.score, 0);
        assert_eq!(out.complexity, Complexity::TooLong);
        assert!(!out.is_valid);
        assert!(out.error_message.unwrap().contains("at most 64"));
    }

    #[test]
    fn test_disallowed_characters() {
        let policy = PolicyConfig::default();
        let out = calculate_outputs(
            "Abc 123!xyz",
            70,
            determine_complexity(70),
            &policy,
            &HostContext::default(),
        );
        assert!(!out.is_valid);
        assert!(out.error_message.unwrap().contains("special characters"));
        // The score is not zeroed by this branch.
        assert_eq!(out.score, 70);
    }

    #[test]
    fn test_password_carveout_on_staging_host() {
        let policy = PolicyConfig::default();
        let host = HostContext::new("staging.example.com");
        let out = calculate_outputs("PASSWORD", 0, determine_complexity(0), &policy, &host);
        assert!(out.is_valid);
        assert_eq!(out.error_message, None);
    }

    #[test]
    fn test_password_rejected_on_www_host() {
        let policy = PolicyConfig::default();
        let host = HostContext::new("www.example.com");
        let out = calculate_outputs("password", 0, determine_complexity(0), &policy, &host);
        assert!(!out.is_valid);
        assert!(out.error_message.is_some());
    }

    #[test]
    fn test_weak_password_invalid_with_suggestion() {
        let policy = PolicyConfig::default();
        let out = calculate_outputs(
            "abcdefgh",
            10,
            determine_complexity(10),
            &policy,
            &HostContext::default(),
        );
        assert!(!out.is_valid);
        assert!(out.error_message.unwrap().contains("more secure"));
    }

    #[test]
    fn test_good_password_valid_without_message() {
        let policy = PolicyConfig::default();
        let out = calculate_outputs(
            "A9b!cDe#12",
            75,
            determine_complexity(75),
            &policy,
            &HostContext::default(),
        );
        assert!(out.is_valid);
        assert_eq!(out.error_message, None);
        assert_eq!(out.score, 75);
    }
}
