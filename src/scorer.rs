//! Password scorer - orchestrates the scoring passes.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::PolicyConfig;
use crate::passes::complexity::{calculate_outputs, determine_complexity};
use crate::passes::patterns::scan_obvious_patterns;
use crate::passes::scoring::{
    base_requirements, deductions, keyword_deductions, mid_char_bonuses, usage_modifier,
};
use crate::passes::sequences::count_sequential_windows;
use crate::types::{HostContext, OverallValues, ScoreBreakdown};

/// Scores a candidate password against a policy.
///
/// Pure and deterministic: the breakdown depends only on the password, the
/// policy and the host context. Internal whitespace is stripped before the
/// scoring passes run; the length gates in the final verdict see the raw
/// input.
///
/// # Arguments
/// * `password` - The candidate password
/// * `policy` - Scoring policy (length bounds, weights, blocklists)
/// * `host` - Host name of the execution context, for the validity gate
///
/// # Returns
/// A [`ScoreBreakdown`]; callers display only its `outputs` field.
pub fn check_password(
    password: &SecretString,
    policy: &PolicyConfig,
    host: &HostContext,
) -> ScoreBreakdown {
    let raw = password.expose_secret();

    // Strip internal whitespace once; every pass works on this form.
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let chars: Vec<char> = stripped.chars().collect();
    let length = chars.len();
    let lowered = stripped.to_lowercase();

    let starting_score = length as i64 * policy.character_multiplier;

    // Symbol, numeric, lowercase and uppercase pattern matches
    let obvious_patterns = scan_obvious_patterns(&chars);

    // Sequential string patterns (forward and reverse), one detector per
    // reference alphabet
    let sequential_alpha =
        count_sequential_windows(&lowered, &policy.sequential_alpha_chars_string);
    let sequential_numbers =
        count_sequential_windows(&lowered, &policy.sequential_numbers_string);
    let sequential_symbols =
        count_sequential_windows(&lowered, &policy.sequential_symbols_string);

    // General point assignment
    let score_modifications = usage_modifier(length, &obvious_patterns, policy);

    // Point deductions for poor practices
    let score_deductions = deductions(
        length,
        &obvious_patterns,
        sequential_alpha,
        sequential_numbers,
        sequential_symbols,
        policy,
    );

    // Mandatory requirement coverage
    let meets_base_requirements = base_requirements(length, &obvious_patterns, policy);

    // Obvious common words
    let keyword_deductions = keyword_deductions(&lowered, policy);

    // Additional bonuses for interior digits and symbols
    let score_bonuses = mid_char_bonuses(&obvious_patterns, policy);

    let rolling_score = starting_score
        + score_modifications
        + score_deductions
        + meets_base_requirements
        + keyword_deductions
        + score_bonuses;

    let overall_values: OverallValues = determine_complexity(rolling_score);

    // What actually lands on screen
    let outputs = calculate_outputs(raw, rolling_score, overall_values, policy, host);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = outputs.score,
        strength = outputs.strength,
        is_valid = outputs.is_valid,
        "password scored"
    );

    ScoreBreakdown {
        obvious_patterns,
        sequential_alpha,
        sequential_numbers,
        sequential_symbols,
        score_modifications,
        score_deductions,
        meets_base_requirements,
        keyword_deductions,
        score_bonuses,
        rolling_score,
        overall_values,
        outputs,
    }
}

/// Debounce applied before an async evaluation, matching the UI's
/// keystroke-driven re-scoring cadence.
#[cfg(feature = "async")]
const DEBOUNCE_MS: u64 = 300;

/// Async variant that debounces, honors cancellation, and delivers the
/// breakdown via channel. A token cancelled during the debounce window drops
/// the evaluation entirely; nothing is sent.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    password: &SecretString,
    policy: &PolicyConfig,
    host: &HostContext,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreBreakdown>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("password scoring is about to start...");

    tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("password scoring cancelled before evaluation");
        return;
    }

    let breakdown = check_password(password, policy, host);

    if let Err(_e) = tx.send(breakdown).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password score: {}", _e);
    }
}
