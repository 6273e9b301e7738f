//! Heuristic password strength scoring
//!
//! A deterministic, multi-pass scorer for client-facing strength feedback:
//! character-class analysis, sequence detection, repetition penalties,
//! keyword blocklists and score normalization, folded into a clamped 0-100
//! score, a 1-5 strength tier, a complexity label and a validity verdict.
//!
//! # Features
//!
//! - `async` (default): Enables a debounced channel-based scorer with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_STRICT_BLOCKLIST_PATH`: Custom path for the strict blocklist file
//! - `PWD_MEDIUM_BLOCKLIST_PATH`: Custom path for the medium blocklist file
//!
//! # Example
//!
//! ```rust
//! use pwd_score::{check_password, HostContext, PolicyConfig};
//! use secrecy::SecretString;
//!
//! let policy = PolicyConfig::default();
//! let host = HostContext::new("www.example.com");
//!
//! let password = SecretString::new("A9b!cDe#12".to_string().into());
//! let breakdown = check_password(&password, &policy, &host);
//!
//! assert!(breakdown.outputs.is_valid);
//! println!("Score: {}", breakdown.outputs.score);
//! println!("Complexity: {}", breakdown.outputs.complexity);
//! ```

// Internal modules
mod blocklist;
mod config;
mod passes;
mod scorer;
mod types;

// Public API
pub use blocklist::{Blocklist, BlocklistError};
pub use config::{
    ALPHA_SET, MEDIUM_BLOCKLIST_ENV, NUMBER_SET, PolicyConfig, STRICT_BLOCKLIST_ENV, SYMBOL_SET,
};
pub use scorer::check_password;
pub use types::{
    Complexity, HostContext, ObviousPatterns, OverallValues, ScoreBreakdown, StrengthOutputs,
};

#[cfg(feature = "async")]
pub use scorer::check_password_tx;
