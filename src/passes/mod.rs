//! Scoring passes
//!
//! Each pass computes one slice of the breakdown; the scorer runs them in a
//! fixed order and sums their contributions.

pub mod complexity;
pub mod patterns;
pub mod scoring;
pub mod sequences;
