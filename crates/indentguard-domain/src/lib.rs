//! Pure indentation evaluation (no IO).
//!
//! Input: a source model (syntax tree + token stream) constructed elsewhere.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod block;
pub mod indent;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;
pub mod checks;

pub use engine::evaluate;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;
