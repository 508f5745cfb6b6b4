//! Deterministic questionnaire generation.
//!
//! - `normalize`: builds a `FounderProductDescription` from a stored founder-input record.
//! - `labels`: call-to-action resolution and price formatting used in prompts.
//! - `compile`: assembles the ordered step list.
//! - `progress`: completion percentage and answer-key checks against a stored step list.
//!
//! Nothing here touches the store; services pass records in and persist the output.

pub mod compile;
pub mod labels;
pub mod normalize;
pub mod progress;

pub use compile::compile;
pub use normalize::FounderProductDescription;
