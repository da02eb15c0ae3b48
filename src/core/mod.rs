//! Core logic – the friend ledger, bill splitting, and balance classification.
//!
//! Nothing in this module depends on any TUI or rendering crate, so every
//! operation can be exercised directly from tests.

pub mod balance;
pub mod ledger;
pub mod seed;
pub mod split;
