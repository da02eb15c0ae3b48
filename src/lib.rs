//! Track shared-expense balances with friends and split bills with them.
//!
//! The [`core`] module holds the ledger and the split arithmetic, [`app`]
//! turns key presses into ledger operations, and [`ui`] renders the state
//! with Ratatui.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
