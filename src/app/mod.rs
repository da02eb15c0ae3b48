//! Application orchestration — state, terminal events, input handling, and
//! the form models that validate input before it reaches the ledger.

pub mod event;
pub mod forms;
pub mod handler;
pub mod state;
