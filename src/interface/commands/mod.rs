//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (/help, /start, /weather, /top).
//! These handlers are invoked by the Router and return the reply text.

pub mod help;
pub mod start;
pub mod top;
pub mod weather;
