//! # Interface Layer
//!
//! Entry points that turn a parsed command into the reply text sent back to the user.

pub mod commands;
