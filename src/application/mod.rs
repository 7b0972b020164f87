//! # Application Layer
//!
//! Contains the core request resolution logic of the bot: the session gate, the genre
//! matcher, the weather and ranking pipelines, and the command router tying them together.

pub mod logging;
pub mod matcher;
pub mod ranking;
pub mod router;
pub mod session;
pub mod weather;
