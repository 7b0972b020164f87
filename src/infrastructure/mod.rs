//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, SessionStore, WebFetcher).

pub mod http;
pub mod matrix;
pub mod session;
#[cfg(test)]
pub mod testing;
