//! # Session Stores
//!
//! Backends for the `SessionStore` trait: Redis for deployments, an in-memory map
//! for tests and builds without the `redis` feature.

#[cfg(any(test, not(feature = "redis")))]
pub mod memory;
#[cfg(feature = "redis")]
pub mod redis;

#[cfg(any(test, not(feature = "redis")))]
pub use memory::MemorySessionStore;
#[cfg(feature = "redis")]
pub use self::redis::RedisSessionStore;
