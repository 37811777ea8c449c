//! Snowflake-style identifier generation and compact base62 encoding.
//!
//! This crate is the leaf of the workspace: a thread-safe generator of
//! strictly increasing 64-bit identifiers ([`Snowflake`]) and a pure
//! encoder that renders them as short alphanumeric codes ([`base62`]).
//! It owns no I/O and knows nothing about the service layers above it.

pub mod base62;
mod clock;
pub mod error;
mod id;
mod snowflake;

pub use clock::{Clock, SystemClock};
pub use error::Error;
pub use id::SnowflakeId;
pub use snowflake::{Snowflake, SnowflakeSettings, DEFAULT_EPOCH};
