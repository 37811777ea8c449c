//! URL shortening service built on snowflake identifiers.
//!
//! This crate is the glue between the identifier core and the HTTP gateway:
//! a short-code newtype, the code-generator seam, a repository trait with an
//! in-memory implementation, and the shortener service tying them together.

pub mod error;
pub mod generator;
pub mod repository;
pub mod service;
pub mod shortcode;

pub use error::{Result, ShortenerError};
pub use generator::CodeGenerator;
pub use repository::memory::InMemoryRepository;
pub use repository::{UrlRecord, UrlRepository};
pub use service::{ShortenedUrl, Shortener, ShortenerService};
pub use shortcode::ShortCode;
