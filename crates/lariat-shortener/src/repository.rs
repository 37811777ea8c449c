pub mod memory;

use crate::error::Result;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored URL record in the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened.
    pub original_url: String,
    /// Number of times the short link has been followed.
    pub clicks: u64,
    /// When the mapping was created.
    pub created_at: Timestamp,
}

#[async_trait]
pub trait UrlRepository: Send + Sync + 'static {
    /// Stores a URL record under the given short code.
    ///
    /// Generated codes are unique by the generator's contract, so no
    /// conflict handling happens here; inserting the same code twice
    /// replaces the previous record.
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;

    /// Retrieves the record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Increments the click counter for a given short code.
    /// Returns `false` if the code does not exist.
    async fn record_click(&self, code: &ShortCode) -> Result<bool>;
}
