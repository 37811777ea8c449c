use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: Timestamp,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
