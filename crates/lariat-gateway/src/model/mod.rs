mod url;

pub use url::{HealthResponse, ShortenRequest, ShortenResponse, StatsResponse};
