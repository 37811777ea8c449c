use lariat_snowflake::{base62, SnowflakeId};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A short code identifying one shortened URL.
///
/// Generated codes are the base62 rendering of a snowflake identifier: at
/// most 11 characters over `0-9a-zA-Z`. Codes are monotonic and therefore
/// guessable; that is an accepted property, not a defect.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    /// Wraps an existing code string, e.g. one taken from a request path.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl From<SnowflakeId> for ShortCode {
    fn from(id: SnowflakeId) -> Self {
        Self(SmolStr::new(base62::encode(id.to_u64())))
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}
