use modular_bitfield::prelude::*;
use std::fmt;

/// A snowflake identifier packed into 64 bits.
///
/// Fields are declared least- to most-significant, so the packed value is
/// `(timestamp << 22) | (worker_id << 12) | sequence` with the top (sign)
/// bit unused; as a signed 64-bit integer the value is always non-negative.
#[bitfield]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnowflakeId {
    /// 12 bits for sequence number (resets every millisecond).
    pub sequence: B12,
    /// 10 bits for worker ID (allows up to 1024 generator instances).
    pub worker_id: B10,
    /// 41 bits for timestamp (milliseconds since a custom epoch).
    pub timestamp: B41,
    #[skip]
    __: B1,
}

impl SnowflakeId {
    /// Returns the packed 64-bit value.
    ///
    /// Numeric order of packed values matches generation order on a single
    /// generator instance: the timestamp occupies the high bits and the
    /// sequence the low bits.
    pub fn to_u64(self) -> u64 {
        u64::from_le_bytes(self.into_bytes())
    }

    /// Rebuilds an identifier from its packed 64-bit value.
    pub fn from_u64(value: u64) -> Self {
        Self::from_bytes(value.to_le_bytes())
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeId")
            .field("timestamp", &self.timestamp())
            .field("worker_id", &self.worker_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}
