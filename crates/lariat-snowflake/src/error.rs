use thiserror::Error;

/// Errors returned by Snowflake construction and ID generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Construction-time only: the configured worker id is out of range and
    /// no instance is created.
    #[error("invalid worker id {worker_id}; expected 0..={max_worker_id}")]
    InvalidWorkerId { worker_id: u16, max_worker_id: u16 },
    /// The wall clock regressed past the last issued tick. Transient: no
    /// generator state is mutated before this check fails, so the call is
    /// safe to retry once the clock has caught up. Retry policy belongs to
    /// the caller.
    #[error("clock moved backwards: last issued tick {last_ms}ms, sampled {now_ms}ms")]
    ClockMovedBackwards { last_ms: i64, now_ms: i64 },
    /// The elapsed time since the custom epoch no longer fits in the 41-bit
    /// timestamp field.
    #[error("elapsed milliseconds {elapsed_ms} exceed the 41-bit timestamp range")]
    TimestampOverflow { elapsed_ms: i64 },
    #[error("generator state lock is poisoned")]
    StatePoisoned,
}
