use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::id::SnowflakeId;
use jiff::Timestamp;
use std::sync::Mutex;
use typed_builder::TypedBuilder;

/// Fixed custom epoch for the timestamp field: 2025-01-01T00:00:00Z.
///
/// 41 bits of milliseconds give roughly 69 years of range from this point.
pub const DEFAULT_EPOCH: Timestamp = Timestamp::constant(1_735_689_600, 0);

const MAX_WORKER_ID: u16 = (1 << 10) - 1;
const MAX_SEQUENCE: u16 = (1 << 12) - 1;
const MAX_TIMESTAMP_MS: i64 = (1 << 41) - 1;

/// Configures a Snowflake generator instance.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct SnowflakeSettings {
    /// A unique worker index in the range `[0, 1023]`.
    ///
    /// Cross-instance uniqueness holds only when cooperating instances are
    /// configured with distinct worker ids; assigning and coordinating those
    /// ids is the caller's responsibility, not this crate's.
    #[builder]
    pub worker_id: u16,
    /// Custom epoch used as the zero point for the 41-bit timestamp field.
    #[builder(default = DEFAULT_EPOCH)]
    pub epoch: Timestamp,
}

#[derive(Debug, Default)]
struct GeneratorState {
    /// Most recent tick (ms since the epoch) at which an id was issued.
    /// Zero means nothing has been issued yet. Monotonically non-decreasing.
    last_timestamp_ms: i64,
    /// Counter for ids issued within the tick equal to `last_timestamp_ms`.
    sequence: u16,
}

/// Snowflake ID generator producing strictly increasing 64-bit identifiers.
///
/// One instance never returns the same value twice; instances configured
/// with distinct worker ids never collide with each other.
#[derive(Debug)]
pub struct Snowflake<C: Clock> {
    epoch: Timestamp,
    worker_id: u16,
    clock: C,
    state: Mutex<GeneratorState>,
}

impl Snowflake<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new(settings: SnowflakeSettings) -> Result<Self, Error> {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> Snowflake<C> {
    /// Creates a generator that samples time from the given clock.
    pub fn with_clock(settings: SnowflakeSettings, clock: C) -> Result<Self, Error> {
        if settings.worker_id > MAX_WORKER_ID {
            return Err(Error::InvalidWorkerId {
                worker_id: settings.worker_id,
                max_worker_id: MAX_WORKER_ID,
            });
        }

        Ok(Self {
            epoch: settings.epoch,
            worker_id: settings.worker_id,
            clock,
            state: Mutex::new(GeneratorState::default()),
        })
    }

    /// Returns the worker id embedded in every identifier this instance issues.
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    /// Milliseconds elapsed since the configured epoch.
    fn elapsed_ms(&self) -> i64 {
        self.clock.now().as_millisecond() - self.epoch.as_millisecond()
    }

    /// Generates the next unique identifier.
    ///
    /// The whole state transition runs under the instance lock, so calls
    /// from any number of threads serialize into a total order and the
    /// returned values are strictly increasing.
    ///
    /// Fails with [`Error::ClockMovedBackwards`] when the wall clock has
    /// regressed past the last issued tick (e.g. an NTP correction); nothing
    /// is mutated before that check, so the caller may simply retry once the
    /// clock has caught up. No retry or sleep happens internally.
    pub fn next_id(&self) -> Result<SnowflakeId, Error> {
        let mut state = self.state.lock().map_err(|_| Error::StatePoisoned)?;

        let mut now = self.elapsed_ms();

        if now < state.last_timestamp_ms {
            return Err(Error::ClockMovedBackwards {
                last_ms: state.last_timestamp_ms,
                now_ms: now,
            });
        }

        if now == state.last_timestamp_ms {
            state.sequence = (state.sequence + 1) & MAX_SEQUENCE;
            if state.sequence == 0 {
                // The 4096 ids available for this tick are exhausted. Spin
                // on the clock until the next tick rather than sleeping: the
                // gap is sub-millisecond and a tight re-sample keeps latency
                // minimal in this rare case.
                while now <= state.last_timestamp_ms {
                    now = self.elapsed_ms();
                }
            }
        } else {
            state.sequence = 0;
        }

        if now > MAX_TIMESTAMP_MS {
            return Err(Error::TimestampOverflow { elapsed_ms: now });
        }

        state.last_timestamp_ms = now;

        Ok(SnowflakeId::new()
            .with_timestamp(now as u64)
            .with_worker_id(self.worker_id)
            .with_sequence(state.sequence))
    }
}
