use jiff::Timestamp;

/// Time source for the generator.
///
/// Abstracted behind a trait so tests can drive the clock deterministically.
pub trait Clock: Send + Sync {
    /// Returns the current time of the clock.
    fn now(&self) -> Timestamp;
}

#[derive(Debug)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
