use crate::error::Result;
use crate::shortcode::ShortCode;
use lariat_snowflake::{Clock, Snowflake};

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage;
/// uniqueness of the produced codes is the generator's own contract, so the
/// service performs no collision checks.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Produces the next globally unique short code.
    ///
    /// Fallible: a snowflake-backed generator refuses to issue identifiers
    /// while the wall clock sits behind the last tick it used, and that
    /// condition must reach the caller rather than be swallowed here.
    fn generate(&self) -> Result<ShortCode>;
}

impl<C: Clock + 'static> CodeGenerator for Snowflake<C> {
    fn generate(&self) -> Result<ShortCode> {
        let id = self.next_id()?;
        Ok(ShortCode::from(id))
    }
}
