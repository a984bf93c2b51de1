//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - The remote spell provider (could swap the HTTP API for a fixture)
//! - Clock (for testing)

mod error;
mod external;
mod testing;

pub use error::SourceError;
pub use external::SpellSourcePort;
pub use testing::ClockPort;

#[cfg(test)]
pub use external::MockSpellSourcePort;
#[cfg(test)]
pub use testing::MockClockPort;
