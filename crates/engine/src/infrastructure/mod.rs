//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus the
//! bundled dataset loader and environment configuration.

pub mod bundled;
pub mod clock;
pub mod config;
pub mod ports;
pub mod spell_api;
