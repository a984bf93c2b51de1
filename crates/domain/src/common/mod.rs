//! Common utility functions shared across the Spellbook crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use string::{
    collation_key, compare_display_names, contains_ignore_case, none_if_placeholder,
    DISPLAY_PLACEHOLDER,
};
