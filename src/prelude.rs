//! Prelude module for the phugpa crate.
//!
//! Re-exports the derive_more macros used by the date and label types.

pub use derive_more::Display;
