//! Nullable infrastructure for deterministic testing.
//!
//! The core takes timestamps as arguments instead of reading a clock, so
//! tests drive time explicitly through a [`NullClock`].

pub mod clock;

pub use clock::NullClock;
