//! Standard handler wrappers.
//!
//! Each wrapper is itself a [`PinHandler`](pinrelay_core::PinHandler) and
//! forwards to the handler it wraps, so they stack freely.

pub mod filter;
pub mod logging;

pub use filter::KindFilter;
pub use logging::LoggingHandler;
