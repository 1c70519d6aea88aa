//! # pinrelay-std
//!
//! Standard implementations for the pinrelay GPIO interrupt dispatch layer.
//!
//! This crate provides:
//! - **Dispatch table**: [`DispatchTable`], a fixed-size pin → handler map
//! - **Routing**: [`DispatchTable::route`] and [`RouteOutcome`]
//! - **Registration API**: [`GpioDispatcher`]
//! - **Handler wrappers**: Logging, kind filtering
//! - **Testing utilities**: behind the `testing` feature (requires `std`)
//!
//! Everything except the `testing` module is `no_std` and never allocates.

#![cfg_attr(not(any(test, feature = "testing")), no_std)]
#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use pinrelay_core;

// Modules
pub mod dispatcher;
pub mod hooks;
pub mod router;
pub mod table;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dispatcher::GpioDispatcher;
pub use router::RouteOutcome;
pub use table::DispatchTable;
