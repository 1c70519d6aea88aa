//! # pinrelay-core
//!
//! Core traits and types for the pinrelay GPIO interrupt dispatch layer.
//!
//! This crate is `no_std`, allocation-free and has minimal dependencies. It is
//! meant to be imported by board support code and drivers that only need to
//! implement or consume the vocabulary, not the dispatch machinery in
//! `pinrelay-std`.
//!
//! # Layers
//!
//! pinrelay multiplexes one hardware interrupt vector across a fixed number of
//! pins. Three pieces meet in this crate:
//!
//! ## Lower Layer ([`IrqController`])
//!
//! The platform side. It can install one system-wide interrupt entry point and
//! arm or disarm interrupt kinds on individual pins. Pin configuration, pulls
//! and the interrupt controller itself live behind this trait.
//!
//! ## Entry Point ([`Trampoline`])
//!
//! The single function-like object the lower layer calls for every pin event.
//! It receives the pin and the raw [`IrqMask`] reported by hardware.
//!
//! ## Handlers ([`PinHandler`])
//!
//! Caller-owned capability objects. One handler per pin receives every
//! classified [`PinEvent`] for that pin and discriminates on [`EventKind`]
//! itself.
//!
//! # Error Types
//!
//! - [`PinError`] - Registration failures (invalid pin, null handler)

#![cfg_attr(not(test), no_std)]
#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod controller;
mod error;
mod event;
mod handler;

// Re-exports
pub use controller::{IrqController, Trampoline};
pub use error::PinError;
pub use event::{EventKind, IrqMask, PinEvent};
pub use handler::{FnHandler, PinHandler};

/// Number of pins a dispatch table covers unless configured otherwise.
pub const DEFAULT_MAX_PINS: usize = 28;
