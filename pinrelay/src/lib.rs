//! # pinrelay - Single-Handler-Per-Pin GPIO Interrupt Dispatch
//!
//! `pinrelay` multiplexes one hardware GPIO interrupt vector across a fixed
//! number of pins. Every firing is classified into one [`EventKind`] and routed
//! to the single [`PinHandler`] registered for that pin.
//!
//! The crate is `no_std` and allocation-free. The platform supplies an
//! [`IrqController`]; the dispatcher is the [`Trampoline`] it calls.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pinrelay::prelude::*;
//!
//! struct Button;
//! impl PinHandler for Button {
//!     fn deliver(&self, event: PinEvent) {
//!         if event.kind == EventKind::EdgeFall {
//!             // pressed
//!         }
//!     }
//! }
//!
//! static BUTTON: Button = Button;
//! static GPIO: GpioDispatcher<'static, Bank0> = GpioDispatcher::new(Bank0);
//!
//! GPIO.init()?;
//! GPIO.register_falling(&BUTTON, 15)?;
//! ```
//!
//! ## Features
//!
//! - `tracing`: log registrations, dropped events and wrapped deliveries
//! - `testing`: test doubles in [`testing`] (requires `std`)

#![no_std]
#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use pinrelay_core::{
    DEFAULT_MAX_PINS,
    // Events
    EventKind,
    // Handlers
    FnHandler,
    // Lower layer
    IrqController,
    IrqMask,
    PinError,
    PinEvent,
    PinHandler,
    Trampoline,
};

pub use pinrelay_std::{DispatchTable, GpioDispatcher, RouteOutcome};

/// Standard handler wrappers.
pub mod hooks {
    pub use pinrelay_std::hooks::{KindFilter, LoggingHandler};
}

/// Testing utilities.
#[cfg(feature = "testing")]
pub mod testing {
    pub use pinrelay_std::testing::{ArmCall, CountingHandler, MockController, RecordingHandler};
}

/// Prelude module - common imports for pinrelay.
///
/// # Usage
///
/// ```rust,ignore
/// use pinrelay::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        EventKind, GpioDispatcher, IrqController, IrqMask, PinError, PinEvent, PinHandler,
        Trampoline,
    };
}
