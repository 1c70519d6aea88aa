//! Error types for pinrelay.
//!
//! Registration is the only fallible surface. The router never reports errors:
//! it runs in interrupt context with no caller to receive them.

use thiserror::Error;

/// Errors returned by the registration API.
///
/// A rejected call never mutates the dispatch table or touches the lower layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// The pin index is outside the table.
    #[error("invalid pin {pin}: table covers pins 0..{capacity}")]
    InvalidPin {
        /// The rejected pin.
        pin: u8,
        /// Number of pins the table covers.
        capacity: usize,
    },

    /// The handler has no delivery capability.
    #[error("null handler for pin {pin}")]
    NullHandler {
        /// The pin the handler was offered for.
        pin: u8,
    },
}

impl PinError {
    /// Integer status code for C-style callers.
    ///
    /// Success is `0`; these mirror the negative codes of the board HAL.
    pub const fn code(&self) -> i32 {
        match self {
            PinError::NullHandler { .. } => -1,
            PinError::InvalidPin { .. } => -2,
        }
    }

    /// The pin the failed call was made for.
    pub const fn pin(&self) -> u8 {
        match *self {
            PinError::InvalidPin { pin, .. } | PinError::NullHandler { pin } => pin,
        }
    }
}
