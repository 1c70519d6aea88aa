//! # Lower Layer
//!
//! The platform interface pinrelay consumes. It is implemented by board or
//! chip support code, never by this workspace (apart from test doubles).
//!
//! The lower layer is expected to:
//!
//! 1. Install one global entry point for the GPIO bank's interrupt vector.
//! 2. Enable or disable individual interrupt kinds per pin.
//! 3. Call [`Trampoline::on_interrupt`] for every firing, with interrupts for
//!    that vector masked for the duration of the call.

use crate::event::IrqMask;

/// The single entry point all pin events funnel through.
pub trait Trampoline: Sync {
    /// Called by the lower layer for any configured event on any pin.
    ///
    /// `pin` is the bank-wide GPIO number exactly as the hardware reports it.
    /// Do not narrow it before the call: values outside the table, including
    /// ones that do not fit a `u8`, are dropped by the implementation.
    fn on_interrupt(&self, pin: u32, mask: IrqMask);
}

/// Interrupt arming primitives provided by the platform.
///
/// `'a` is the lifetime of the trampoline the controller is asked to bind.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a GPIO interrupt controller",
    label = "missing `IrqController` implementation",
    note = "Implement `arm` and `install_global_handler` for the target platform."
)]
pub trait IrqController<'a> {
    /// Enable or disable the interrupt kinds in `mask` on `pin`, binding
    /// `trampoline` as the handler for the pin's vector.
    ///
    /// Must not block.
    fn arm(&self, pin: u8, mask: IrqMask, enabled: bool, trampoline: &'a dyn Trampoline);

    /// Register `trampoline` as the platform-wide GPIO interrupt entry point.
    fn install_global_handler(&self, trampoline: &'a dyn Trampoline);
}
