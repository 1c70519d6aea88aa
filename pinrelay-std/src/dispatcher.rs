//! # Registration API
//!
//! [`GpioDispatcher`] ties a [`DispatchTable`] to the platform's
//! [`IrqController`] and keeps the set of armed interrupts consistent with the
//! set of registered handlers. It is also the [`Trampoline`] the controller
//! calls for every pin event.
//!
//! # Lifecycle
//!
//! 1. Construct one dispatcher, usually owned by board initialization. `new`
//!    is `const`, so a `static` works too.
//! 2. Call [`init`](GpioDispatcher::init) once before any registration. Calling
//!    it again resets every slot.
//! 3. Register and unregister handlers from normal program flow.
//!
//! # Example
//!
//! ```rust,ignore
//! static GPIO: GpioDispatcher<'static, Rp2040Bank0> = GpioDispatcher::new(Rp2040Bank0);
//! static BUTTON: Button = Button::new();
//!
//! GPIO.init()?;
//! GPIO.register_falling(&BUTTON, 15)?;
//! ```

use pinrelay_core::{
    DEFAULT_MAX_PINS, IrqController, IrqMask, PinError, PinHandler, Trampoline,
};

use crate::router::RouteOutcome;
use crate::table::DispatchTable;

/// Single-handler-per-pin GPIO interrupt dispatcher.
///
/// # Type Parameters
///
/// - `'a`: How long registered handlers and the dispatcher itself are borrowed
///   by the controller
/// - `C`: The lower-layer [`IrqController`]
/// - `N`: Number of pins covered
pub struct GpioDispatcher<'a, C, const N: usize = DEFAULT_MAX_PINS> {
    table: DispatchTable<'a, N>,
    controller: C,
}

impl<'a, C, const N: usize> GpioDispatcher<'a, C, N> {
    /// Create a dispatcher with an empty table.
    ///
    /// Nothing is installed with the controller until [`init`](Self::init).
    pub const fn new(controller: C) -> Self {
        Self {
            table: DispatchTable::new(),
            controller,
        }
    }

    /// Read-only view of the dispatch table.
    ///
    /// Only inspection is available here; slots change through
    /// [`register_rising`](Self::register_rising),
    /// [`register_falling`](Self::register_falling),
    /// [`unregister`](Self::unregister) and [`init`](Self::init).
    ///
    /// ```compile_fail,E0624
    /// use pinrelay_std::DispatchTable;
    /// use pinrelay_std::pinrelay_core::PinEvent;
    ///
    /// let table: DispatchTable<'_> = DispatchTable::new();
    /// let handler = |_event: PinEvent| {};
    /// let _ = table.install(3, &handler);
    /// ```
    ///
    /// ```compile_fail,E0624
    /// use pinrelay_std::DispatchTable;
    ///
    /// let table: DispatchTable<'_> = DispatchTable::new();
    /// table.reset();
    /// ```
    pub fn table(&self) -> &DispatchTable<'a, N> {
        &self.table
    }

    /// The lower-layer controller.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Whether `pin` currently has a registered handler.
    pub fn is_registered(&self, pin: u8) -> bool {
        self.table.is_occupied(pin)
    }
}

impl<'a, C, const N: usize> GpioDispatcher<'a, C, N>
where
    C: IrqController<'a> + Sync + 'a,
{
    /// Clear every slot and install this dispatcher as the global GPIO
    /// interrupt entry point.
    ///
    /// Re-invocation resets all state; it never accumulates.
    pub fn init(&'a self) -> Result<(), PinError> {
        self.table.reset();
        self.controller.install_global_handler(self);

        #[cfg(feature = "tracing")]
        tracing::debug!(capacity = N, "gpio dispatcher initialized");

        Ok(())
    }

    /// Route every event on `pin` to `handler` and arm a rising-edge
    /// interrupt.
    ///
    /// Any previous registration on `pin` is replaced.
    ///
    /// # Errors
    ///
    /// - [`PinError::InvalidPin`] if `pin` is outside the table. Checked first.
    /// - [`PinError::NullHandler`] if `handler` is not ready.
    pub fn register_rising(
        &'a self,
        handler: &'a dyn PinHandler,
        pin: u8,
    ) -> Result<(), PinError> {
        self.register(handler, pin, IrqMask::EDGE_RISE)
    }

    /// Route every event on `pin` to `handler` and arm a falling-edge
    /// interrupt.
    ///
    /// Same contract as [`register_rising`](Self::register_rising).
    pub fn register_falling(
        &'a self,
        handler: &'a dyn PinHandler,
        pin: u8,
    ) -> Result<(), PinError> {
        self.register(handler, pin, IrqMask::EDGE_FALL)
    }

    /// Clear the registration for `pin` and disarm every interrupt kind on it.
    ///
    /// The global entry point stays installed so other pins keep working.
    /// Unregistering a pin with no handler succeeds.
    ///
    /// # Errors
    ///
    /// [`PinError::InvalidPin`] if `pin` is outside the table.
    pub fn unregister(&'a self, pin: u8) -> Result<(), PinError> {
        let removed = self.table.remove(pin)?;
        self.controller.arm(pin, IrqMask::all(), false, self);

        #[cfg(feature = "tracing")]
        tracing::debug!(pin, removed = removed.is_some(), "pin handler unregistered");
        #[cfg(not(feature = "tracing"))]
        let _ = removed;

        Ok(())
    }

    fn register(
        &'a self,
        handler: &'a dyn PinHandler,
        pin: u8,
        trigger: IrqMask,
    ) -> Result<(), PinError> {
        self.table.check(pin)?;
        if !handler.is_ready() {
            return Err(PinError::NullHandler { pin });
        }

        let previous = self.table.install(pin, handler)?;
        self.controller.arm(pin, trigger, true, self);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            pin,
            trigger = ?trigger,
            replaced = previous.is_some(),
            "pin handler registered"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = previous;

        Ok(())
    }
}

impl<C, const N: usize> Trampoline for GpioDispatcher<'_, C, N>
where
    C: Sync,
{
    fn on_interrupt(&self, pin: u32, mask: IrqMask) {
        let outcome = match u8::try_from(pin) {
            Ok(pin) => self.table.route(pin, mask),
            Err(_) => RouteOutcome::OutOfRange,
        };

        #[cfg(feature = "tracing")]
        {
            if !outcome.is_delivered() {
                tracing::trace!(pin, mask = mask.bits(), outcome = ?outcome, "gpio event dropped");
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = outcome;
    }
}
