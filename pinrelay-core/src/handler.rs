//! # Handlers
//!
//! A handler is the caller-owned endpoint for one pin. The dispatcher keeps a
//! borrowed `&'a dyn PinHandler` and calls [`PinHandler::deliver`] from
//! interrupt context, so implementations should be short and must not block.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `|event: PinEvent| { ... }`
//! 2. **Struct implementation**: `impl PinHandler for MyButton`
//! 3. **Function pointer**: [`FnHandler::new(on_edge)`](FnHandler::new)

use crate::event::PinEvent;

/// Receives classified events for the pin it is registered on.
///
/// `Sync` is required because `deliver` runs in interrupt context while the
/// owner keeps using the handler from normal program flow.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive pin events",
    label = "missing `PinHandler` implementation",
    note = "Handlers must implement `deliver` and be `Sync`."
)]
pub trait PinHandler: Sync {
    /// Called from interrupt context with the classified event.
    fn deliver(&self, event: PinEvent);

    /// Whether this handler currently has a delivery capability.
    ///
    /// Registration rejects handlers that are not ready, and the router skips
    /// them at dispatch time.
    fn is_ready(&self) -> bool {
        true
    }
}

// Blanket impl for closures
impl<F> PinHandler for F
where
    F: Fn(PinEvent) + Sync,
{
    fn deliver(&self, event: PinEvent) {
        (self)(event)
    }
}

/// A handler backed by an optional function pointer.
///
/// This is the shape board code written against a plain callback table
/// expects: `FnHandler::empty()` carries no delivery capability and is refused
/// at registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnHandler {
    callback: Option<fn(PinEvent)>,
}

impl FnHandler {
    /// Create a handler that calls `callback`.
    pub const fn new(callback: fn(PinEvent)) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    /// Create a handler with no callback.
    pub const fn empty() -> Self {
        Self { callback: None }
    }
}

impl PinHandler for FnHandler {
    fn deliver(&self, event: PinEvent) {
        if let Some(callback) = self.callback {
            callback(event);
        }
    }

    fn is_ready(&self) -> bool {
        self.callback.is_some()
    }
}
