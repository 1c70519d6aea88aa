//! Testing utilities for pinrelay.
//!
//! This module provides test doubles for both sides of the dispatcher. It needs
//! `std` and is only built with the `testing` feature (or in this crate's own
//! tests).
//!
//! # Features
//!
//! - [`RecordingHandler`]: A handler that records every event it receives
//! - [`CountingHandler`]: A handler that only counts deliveries
//! - [`MockController`]: An [`IrqController`] that records arm calls instead of
//!   touching hardware

use pinrelay_core::{EventKind, IrqController, IrqMask, PinEvent, PinHandler, Trampoline};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records all events it receives.
///
/// Its readiness can be toggled to simulate a handler losing its delivery
/// capability while registered.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new();
/// dispatcher.register_rising(&recorder, 3)?;
///
/// dispatcher.on_interrupt(3, IrqMask::EDGE_RISE);
/// assert_eq!(recorder.kinds(), vec![EventKind::EdgeRise]);
/// ```
pub struct RecordingHandler {
    events: Mutex<Vec<PinEvent>>,
    ready: AtomicBool,
}

impl RecordingHandler {
    /// Create a new recording handler that is ready.
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            ready: AtomicBool::new(true),
        }
    }

    /// Create a recording handler with no delivery capability.
    pub const fn not_ready() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            ready: AtomicBool::new(false),
        }
    }

    /// Set whether the handler reports itself ready.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<PinEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Get the kinds of the recorded events, in order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.lock().unwrap().iter().map(|e| e.kind).collect()
    }

    /// Get the most recent event.
    pub fn last(&self) -> Option<PinEvent> {
        self.events.lock().unwrap().last().copied()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PinHandler for RecordingHandler {
    fn deliver(&self, event: PinEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts deliveries.
pub struct CountingHandler {
    count: AtomicUsize,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PinHandler for CountingHandler {
    fn deliver(&self, _event: PinEvent) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Mock Controller
// ============================================================================

/// One recorded [`IrqController::arm`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmCall {
    /// The pin.
    pub pin: u8,
    /// The interrupt kinds.
    pub mask: IrqMask,
    /// Whether they were enabled or disabled.
    pub enabled: bool,
}

/// A lower layer that records what it is asked to do.
///
/// It does not keep the trampoline: tests simulate hardware by calling
/// [`Trampoline::on_interrupt`] on the dispatcher directly.
pub struct MockController {
    calls: Mutex<Vec<ArmCall>>,
    installs: AtomicUsize,
}

impl MockController {
    /// Create a controller with no recorded calls.
    pub const fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            installs: AtomicUsize::new(0),
        }
    }

    /// Get a clone of the recorded arm calls, oldest first.
    pub fn calls(&self) -> Vec<ArmCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the most recent arm call.
    pub fn last_call(&self) -> Option<ArmCall> {
        self.calls.lock().unwrap().last().copied()
    }

    /// Get the arm calls made for one pin.
    pub fn calls_for(&self, pin: u8) -> Vec<ArmCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.pin == pin)
            .copied()
            .collect()
    }

    /// Number of times a global handler was installed.
    pub fn installs(&self) -> usize {
        self.installs.load(Ordering::SeqCst)
    }

    /// Clear recorded arm calls. The install count is kept.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Default for MockController {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IrqController<'a> for MockController {
    fn arm(&self, pin: u8, mask: IrqMask, enabled: bool, _trampoline: &'a dyn Trampoline) {
        self.calls.lock().unwrap().push(ArmCall { pin, mask, enabled });
    }

    fn install_global_handler(&self, _trampoline: &'a dyn Trampoline) {
        self.installs.fetch_add(1, Ordering::SeqCst);
    }
}
