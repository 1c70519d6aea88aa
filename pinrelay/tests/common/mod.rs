#![allow(dead_code)]

use pinrelay::{DEFAULT_MAX_PINS, EventKind, IrqController, IrqMask, PinEvent, PinHandler, Trampoline};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

// ============================================================================
// Fake Hardware
// ============================================================================

/// A GPIO bank that keeps per-pin armed masks like real hardware would.
///
/// `fire` only reaches the trampoline when the condition is armed on the pin;
/// `inject` bypasses that check to simulate a spurious or stale event.
pub struct FakeBank {
    armed: Mutex<[IrqMask; DEFAULT_MAX_PINS]>,
    installed: AtomicUsize,
}

impl FakeBank {
    pub const fn new() -> Self {
        Self {
            armed: Mutex::new([IrqMask::empty(); DEFAULT_MAX_PINS]),
            installed: AtomicUsize::new(0),
        }
    }

    pub fn armed(&self, pin: u8) -> IrqMask {
        self.armed.lock().unwrap()[usize::from(pin)]
    }

    pub fn installed(&self) -> usize {
        self.installed.load(Ordering::SeqCst)
    }

    pub fn fire(&self, trampoline: &dyn Trampoline, pin: u8, condition: IrqMask) -> bool {
        let pending = self.armed(pin) & condition;
        if self.installed() == 0 || pending.is_empty() {
            return false;
        }
        trampoline.on_interrupt(u32::from(pin), pending);
        true
    }

    pub fn inject(&self, trampoline: &dyn Trampoline, pin: u8, mask: IrqMask) {
        trampoline.on_interrupt(u32::from(pin), mask);
    }
}

impl<'a> IrqController<'a> for FakeBank {
    fn arm(&self, pin: u8, mask: IrqMask, enabled: bool, _trampoline: &'a dyn Trampoline) {
        let mut armed = self.armed.lock().unwrap();
        let slot = &mut armed[usize::from(pin)];
        if enabled {
            slot.insert(mask);
        } else {
            slot.remove(mask);
        }
    }

    fn install_global_handler(&self, _trampoline: &'a dyn Trampoline) {
        self.installed.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Test Handlers
// ============================================================================

pub struct CollectingHandler {
    pub received: Mutex<Vec<PinEvent>>,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self {
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.received.lock().unwrap().iter().map(|e| e.kind).collect()
    }

    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl PinHandler for CollectingHandler {
    fn deliver(&self, event: PinEvent) {
        self.received.lock().unwrap().push(event);
    }
}

/// A handler whose delivery capability can be withdrawn after registration.
pub struct DetachableHandler {
    pub attached: AtomicBool,
    pub call_count: AtomicUsize,
}

impl DetachableHandler {
    pub fn new() -> Self {
        Self {
            attached: AtomicBool::new(true),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl PinHandler for DetachableHandler {
    fn deliver(&self, _event: PinEvent) {
        self.call_count.fetch_add(1, Ordering::SeqCst);
    }

    fn is_ready(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }
}
