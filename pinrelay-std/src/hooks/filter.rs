//! Kind filter for handlers that only care about some event kinds.

use pinrelay_core::{EventKind, IrqMask, PinEvent, PinHandler};

/// A handler wrapper that forwards only selected event kinds.
///
/// The dispatcher hands every kind on a pin to the one registered handler.
/// Wrapping it in a `KindFilter` drops the kinds it does not want.
pub struct KindFilter<H> {
    inner: H,
    accept: IrqMask,
}

impl<H> KindFilter<H> {
    /// Forward events whose kind bit is in `accept`.
    pub const fn new(inner: H, accept: IrqMask) -> Self {
        Self { inner, accept }
    }

    /// Forward `EdgeFall` and `EdgeRise` only.
    pub const fn edges(inner: H) -> Self {
        Self::new(inner, IrqMask::EDGE_FALL.union(IrqMask::EDGE_RISE))
    }

    /// Forward `LevelLow` and `LevelHigh` only.
    pub const fn levels(inner: H) -> Self {
        Self::new(inner, IrqMask::LEVEL_LOW.union(IrqMask::LEVEL_HIGH))
    }

    /// Whether `kind` passes the filter.
    pub fn accepts(&self, kind: EventKind) -> bool {
        self.accept.contains(kind.mask())
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: PinHandler> PinHandler for KindFilter<H> {
    fn deliver(&self, event: PinEvent) {
        if self.accepts(event.kind) {
            self.inner.deliver(event);
        }
    }

    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }
}
