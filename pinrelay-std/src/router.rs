//! # Event Classifier & Router
//!
//! Turns one hardware firing into at most one handler call.
//!
//! Routing never fails: stale or malformed state (a pin outside the table, an
//! empty slot, a handler that lost its delivery capability, a mask with no
//! recognized bit) degrades to a silent no-op. Deregistration can race with an
//! in-flight hardware event, so a late event for a cleared pin must simply be
//! dropped. The [`RouteOutcome`] tells callers which case applied.
//!
//! Routing is independent of what was armed: the lower layer decides which
//! conditions fire, the router classifies and delivers whatever arrives.

use pinrelay_core::{EventKind, IrqMask, PinEvent};

use crate::table::DispatchTable;

/// What a single routing attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The handler was called with this kind.
    Delivered(EventKind),
    /// The pin is outside the table.
    OutOfRange,
    /// No handler is registered for the pin.
    Vacant,
    /// The registered handler has no delivery capability.
    NotReady,
    /// The mask carried none of the recognized condition bits.
    Unrecognized,
}

impl RouteOutcome {
    /// Whether a handler was called.
    pub const fn is_delivered(&self) -> bool {
        matches!(self, RouteOutcome::Delivered(_))
    }

    /// The delivered kind, if a handler was called.
    pub const fn delivered(&self) -> Option<EventKind> {
        match *self {
            RouteOutcome::Delivered(kind) => Some(kind),
            _ => None,
        }
    }
}

impl<const N: usize> DispatchTable<'_, N> {
    /// Classify `mask` and deliver it to the handler registered for `pin`.
    ///
    /// The handler reference is copied out of the table before the call, so
    /// `deliver` runs outside the slot's critical section and may itself
    /// register or unregister pins.
    pub fn route(&self, pin: u8, mask: IrqMask) -> RouteOutcome {
        if self.check(pin).is_err() {
            return RouteOutcome::OutOfRange;
        }

        let Some(handler) = self.get(pin) else {
            return RouteOutcome::Vacant;
        };

        if !handler.is_ready() {
            return RouteOutcome::NotReady;
        }

        let Some(kind) = EventKind::classify(mask) else {
            return RouteOutcome::Unrecognized;
        };

        handler.deliver(PinEvent::new(pin, kind));
        RouteOutcome::Delivered(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHandler;

    #[test]
    fn test_route_delivers_classified_kind() {
        let handler = RecordingHandler::new();
        let table: DispatchTable<'_> = DispatchTable::new();
        table.install(3, &handler).unwrap();

        let outcome = table.route(3, IrqMask::EDGE_RISE);

        assert_eq!(outcome, RouteOutcome::Delivered(EventKind::EdgeRise));
        assert_eq!(
            handler.events(),
            vec![PinEvent::new(3, EventKind::EdgeRise)]
        );
    }

    #[test]
    fn test_route_priority() {
        let handler = RecordingHandler::new();
        let table: DispatchTable<'_> = DispatchTable::new();
        table.install(0, &handler).unwrap();

        let outcome = table.route(0, IrqMask::LEVEL_LOW | IrqMask::EDGE_RISE);

        assert_eq!(outcome.delivered(), Some(EventKind::LevelLow));
        assert_eq!(handler.kinds(), vec![EventKind::LevelLow]);
    }

    #[test]
    fn test_route_out_of_range() {
        let handler = RecordingHandler::new();
        let table: DispatchTable<'_, 8> = DispatchTable::new();
        table.install(7, &handler).unwrap();

        assert_eq!(table.route(8, IrqMask::EDGE_RISE), RouteOutcome::OutOfRange);
        assert_eq!(
            table.route(u8::MAX, IrqMask::EDGE_RISE),
            RouteOutcome::OutOfRange
        );
        assert_eq!(handler.count(), 0);
    }

    #[test]
    fn test_route_vacant() {
        let table: DispatchTable<'_> = DispatchTable::new();
        let outcome = table.route(1, IrqMask::EDGE_FALL);
        assert_eq!(outcome, RouteOutcome::Vacant);
        assert!(!outcome.is_delivered());
    }

    #[test]
    fn test_route_not_ready() {
        let handler = RecordingHandler::new();
        let table: DispatchTable<'_> = DispatchTable::new();
        table.install(4, &handler).unwrap();

        handler.set_ready(false);
        assert_eq!(table.route(4, IrqMask::EDGE_RISE), RouteOutcome::NotReady);
        assert_eq!(handler.count(), 0);

        handler.set_ready(true);
        assert!(table.route(4, IrqMask::EDGE_RISE).is_delivered());
        assert_eq!(handler.count(), 1);
    }

    #[test]
    fn test_route_unrecognized_mask() {
        let handler = RecordingHandler::new();
        let table: DispatchTable<'_> = DispatchTable::new();
        table.install(2, &handler).unwrap();

        assert_eq!(
            table.route(2, IrqMask::empty()),
            RouteOutcome::Unrecognized
        );
        assert_eq!(
            table.route(2, IrqMask::from_bits_retain(0x100)),
            RouteOutcome::Unrecognized
        );
        assert_eq!(handler.count(), 0);
    }
}
