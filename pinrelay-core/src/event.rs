//! Raw interrupt masks and their classification.
//!
//! Hardware may report several conditions in one firing. [`EventKind::classify`]
//! reduces the mask to a single kind using a fixed priority: level conditions
//! beat edge transitions, low before high, falling before rising.

use bitflags::bitflags;

bitflags! {
    /// Raw interrupt condition bits as reported by the lower layer.
    ///
    /// Bit values follow the RP2040 `IO_BANK0` encoding. Unknown bits are
    /// retained and ignored by the classifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IrqMask: u32 {
        /// Pin is held low.
        const LEVEL_LOW = 1 << 0;
        /// Pin is held high.
        const LEVEL_HIGH = 1 << 1;
        /// High to low transition.
        const EDGE_FALL = 1 << 2;
        /// Low to high transition.
        const EDGE_RISE = 1 << 3;
    }
}

/// Normalized classification of one interrupt firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The pin is held low.
    LevelLow,
    /// The pin is held high.
    LevelHigh,
    /// The pin went from high to low.
    EdgeFall,
    /// The pin went from low to high.
    EdgeRise,
}

impl EventKind {
    /// Classification order. The first kind whose bit is set wins.
    pub const PRIORITY: [EventKind; 4] = [
        EventKind::LevelLow,
        EventKind::LevelHigh,
        EventKind::EdgeFall,
        EventKind::EdgeRise,
    ];

    /// Reduce a raw mask to exactly one kind.
    ///
    /// Returns `None` when none of the four recognized bits is set.
    pub fn classify(mask: IrqMask) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|kind| mask.contains(kind.mask()))
    }

    /// The mask bit this kind corresponds to.
    pub const fn mask(self) -> IrqMask {
        match self {
            EventKind::LevelLow => IrqMask::LEVEL_LOW,
            EventKind::LevelHigh => IrqMask::LEVEL_HIGH,
            EventKind::EdgeFall => IrqMask::EDGE_FALL,
            EventKind::EdgeRise => IrqMask::EDGE_RISE,
        }
    }

    /// `true` for `LevelLow` and `LevelHigh`.
    pub const fn is_level(self) -> bool {
        matches!(self, EventKind::LevelLow | EventKind::LevelHigh)
    }

    /// `true` for `EdgeFall` and `EdgeRise`.
    pub const fn is_edge(self) -> bool {
        !self.is_level()
    }
}

/// A classified event as handed to a [`PinHandler`].
///
/// [`PinHandler`]: crate::PinHandler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinEvent {
    /// The pin that fired.
    pub pin: u8,
    /// What happened on it.
    pub kind: EventKind,
}

impl PinEvent {
    /// Create a new event.
    pub const fn new(pin: u8, kind: EventKind) -> Self {
        Self { pin, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single_bits() {
        assert_eq!(
            EventKind::classify(IrqMask::LEVEL_LOW),
            Some(EventKind::LevelLow)
        );
        assert_eq!(
            EventKind::classify(IrqMask::LEVEL_HIGH),
            Some(EventKind::LevelHigh)
        );
        assert_eq!(
            EventKind::classify(IrqMask::EDGE_FALL),
            Some(EventKind::EdgeFall)
        );
        assert_eq!(
            EventKind::classify(IrqMask::EDGE_RISE),
            Some(EventKind::EdgeRise)
        );
    }

    #[test]
    fn test_level_low_beats_edge_rise() {
        let mask = IrqMask::LEVEL_LOW | IrqMask::EDGE_RISE;
        assert_eq!(EventKind::classify(mask), Some(EventKind::LevelLow));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            EventKind::classify(IrqMask::all()),
            Some(EventKind::LevelLow)
        );
        assert_eq!(
            EventKind::classify(IrqMask::LEVEL_HIGH | IrqMask::EDGE_FALL),
            Some(EventKind::LevelHigh)
        );
        assert_eq!(
            EventKind::classify(IrqMask::EDGE_FALL | IrqMask::EDGE_RISE),
            Some(EventKind::EdgeFall)
        );
    }

    #[test]
    fn test_unrecognized_mask() {
        assert_eq!(EventKind::classify(IrqMask::empty()), None);
        // Bits outside the known set are ignored.
        assert_eq!(EventKind::classify(IrqMask::from_bits_retain(0x30)), None);
        assert_eq!(
            EventKind::classify(IrqMask::from_bits_retain(0x30 | 0x8)),
            Some(EventKind::EdgeRise)
        );
    }

    #[test]
    fn test_kind_predicates() {
        assert!(EventKind::LevelLow.is_level());
        assert!(EventKind::LevelHigh.is_level());
        assert!(EventKind::EdgeFall.is_edge());
        assert!(EventKind::EdgeRise.is_edge());
        assert!(!EventKind::EdgeRise.is_level());
    }

    #[test]
    fn test_mask_matches_classification() {
        for kind in EventKind::PRIORITY {
            assert_eq!(EventKind::classify(kind.mask()), Some(kind));
        }
    }
}
