//! # Dispatch Table
//!
//! A fixed-size mapping from pin index to an optional handler reference.
//!
//! The table owns no hardware state: it is pure bookkeeping. It is shared
//! between normal program flow (registration) and interrupt context (routing),
//! so every slot lives behind a [`critical_section::Mutex`] and each read or
//! write of a slot is one critical section.
//!
//! # Invariants
//!
//! - Slot `i` is populated iff pin `i` has an active registration.
//! - At most one handler per pin; installing replaces the previous occupant.
//! - The table is never resized. `N` is fixed at compile time.
//!
//! Mutation is crate-private. Callers inspect the table through
//! [`GpioDispatcher::table`](crate::GpioDispatcher::table); every change goes
//! through registration, deregistration or `init`, which also keep the
//! controller's armed interrupts in step.

use core::cell::Cell;
use core::fmt;

use critical_section::Mutex;
use pinrelay_core::{DEFAULT_MAX_PINS, PinError, PinHandler};

type Slot<'a> = Mutex<Cell<Option<&'a dyn PinHandler>>>;

/// Pin → handler map with `N` slots.
///
/// # Type Parameters
///
/// - `'a`: How long registered handlers are borrowed for
/// - `N`: Number of pins covered (at most 256, since pins are `u8`)
///
/// # Example
///
/// ```rust,ignore
/// gpio.register_falling(&button, 3)?;
/// assert!(gpio.table().is_occupied(3));
/// assert_eq!(gpio.table().occupied().collect::<Vec<_>>(), [3]);
/// ```
pub struct DispatchTable<'a, const N: usize = DEFAULT_MAX_PINS> {
    slots: [Slot<'a>; N],
}

impl<'a, const N: usize> DispatchTable<'a, N> {
    const CAPACITY_FITS_PIN_ID: () = assert!(N <= 256, "pin ids are u8: at most 256 slots");
    const EMPTY_SLOT: Slot<'a> = Mutex::new(Cell::new(None));

    /// Create a table with every slot empty.
    pub const fn new() -> Self {
        let () = Self::CAPACITY_FITS_PIN_ID;
        Self {
            slots: [Self::EMPTY_SLOT; N],
        }
    }

    /// Number of pins the table covers.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Validate `pin` against the table bounds.
    #[inline]
    pub fn check(&self, pin: u8) -> Result<usize, PinError> {
        let index = usize::from(pin);
        if index < N {
            Ok(index)
        } else {
            Err(PinError::InvalidPin { pin, capacity: N })
        }
    }

    /// Put `handler` into the slot for `pin`, returning the previous occupant.
    pub(crate) fn install(
        &self,
        pin: u8,
        handler: &'a dyn PinHandler,
    ) -> Result<Option<&'a dyn PinHandler>, PinError> {
        let index = self.check(pin)?;
        Ok(critical_section::with(|cs| {
            self.slots[index].borrow(cs).replace(Some(handler))
        }))
    }

    /// Empty the slot for `pin`, returning what was there.
    ///
    /// Removing from an empty slot is not an error.
    pub(crate) fn remove(&self, pin: u8) -> Result<Option<&'a dyn PinHandler>, PinError> {
        let index = self.check(pin)?;
        Ok(critical_section::with(|cs| {
            self.slots[index].borrow(cs).take()
        }))
    }

    /// The handler registered for `pin`, if any.
    ///
    /// Out-of-range pins are never looked up and yield `None`.
    pub fn get(&self, pin: u8) -> Option<&'a dyn PinHandler> {
        let index = self.check(pin).ok()?;
        critical_section::with(|cs| self.slots[index].borrow(cs).get())
    }

    /// Whether `pin` has a registered handler.
    #[inline]
    pub fn is_occupied(&self, pin: u8) -> bool {
        self.get(pin).is_some()
    }

    /// Empty every slot.
    pub(crate) fn reset(&self) {
        critical_section::with(|cs| {
            for slot in &self.slots {
                slot.borrow(cs).set(None);
            }
        });
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| {
            self.slots
                .iter()
                .filter(|slot| slot.borrow(cs).get().is_some())
                .count()
        })
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the pins that currently have a handler, in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = u8> + '_ {
        (0..N)
            .map(|index| index as u8)
            .filter(move |&pin| self.is_occupied(pin))
    }
}

impl<const N: usize> Default for DispatchTable<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for DispatchTable<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("capacity", &N)
            .field("occupied", &self.len())
            .finish()
    }
}
