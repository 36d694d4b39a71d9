//! General Purpose Input / Output
//!
//! The nRF51 has a single 32 pin port. Pins are handed out by number through
//! [`Parts::take`], each at most once, and change mode by consuming `self`.
use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_hal::digital::{ErrorType, OutputPin, PinState, StatefulOutputPin};

use crate::pac::GPIO;

/// Number of pins on port 0
pub const PIN_COUNT: u8 = 32;

/// Extension trait to split the GPIO peripheral in independent pins
pub trait GpioExt {
    /// Splits the GPIO block into independently owned pins
    fn split(self) -> Parts;
}

/// Disconnected pin (type state), the reset configuration
pub struct Disconnected;

/// Output mode (type state)
pub struct Output<MODE> {
    _mode: PhantomData<MODE>,
}

/// Push pull output (type state)
pub struct PushPull;

/// Pin number on port 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(u8);

impl PinId {
    /// Returns `None` for numbers outside the port
    pub const fn new(number: u8) -> Option<Self> {
        if number < PIN_COUNT {
            Some(PinId(number))
        } else {
            None
        }
    }

    /// Builds a pin id in a `const` context, failing to compile on a bad number
    pub(crate) const fn from_const(number: u8) -> Self {
        assert!(number < PIN_COUNT, "pin number out of range");
        PinId(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub(crate) const fn mask(self) -> u32 {
        1 << self.0
    }
}

/// GPIO parts
pub struct Parts {
    taken: u32,
}

impl GpioExt for GPIO {
    fn split(self) -> Parts {
        Parts::new()
    }
}

impl Parts {
    const fn new() -> Self {
        Parts { taken: 0 }
    }

    /// Takes ownership of a pin, `None` if it was taken before
    pub fn take(&mut self, id: PinId) -> Option<Pin<Disconnected>> {
        if self.taken & id.mask() != 0 {
            return None;
        }
        self.taken |= id.mask();
        Some(Pin {
            id,
            _mode: PhantomData,
        })
    }
}

/// A single pin on port 0
pub struct Pin<MODE> {
    id: PinId,
    _mode: PhantomData<MODE>,
}

impl<MODE> Pin<MODE> {
    pub fn id(&self) -> PinId {
        self.id
    }

    /// Configures the pin to operate as a push pull output pin
    ///
    /// The pin starts at whatever level the output latch holds, low after
    /// reset.
    pub fn into_push_pull_output(self) -> Pin<Output<PushPull>> {
        // NOTE(unsafe) the pin's configuration register is owned by this pin
        let gpio = unsafe { &*GPIO::ptr() };
        gpio.pin_cnf[self.id.0 as usize].write(|w| {
            w.dir().output();
            w.input().disconnect();
            w.pull().disabled();
            w.drive().s0s1();
            w.sense().disabled();
            w
        });
        Pin {
            id: self.id,
            _mode: PhantomData,
        }
    }

    /// Configures the pin to operate as a push pull output pin with
    /// `initial_state` specifying whether the pin should initially be high
    /// or low
    pub fn into_push_pull_output_in_state(
        self,
        initial_state: PinState,
    ) -> Pin<Output<PushPull>> {
        self.internal_set_state(initial_state);
        self.into_push_pull_output()
    }

    fn internal_set_state(&self, state: PinState) {
        // NOTE(unsafe) atomic write to a stateless register
        let gpio = unsafe { &*GPIO::ptr() };
        match state {
            PinState::High => gpio.outset.write(|w| unsafe { w.bits(self.id.mask()) }),
            PinState::Low => gpio.outclr.write(|w| unsafe { w.bits(self.id.mask()) }),
        }
    }
}

impl<MODE> ErrorType for Pin<Output<MODE>> {
    type Error = Infallible;
}

impl<MODE> OutputPin for Pin<Output<MODE>> {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.internal_set_state(PinState::High);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.internal_set_state(PinState::Low);
        Ok(())
    }
}

impl<MODE> StatefulOutputPin for Pin<Output<MODE>> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        let is_set_high = !self.is_set_low()?;
        Ok(is_set_high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        // NOTE(unsafe) atomic read with no side effects
        let out = unsafe { (*GPIO::ptr()).out.read().bits() };
        Ok(out & self.id.mask() == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_id_range() {
        assert_eq!(PinId::new(0).map(PinId::number), Some(0));
        assert_eq!(PinId::new(31).map(PinId::number), Some(31));
        assert_eq!(PinId::new(32), None);
        assert_eq!(PinId::new(u8::MAX), None);
    }

    #[test]
    fn pin_id_mask() {
        assert_eq!(PinId::from_const(0).mask(), 0x0000_0001);
        assert_eq!(PinId::from_const(13).mask(), 0x0000_2000);
        assert_eq!(PinId::from_const(31).mask(), 0x8000_0000);
    }

    #[test]
    fn pins_are_taken_once() {
        let mut parts = Parts::new();
        let row = PinId::from_const(13);
        let col = PinId::from_const(4);

        let pin = parts.take(row).expect("first take");
        assert_eq!(pin.id(), row);
        assert_eq!(parts.taken, row.mask());

        assert!(parts.take(row).is_none());
        assert!(parts.take(col).is_some());
        assert_eq!(parts.taken, row.mask() | col.mask());
        assert!(parts.take(col).is_none());
    }
}
