//! Heartbeat blink loop
//!
//! A [`Blinker`] owns a row-select pin, an output pin and a delay provider.
//! It drives the row-select pin high once when it is created, then pulses the
//! output pin low for the "on" time and high for the rest of the period,
//! forever or for as long as the caller asks.
//!
//! The pins and the delay are any [`embedded_hal`] implementation, so the loop
//! runs unchanged against the board's GPIO or a recording fake.
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::time::MilliSecond;

/// Length of one blink period
pub const PERIOD_MS: u32 = 500;

/// Time the output is held low in each period
pub const ON_MS: u32 = 30;

/// Time the output is held high in each period
pub const OFF_MS: u32 = PERIOD_MS - ON_MS;

const _: () = assert!(ON_MS < PERIOD_MS, "on time must be shorter than the period");

/// Period and on time of a blink pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTiming {
    period: MilliSecond,
    on: MilliSecond,
}

impl BlinkTiming {
    /// The regular heartbeat
    pub const HEARTBEAT: Self = Self::from_millis(PERIOD_MS, ON_MS);

    /// Short flash shown by the panic handler
    pub const PANIC: Self = Self::from_millis(205, 5);

    /// Panics if `on_ms` is not shorter than `period_ms`
    pub const fn from_millis(period_ms: u32, on_ms: u32) -> Self {
        assert!(on_ms < period_ms, "on time must be shorter than the period");
        BlinkTiming {
            period: MilliSecond::from_ticks(period_ms),
            on: MilliSecond::from_ticks(on_ms),
        }
    }

    pub const fn period(&self) -> MilliSecond {
        self.period
    }

    pub const fn on(&self) -> MilliSecond {
        self.on
    }

    pub const fn off(&self) -> MilliSecond {
        MilliSecond::from_ticks(self.period.ticks() - self.on.ticks())
    }
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self::HEARTBEAT
    }
}

/// Blink loop errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Driving the row-select pin failed
    Row(E),
    /// Driving the blink output pin failed
    Output(E),
}

/// Blink loop
pub struct Blinker<ROW, COL, DELAY> {
    row: ROW,
    col: COL,
    delay: DELAY,
    timing: BlinkTiming,
    state: Option<PinState>,
}

impl<ROW, COL, DELAY, E> Blinker<ROW, COL, DELAY>
where
    ROW: OutputPin<Error = E>,
    COL: OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Selects the row and prepares a heartbeat on `col`
    pub fn new(row: ROW, col: COL, delay: DELAY) -> Result<Self, Error<E>> {
        Self::with_timing(row, col, delay, BlinkTiming::HEARTBEAT)
    }

    /// Selects the row and prepares a blink with the given timing on `col`
    ///
    /// The output pin is not written until the first cycle.
    pub fn with_timing(
        mut row: ROW,
        col: COL,
        delay: DELAY,
        timing: BlinkTiming,
    ) -> Result<Self, Error<E>> {
        row.set_high().map_err(Error::Row)?;
        Ok(Blinker {
            row,
            col,
            delay,
            timing,
            state: None,
        })
    }

    pub fn timing(&self) -> BlinkTiming {
        self.timing
    }

    /// Level last written to the output pin, `None` before the first cycle
    pub fn state(&self) -> Option<PinState> {
        self.state
    }

    /// Runs one period: output low for the on time, then high for the rest
    pub fn cycle(&mut self) -> Result<(), Error<E>> {
        self.drive(PinState::Low)?;
        self.delay.delay_ms(self.timing.on().ticks());
        self.drive(PinState::High)?;
        self.delay.delay_ms(self.timing.off().ticks());
        Ok(())
    }

    pub fn run_cycles(&mut self, cycles: u32) -> Result<(), Error<E>> {
        for _ in 0..cycles {
            self.cycle()?;
        }
        Ok(())
    }

    /// Runs cycles while `keep_going` returns `true`
    ///
    /// `keep_going` is checked before every cycle. Returns the number of
    /// completed cycles.
    pub fn run_while<F>(&mut self, mut keep_going: F) -> Result<u32, Error<E>>
    where
        F: FnMut() -> bool,
    {
        let mut cycles = 0;
        while keep_going() {
            self.cycle()?;
            cycles += 1;
        }
        Ok(cycles)
    }

    /// Blinks forever; returns only if a pin write fails
    pub fn run(mut self) -> Result<Infallible, Error<E>> {
        crate::println!(
            "blink: period {} ms, on {} ms",
            self.timing.period().ticks(),
            self.timing.on().ticks()
        );
        loop {
            self.cycle()?;
        }
    }

    /// Releases the pins and the delay provider
    pub fn release(self) -> (ROW, COL, DELAY) {
        (self.row, self.col, self.delay)
    }

    fn drive(&mut self, state: PinState) -> Result<(), Error<E>> {
        self.col.set_state(state).map_err(Error::Output)?;
        self.state = Some(state);
        Ok(())
    }
}
