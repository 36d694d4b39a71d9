//! Delays
//!
//! The nRF51 has no SysTick, so delays spin in `cortex_m::asm::delay`. Its
//! `subs`/`bne` loop costs [`CYCLES_PER_ITERATION`] core cycles per turn on the
//! Cortex-M0, so cycle counts are divided down to loop iterations. The delay
//! is at least as long as requested; interrupts only make it longer.
use core::{cmp, iter};

use cortex_m::asm;
use embedded_hal::delay::DelayNs;

use crate::time::{self, Hertz};

/// Core cycles per iteration of the `asm::delay` loop on the Cortex-M0
/// (`subs` 1, taken `bne` 3)
pub const CYCLES_PER_ITERATION: u64 = 4;

/// Busy-wait delay provider
pub struct Delay {
    clk: Hertz,
}

impl Delay {
    /// Creates a delay provider for a core running at `clk`
    pub fn new(clk: Hertz) -> Self {
        Delay { clk }
    }

    fn spin(&mut self, iterations: u64) {
        for chunk in chunks(iterations) {
            asm::delay(chunk);
        }
    }
}

/// Loop iterations covering at least `cycles` core cycles
pub fn iterations(cycles: u64) -> u64 {
    cycles.div_ceil(CYCLES_PER_ITERATION)
}

/// Loop iterations covering at least `ns` nanoseconds at `clk`
pub fn iterations_for_ns(ns: u64, clk: Hertz) -> u64 {
    iterations(time::cycles_for_ns(ns, clk))
}

/// Loop iterations covering at least `us` microseconds at `clk`
pub fn iterations_for_us(us: u32, clk: Hertz) -> u64 {
    iterations_for_ns(u64::from(us) * 1_000, clk)
}

/// Loop iterations covering at least `ms` milliseconds at `clk`
pub fn iterations_for_ms(ms: u32, clk: Hertz) -> u64 {
    iterations(u64::from(ms) * u64::from(time::cycles_per_ms(clk)))
}

/// Splits an iteration count into pieces `asm::delay` accepts
fn chunks(mut iterations: u64) -> impl Iterator<Item = u32> {
    iter::from_fn(move || {
        if iterations == 0 {
            return None;
        }
        let chunk = cmp::min(iterations, u64::from(u32::MAX));
        iterations -= chunk;
        Some(chunk as u32)
    })
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        self.spin(iterations_for_ns(u64::from(ns), self.clk));
    }

    fn delay_us(&mut self, us: u32) {
        self.spin(iterations_for_us(us, self.clk));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.spin(iterations_for_ms(ms, self.clk));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blink::{OFF_MS, ON_MS};
    use crate::time::HFCLK;

    #[test]
    fn iterations_round_up() {
        assert_eq!(iterations(0), 0);
        assert_eq!(iterations(1), 1);
        assert_eq!(iterations(4), 1);
        assert_eq!(iterations(5), 2);
    }

    #[test]
    fn millisecond_iterations() {
        // 16_000 cycles per ms, 4 cycles per iteration
        assert_eq!(iterations_for_ms(0, HFCLK), 0);
        assert_eq!(iterations_for_ms(1, HFCLK), 4_000);
        assert_eq!(iterations_for_ms(ON_MS, HFCLK), 120_000);
        assert_eq!(iterations_for_ms(OFF_MS, HFCLK), 1_880_000);
        assert_eq!(
            iterations_for_ms(u32::MAX, HFCLK),
            u64::from(u32::MAX) * 4_000
        );
    }

    #[test]
    fn microsecond_iterations() {
        assert_eq!(iterations_for_us(0, HFCLK), 0);
        assert_eq!(iterations_for_us(1, HFCLK), 4);
        assert_eq!(iterations_for_us(30_000, HFCLK), 120_000);
        assert_eq!(iterations_for_us(470_000, HFCLK), 1_880_000);
        assert_eq!(
            iterations_for_us(u32::MAX, HFCLK),
            u64::from(u32::MAX) * 4
        );
    }

    #[test]
    fn nanosecond_iterations() {
        // 62.5 ns per cycle, 250 ns per iteration
        assert_eq!(iterations_for_ns(0, HFCLK), 0);
        assert_eq!(iterations_for_ns(1, HFCLK), 1);
        assert_eq!(iterations_for_ns(250, HFCLK), 1);
        assert_eq!(iterations_for_ns(251, HFCLK), 2);
    }

    #[test]
    fn zero_iterations_is_no_chunks() {
        assert_eq!(chunks(0).count(), 0);
    }

    #[test]
    fn blink_delays_are_one_chunk() {
        let parts: Vec<u32> = chunks(iterations_for_ms(OFF_MS, HFCLK)).collect();
        assert_eq!(parts, vec![1_880_000]);
    }

    #[test]
    fn uneven_delay_keeps_remainder() {
        let total = u64::from(u32::MAX) * 2 + 7;
        let parts: Vec<u32> = chunks(total).collect();
        assert_eq!(parts, vec![u32::MAX, u32::MAX, 7]);
    }

    #[test]
    fn long_delay_is_split() {
        let total = iterations_for_ms(u32::MAX, HFCLK);
        let parts: Vec<u32> = chunks(total).collect();
        assert_eq!(parts.len(), 4_000);
        assert!(parts.iter().all(|&c| c == u32::MAX));
        assert_eq!(parts.iter().map(|&c| u64::from(c)).sum::<u64>(), total);
    }
}
