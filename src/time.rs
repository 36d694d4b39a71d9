//! Clock rates and durations
pub use fugit::{ExtU32, RateExtU32};

/// Clock rate in Hz
pub type Hertz = fugit::HertzU32;

/// Duration with nanosecond resolution
pub type NanoSecond = fugit::NanosDurationU32;

/// Duration with microsecond resolution
pub type MicroSecond = fugit::MicrosDurationU32;

/// Duration with millisecond resolution
pub type MilliSecond = fugit::MillisDurationU32;

/// nRF51 high-frequency clock, which also clocks the CPU
pub const HFCLK: Hertz = Hertz::MHz(16);

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Number of `clk` cycles that cover at least `ns` nanoseconds
pub fn cycles_for_ns(ns: u64, clk: Hertz) -> u64 {
    let cycles = u128::from(ns) * u128::from(clk.raw());
    let cycles = cycles.div_ceil(u128::from(NANOS_PER_SECOND));
    u64::try_from(cycles).unwrap_or(u64::MAX)
}

/// Number of `clk` cycles in one millisecond
pub fn cycles_per_ms(clk: Hertz) -> u32 {
    clk.raw() / 1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hfclk_is_sixteen_megahertz() {
        assert_eq!(HFCLK.raw(), 16_000_000);
        assert_eq!(cycles_per_ms(HFCLK), 16_000);
    }

    #[test]
    fn cycles_round_up() {
        // 62.5 ns per cycle at 16 MHz
        assert_eq!(cycles_for_ns(0, HFCLK), 0);
        assert_eq!(cycles_for_ns(1, HFCLK), 1);
        assert_eq!(cycles_for_ns(62, HFCLK), 1);
        assert_eq!(cycles_for_ns(63, HFCLK), 2);
        assert_eq!(cycles_for_ns(125, HFCLK), 2);
        assert_eq!(cycles_for_ns(1_000, HFCLK), 16);
    }

    #[test]
    fn cycles_do_not_overflow() {
        let ns = u32::MAX as u64 * 1_000_000;
        assert_eq!(cycles_for_ns(ns, HFCLK), ns / 1_000 * 16);
    }

    #[test]
    fn duration_helpers() {
        let on: MilliSecond = 30.millis();
        assert_eq!(on.ticks(), 30);
        assert_eq!(on.to_micros(), 30_000);
        let clk: Hertz = 16.MHz();
        assert_eq!(clk, HFCLK);
    }
}
