pub use hal::delay::DelayNs as _;
pub use hal::digital::OutputPin as _;
pub use hal::digital::StatefulOutputPin as _;

pub use crate::gpio::GpioExt as _;
pub use crate::serial::SerialExt as _;
pub use crate::time::ExtU32 as _;
pub use crate::time::RateExtU32 as _;
