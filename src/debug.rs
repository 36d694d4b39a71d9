//! Provides debug output based on semihosting
//!
//! With the `debug` feature enabled, [`init`] connects to the host's stdout
//! through the attached debugger and [`print!`] / [`println!`] write to it.
//!
//! Without the `debug` feature, semihosting is never touched and the macros
//! expand to nothing, so the firmware runs on a board with no debugger.
//!
//! ATTENTION: a program built with the `debug` feature halts on the first
//! semihosting call if no debugger is attached.

#[cfg(feature = "debug")]
use core::cell::RefCell;

#[cfg(feature = "debug")]
use cortex_m::interrupt::Mutex;
#[cfg(feature = "debug")]
use cortex_m_semihosting::hio::HostStream;

/// Connects to the host's stdout
///
/// Users can typically ignore this static, and use [`init`], [`print!`], and
/// [`println!`] instead.
#[cfg(feature = "debug")]
pub static STDOUT: Mutex<RefCell<Option<HostStream>>> = Mutex::new(RefCell::new(None));

/// Initializes the debug output, if semihosting is enabled
///
/// Call this once at the start of the program, before the first [`print!`].
pub fn init() {
    #[cfg(feature = "debug")]
    {
        use cortex_m::interrupt;
        use cortex_m_semihosting::hio;

        interrupt::free(|cs| {
            // without a host connection there is nowhere to report to
            *STDOUT.borrow(cs).borrow_mut() = hio::hstdout().ok();
        });
    }
}

/// Sends a debug message to the host, if semihosting is enabled
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::cortex_m::interrupt::free(|cs| {
            if let Some(ref mut stdout) =
                *$crate::debug::STDOUT.borrow(cs).borrow_mut()
            {
                use core::fmt::Write;
                // a lost debug message is not worth halting for
                let _ = write!(stdout, $($arg)*);
            }
        })
    }
}

/// Sends a debug message to the host, if semihosting is enabled
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {{}};
}

/// Sends a debug message to the host, if semihosting is enabled
#[macro_export]
macro_rules! println {
    ($fmt:expr) => {
        $crate::print!(concat!($fmt, "\n"))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::print!(concat!($fmt, "\n"), $($arg)*)
    };
}
