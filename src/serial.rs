//! Serial console on UART0
//!
//! The micro:bit interface chip bridges UART0 to the USB port, so this is the
//! board's console whether or not a debugger is attached. Only the transmit
//! side is wired up.
use core::convert::Infallible;
use core::fmt;

use crate::gpio::{Output, Pin, PushPull};
use crate::pac::UART0;

/// UART baud rates, valued as the `BAUDRATE` register setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Baudrate {
    Baud1200 = 0x0004_F000,
    Baud9600 = 0x0027_5000,
    Baud19200 = 0x004E_A000,
    Baud38400 = 0x009D_5000,
    Baud57600 = 0x00EB_F000,
    Baud115200 = 0x01D7_E000,
}

impl Baudrate {
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Nominal rate in bits per second
    pub fn bps(self) -> u32 {
        match self {
            Baudrate::Baud1200 => 1_200,
            Baudrate::Baud9600 => 9_600,
            Baudrate::Baud19200 => 19_200,
            Baudrate::Baud38400 => 38_400,
            Baudrate::Baud57600 => 57_600,
            Baudrate::Baud115200 => 115_200,
        }
    }
}

impl Default for Baudrate {
    /// The rate the micro:bit interface chip expects
    fn default() -> Self {
        Baudrate::Baud9600
    }
}

pub trait SerialExt {
    fn serial(self, tx: Pin<Output<PushPull>>, baudrate: Baudrate) -> Serial;
}

impl SerialExt for UART0 {
    fn serial(self, tx: Pin<Output<PushPull>>, baudrate: Baudrate) -> Serial {
        Serial::new(self, tx, baudrate)
    }
}

/// Transmit-only serial port
pub struct Serial {
    uart: UART0,
    _tx: Pin<Output<PushPull>>,
    busy: bool,
}

impl Serial {
    /// Routes UART0 to `tx`, which should idle high, and starts the transmitter
    pub fn new(uart: UART0, tx: Pin<Output<PushPull>>, baudrate: Baudrate) -> Self {
        uart.pseltxd
            .write(|w| unsafe { w.bits(u32::from(tx.id().number())) });
        // reset values leave RXD, RTS and CTS disconnected
        uart.pselrxd.reset();
        uart.pselrts.reset();
        uart.pselcts.reset();
        // no parity, no flow control
        uart.config.reset();
        uart.baudrate.write(|w| unsafe { w.bits(baudrate.bits()) });
        uart.enable.write(|w| w.enable().enabled());
        uart.tasks_starttx.write(|w| unsafe { w.bits(1) });

        Serial {
            uart,
            _tx: tx,
            busy: false,
        }
    }

    /// Starts sending `byte` once the previous one has left
    pub fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        self.flush()?;
        self.uart.txd.write(|w| unsafe { w.bits(u32::from(byte)) });
        self.busy = true;
        Ok(())
    }

    /// Completes once the last byte written has been sent
    pub fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.busy {
            if self.uart.events_txdrdy.read().bits() == 0 {
                return Err(nb::Error::WouldBlock);
            }
            self.uart.events_txdrdy.reset();
            self.busy = false;
        }
        Ok(())
    }
}

impl fmt::Write for Serial {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            match nb::block!(self.write(byte)) {
                Ok(()) => {}
                Err(never) => match never {},
            }
        }
        Ok(())
    }
}
