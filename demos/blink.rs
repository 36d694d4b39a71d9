//! Heartbeat on the top-left LED of the micro:bit display
//!
//! After a panic the message goes out on the USB serial console at 9600 baud
//! and the LED in the middle of the display flashes instead.
#![deny(unsafe_code)]
#![no_main]
#![no_std]

#[macro_use]
extern crate microbit_blink as hal;

use core::convert::Infallible;
use core::fmt::Write;
use core::panic::PanicInfo;

use cortex_m_rt::entry;
use embedded_hal::digital::PinState;
use hal::blink::{BlinkTiming, Blinker, Error};
use hal::block;
use hal::delay::Delay;
use hal::pac;
use hal::pins;
use hal::prelude::*;
use hal::serial::Baudrate;
use hal::time::HFCLK;

#[entry]
fn main() -> ! {
    hal::debug::init();

    let dp = pac::Peripherals::take().expect("cannot take peripherals");
    let mut gpio = dp.GPIO.split();

    let row_1 = gpio
        .take(pins::ROW_1)
        .expect("ROW_1 already taken")
        .into_push_pull_output();
    let col_1 = gpio
        .take(pins::COL_1)
        .expect("COL_1 already taken")
        .into_push_pull_output();

    let blinker = infallible(Blinker::new(row_1, col_1, Delay::new(HFCLK)));
    match infallible(blinker.run()) {}
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    cortex_m::interrupt::disable();
    println!("{}", info);

    let dp = steal_peripherals();
    let mut gpio = dp.GPIO.split();
    let (row_2, col_3, tx) = match (
        gpio.take(pins::ROW_2),
        gpio.take(pins::COL_3),
        gpio.take(pins::UART_TX),
    ) {
        (Some(row), Some(col), Some(tx)) => (
            row.into_push_pull_output(),
            col.into_push_pull_output(),
            tx.into_push_pull_output_in_state(PinState::High),
        ),
        _ => cortex_m::asm::udf(),
    };

    let mut serial = dp.UART0.serial(tx, Baudrate::default());
    // nothing left to report a failed write to
    let _ = writeln!(serial, "{}", info);
    let _ = block!(serial.flush());

    let blinker = infallible(Blinker::with_timing(
        row_2,
        col_3,
        Delay::new(HFCLK),
        BlinkTiming::PANIC,
    ));
    match infallible(blinker.run()) {}
}

/// Board pins never fail to switch
fn infallible<T>(result: Result<T, Error<Infallible>>) -> T {
    match result {
        Ok(value) => value,
        Err(Error::Row(never) | Error::Output(never)) => match never {},
    }
}

/// The panic handler never returns to whoever held the peripherals
#[allow(unsafe_code)]
fn steal_peripherals() -> pac::Peripherals {
    unsafe { pac::Peripherals::steal() }
}
