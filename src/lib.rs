#![cfg_attr(not(test), no_std)]

pub extern crate cortex_m;
pub extern crate embedded_hal as hal;
pub extern crate nb;
pub extern crate nrf51_pac as pac;

pub use nb::block;

#[macro_use]
pub mod debug;

pub mod blink;
pub mod delay;
pub mod gpio;
pub mod pins;
pub mod prelude;
pub mod serial;
pub mod time;
