//! BBC micro:bit v1 pin map
//!
//! Constant names: what a pin is connected to on the board.
//! Constant value: pin number on the nRF51822 port, for use with
//! [`Parts::take`](crate::gpio::Parts::take).
//!
//! The LED display is a 3 x 9 matrix: an LED lights when its row is driven
//! high and its column low.

use crate::gpio::PinId;

const fn pin(number: u8) -> PinId {
    PinId::from_const(number)
}

// Edge connector
pub const P0: PinId = pin(3);
pub const P1: PinId = pin(2);
pub const P2: PinId = pin(1);
pub const P3: PinId = pin(4); // COL_1
pub const P4: PinId = pin(5); // COL_2
pub const P5: PinId = pin(17); // BUTTON_A
pub const P6: PinId = pin(12); // COL_9
pub const P7: PinId = pin(11); // COL_8
pub const P8: PinId = pin(18);
pub const P9: PinId = pin(10); // COL_7
pub const P10: PinId = pin(6); // COL_3
pub const P11: PinId = pin(26); // BUTTON_B
pub const P12: PinId = pin(20);
pub const P13: PinId = pin(23); // SPI_SCK
pub const P14: PinId = pin(22); // SPI_MISO
pub const P15: PinId = pin(21); // SPI_MOSI
pub const P16: PinId = pin(16);
pub const P19: PinId = pin(0); // I2C_SCL0
pub const P20: PinId = pin(30); // I2C_SDA0

// Display
pub const COL_1: PinId = pin(4);
pub const COL_2: PinId = pin(5);
pub const COL_3: PinId = pin(6);
pub const COL_4: PinId = pin(7);
pub const COL_5: PinId = pin(8);
pub const COL_6: PinId = pin(9);
pub const COL_7: PinId = pin(10);
pub const COL_8: PinId = pin(11);
pub const COL_9: PinId = pin(12);
pub const ROW_1: PinId = pin(13);
pub const ROW_2: PinId = pin(14);
pub const ROW_3: PinId = pin(15);

pub const COLS: [PinId; 9] = [COL_1, COL_2, COL_3, COL_4, COL_5, COL_6, COL_7, COL_8, COL_9];
pub const ROWS: [PinId; 3] = [ROW_1, ROW_2, ROW_3];

pub const BUTTON_A: PinId = pin(17);
pub const BUTTON_B: PinId = pin(26);

pub const TARGET_NRESET: PinId = pin(19);

pub const SPI_MOSI: PinId = pin(21);
pub const SPI_MISO: PinId = pin(22);
pub const SPI_SCK: PinId = pin(23);

pub const UART_TX: PinId = pin(24);
pub const UART_RX: PinId = pin(25);

// MMA8653FC accelerometer
pub const ACCEL_INT2: PinId = pin(27);
pub const ACCEL_INT1: PinId = pin(28);

// MAG3110 magnetometer
pub const MAG_INT1: PinId = pin(29);

pub const I2C_SDA0: PinId = pin(30);
pub const I2C_SCL0: PinId = pin(0);
