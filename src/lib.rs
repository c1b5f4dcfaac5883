//! Driver for the FPGA ADC core on Technologic Systems TS-4200 and TS-4800
//! CPU boards.
//!
//! The ADC registers are reached through a register service that accepts
//! peek and poke requests, not through memory-mapped I/O. An [`Adc`] is
//! opened with a [`Connect`] implementation for that service: opening
//! validates the settings, programs the configuration and channel-mask
//! registers, and returns a handle that reads raw counts or volts from the
//! enabled channels.
//!
//! # Examples
//!
//! ```
//! use tsadc::{Adc, Board, Config, Connect, Endpoint, RegisterAccess, Result};
//! # use std::collections::HashMap;
//! #
//! # #[derive(Default)]
//! # struct Registers(HashMap<u32, u32>);
//! #
//! # impl RegisterAccess for Registers {
//! #     fn peek(&mut self, address: u32, _width: u8) -> Result<u32> {
//! #         Ok(self.0.get(&address).copied().unwrap_or(0))
//! #     }
//! #
//! #     fn poke(&mut self, address: u32, _width: u8, value: u32) -> Result<()> {
//! #         self.0.insert(address, value);
//! #         Ok(())
//! #     }
//! # }
//! #
//! # struct RegisterService;
//! #
//! # impl Connect for RegisterService {
//! #     type Connection = Registers;
//! #
//! #     fn connect(&self, _endpoint: &Endpoint) -> std::io::Result<Registers> {
//! #         let mut registers = Registers::default();
//! #         registers.0.insert(0x84, 1024);
//! #         Ok(registers)
//! #     }
//! # }
//!
//! // Channels 1 and 3 at 12 bits, gain 4
//! let config = Config::new(Board::Ts4200, [1, 3], 12, 4);
//! let mut adc = Adc::open(&RegisterService, &config)?;
//!
//! assert_eq!(adc.read_counts(1)?, 1024);
//! assert_eq!(adc.read_volts(1)?, 1.024);
//!
//! // Channel 2 was not enabled
//! assert!(adc.read_counts(2).is_err());
//!
//! adc.close();
//! # Ok::<(), tsadc::Error>(())
//! ```

mod adc;
mod board;
mod config;
mod encode;
mod error;
mod hal;
#[cfg(test)]
mod mock;
mod transport;

pub use adc::Adc;
pub use board::{Board, DataLayout, FullScale};
pub use config::{Config, Endpoint, DEFAULT_ADDRESS, DEFAULT_TIMEOUT};
pub use encode::{config_word, BitWidth, ChannelSet, Gain, MAX_CHANNELS};
pub use error::{Error, ParameterError, Result};
pub use hal::{Ain1, Ain2, Ain3, Ain4, Ain5, Ain6};
pub use transport::{Connect, RegisterAccess, REGISTER_BITS};
