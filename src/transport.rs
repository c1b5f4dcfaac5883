//! Register transport abstraction.
//!
//! The ADC registers are not memory mapped into this process. They are
//! reached through a register service that accepts peek and poke requests
//! over a byte-stream connection. These traits are the seam between the
//! driver and whatever speaks that protocol.

use std::io;

use crate::config::Endpoint;
use crate::error::Result;

/// Width of every register access made by the driver
pub const REGISTER_BITS: u8 = 16;

/// Peek/poke access to FPGA registers over an established connection.
///
/// Implementations perform one synchronous request/reply round-trip per
/// call, bounded by the endpoint's timeout. I/O failures and timeouts are
/// reported as [`Error::Transport`](crate::Error::Transport); replies of the
/// wrong shape as [`Error::Protocol`](crate::Error::Protocol). Dropping the
/// connection closes it.
pub trait RegisterAccess {
    /// Read a `width`-bit register.
    fn peek(&mut self, address: u32, width: u8) -> Result<u32>;

    /// Write `value` to a `width`-bit register.
    fn poke(&mut self, address: u32, width: u8, value: u32) -> Result<()>;
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &mut T {
    fn peek(&mut self, address: u32, width: u8) -> Result<u32> {
        (**self).peek(address, width)
    }

    fn poke(&mut self, address: u32, width: u8, value: u32) -> Result<()> {
        (**self).poke(address, width, value)
    }
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for Box<T> {
    fn peek(&mut self, address: u32, width: u8) -> Result<u32> {
        (**self).peek(address, width)
    }

    fn poke(&mut self, address: u32, width: u8, value: u32) -> Result<()> {
        (**self).poke(address, width, value)
    }
}

/// Opens connections to the register service.
pub trait Connect {
    type Connection: RegisterAccess;

    /// Establish a connection. [`Adc::open`](crate::Adc::open) reports a
    /// failure as [`Error::Connection`](crate::Error::Connection).
    fn connect(&self, endpoint: &Endpoint) -> io::Result<Self::Connection>;
}
