//! The configured ADC handle and its read path.

use tracing::{debug, info, trace, warn};

use crate::board::{regs, DataLayout, FullScale};
use crate::config::Config;
use crate::encode::{self, ChannelSet, Encoded};
use crate::error::{Error, Result};
use crate::transport::{Connect, RegisterAccess, REGISTER_BITS};

/// A configured ADC, owning its connection to the register service.
///
/// All I/O takes `&mut self`, so a handle never has more than one
/// round-trip in flight. Share it between threads behind a mutex.
#[derive(Debug)]
pub struct Adc<T> {
    conn: Option<T>,
    base: u32,
    channels: ChannelSet,
    max_counts: i32,
    full_scale: FullScale,
    layout: DataLayout,
}

impl<T: RegisterAccess> Adc<T> {
    /// Validates `config`, connects to the register service and programs the
    /// configuration and channel-mask registers.
    ///
    /// Invalid settings are reported before any connection is made. If
    /// either register write fails the connection is dropped before the
    /// error is returned. A failure of the mask write leaves the
    /// configuration register already programmed; open again rather than
    /// assuming any device state.
    pub fn open<C>(connector: &C, config: &Config) -> Result<Self>
    where
        C: Connect<Connection = T>,
    {
        let encoded = validate(config)?;
        let conn = connector
            .connect(&config.endpoint)
            .map_err(|source| Error::Connection {
                endpoint: config.endpoint.address.clone(),
                source,
            })?;
        Self::configure(conn, config, encoded)
    }

    /// Like [`open`](Adc::open), using a connection the caller already has.
    pub fn with_connection(conn: T, config: &Config) -> Result<Self> {
        let encoded = validate(config)?;
        Self::configure(conn, config, encoded)
    }

    fn configure(mut conn: T, config: &Config, encoded: Encoded) -> Result<Self> {
        let base = config.board.base_address();

        debug!(
            "Writing {} ADC configuration register: {:#06x}",
            config.board, encoded.config
        );
        conn.poke(base + regs::CONFIG, REGISTER_BITS, u32::from(encoded.config))?;

        debug!(
            "Writing {} ADC channel mask: {:#010b}",
            config.board,
            encoded.channels.mask()
        );
        if let Err(err) = conn.poke(
            base + regs::MASK,
            REGISTER_BITS,
            u32::from(encoded.channels.mask()),
        ) {
            warn!(
                board = %config.board,
                error = %err,
                "Channel mask write failed after configuration write, ADC left partially configured"
            );
            return Err(err);
        }

        info!(
            board = %config.board,
            channels = ?encoded.channels.iter().collect::<Vec<_>>(),
            bits = config.bits,
            gain = config.gain,
            "ADC configured"
        );

        Ok(Self {
            conn: Some(conn),
            base,
            channels: encoded.channels,
            max_counts: encoded.max_counts,
            full_scale: config.full_scale,
            layout: config.data_layout,
        })
    }

    /// Returns the raw signed sample of `channel`.
    ///
    /// Fails with [`Error::InvalidChannel`] without touching the transport if
    /// `channel` was not enabled when the handle was opened.
    pub fn read_counts(&mut self, channel: u8) -> Result<i16> {
        let conn = self.conn.as_mut().ok_or(Error::Closed)?;
        if !self.channels.contains(channel) {
            return Err(Error::InvalidChannel(channel));
        }

        let offset = self
            .layout
            .data_offset(channel)
            .ok_or(Error::InvalidChannel(channel))?;
        let address = self.base + offset;
        let raw = conn.peek(address, REGISTER_BITS)?;
        let raw = u16::try_from(raw).map_err(|_| {
            Error::Protocol(format!(
                "16-bit peek at {address:#x} returned {raw:#x}"
            ))
        })?;

        trace!(channel, raw, "Read ADC sample");
        Ok(raw as i16)
    }

    /// Returns the sample of `channel` in volts, scaled by the channel's
    /// full-scale voltage over the maximum count.
    pub fn read_volts(&mut self, channel: u8) -> Result<f32> {
        let counts = self.read_counts(channel)?;
        let full_scale = self
            .full_scale
            .volts(channel)
            .ok_or(Error::InvalidChannel(channel))?;

        Ok(f32::from(counts) * full_scale / self.max_counts as f32)
    }
}

impl<T> Adc<T> {
    /// Releases the connection. Further reads fail with [`Error::Closed`].
    /// Closing twice is harmless.
    pub fn close(&mut self) {
        if self.conn.take().is_some() {
            debug!("Closed connection for ADC at {:#x}", self.base);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    /// Destroys the handle and returns its connection, if still open.
    pub fn free(self) -> Option<T> {
        self.conn
    }

    /// Channels enabled at open.
    pub fn channels(&self) -> ChannelSet {
        self.channels
    }

    /// Largest signed count magnitude for the configured resolution.
    pub fn max_counts(&self) -> i32 {
        self.max_counts
    }

    pub fn full_scale(&self) -> &FullScale {
        &self.full_scale
    }

    pub fn base_address(&self) -> u32 {
        self.base
    }
}

fn validate(config: &Config) -> Result<Encoded> {
    let encoded = encode::encode(
        config.board.analog_select(),
        &config.channels,
        config.bits,
        config.gain,
    )?;
    config.full_scale.check(encoded.channels)?;
    Ok(encoded)
}
