//! Error types for the ADC driver.

/// A rejected configuration parameter.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// Sample resolution not supported by the ADC core
    #[error("unsupported bit width: {0} (expected 12, 14 or 16)")]
    BitWidth(u8),

    /// Gain multiplier not supported by the ADC core
    #[error("unsupported gain: {0} (expected 0, 2, 4 or 8)")]
    Gain(u8),

    /// Channel number outside `1..=max`
    #[error("channel {channel} out of range 1..={max}")]
    Channel { channel: u8, max: u8 },

    /// Full-scale voltage that cannot scale samples
    #[error("full-scale voltage {volts} for channel {channel} must be finite and positive")]
    FullScale { channel: u8, volts: f32 },
}

/// Errors returned by the ADC handle and by register transports.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unsupported bit width, gain, channel number or full-scale entry
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    /// Read requested on a channel that was not enabled at open
    #[error("channel {0} is not enabled")]
    InvalidChannel(u8),

    /// The register service could not be reached
    #[error("cannot connect to register service at {endpoint}: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure or timeout during a register round-trip
    #[error("register transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Reply from the register service had an unexpected shape
    #[error("register protocol error: {0}")]
    Protocol(String),

    /// Operation attempted after the handle was closed
    #[error("ADC handle is closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, Error>;
