//! Settings used to open an ADC handle.

use std::time::Duration;

use crate::board::{Board, DataLayout, FullScale};

/// Address of the register service on the board itself
pub const DEFAULT_ADDRESS: &str = "localhost:5001";

/// Bound on each register round-trip unless the caller picks another
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Where the register service listens and how long a transport may wait on
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub address: String,
    /// Per round-trip bound enforced by the transport; `None` waits forever
    pub timeout: Option<Duration>,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

/// Configuration for an [`Adc`](crate::Adc).
///
/// - `board`: CPU board variant, selects the register block
/// - `channels`: 1-based channel numbers to enable
/// - `bits`: sample resolution (12, 14 or 16)
/// - `gain`: amplifier gain multiplier (0, 2, 4 or 8)
/// - `full_scale`: full-scale voltage of each channel
/// - `data_layout`: how sample registers are addressed
/// - `endpoint`: register service to connect to
///
/// `bits`, `gain` and `channels` are checked when the handle is opened.
///
/// # Examples
///
/// ```
/// use tsadc::{Board, Config, FullScale};
///
/// let mut config = Config::new(Board::Ts4800, [1, 2, 5], 16, 2);
/// config.full_scale = FullScale::UNIFORM;
///
/// assert_eq!(config.endpoint.address, "localhost:5001");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub board: Board,
    pub channels: Vec<u8>,
    pub bits: u8,
    pub gain: u8,
    pub full_scale: FullScale,
    pub data_layout: DataLayout,
    pub endpoint: Endpoint,
}

impl Config {
    /// Returns a configuration using the board's default full-scale table,
    /// data layout and the default endpoint.
    pub fn new(board: Board, channels: impl Into<Vec<u8>>, bits: u8, gain: u8) -> Self {
        Self {
            board,
            channels: channels.into(),
            bits,
            gain,
            full_scale: board.full_scale(),
            data_layout: board.data_layout(),
            endpoint: Endpoint::default(),
        }
    }
}
