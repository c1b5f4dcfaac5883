//! Encoding of ADC settings into the configuration and channel-mask
//! registers.
//!
//! The configuration register packs three fields into one 16-bit word:
//!
//! | bits | field                                      |
//! |------|--------------------------------------------|
//! | 0-1  | gain (0, 2, 4, 8 → 0..=3)                  |
//! | 2-3  | resolution (12, 14, 16 bits → 0..=2)       |
//! | 4    | analog-input select (board specific)       |
//!
//! The mask register holds one bit per input, bit `c - 1` for channel `c`.

use crate::error::ParameterError;

/// Number of analog inputs on the ADC core.
pub const MAX_CHANNELS: usize = 6;

/// Sample resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitWidth {
    Bits12,
    Bits14,
    Bits16,
}

impl BitWidth {
    pub const ALL: [BitWidth; 3] = [BitWidth::Bits12, BitWidth::Bits14, BitWidth::Bits16];

    /// Resolution in bits.
    pub fn bits(self) -> u8 {
        match self {
            BitWidth::Bits12 => 12,
            BitWidth::Bits14 => 14,
            BitWidth::Bits16 => 16,
        }
    }

    /// Value of the resolution field in the configuration word.
    pub fn field(self) -> u16 {
        match self {
            BitWidth::Bits12 => 0,
            BitWidth::Bits14 => 1 << 2,
            BitWidth::Bits16 => 2 << 2,
        }
    }

    /// Largest magnitude of a signed sample, `2^(bits - 1)`.
    pub fn max_counts(self) -> i32 {
        1 << (self.bits() - 1)
    }
}

impl TryFrom<u8> for BitWidth {
    type Error = ParameterError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            12 => Ok(BitWidth::Bits12),
            14 => Ok(BitWidth::Bits14),
            16 => Ok(BitWidth::Bits16),
            other => Err(ParameterError::BitWidth(other)),
        }
    }
}

/// Programmable gain of the input amplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gain {
    /// Multiplier 0: amplifier bypassed
    Bypass,
    X2,
    X4,
    X8,
}

impl Gain {
    pub const ALL: [Gain; 4] = [Gain::Bypass, Gain::X2, Gain::X4, Gain::X8];

    /// Multiplier as written by users of the board (0, 2, 4 or 8).
    pub fn multiplier(self) -> u8 {
        match self {
            Gain::Bypass => 0,
            Gain::X2 => 2,
            Gain::X4 => 4,
            Gain::X8 => 8,
        }
    }

    /// Value of the gain field in the configuration word.
    pub fn field(self) -> u16 {
        match self {
            Gain::Bypass => 0,
            Gain::X2 => 1,
            Gain::X4 => 2,
            Gain::X8 => 3,
        }
    }
}

impl TryFrom<u8> for Gain {
    type Error = ParameterError;

    fn try_from(multiplier: u8) -> Result<Self, Self::Error> {
        match multiplier {
            0 => Ok(Gain::Bypass),
            2 => Ok(Gain::X2),
            4 => Ok(Gain::X4),
            8 => Ok(Gain::X8),
            other => Err(ParameterError::Gain(other)),
        }
    }
}

/// Set of enabled channels, stored as the value of the mask register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSet(u16);

impl ChannelSet {
    /// Builds the mask from 1-based channel numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsadc::ChannelSet;
    ///
    /// let set = ChannelSet::from_channels(&[1, 3]).unwrap();
    /// assert_eq!(set.mask(), 0b101);
    /// assert!(ChannelSet::from_channels(&[0]).is_err());
    /// assert!(ChannelSet::from_channels(&[7]).is_err());
    /// ```
    pub fn from_channels(channels: &[u8]) -> Result<Self, ParameterError> {
        channels.iter().try_fold(ChannelSet(0), |set, &channel| {
            if channel == 0 || usize::from(channel) > MAX_CHANNELS {
                return Err(ParameterError::Channel {
                    channel,
                    max: MAX_CHANNELS as u8,
                });
            }
            Ok(ChannelSet(set.0 | 1 << (channel - 1)))
        })
    }

    /// Value written to the mask register.
    pub fn mask(self) -> u16 {
        self.0
    }

    pub fn contains(self, channel: u8) -> bool {
        channel != 0 && usize::from(channel) <= MAX_CHANNELS && self.0 & (1 << (channel - 1)) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled channel numbers in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=MAX_CHANNELS as u8).filter(move |&channel| self.contains(channel))
    }
}

/// Composes the configuration word.
pub fn config_word(analog_select: u16, bits: BitWidth, gain: Gain) -> u16 {
    analog_select | bits.field() | gain.field()
}

/// Register values and derived scale for one validated set of settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    pub config: u16,
    pub channels: ChannelSet,
    pub max_counts: i32,
}

/// Validates the raw settings and encodes them, checking bit width, then
/// gain, then channels.
pub fn encode(
    analog_select: u16,
    channels: &[u8],
    bits: u8,
    gain: u8,
) -> Result<Encoded, ParameterError> {
    let bits = BitWidth::try_from(bits)?;
    let gain = Gain::try_from(gain)?;
    let channels = ChannelSet::from_channels(channels)?;

    Ok(Encoded {
        config: config_word(analog_select, bits, gain),
        channels,
        max_counts: bits.max_counts(),
    })
}
