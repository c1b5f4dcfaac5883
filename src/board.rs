//! CPU board variants and the register map of their ADC core.

use core::fmt;

use crate::encode::{ChannelSet, MAX_CHANNELS};
use crate::error::ParameterError;

/// ADC register offsets, relative to the board's base address
pub(crate) mod regs {
    /// Configuration register (gain, resolution, analog select)
    pub const CONFIG: u32 = 0;
    /// Channel mask register
    pub const MASK: u32 = 2;
    /// First data register
    pub const DATA: u32 = 4;
}

/// Technologic Systems CPU board carrying the ADC core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    Ts4200,
    Ts4800,
}

impl Board {
    /// Base address of the ADC register block, relative to the FPGA.
    pub fn base_address(self) -> u32 {
        match self {
            Board::Ts4200 => 0x80,
            Board::Ts4800 => 0x6000,
        }
    }

    /// Analog-input select bits merged into the configuration word.
    pub fn analog_select(self) -> u16 {
        match self {
            Board::Ts4200 => 0x10,
            Board::Ts4800 => 0x00,
        }
    }

    pub fn full_scale(self) -> FullScale {
        FullScale::SPLIT
    }

    pub fn data_layout(self) -> DataLayout {
        DataLayout::PerChannel
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Board::Ts4200 => f.write_str("TS-4200"),
            Board::Ts4800 => f.write_str("TS-4800"),
        }
    }
}

/// Where samples are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLayout {
    /// One data register per channel, two bytes apart
    PerChannel,
    /// A single data register shared by all channels
    Multiplexed,
}

impl DataLayout {
    /// Offset of the data register holding `channel`'s sample, or `None`
    /// for a channel outside `1..=MAX_CHANNELS`.
    pub fn data_offset(self, channel: u8) -> Option<u32> {
        if channel == 0 || usize::from(channel) > MAX_CHANNELS {
            return None;
        }
        match self {
            DataLayout::PerChannel => Some(regs::DATA + 2 * (u32::from(channel) - 1)),
            DataLayout::Multiplexed => Some(regs::DATA),
        }
    }
}

/// Full-scale input voltage of each channel.
///
/// # Examples
///
/// ```
/// use tsadc::FullScale;
///
/// assert_eq!(FullScale::SPLIT.volts(1), Some(2.048));
/// assert_eq!(FullScale::SPLIT.volts(6), Some(10.24));
/// assert_eq!(FullScale::uniform(5.0).volts(3), Some(5.0));
/// assert_eq!(FullScale::UNIFORM.volts(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullScale([f32; MAX_CHANNELS]);

impl FullScale {
    /// 2.048 V on channels 1-2, 10.24 V on channels 3-6
    pub const SPLIT: FullScale = FullScale([2.048, 2.048, 10.24, 10.24, 10.24, 10.24]);

    /// 10.24 V on every channel
    pub const UNIFORM: FullScale = FullScale::uniform(10.24);

    pub const fn new(volts: [f32; MAX_CHANNELS]) -> Self {
        FullScale(volts)
    }

    pub const fn uniform(volts: f32) -> Self {
        FullScale([volts; MAX_CHANNELS])
    }

    /// Full-scale voltage of a 1-based channel.
    pub fn volts(&self, channel: u8) -> Option<f32> {
        let index = usize::from(channel).checked_sub(1)?;
        self.0.get(index).copied()
    }

    /// Rejects entries of enabled channels that would make scaling
    /// meaningless.
    pub(crate) fn check(&self, channels: ChannelSet) -> Result<(), ParameterError> {
        for channel in channels.iter() {
            let volts = self.0[usize::from(channel) - 1];
            if !volts.is_finite() || volts <= 0.0 {
                return Err(ParameterError::FullScale { channel, volts });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_addresses() {
        assert_eq!(Board::Ts4200.base_address(), 0x80);
        assert_eq!(Board::Ts4800.base_address(), 0x6000);
    }

    #[test]
    fn analog_select() {
        assert_eq!(Board::Ts4200.analog_select(), 0x10);
        assert_eq!(Board::Ts4800.analog_select(), 0x00);
    }

    #[test]
    fn per_channel_offsets() {
        let offsets: Vec<u32> = (1..=6)
            .filter_map(|c| DataLayout::PerChannel.data_offset(c))
            .collect();
        assert_eq!(offsets, [4, 6, 8, 10, 12, 14]);
    }

    #[test]
    fn multiplexed_offset() {
        for channel in 1..=6 {
            assert_eq!(DataLayout::Multiplexed.data_offset(channel), Some(regs::DATA));
        }
    }

    #[test]
    fn offset_of_channel_out_of_range() {
        for layout in [DataLayout::PerChannel, DataLayout::Multiplexed] {
            assert_eq!(layout.data_offset(0), None);
            assert_eq!(layout.data_offset(7), None);
            assert_eq!(layout.data_offset(u8::MAX), None);
        }
    }

    #[test]
    fn full_scale_lookup() {
        assert_eq!(FullScale::SPLIT.volts(0), None);
        assert_eq!(FullScale::SPLIT.volts(2), Some(2.048));
        assert_eq!(FullScale::SPLIT.volts(3), Some(10.24));
        assert_eq!(FullScale::UNIFORM.volts(1), Some(10.24));
    }

    #[test]
    fn full_scale_check_only_enabled_channels() {
        let table = FullScale::new([1.0, 0.0, f32::NAN, 1.0, 1.0, -1.0]);
        let ok = ChannelSet::from_channels(&[1, 4, 5]).unwrap();
        assert_eq!(table.check(ok), Ok(()));

        let zero = ChannelSet::from_channels(&[1, 2]).unwrap();
        assert_eq!(
            table.check(zero),
            Err(ParameterError::FullScale { channel: 2, volts: 0.0 })
        );

        let negative = ChannelSet::from_channels(&[6]).unwrap();
        assert!(table.check(negative).is_err());

        let nan = ChannelSet::from_channels(&[3]).unwrap();
        assert!(matches!(
            table.check(nan),
            Err(ParameterError::FullScale { channel: 3, .. })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Board::Ts4200.to_string(), "TS-4200");
        assert_eq!(Board::Ts4800.to_string(), "TS-4800");
    }
}
