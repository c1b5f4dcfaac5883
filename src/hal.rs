//! `embedded-hal` ADC traits for [`Adc`].
//!
//! Each analog input is a zero-sized pin type, so code written against
//! [`OneShot`] can sample through the register service like any other ADC.

use embedded_hal::adc::{Channel, OneShot};

use crate::adc::Adc;
use crate::error::Error;
use crate::transport::RegisterAccess;

macro_rules! analog_inputs {
    ($($pin:ident => $channel:expr),+ $(,)?) => {
        $(
            #[doc = concat!("Analog input ", stringify!($channel))]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $pin;

            impl<T> Channel<Adc<T>> for $pin {
                type ID = u8;

                fn channel() -> u8 {
                    $channel
                }
            }
        )+
    };
}

analog_inputs! {
    Ain1 => 1,
    Ain2 => 2,
    Ain3 => 3,
    Ain4 => 4,
    Ain5 => 5,
    Ain6 => 6,
}

impl<T, Pin> OneShot<Adc<T>, i16, Pin> for Adc<T>
where
    T: RegisterAccess,
    Pin: Channel<Adc<T>, ID = u8>,
{
    type Error = Error;

    /// Reads the raw count of `Pin`'s channel. Never returns `WouldBlock`.
    fn read(&mut self, _pin: &mut Pin) -> nb::Result<i16, Error> {
        self.read_counts(Pin::channel()).map_err(nb::Error::Other)
    }
}
