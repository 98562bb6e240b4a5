use esp_hal::{
    Blocking,
    gpio::AnyPin,
    peripherals::{SPI2, SPI3},
    spi::{
        Mode,
        master::{Config, Spi},
    },
    time::Rate,
};
use log::info;

use bitmemo_core::{SpiLedTransmitter, TransmitterPool, spi::SPI_FREQUENCY_KHZ};

pub(crate) type LedSpi = Spi<'static, Blocking>;

/// SPI buses that can drive the LED matrix
///
/// The WS2812 waveform is produced on MOSI; the bus clock and MISO are not
/// routed to any pin.
pub(crate) struct EspSpiPool {
    spi2: Option<SPI2<'static>>,
    spi3: Option<SPI3<'static>>,
}

impl EspSpiPool {
    pub(crate) fn new(spi2: SPI2<'static>, spi3: SPI3<'static>) -> Self {
        Self {
            spi2: Some(spi2),
            spi3: Some(spi3),
        }
    }
}

fn bus_config() -> Config {
    Config::default()
        .with_frequency(Rate::from_khz(SPI_FREQUENCY_KHZ))
        .with_mode(Mode::_0)
}

impl TransmitterPool for EspSpiPool {
    type Pin = AnyPin<'static>;
    type Transmitter = SpiLedTransmitter<LedSpi>;

    fn claim(&mut self, pin: AnyPin<'static>) -> Option<Self::Transmitter> {
        let spi = if let Some(spi2) = self.spi2.take() {
            info!("Driving LED matrix with SPI2");
            Spi::new(spi2, bus_config())
        } else if let Some(spi3) = self.spi3.take() {
            info!("Driving LED matrix with SPI3");
            Spi::new(spi3, bus_config())
        } else {
            return None;
        };

        let spi = spi.ok()?.with_mosi(pin);
        Some(SpiLedTransmitter::new(spi))
    }
}
