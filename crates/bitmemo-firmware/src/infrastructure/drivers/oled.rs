use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::delay::DelayNs;
use esp_hal::{Blocking, delay::Delay, i2c::master::I2c};
use log::warn;
use ssd1306::{
    I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*,
    size::DisplaySize128x64,
};

use bitmemo_core::TextDisplay;

use crate::config;

type Panel = Ssd1306<
    I2CInterface<I2c<'static, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// SSD1306 128x64 OLED showing three lines of text
pub(crate) struct OledDisplay {
    panel: Panel,
    delay: Delay,
}

impl OledDisplay {
    pub(crate) fn new(i2c: I2c<'static, Blocking>, delay: Delay) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if let Err(err) = panel.init() {
            warn!("OLED init failed: {:?}", err);
        }

        Self { panel, delay }
    }
}

impl TextDisplay for OledDisplay {
    fn show(&mut self, lines: [&str; 3]) {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        self.panel.clear_buffer();
        for (line, y) in lines.iter().zip(config::DISPLAY.line_y) {
            let origin = Point::new(config::DISPLAY.margin_x, y);
            if let Err(err) =
                Text::with_baseline(line, origin, style, Baseline::Top).draw(&mut self.panel)
            {
                warn!("OLED text draw failed: {:?}", err);
            }
        }
        if let Err(err) = self.panel.flush() {
            warn!("OLED refresh failed: {:?}", err);
        }

        self.delay.delay_ms(config::DISPLAY.refresh_ms);
    }
}
