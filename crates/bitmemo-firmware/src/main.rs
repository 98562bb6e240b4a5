#![no_std]
#![no_main]

#[macro_use]
mod config;
mod infrastructure;

use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pin, Pull},
    i2c::master::{Config as I2cConfig, I2c},
    main,
    time::Rate,
};
use log::info;

use bitmemo_core::{BoardParts, GameConfig, MatrixDriver, MemoryGame};

use crate::infrastructure::board::EspBoard;
use crate::infrastructure::drivers::{EspRandom, EspSpiPool, OledDisplay};

esp_bootloader_esp_idf::esp_app_desc!();

#[main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);
    let delay = Delay::new();

    // Without the matrix there is no game, a missing channel halts here
    let mut pool = EspSpiPool::new(peripherals.SPI2, peripherals.SPI3);
    let matrix = MatrixDriver::new(&mut pool, matrix_gpio!(peripherals).degrade(), delay)
        .expect("LED matrix needs a free SPI bus");

    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(config::DISPLAY.i2c_frequency_khz)),
    )
    .unwrap()
    .with_sda(display_sda_gpio!(peripherals))
    .with_scl(display_scl_gpio!(peripherals));

    let button_config = || InputConfig::default().with_pull(Pull::Up);
    let parts: BoardParts<EspBoard> = BoardParts {
        matrix,
        button_zero: Input::new(button_zero_gpio!(peripherals), button_config()),
        button_one: Input::new(button_one_gpio!(peripherals), button_config()),
        success_led: Output::new(
            success_led_gpio!(peripherals),
            Level::Low,
            OutputConfig::default(),
        ),
        failure_led: Output::new(
            failure_led_gpio!(peripherals),
            Level::Low,
            OutputConfig::default(),
        ),
        display: OledDisplay::new(i2c, delay),
        rng: EspRandom::new(),
        delay,
    };

    info!("Board ready, starting game");
    let mut game = MemoryGame::new(parts, GameConfig::default());
    game.show_welcome();
    game.run()
}
