pub(crate) struct DisplayConfig {
    pub i2c_frequency_khz: u32,
    /// Pause after each refresh so the panel settles
    pub refresh_ms: u32,
    /// Left margin of every text line
    pub margin_x: i32,
    /// Top of each of the three text lines
    pub line_y: [i32; 3],
}

pub(crate) const DISPLAY: DisplayConfig = DisplayConfig {
    i2c_frequency_khz: 400,
    refresh_ms: 100,
    margin_x: 5,
    line_y: [8, 28, 48],
};

/// Data line of the 5x5 LED matrix
macro_rules! matrix_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}

/// Button entering `0`
macro_rules! button_zero_gpio {
    ($p:expr) => {
        $p.GPIO32
    };
}

/// Button entering `1`
macro_rules! button_one_gpio {
    ($p:expr) => {
        $p.GPIO33
    };
}

macro_rules! success_led_gpio {
    ($p:expr) => {
        $p.GPIO26
    };
}

macro_rules! failure_led_gpio {
    ($p:expr) => {
        $p.GPIO27
    };
}

macro_rules! display_sda_gpio {
    ($p:expr) => {
        $p.GPIO21
    };
}

macro_rules! display_scl_gpio {
    ($p:expr) => {
        $p.GPIO22
    };
}
