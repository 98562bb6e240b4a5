//! Color helpers

use smart_leds::RGB8;

/// Pixel color as stored in the matrix buffer
pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Color channels in the order the strip expects them on the wire
#[inline]
pub const fn grb_bytes(color: Rgb) -> [u8; 3] {
    [color.g, color.r, color.b]
}

/// Pixel turned off
pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
