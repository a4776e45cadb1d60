#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Bits 24..31 are ignored.
    /// Bits 16..23 are R
    /// Bits 8..15 are G
    /// Bits 0..7 are B
    pub const fn from_u32_rgb(u: u32) -> Self {
        Self {
            r: ((u >> 16) & 0xff) as u8,
            g: ((u >> 8) & 0xff) as u8,
            b: (u & 0xff) as u8,
        }
    }

    pub const fn grey(level: u8) -> Self {
        Self::from_rgb(level, level, level)
    }
}

macro_rules! well_known_colors {
    (
        $($name:ident = $hex:expr,)*
    ) => {
        impl Color {
            $(
                pub const $name: Color = Color::from_u32_rgb($hex);
            )*
        }
    }
}

well_known_colors! {
    BLACK = 0x00_00_00,
    WHITE = 0xff_ff_ff,
    RED = 0xff_00_00,
    GREEN = 0x00_ff_00,
    BLUE = 0x00_00_ff,
    GREY = 0x7f_7f_7f,
}
