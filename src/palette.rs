//! The VIC-20 color palette.
//!
//! The VIC chip can display 16 colors. The first 8 are available everywhere (character colors,
//! border), the other 8 are "light" variants only usable as background or auxiliary colors. The
//! RGB values below are fixed, the picture format has no way of carrying its own palette.
//!
//! # Example
//!
//! ```rust
//! use mgrender::palette::{self, Rgb};
//! assert_eq!(palette::color(1), Rgb::new(255, 255, 255));
//! assert_eq!(palette::NAMES[6], "Blue");
//! // Only the low nibble is looked at.
//! assert_eq!(palette::color(0x16), palette::color(6));
//! ```

/// The number of palette entries.
pub const COLORS: usize = 16;

/// A 24-bit color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb { red, green, blue }
    }

    /// The color as `[red, green, blue]` bytes, the order used by PPM files and RGB24 textures.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

pub const VIC_PALETTE: [Rgb; COLORS] = [
    Rgb::new(0, 0, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(148, 23, 1),
    Rgb::new(82, 198, 212),
    Rgb::new(144, 28, 204),
    Rgb::new(81, 190, 8),
    Rgb::new(49, 26, 213),
    Rgb::new(196, 215, 28),
    Rgb::new(163, 81, 0),
    Rgb::new(208, 176, 22),
    Rgb::new(233, 121, 105),
    Rgb::new(132, 243, 255),
    Rgb::new(221, 115, 255),
    Rgb::new(142, 246, 79),
    Rgb::new(133, 112, 255),
    Rgb::new(242, 255, 84),
];

/// Color names, indexed the same way as `VIC_PALETTE`.
pub const NAMES: [&str; COLORS] = [
    "Black",
    "White",
    "Red",
    "Cyan",
    "Purple",
    "Green",
    "Blue",
    "Yellow",
    "Orange",
    "Light Orange",
    "Light Red",
    "Light Cyan",
    "Light Purple",
    "Light Green",
    "Light Blue",
    "Light Yellow",
];

/// Look a color up by its index. Only the low nibble of `index` is used, so this never fails.
pub fn color(index: u8) -> Rgb {
    VIC_PALETTE[usize::from(index & 0x0F)]
}

/// The palette index of `rgb`, if it's one of the palette colors.
pub fn index_of(rgb: Rgb) -> Option<u8> {
    VIC_PALETTE
        .iter()
        .position(|&entry| entry == rgb)
        .map(|index| index as u8)
}

#[cfg(test)]
mod tests {
    use crate::palette::{color, index_of, Rgb, COLORS, NAMES};

    #[test]
    fn test_every_color_matches_the_hardware_values() {
        let expected = [
            (0, 0, 0),
            (255, 255, 255),
            (148, 23, 1),
            (82, 198, 212),
            (144, 28, 204),
            (81, 190, 8),
            (49, 26, 213),
            (196, 215, 28),
            (163, 81, 0),
            (208, 176, 22),
            (233, 121, 105),
            (132, 243, 255),
            (221, 115, 255),
            (142, 246, 79),
            (133, 112, 255),
            (242, 255, 84),
        ];
        for (index, &(r, g, b)) in expected.iter().enumerate() {
            assert_eq!(color(index as u8), Rgb::new(r, g, b), "{}", NAMES[index]);
        }
    }

    #[test]
    fn test_lookup_is_total() {
        for index in 0..=u8::MAX {
            assert_eq!(color(index), color(index & 0x0F));
        }
    }

    #[test]
    fn test_index_of_works() {
        for index in 0..COLORS as u8 {
            assert_eq!(index_of(color(index)), Some(index));
        }
        assert_eq!(index_of(Rgb::new(1, 2, 3)), None);
    }

    #[test]
    fn test_to_bytes_works() {
        assert_eq!(color(2).to_bytes(), [148, 23, 1]);
    }
}
