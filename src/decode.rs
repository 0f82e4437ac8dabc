//! Rendering MG picture data.
//!
//! The picture is 160x192 pixels split into 20x12 cells of 8x16 pixels. The payload is the
//! bitmap followed by the color map:
//!
//! * The bitmap has one bit per pixel and is stored column by column: the 192 bytes of a
//!   column are the 12 cells from top to bottom, 16 bytes (one per line) each. The most
//!   significant bit is the leftmost pixel.
//! * The color map has one nibble per cell, two horizontally adjacent cells share a byte (the
//!   even cell uses the low nibble). The lower 3 bits of the nibble are the cell's color, bit 3
//!   switches the cell to multicolor mode.
//!
//! Every cell picks its colors from four slots:
//!
//! | slot | color                                  |
//! |------|----------------------------------------|
//! | 0    | background (`background_aux` >> 4)    |
//! | 1    | the cell's own color                   |
//! | 2    | auxiliary (`background_aux` & 7)       |
//! | 3    | border (`border` >> 4)                 |
//!
//! In hi-res mode a clear bit is slot 0 and a set bit is slot 1; inverse mode swaps the two. In
//! multicolor mode slots 1 and 2 are swapped, every two bits pick a slot and the resulting
//! pixel is two pixels wide. Inverse mode doesn't apply to multicolor cells.

use crate::palette::{self, Rgb};
use crate::raster::{Raster, Rect};
use log::{debug, trace};

/// Picture width in pixels.
pub const X_SIZE: usize = 160;

/// Picture height in pixels.
pub const Y_SIZE: usize = 192;

pub const CELL_WIDTH: usize = 8;
pub const CELL_HEIGHT: usize = 16;
pub const CELL_COLUMNS: usize = X_SIZE / CELL_WIDTH;
pub const CELL_ROWS: usize = Y_SIZE / CELL_HEIGHT;

/// The size of the bitmap in bytes.
pub const BITMAP_SIZE: usize = X_SIZE * Y_SIZE / 8;

/// The size of the color map in bytes, two cells per byte.
pub const COLOR_MAP_SIZE: usize = CELL_COLUMNS * CELL_ROWS / 2;

/// The number of payload bytes the decoder reads.
pub const PAYLOAD_SIZE: usize = BITMAP_SIZE + COLOR_MAP_SIZE;

/// The two bytes controlling picture-wide colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlBytes {
    /// Background color (upper nibble), inverse mode off (bit 3), auxiliary color (bits 0-2).
    pub background_aux: u8,
    /// Border color (upper nibble). The lower nibble isn't used for rendering.
    pub border: u8,
}

impl ControlBytes {
    pub fn is_inverse(&self) -> bool {
        self.background_aux & 0x08 == 0
    }

    pub fn background(&self) -> Rgb {
        palette::color(self.background_aux >> 4)
    }

    pub fn auxiliary(&self) -> Rgb {
        palette::color(self.background_aux & 0x07)
    }

    pub fn border(&self) -> Rgb {
        palette::color(self.border >> 4)
    }
}

/// The resolved colors of a single cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellPalette {
    pub slots: [Rgb; 4],
    pub multicolor: bool,
}

impl CellPalette {
    /// Expand one bitmap byte into a line of `CELL_WIDTH` pixels.
    fn expand(&self, bits: u8, line: &mut [Rgb]) {
        debug_assert_eq!(line.len(), CELL_WIDTH);
        if self.multicolor {
            for (pair_index, pair) in line.chunks_exact_mut(2).enumerate() {
                let slot = (bits >> (6 - 2 * pair_index)) & 0x03;
                let color = self.slots[usize::from(slot)];
                pair[0] = color;
                pair[1] = color;
            }
        } else {
            for (x2, pixel) in line.iter_mut().enumerate() {
                let slot = (bits >> (7 - x2)) & 0x01;
                *pixel = self.slots[usize::from(slot)];
            }
        }
    }
}

/// Work out the colors of the cell in column `cell_col` whose color map byte is `color_byte`.
pub fn cell_palette(cell_col: usize, color_byte: u8, controls: &ControlBytes) -> CellPalette {
    let nibble = if cell_col % 2 == 0 {
        color_byte & 0x0F
    } else {
        color_byte >> 4
    };
    let multicolor = nibble & 0x08 != 0;
    let mut slots = [
        controls.background(),
        palette::color(nibble & 0x07),
        controls.auxiliary(),
        controls.border(),
    ];
    if multicolor {
        slots.swap(1, 2);
    } else if controls.is_inverse() {
        slots.swap(0, 1);
    }
    CellPalette { slots, multicolor }
}

fn check_payload(payload: &[u8]) {
    assert!(
        payload.len() >= PAYLOAD_SIZE,
        "payload too short: {} bytes, need {}",
        payload.len(),
        PAYLOAD_SIZE
    );
}

/// Decode a single cell into an 8x16 raster. `payload` needs to be at least `PAYLOAD_SIZE`
/// bytes long.
pub fn decode_cell(
    cell_row: usize,
    cell_col: usize,
    payload: &[u8],
    controls: &ControlBytes,
) -> Raster {
    assert!(cell_row < CELL_ROWS && cell_col < CELL_COLUMNS);
    check_payload(payload);

    let color_byte = payload[BITMAP_SIZE + (CELL_COLUMNS * cell_row + cell_col) / 2];
    let cell_palette = cell_palette(cell_col, color_byte, controls);

    let mut cell = Raster::empty(CELL_WIDTH, CELL_HEIGHT);
    let offset = Y_SIZE * cell_col + CELL_HEIGHT * cell_row;
    for (y2, &bits) in payload[offset..offset + CELL_HEIGHT].iter().enumerate() {
        cell_palette.expand(bits, cell.mut_line(y2));
    }
    cell
}

/// Decode a picture into an existing `X_SIZE`x`Y_SIZE` raster. Every pixel is overwritten.
pub fn decode_into(payload: &[u8], controls: &ControlBytes, raster: &mut Raster) {
    check_payload(payload);
    assert_eq!((raster.width(), raster.height()), (X_SIZE, Y_SIZE));
    debug!(
        "decoding picture: background {}, auxiliary {}, border {}, inverse {}",
        palette::NAMES[usize::from(controls.background_aux >> 4)],
        palette::NAMES[usize::from(controls.background_aux & 0x07)],
        palette::NAMES[usize::from(controls.border >> 4)],
        controls.is_inverse()
    );

    for cell_row in 0..CELL_ROWS {
        trace!("decoding cell row {}", cell_row);
        let top = cell_row * CELL_HEIGHT;
        for cell_col in 0..CELL_COLUMNS {
            let left = cell_col * CELL_WIDTH;
            let cell = decode_cell(cell_row, cell_col, payload, controls);
            raster.blit(
                &cell,
                &Rect::from_ranges(left..left + CELL_WIDTH, top..top + CELL_HEIGHT),
            );
        }
    }
}

/// Decode a picture. `payload` needs to be at least `PAYLOAD_SIZE` bytes long.
pub fn decode(payload: &[u8], controls: &ControlBytes) -> Raster {
    let mut raster = Raster::empty(X_SIZE, Y_SIZE);
    decode_into(payload, controls, &mut raster);
    raster
}
