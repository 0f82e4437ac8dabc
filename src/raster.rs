//! RGB rasters.
//!
//! A `Raster` is a rectangular grid of `Rgb` pixels stored line by line, top to bottom. The
//! decoder produces one for a whole picture and one per cell; `blit` and `subimage` move pixels
//! between the two.

use crate::palette::Rgb;
use std::ops;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Raster {
    data: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Create a raster filled with black.
    pub fn empty(width: usize, height: usize) -> Raster {
        Raster::filled_with_color(width, height, Rgb::new(0, 0, 0))
    }

    /// Create a raster filled with desired color.
    pub fn filled_with_color(width: usize, height: usize, color: Rgb) -> Raster {
        Raster {
            width,
            height,
            data: vec![color; width * height],
        }
    }

    /// Get the width of the raster.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the raster.
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row by row.
    pub fn data(&self) -> &[Rgb] {
        &self.data[..]
    }

    /// The pixels of `line` (0-based).
    pub fn line(&self, line: usize) -> &[Rgb] {
        assert!(line < self.height);
        &self.data[line * self.width..(line + 1) * self.width]
    }

    /// Mutable variant of `line()`.
    pub fn mut_line(&mut self, line: usize) -> &mut [Rgb] {
        assert!(line < self.height);
        &mut self.data[line * self.width..(line + 1) * self.width]
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.line(y)[x]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        self.mut_line(y)[x] = color;
    }

    /// Extract a `rect`-bound subimage from the raster.
    pub fn subimage(&self, rect: &Rect) -> Raster {
        let mut subimage = Raster::empty(rect.width, rect.height);
        for (dst_line, src_line) in (rect.top..rect.beyond_bottom()).enumerate() {
            subimage
                .mut_line(dst_line)
                .copy_from_slice(&self.line(src_line)[rect.left..rect.beyond_right()]);
        }
        subimage
    }

    /// Blit another raster into a rect in this one. The dimensions of `raster` and `rect` need
    /// to be the same.
    pub fn blit(&mut self, raster: &Raster, rect: &Rect) {
        assert_eq!((raster.width, raster.height), (rect.width, rect.height));
        for (src_line, dst_line) in (rect.top..rect.beyond_bottom()).enumerate() {
            self.mut_line(dst_line)[rect.left..rect.beyond_right()]
                .copy_from_slice(raster.line(src_line));
        }
    }

    /// Write the pixels of `line` as packed RGB24 bytes into `buffer`, which needs to hold
    /// exactly `width * 3` bytes. Useful when the destination rows are padded, like texture
    /// memory with a pitch.
    pub fn line_to_rgb24(&self, line: usize, buffer: &mut [u8]) {
        assert_eq!(buffer.len(), self.width * 3);
        for (chunk, pixel) in buffer.chunks_exact_mut(3).zip(self.line(line)) {
            chunk.copy_from_slice(&pixel.to_bytes());
        }
    }

    /// The pixels as packed RGB24 bytes.
    pub fn to_rgb24(&self) -> Vec<u8> {
        let row_size = self.width * 3;
        let mut buffer = vec![0; row_size * self.height];
        if row_size == 0 {
            return buffer;
        }
        for (y, row) in buffer.chunks_exact_mut(row_size).enumerate() {
            self.line_to_rgb24(y, row);
        }
        buffer
    }
}

#[derive(Debug)]
pub struct Rect {
    /// The position of the left border, inclusive.
    pub left: usize,
    /// The position of the top border, inclusive.
    pub top: usize,
    /// The width of the rect.
    pub width: usize,
    /// The height of the rect.
    pub height: usize,
}

impl Rect {
    /// Construct a new `Rect` from coordinate ranges (exclusively-ended).
    pub fn from_ranges(x: ops::Range<usize>, y: ops::Range<usize>) -> Rect {
        Rect {
            left: x.start,
            top: y.start,
            width: x.end - x.start,
            height: y.end - y.start,
        }
    }

    /// Get the x coordinate that's one to the right of the right border of the rect.
    pub fn beyond_right(&self) -> usize {
        self.left + self.width
    }

    /// Get the y coordinate that's one below the bottom border of the rect.
    pub fn beyond_bottom(&self) -> usize {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use crate::palette::Rgb;
    use crate::raster::{Raster, Rect};

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);

    #[test]
    fn test_rect_works() {
        let rect = Rect::from_ranges(0..8, 16..32);
        assert_eq!(rect.left, 0);
        assert_eq!(rect.top, 16);
        assert_eq!(rect.width, 8);
        assert_eq!(rect.height, 16);
        assert_eq!(rect.beyond_right(), 8);
        assert_eq!(rect.beyond_bottom(), 32);
    }

    #[test]
    fn test_pixel_access_works() {
        let mut raster = Raster::empty(3, 2);
        raster.set_pixel(2, 1, RED);
        assert_eq!(raster.pixel(2, 1), RED);
        assert_eq!(raster.line(1), [Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), RED]);
        assert_eq!(raster.data()[5], RED);
    }

    #[test]
    #[should_panic]
    fn test_line_out_of_range_panics() {
        Raster::empty(3, 2).line(2);
    }

    #[test]
    fn test_blit_and_subimage_work() {
        let mut raster = Raster::empty(3, 2);
        let patch = Raster::filled_with_color(2, 1, GREEN);
        raster.blit(&patch, &Rect::from_ranges(1..3, 1..2));
        let mut expected = Raster::empty(3, 2);
        expected.mut_line(1)[1..3].copy_from_slice(&[GREEN, GREEN]);
        assert_eq!(raster, expected);
        assert_eq!(raster.subimage(&Rect::from_ranges(1..3, 1..2)), patch);
    }

    #[test]
    fn test_to_rgb24_works() {
        let mut raster = Raster::empty(2, 1);
        raster.set_pixel(0, 0, RED);
        raster.set_pixel(1, 0, GREEN);
        assert_eq!(raster.to_rgb24(), [255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn test_line_to_rgb24_works() {
        let mut raster = Raster::empty(2, 2);
        raster.set_pixel(1, 1, GREEN);
        // A padded destination row, only the first 6 bytes belong to the line.
        let mut buffer = [9; 8];
        raster.line_to_rgb24(1, &mut buffer[..6]);
        assert_eq!(buffer, [0, 0, 0, 0, 255, 0, 9, 9]);
    }
}
