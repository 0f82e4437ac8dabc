//! MG picture files
//!
//! MG pictures are saved by a VIC-20 paint program as self-displaying programs: loading and
//! running the file on the machine shows the picture. Every file is exactly `FILE_SIZE` bytes.
//!
//! # On-disk format
//!
//! `[ header ] [ border ] [ background ] [ bitmap ] [ color map ] [ footer ]`
//!
//! * `header` is a fixed 15-byte BASIC stub (`HEADER`)
//! * `border` is the VIC register 0x900E image: the upper nibble is the fourth multicolor color,
//!   the lower nibble is the audio volume and has to be 0
//! * `background` is the VIC register 0x900F image: upper nibble background color, bit 3 clear
//!   for inverse mode, lower 3 bits the third multicolor color (the screen border on the
//!   machine itself)
//! * `bitmap` is 3840 bytes, 20 columns of 8x192 pixels, one bit per pixel
//! * `color map` is 120 bytes, one nibble per 8x16 cell
//! * `footer` is a fixed 120-byte machine code display routine (`FOOTER`)
//!
//! See [the decode module](../decode/index.html) for how the payload is interpreted.
//!
//! # Example
//!
//! ```rust
//! use mgrender::mgfile::MgFile;
//! let mut saved = Vec::new();
//! MgFile::empty().save(&mut saved).unwrap();
//! let file = MgFile::from_bytes(saved).unwrap();
//! assert_eq!(file.volume(), 0);
//! assert_eq!(file.render().width(), 160);
//! ```

use crate::decode::{self, ControlBytes, BITMAP_SIZE, PAYLOAD_SIZE};
use crate::error::FormatError;
use crate::raster::Raster;
use log::debug;
use std::io::{self, Read};

/// The exact size of a valid file.
pub const FILE_SIZE: usize = 4097;

/// Where the decoded payload starts.
pub const PAYLOAD_OFFSET: usize = 17;

/// The byte holding the border color and the audio volume.
pub const BORDER_OFFSET: usize = 15;

/// The byte holding the background and auxiliary colors and the inverse flag.
pub const BACKGROUND_AUX_OFFSET: usize = 16;

pub const HEADER: [u8; 15] = [
    0xF1, 0x10, 0x0C, 0x12, 0xD8, 0x07, 0x9E, 0x20, 0x38, 0x35, 0x38, 0x34, 0x00, 0x00, 0x00,
];

pub const FOOTER: [u8; 120] = [
    0x18, 0xA9, 0x10, 0xA8, 0x99, 0xF0, 0x0F, 0x69, 0x0C, 0x90, 0x02, 0xE9, 0xEF, 0xC8, 0xD0,
    0xF4, 0xA0, 0x05, 0x18, 0xB9, 0xE4, 0xED, 0x79, 0xFA, 0x21, 0x99, 0x00, 0x90, 0x88, 0x10,
    0xF3, 0xAD, 0x0E, 0x90, 0x29, 0x0F, 0x0D, 0x0E, 0x12, 0x8D, 0x0E, 0x90, 0xAD, 0x0F, 0x12,
    0x8D, 0x0F, 0x90, 0xA9, 0x10, 0x85, 0xFB, 0xA9, 0x12, 0x85, 0xFC, 0xA9, 0x00, 0x85, 0xFD,
    0xA9, 0x11, 0x85, 0xFE, 0xA2, 0x0F, 0xA0, 0x00, 0xB1, 0xFB, 0x91, 0xFD, 0xC8, 0xD0, 0xF9,
    0xE6, 0xFC, 0xE6, 0xFE, 0xCA, 0xD0, 0xF2, 0xA2, 0x00, 0xA0, 0x00, 0xBD, 0x10, 0x21, 0xE8,
    0x99, 0x00, 0x94, 0xC8, 0x4A, 0x4A, 0x4A, 0x4A, 0x99, 0x00, 0x94, 0xC8, 0xC0, 0xF0, 0xD0,
    0xEC, 0x20, 0xE4, 0xFF, 0xF0, 0xFB, 0x4C, 0x32, 0xFD, 0x02, 0xFE, 0xFE, 0xEB, 0x00, 0x0C,
];

/// Where the footer starts.
pub const FOOTER_OFFSET: usize = FILE_SIZE - FOOTER.len();

/// A validated MG file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MgFile {
    data: Vec<u8>,
}

/// Read the raw contents of an MG file. At most one byte more than `FILE_SIZE` is read, which is
/// enough for `MgFile::from_bytes` to tell an over-length file apart from a valid one.
pub fn read_raw<T: io::Read>(reader: T) -> io::Result<Vec<u8>> {
    let mut data = Vec::with_capacity(FILE_SIZE + 1);
    reader.take(FILE_SIZE as u64 + 1).read_to_end(&mut data)?;
    Ok(data)
}

impl MgFile {
    /// Validate file contents. The checks are done in this order and the first failing one is
    /// reported:
    ///
    /// * the length is exactly `FILE_SIZE`
    /// * the file starts with `HEADER`
    /// * the file ends with `FOOTER`
    /// * the audio volume is 0
    pub fn from_bytes(data: Vec<u8>) -> Result<MgFile, FormatError> {
        let result = MgFile::check(&data);
        match result {
            Ok(()) => {
                debug!("valid MG file, volume 0, controls {:?}", controls_of(&data));
                Ok(MgFile { data })
            }
            Err(e) => {
                // The caller reports the error, this is only for tracing.
                debug!("rejecting MG file: {}", e);
                Err(e)
            }
        }
    }

    fn check(data: &[u8]) -> Result<(), FormatError> {
        if data.len() < FILE_SIZE {
            return Err(FormatError::Truncated { len: data.len() });
        }
        if data.len() > FILE_SIZE {
            return Err(FormatError::OverLength);
        }
        if let Some(offset) = first_mismatch(&data[..HEADER.len()], &HEADER) {
            return Err(FormatError::HeaderMismatch { offset });
        }
        if let Some(offset) = first_mismatch(&data[FOOTER_OFFSET..], &FOOTER) {
            return Err(FormatError::FooterMismatch {
                offset: FOOTER_OFFSET + offset,
            });
        }
        let volume = data[BORDER_OFFSET] & 0x0F;
        if volume != 0 {
            return Err(FormatError::NonZeroAudioVolume { volume });
        }
        Ok(())
    }

    /// Create a blank but valid picture: black everywhere, hi-res cells only.
    pub fn empty() -> MgFile {
        let mut data = vec![0; FILE_SIZE];
        data[..HEADER.len()].copy_from_slice(&HEADER);
        data[FOOTER_OFFSET..].copy_from_slice(&FOOTER);
        // Bit 3 set turns inverse mode off. Every color is black.
        data[BACKGROUND_AUX_OFFSET] = 0x08;
        MgFile { data }
    }

    /// Save the file to a writer.
    pub fn save<T: io::Write>(&self, mut writer: T) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }

    /// The whole file.
    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    /// The part of the file the decoder works on: the bitmap followed by the color map.
    pub fn payload(&self) -> &[u8] {
        &self.data[PAYLOAD_OFFSET..PAYLOAD_OFFSET + PAYLOAD_SIZE]
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.data[PAYLOAD_OFFSET..PAYLOAD_OFFSET + BITMAP_SIZE]
    }

    pub fn bitmap_mut(&mut self) -> &mut [u8] {
        &mut self.data[PAYLOAD_OFFSET..PAYLOAD_OFFSET + BITMAP_SIZE]
    }

    pub fn color_map(&self) -> &[u8] {
        &self.data[PAYLOAD_OFFSET + BITMAP_SIZE..PAYLOAD_OFFSET + PAYLOAD_SIZE]
    }

    pub fn color_map_mut(&mut self) -> &mut [u8] {
        &mut self.data[PAYLOAD_OFFSET + BITMAP_SIZE..PAYLOAD_OFFSET + PAYLOAD_SIZE]
    }

    /// The two color control bytes stored in front of the payload.
    pub fn controls(&self) -> ControlBytes {
        controls_of(&self.data)
    }

    /// Replace the control bytes. The volume nibble of `controls.border` is forced to 0 so the
    /// file stays valid.
    pub fn set_controls(&mut self, controls: ControlBytes) {
        self.data[BORDER_OFFSET] = controls.border & 0xF0;
        self.data[BACKGROUND_AUX_OFFSET] = controls.background_aux;
    }

    /// The audio volume the picture was saved with. Always 0 for a validated file.
    pub fn volume(&self) -> u8 {
        self.data[BORDER_OFFSET] & 0x0F
    }

    /// Decode the picture.
    pub fn render(&self) -> Raster {
        decode::decode(self.payload(), &self.controls())
    }
}

fn controls_of(data: &[u8]) -> ControlBytes {
    ControlBytes {
        background_aux: data[BACKGROUND_AUX_OFFSET],
        border: data[BORDER_OFFSET],
    }
}

fn first_mismatch(got: &[u8], expected: &[u8]) -> Option<usize> {
    got.iter().zip(expected.iter()).position(|(a, b)| a != b)
}
