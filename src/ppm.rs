use crate::raster::Raster;
use std::io;

/// The two RGB flavours of the PPM format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PpmFormat {
    /// `P3`, decimal values as text.
    Plain,
    /// `P6`, one byte per color component.
    Raw,
}

impl PpmFormat {
    fn magic(self) -> &'static str {
        match self {
            PpmFormat::Plain => "P3",
            PpmFormat::Raw => "P6",
        }
    }
}

/// Write `raster` to a writer as a PPM image. Both formats share the same plain-text header
/// (magic number, dimensions, maximum component value), the pixel data follows row by row.
pub fn write_ppm<T: io::Write>(raster: &Raster, format: PpmFormat, mut w: T) -> io::Result<()> {
    write!(
        w,
        "{}\n{} {}\n255\n",
        format.magic(),
        raster.width(),
        raster.height()
    )?;

    match format {
        PpmFormat::Plain => {
            for y in 0..raster.height() {
                for color in raster.line(y) {
                    write!(w, "{} {} {} ", color.red, color.green, color.blue)?;
                }
                writeln!(w)?;
            }
        }
        PpmFormat::Raw => w.write_all(&raster.to_rgb24())?,
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::palette::Rgb;
    use crate::ppm::{write_ppm, PpmFormat};
    use crate::raster::Raster;
    use std::str;

    fn test_raster() -> Raster {
        let mut raster = Raster::empty(3, 2);
        raster.set_pixel(0, 0, Rgb::new(255, 0, 0));
        raster.set_pixel(2, 1, Rgb::new(255, 255, 255));
        raster
    }

    #[test]
    fn test_write_plain_ppm_works() {
        let mut buffer = Vec::new();
        write_ppm(&test_raster(), PpmFormat::Plain, &mut buffer).unwrap();
        let got = str::from_utf8(&buffer).unwrap();
        // Every triple is followed by a space, including the last one on a line.
        let expected = "P3\n3 2\n255\n255 0 0 0 0 0 0 0 0 \n0 0 0 0 0 0 255 255 255 \n";
        assert_eq!(got, expected);
    }

    #[test]
    fn test_write_raw_ppm_works() {
        let mut buffer = Vec::new();
        write_ppm(&test_raster(), PpmFormat::Raw, &mut buffer).unwrap();
        let mut expected = b"P6\n3 2\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 0, 0, 0, 0]);
        expected.extend_from_slice(&[0, 0, 0, 0, 0, 0, 255, 255, 255]);
        assert_eq!(buffer, expected);
    }
}
