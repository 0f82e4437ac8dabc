//! The MG to PPM conversion pipeline: read, validate, decode, write. Every step completes before
//! the next one starts and the first failure ends the conversion.

use crate::error::ConvertError;
use crate::mgfile::{self, MgFile};
use crate::ppm::{self, PpmFormat};
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Load and validate the MG file at `path`.
pub fn load(path: &Path) -> Result<MgFile, ConvertError> {
    let open_error = |source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::open(path).map_err(open_error)?;
    let data = mgfile::read_raw(io::BufReader::new(file)).map_err(open_error)?;
    MgFile::from_bytes(data).map_err(|source| ConvertError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert the MG file at `input` to a PPM image at `output`. The output file isn't created
/// unless the input is valid.
pub fn convert(input: &Path, output: &Path, format: PpmFormat) -> Result<(), ConvertError> {
    let mgfile = load(input)?;
    let raster = mgfile.render();

    let write_error = |source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    };
    let file = fs::File::create(output).map_err(write_error)?;
    ppm::write_ppm(&raster, format, io::BufWriter::new(file)).map_err(write_error)?;
    info!(
        "converted {} to {} ({:?} PPM)",
        input.display(),
        output.display(),
        format
    );
    Ok(())
}
