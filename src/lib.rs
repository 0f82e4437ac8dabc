//! Decoding VIC-20 MG bitmap pictures.
//!
//! * [`mgfile`] validates files and gives access to their parts
//! * [`decode`] turns the picture data into an RGB [`raster::Raster`]
//! * [`ppm`] writes rasters as PPM images
//! * [`convert`] ties the above together the way the `mgrender` binary uses them

pub mod convert;
pub mod decode;
pub mod error;
pub mod mgfile;
pub mod palette;
pub mod ppm;
pub mod raster;
