use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons an MG file is rejected before decoding.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum FormatError {
    #[error("truncated ({len} bytes)")]
    Truncated { len: usize },

    #[error("over-length")]
    OverLength,

    #[error("header mismatch at byte {offset}")]
    HeaderMismatch { offset: usize },

    #[error("footer mismatch at byte {offset}")]
    FooterMismatch { offset: usize },

    #[error("saved with non-0 audio volume ({volume})")]
    NonZeroAudioVolume { volume: u8 },
}

/// Everything that can go wrong when converting an MG file to a PPM image.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not open file '{}' for read access: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("file '{}': {source}", .path.display())]
    Format { path: PathBuf, source: FormatError },

    #[error("could not write file '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// The process exit status for this error. Every category gets its own code; 1 and 2 are
    /// left to generic failures and command-line usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Open { .. } => 3,
            ConvertError::Format { source, .. } => match source {
                FormatError::Truncated { .. } => 4,
                FormatError::OverLength => 5,
                FormatError::HeaderMismatch { .. } => 6,
                FormatError::FooterMismatch { .. } => 7,
                FormatError::NonZeroAudioVolume { .. } => 8,
            },
            ConvertError::Write { .. } => 9,
        }
    }
}
