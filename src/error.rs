use std::{error::Error, fmt, io};

/// An error occurred while slicing a sprite sheet.
#[derive(Debug)]
pub enum SliceError {
    /// A frame record was malformed. String contains detailed message.
    InvalidArgument(String),
    /// A crop rectangle reached outside the source image. String contains
    /// detailed message.
    OutOfBounds(String),
    /// Two frames in one export batch share a name. Only raised by the
    /// strict name check; the export functions themselves tolerate
    /// duplicates and log a warning instead.
    DuplicateName(String),
    /// An IO error occurred. The library itself performs no IO; this is
    /// the designated kind for callers wrapping reads and writes around
    /// it.
    IoError(io::Error),
}

impl From<io::Error> for SliceError {
    fn from(err: io::Error) -> Self {
        SliceError::IoError(err)
    }
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::InvalidArgument(msg) => write!(f, "Invalid frame input: {}", msg),
            SliceError::OutOfBounds(msg) => write!(f, "Crop out of bounds: {}", msg),
            SliceError::DuplicateName(msg) => write!(f, "Duplicate frame name: {}", msg),
            SliceError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for SliceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SliceError::IoError(err) => Some(err),
            _ => None,
        }
    }
}
