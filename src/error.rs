//! Error raised when the input image cannot be turned into pixels.
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to locate, read or decode the source image.
///
/// This is the only error the conversion pipeline produces; every later
/// stage is total over decoded input.
#[derive(Debug)]
pub enum DecodeError {
    /// Nothing exists at the given path.
    NotFound { path: PathBuf },
    /// The file exists but could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The bytes are not a supported or valid raster image.
    Format {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl DecodeError {
    /// Path of the image that failed to decode.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::Format { path, .. } => path,
        }
    }

    pub(crate) fn from_image_error(path: &Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) if source.kind() == io::ErrorKind::NotFound => {
                Self::NotFound {
                    path: path.to_path_buf(),
                }
            }
            image::ImageError::IoError(source) => Self::Io {
                path: path.to_path_buf(),
                source,
            },
            other => Self::Format {
                path: path.to_path_buf(),
                source: other,
            },
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "Failed to open {}: file not found", path.display()),
            Self::Io { path, source } => write!(f, "Failed to read {}: {source}", path.display()),
            Self::Format { path, source } => {
                write!(f, "Failed to decode {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
        }
    }
}
