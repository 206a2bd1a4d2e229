//! Crate-level error type and `Result` alias.
//! Wraps decode failures on the input side and encode/write failures on the
//! output side, each tagged with the path involved.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open image {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported output format for {} (unknown or missing extension)", .path.display())]
    UnsupportedOutput { path: PathBuf },

    #[error("Failed to encode image for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Square canvas of side {side} needs {bytes} bytes, over the {limit} byte allocation limit")]
    CanvasTooLarge { side: u32, bytes: u64, limit: u64 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}
