use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode the raster at `path`.
///
/// The format is sniffed from the file contents, falling back to the extension.
/// A missing file and an undecodable one both surface as [`Error::Open`].
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let open_err = |source: ImageError| Error::Open {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| open_err(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| open_err(ImageError::IoError(e)))?;
    debug!("Decoding {:?} as {:?}", path, reader.format());

    let image = reader.decode().map_err(open_err)?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}
