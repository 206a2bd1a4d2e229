use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::Result;
use crate::io::writer::{encode_image, write_output};

/// Encode the padded canvas and write it to `output`.
///
/// Encoding happens fully in memory first, so an encoder failure never leaves
/// a partial file behind.
pub fn save_square_image(canvas: RgbaImage, output: &Path, format: ImageFormat) -> Result<()> {
    let side = canvas.width();
    let bytes = encode_image(canvas, format, output)?;
    write_output(output, &bytes)?;
    info!(
        "save_square_image: {}x{} {:?} written to {:?} ({} bytes)",
        side,
        side,
        format,
        output,
        bytes.len()
    );
    Ok(())
}
