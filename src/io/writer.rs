use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Resolve the encoder for `path` from its extension.
pub fn output_format_for(path: &Path) -> Result<ImageFormat> {
    let unsupported = || Error::UnsupportedOutput {
        path: path.to_path_buf(),
    };
    let format = ImageFormat::from_path(path).map_err(|_| unsupported())?;
    if !format.writing_enabled() {
        return Err(unsupported());
    }
    Ok(format)
}

/// PNM flavour implied by the output extension; `.ppm`/`.pnm` default to a binary pixmap.
pub fn pnm_subtype_for(path: &Path) -> PnmSubtype {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pbm") => PnmSubtype::Bitmap(SampleEncoding::Binary),
        Some("pgm") => PnmSubtype::Graymap(SampleEncoding::Binary),
        Some("pam") => PnmSubtype::ArbitraryMap,
        _ => PnmSubtype::Pixmap(SampleEncoding::Binary),
    }
}

/// Whether the encoder for `format` (and, for PNM, `output`'s extension) keeps the canvas alpha.
pub fn supports_alpha(format: ImageFormat, output: &Path) -> bool {
    match format {
        ImageFormat::Jpeg | ImageFormat::Hdr => false,
        ImageFormat::Pnm => pnm_subtype_for(output) == PnmSubtype::ArbitraryMap,
        _ => true,
    }
}

/// Convert the RGBA canvas into the color type the encoder for `format` accepts.
fn canvas_for_encoder(canvas: RgbaImage, format: ImageFormat, output: &Path) -> DynamicImage {
    let canvas = DynamicImage::ImageRgba8(canvas);
    if !supports_alpha(format, output) {
        debug!("{:?} output has no alpha channel; dropping canvas alpha", format);
    }
    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(canvas.to_rgb8()),
        ImageFormat::Hdr => DynamicImage::ImageRgb32F(canvas.to_rgb32f()),
        ImageFormat::OpenExr => DynamicImage::ImageRgba32F(canvas.to_rgba32f()),
        ImageFormat::Farbfeld => DynamicImage::ImageRgba16(canvas.to_rgba16()),
        ImageFormat::Pnm => match pnm_subtype_for(output) {
            PnmSubtype::Bitmap(_) | PnmSubtype::Graymap(_) => {
                DynamicImage::ImageLuma8(canvas.to_luma8())
            }
            PnmSubtype::Pixmap(_) => DynamicImage::ImageRgb8(canvas.to_rgb8()),
            PnmSubtype::ArbitraryMap => canvas,
        },
        _ => canvas,
    }
}

/// Encode the canvas into an in-memory buffer.
///
/// Formats without alpha get the color channels only; the fill alpha is
/// dropped, not flattened against any background.
pub fn encode_image(canvas: RgbaImage, format: ImageFormat, output: &Path) -> Result<Vec<u8>> {
    let image = canvas_for_encoder(canvas, format, output);

    let mut buf = Cursor::new(Vec::new());
    let written = match format {
        ImageFormat::Pnm => {
            let encoder = PnmEncoder::new(&mut buf).with_subtype(pnm_subtype_for(output));
            image.write_with_encoder(encoder)
        }
        _ => image.write_to(&mut buf, format),
    };
    written.map_err(|source| Error::Encode {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(buf.into_inner())
}

/// Write encoded bytes to `output`. The file handle is closed before returning.
pub fn write_output(output: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(output, bytes).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })
}
