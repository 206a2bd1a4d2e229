//! High-level library API: pad a file to a square file, or pad an in-memory
//! image to a square canvas. Prefer these entrypoints over the low-level
//! processing modules when integrating squarepad.
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::info;

use crate::core::params::SquareParams;
use crate::core::processing::padding::add_padding_to_square;
use crate::core::processing::save::save_square_image;
use crate::error::Result;
use crate::io::{open_image, output_format_for};
use crate::types::{Dimensions, FillColor, SquareLayout};

/// Summary of a completed file-to-file padding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareReport {
    pub output: PathBuf,
    pub format: ImageFormat,
    pub input_dimensions: Dimensions,
    pub layout: SquareLayout,
}

impl SquareReport {
    /// Confirmation line naming the written file
    pub fn confirmation(&self) -> String {
        format!("Saved square image to {}", self.output.display())
    }
}

/// Pad an in-memory image onto a centered square canvas (no disk I/O)
///
/// Fails with [`crate::Error::CanvasTooLarge`] when the square canvas would
/// exceed the image crate's default allocation limit.
pub fn pad_to_square(image: &DynamicImage, fill: FillColor) -> Result<RgbaImage> {
    add_padding_to_square(image, fill)
}

/// Read `input`, pad it to a centered square filled with `fill`, and write it to `output`.
///
/// The output encoder is chosen from `output`'s extension and resolved before
/// the input is decoded. Exactly one file is written on success; on any
/// failure no output file is created.
pub fn make_square(input: &Path, output: &Path, fill: FillColor) -> Result<SquareReport> {
    let format = output_format_for(output)?;

    let image = open_image(input)?;
    let input_dimensions = Dimensions::new(image.width(), image.height());
    let layout = SquareLayout::for_dimensions(input_dimensions);

    let canvas = add_padding_to_square(&image, fill)?;
    drop(image);

    save_square_image(canvas, output, format)?;

    let report = SquareReport {
        output: output.to_path_buf(),
        format,
        input_dimensions,
        layout,
    };
    info!("{}", report.confirmation());
    Ok(report)
}

/// Same as [`make_square`], driven by a [`SquareParams`] preset
pub fn make_square_with_params(
    input: &Path,
    output: &Path,
    params: &SquareParams,
) -> Result<SquareReport> {
    make_square(input, output, params.fill)
}
