use image::{DynamicImage, Limits, RgbaImage};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{Dimensions, FillColor, SquareLayout};

const RGBA_CHANNELS: usize = 4;

/// Reject canvases whose RGBA buffer would exceed the image crate's default
/// allocation limit. A thin strip that decodes fine can still square into an
/// unallocatable canvas.
pub fn check_canvas_size(side: u32) -> Result<u64> {
    let limit = Limits::default().max_alloc.unwrap_or(u64::MAX);
    let bytes = u64::from(side)
        .checked_mul(u64::from(side))
        .and_then(|px| px.checked_mul(RGBA_CHANNELS as u64));
    match bytes {
        Some(bytes) if bytes <= limit => Ok(bytes),
        _ => Err(Error::CanvasTooLarge {
            side,
            bytes: bytes.unwrap_or(u64::MAX),
            limit,
        }),
    }
}

/// Build the square canvas for `image` and paste the source at its centered offset.
///
/// The source is converted to 8-bit RGBA first (alpha-less sources become
/// opaque). Source pixels replace canvas pixels, alpha included; nothing is
/// blended with the fill.
pub fn add_padding_to_square(image: &DynamicImage, fill: FillColor) -> Result<RgbaImage> {
    let dims = Dimensions::new(image.width(), image.height());
    let layout = SquareLayout::for_dimensions(dims);
    check_canvas_size(layout.side)?;

    info!(
        "Adding padding: width={}, height={}, offset_x={}, offset_y={}",
        dims.width, dims.height, layout.offset_x, layout.offset_y
    );
    info!("Final dimensions: {}x{}", layout.side, layout.side);
    debug!("Source color type {:?}, fill {}", image.color(), fill);

    let source = image.to_rgba8();
    let mut canvas = RgbaImage::from_pixel(layout.side, layout.side, fill.to_rgba());
    paste_replace(&mut canvas, &source, layout);
    Ok(canvas)
}

/// Overwrite the region of `canvas` at the layout offset with `source`.
pub(crate) fn paste_replace(canvas: &mut RgbaImage, source: &RgbaImage, layout: SquareLayout) {
    let side = canvas.width() as usize;
    let cols = source.width() as usize;
    let rows = source.height() as usize;
    let pad_cols = layout.offset_x as usize;
    let pad_rows = layout.offset_y as usize;

    let src: &[u8] = source.as_raw();
    let dst: &mut [u8] = canvas;
    let row_len = cols * RGBA_CHANNELS;
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * row_len;
        let dst_offset = ((row + pad_rows) * side + pad_cols) * RGBA_CHANNELS;
        dst[dst_offset..dst_offset + row_len]
            .copy_from_slice(&src[src_offset..src_offset + row_len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba};

    fn numbered_rgba(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([x as u8, y as u8, (x + y) as u8, 200])
        })
    }

    #[test]
    fn test_tall_image_is_centered_horizontally() {
        let src = numbered_rgba(4, 10);
        let out = add_padding_to_square(
            &DynamicImage::ImageRgba8(src.clone()),
            FillColor::default(),
        )
        .unwrap();

        assert_eq!(out.dimensions(), (10, 10));
        for y in 0..10 {
            for x in 0..10 {
                let px = *out.get_pixel(x, y);
                if (3..7).contains(&x) {
                    assert_eq!(px, *src.get_pixel(x - 3, y));
                } else {
                    assert_eq!(px, Rgba([0, 0, 0, 0]), "pixel ({x},{y}) should be fill");
                }
            }
        }
    }

    #[test]
    fn test_wide_image_rows_are_shifted_down() {
        let src = numbered_rgba(6, 3);
        let out = add_padding_to_square(
            &DynamicImage::ImageRgba8(src.clone()),
            FillColor::default(),
        )
        .unwrap();

        assert_eq!(out.dimensions(), (6, 6));
        for x in 0..6 {
            assert_eq!(*out.get_pixel(x, 0), Rgba([0, 0, 0, 0]));
            assert_eq!(*out.get_pixel(x, 4), Rgba([0, 0, 0, 0]));
            assert_eq!(*out.get_pixel(x, 5), Rgba([0, 0, 0, 0]));
            for y in 0..3 {
                assert_eq!(out.get_pixel(x, y + 1), src.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_square_image_is_unchanged() {
        let src = numbered_rgba(5, 5);
        let out = add_padding_to_square(
            &DynamicImage::ImageRgba8(src.clone()),
            FillColor::opaque(9, 9, 9),
        )
        .unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_transparent_source_pixels_replace_fill() {
        let mut src = RgbaImage::from_pixel(2, 4, Rgba([255, 0, 0, 255]));
        src.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        src.put_pixel(1, 3, Rgba([10, 20, 30, 128]));

        let fill = FillColor::opaque(0, 255, 0);
        let out = add_padding_to_square(&DynamicImage::ImageRgba8(src), fill).unwrap();

        assert_eq!(*out.get_pixel(1, 0), Rgba([10, 20, 30, 0]));
        assert_eq!(*out.get_pixel(2, 3), Rgba([10, 20, 30, 128]));
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 255, 0, 255]));
        assert_eq!(*out.get_pixel(3, 3), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_gray_source_becomes_opaque_rgba() {
        let src = GrayImage::from_pixel(1, 3, Luma([77]));
        let out =
            add_padding_to_square(&DynamicImage::ImageLuma8(src), FillColor::default()).unwrap();

        assert_eq!(out.dimensions(), (3, 3));
        assert_eq!(*out.get_pixel(1, 1), Rgba([77, 77, 77, 255]));
        assert_eq!(*out.get_pixel(0, 1), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(2, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_custom_fill_covers_padding() {
        let src = numbered_rgba(3, 8);
        let fill = FillColor::rgba(1, 2, 3, 4);
        let out = add_padding_to_square(&DynamicImage::ImageRgba8(src), fill).unwrap();

        // 8 - 3 = 5 spare columns: 2 left, 3 right
        for y in 0..8 {
            for x in [0, 1, 5, 6, 7] {
                assert_eq!(*out.get_pixel(x, y), Rgba([1, 2, 3, 4]));
            }
        }
    }

    #[test]
    fn test_thin_strip_canvas_over_limit_is_error() {
        let src = DynamicImage::new_rgba8(1, 200_000);
        let err = add_padding_to_square(&src, FillColor::default()).unwrap_err();
        match err {
            Error::CanvasTooLarge { side, bytes, .. } => {
                assert_eq!(side, 200_000);
                assert_eq!(bytes, 200_000u64 * 200_000 * 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_canvas_size_check() {
        assert_eq!(check_canvas_size(0).unwrap(), 0);
        assert_eq!(check_canvas_size(1024).unwrap(), 1024 * 1024 * 4);
        assert!(matches!(
            check_canvas_size(u32::MAX),
            Err(Error::CanvasTooLarge { side: u32::MAX, .. })
        ));
    }
}
