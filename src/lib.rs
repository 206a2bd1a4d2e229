#![doc = r#"
squarepad — pad a raster image to a centered square canvas.

The source image is placed in the middle of a `max(width, height)` square canvas;
the exposed area is painted with a configurable RGBA fill (transparent black by
default). Source pixels are pasted as-is, alpha included, with no blending.

Quick start: pad a file to a file
---------------------------------
```rust,no_run
use std::path::Path;
use squarepad::{make_square, FillColor};

fn main() -> squarepad::Result<()> {
    let report = make_square(
        Path::new("assets/icon.png"),
        Path::new("assets/icon-square.png"),
        FillColor::default(),
    )?;
    println!("{}", report.confirmation());
    Ok(())
}
```

Pad in memory
-------------
```rust
use image::{DynamicImage, Rgba, RgbaImage};
use squarepad::{pad_to_square, FillColor};

let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 10, Rgba([255, 0, 0, 255])));
let square = pad_to_square(&src, FillColor::opaque(255, 255, 255))?;

assert_eq!(square.dimensions(), (10, 10));
// floor((10 - 4) / 2) = 3 columns of fill on the left
assert_eq!(square.get_pixel(2, 0), &Rgba([255, 255, 255, 255]));
assert_eq!(square.get_pixel(3, 0), &Rgba([255, 0, 0, 255]));
# Ok::<(), squarepad::Error>(())
```

Output format
-------------
The encoder is picked from the output extension (`.png`, `.jpg`, `.tiff`, ...).
Each encoder gets the color type it accepts (16-bit for Farbfeld, float for
OpenEXR and Radiance HDR, gray for `.pgm`/`.pbm`). Formats that cannot store
alpha (JPEG, HDR, PPM/PGM/PBM) drop it; `.pam` keeps it.

Error handling
--------------
All fallible functions return `squarepad::Result<T>`:

```rust,no_run
use std::path::Path;
use squarepad::{make_square, Error, FillColor};

match make_square(Path::new("missing.png"), Path::new("out.png"), FillColor::default()) {
    Ok(report) => println!("{}", report.confirmation()),
    Err(Error::Open { path, source }) => eprintln!("cannot read {}: {source}", path.display()),
    Err(Error::Write { path, source }) => eprintln!("cannot write {}: {source}", path.display()),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `FillColor`, `Dimensions`, `SquareLayout`.
- [`io`] — decoding the input, encoding and writing the output.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::SquareParams;
pub use error::{Error, Result};
pub use types::{Dimensions, FillColor, SquareLayout};

pub use api::{SquareReport, make_square, make_square_with_params, pad_to_square};
