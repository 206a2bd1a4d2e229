//! I/O layer: decoding the input raster and encoding/writing the padded output.
pub mod reader;
pub use reader::open_image;

pub mod writer;
pub use writer::{encode_image, output_format_for, write_output};
