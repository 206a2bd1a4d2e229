//! squarepad entrypoint.
//!
//! Pads a single fixed icon to a square PNG with a transparent fill and prints
//! a confirmation line. There is no argument parsing; for other files use the
//! library API (`squarepad::make_square`).

use std::path::Path;

use squarepad::FillColor;
use tracing_subscriber::EnvFilter;

const INPUT_PATH: &str = "assets/icon.png";
const OUTPUT_PATH: &str = "assets/icon-square.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("squarepad=info"))
        .with_writer(std::io::stderr)
        .init();

    let report = squarepad::make_square(
        Path::new(INPUT_PATH),
        Path::new(OUTPUT_PATH),
        FillColor::default(),
    )?;
    println!("{}", report.confirmation());
    Ok(())
}
