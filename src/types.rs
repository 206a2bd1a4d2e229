//! Shared types used across squarepad.
//! Includes `FillColor`, the input `Dimensions`, and the computed `SquareLayout`.
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// RGBA value painted on every canvas pixel not covered by the source image.
///
/// Channels are `u8`, so out-of-range values cannot be expressed. The default
/// is fully transparent black `(0, 0, 0, 0)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FillColor(pub [u8; 4]);

impl FillColor {
    pub const TRANSPARENT: FillColor = FillColor([0, 0, 0, 0]);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba(self.0)
    }
}

impl From<[u8; 4]> for FillColor {
    fn from(channels: [u8; 4]) -> Self {
        Self(channels)
    }
}

impl From<(u8, u8, u8, u8)> for FillColor {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self([r, g, b, a])
    }
}

impl From<FillColor> for Rgba<u8> {
    fn from(color: FillColor) -> Self {
        color.to_rgba()
    }
}

impl std::fmt::Display for FillColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// Parses `#RRGGBB` (opaque) or `#RRGGBBAA`. The leading `#` is optional.
impl FromStr for FillColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidArgument {
            arg: "fill_color",
            value: s.to_string(),
        };

        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut channels = [0u8, 0, 0, 255];
        for (i, channel) in channels.iter_mut().take(hex.len() / 2).enumerate() {
            *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self(channels))
    }
}

impl TryFrom<String> for FillColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FillColor> for String {
    fn from(color: FillColor) -> Self {
        color.to_string()
    }
}

/// Width/height pair of a decoded raster.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square_side(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Placement of a source image on its square canvas.
///
/// Offsets use floor division, so an odd leftover pixel ends up on the
/// bottom/right side and the source is biased toward the top-left.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SquareLayout {
    pub side: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl SquareLayout {
    pub fn for_dimensions(dims: Dimensions) -> Self {
        let side = dims.square_side();
        Self {
            side,
            offset_x: (side - dims.width) / 2,
            offset_y: (side - dims.height) / 2,
        }
    }
}
