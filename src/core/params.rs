use serde::{Deserialize, Serialize};

use crate::types::FillColor;

/// Padding parameters suitable for presets embedded in other applications
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareParams {
    /// Color of the exposed canvas area, serialized as `#RRGGBBAA`
    pub fill: FillColor,
}

impl SquareParams {
    pub fn with_fill(fill: impl Into<FillColor>) -> Self {
        Self { fill: fill.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fill_defaults_to_transparent() {
        let params: SquareParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, SquareParams::default());
        assert_eq!(params.fill, FillColor::TRANSPARENT);
    }

    #[test]
    fn test_fill_is_read_as_hex() {
        let params: SquareParams = serde_json::from_str(r##"{"fill":"#FFFFFF"}"##).unwrap();
        assert_eq!(params.fill, FillColor::opaque(255, 255, 255));

        let json = serde_json::to_string(&SquareParams::with_fill(FillColor::rgba(10, 20, 30, 40))).unwrap();
        assert_eq!(json, r##"{"fill":"#0A141E28"}"##);
    }

    #[test]
    fn test_bad_fill_is_rejected() {
        let result: Result<SquareParams, _> = serde_json::from_str(r#"{"fill":"red"}"#);
        assert!(result.is_err());
    }
}
