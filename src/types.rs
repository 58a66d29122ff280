//! Shared types and enums used across iconcrop.
//! Includes the rectangles produced by analysis (`BoundingBox`, `CropBox`)
//! and the strategy selectors (`EstimatorKind`, `SquareMode`, `FallbackMode`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Minimal rectangle enclosing every content pixel. Right and bottom are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Region of the source image that is cut out and resampled.
/// Always within image bounds; right and bottom are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }
}

impl std::fmt::Display for CropBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},{},{})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EstimatorKind {
    /// Brightest of the four corner pixels
    #[default]
    Corners,
    /// Most frequent luminance in the whole image
    Histogram,
    /// Median luminance along the image border
    Edges,
}

impl std::fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimatorKind::Corners => write!(f, "corners"),
            EstimatorKind::Histogram => write!(f, "histogram"),
            EstimatorKind::Edges => write!(f, "edges"),
        }
    }
}

/// How the square around the content is fitted into the image.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SquareMode {
    /// Clip each edge to the image; may lose centering and squareness near borders
    #[default]
    Clamp,
    /// Slide the square back inside the image so it stays square
    Shift,
}

impl std::fmt::Display for SquareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SquareMode::Clamp => write!(f, "clamp"),
            SquareMode::Shift => write!(f, "shift"),
        }
    }
}

/// Crop used when no content pixel is found.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Trim the margin from every side (not square for non-square inputs)
    #[default]
    Trim,
    /// Centered square inset by the margin
    Square,
}

impl std::fmt::Display for FallbackMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackMode::Trim => write!(f, "trim"),
            FallbackMode::Square => write!(f, "square"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_render_like_the_diagnostic_line() {
        let bbox = BoundingBox {
            left: 50,
            top: 50,
            right: 150,
            bottom: 150,
        };
        let region = CropBox {
            left: 50,
            top: 50,
            right: 150,
            bottom: 150,
        };
        assert_eq!(bbox.to_string(), "(50, 50, 150, 150)");
        assert_eq!(region.to_string(), "(50,50,150,150)");
    }

    #[test]
    fn crop_box_dimensions() {
        let region = CropBox {
            left: 10,
            top: 20,
            right: 90,
            bottom: 20,
        };
        assert_eq!(region.width(), 80);
        assert_eq!(region.height(), 0);
        assert!(region.is_empty());
        assert!(!region.is_square());
    }

    #[test]
    fn modes_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&EstimatorKind::Histogram).unwrap(),
            "\"histogram\""
        );
        assert_eq!(
            serde_json::from_str::<SquareMode>("\"shift\"").unwrap(),
            SquareMode::Shift
        );
        assert_eq!(FallbackMode::default(), FallbackMode::Trim);
    }
}
