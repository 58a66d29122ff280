//! Region derivation: square around detected content, or a fixed-margin crop
//! when nothing was detected.
use tracing::debug;

use crate::types::{BoundingBox, CropBox, FallbackMode, SquareMode};

/// Square of side `max(width, height)` centred on `bbox`, fitted into a
/// `width` x `height` image according to `mode`.
///
/// With `SquareMode::Clamp` each edge is clipped independently, so a square
/// that spills over a border comes back off-centre and possibly not square.
/// Half-sides use floor division, which drops one pixel from odd sides.
pub fn square_region(bbox: &BoundingBox, width: u32, height: u32, mode: SquareMode) -> CropBox {
    let side = bbox.width().max(bbox.height()) as i64;
    let half = side / 2;
    let cx = (bbox.left as i64 + bbox.right as i64) / 2;
    let cy = (bbox.top as i64 + bbox.bottom as i64) / 2;
    let (w, h) = (width as i64, height as i64);

    let region = match mode {
        SquareMode::Clamp => CropBox {
            left: (cx - half).max(0) as u32,
            top: (cy - half).max(0) as u32,
            right: (cx + half).min(w) as u32,
            bottom: (cy + half).min(h) as u32,
        },
        SquareMode::Shift => {
            let s = (2 * half).max(1).min(w.min(h));
            let left = (cx - s / 2).clamp(0, w - s);
            let top = (cy - s / 2).clamp(0, h - s);
            CropBox {
                left: left as u32,
                top: top as u32,
                right: (left + s) as u32,
                bottom: (top + s) as u32,
            }
        }
    };

    debug!(
        "Square region for {} (side {}, centre {},{}): {}",
        bbox, side, cx, cy, region
    );
    region
}

/// Margin in pixels trimmed by the fallback crop: `floor(width * margin_ratio)`.
pub fn fallback_margin(width: u32, margin_ratio: f64) -> u32 {
    (width as f64 * margin_ratio).floor() as u32
}

/// Fallback crop region and the margin it was derived from.
///
/// `FallbackMode::Trim` insets every side by the same width-based margin, so
/// non-square inputs give non-square regions.
pub fn fallback_region(
    width: u32,
    height: u32,
    margin_ratio: f64,
    mode: FallbackMode,
) -> (u32, CropBox) {
    let margin = fallback_margin(width, margin_ratio);
    let region = match mode {
        FallbackMode::Trim => CropBox {
            left: margin,
            top: margin,
            right: width.saturating_sub(margin),
            bottom: height.saturating_sub(margin),
        },
        FallbackMode::Square => {
            let side = width.min(height).saturating_sub(2 * margin);
            let left = (width - side) / 2;
            let top = (height - side) / 2;
            CropBox {
                left,
                top,
                right: left + side,
                bottom: top + side,
            }
        }
    };
    (margin, region)
}
