use ndarray::Array2;

use crate::types::BoundingBox;

pub const CONTENT: u8 = 255;
pub const BACKGROUND: u8 = 0;

/// Binary content mask: `CONTENT` where luminance is strictly above `threshold`.
pub fn threshold_mask(luma: &Array2<u8>, threshold: u16) -> Array2<u8> {
    luma.mapv(|v| {
        if v as u16 > threshold {
            CONTENT
        } else {
            BACKGROUND
        }
    })
}

/// Minimal rectangle enclosing every non-zero mask pixel, or `None` when the
/// mask holds no content.
pub fn bounding_box(mask: &Array2<u8>) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;

    for ((row, col), &v) in mask.indexed_iter() {
        if v == BACKGROUND {
            continue;
        }
        let (x, y) = (col as u32, row as u32);
        bbox = Some(match bbox {
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }

    bbox
}
