//! Background intensity estimation.
//!
//! An estimator looks at a luminance plane and returns the intensity it
//! believes the plain background has. The content threshold is this value
//! plus a tolerance, so estimators should err towards the bright end of the
//! background rather than the dark end.
use ndarray::{Array2, s};
use tracing::debug;

use crate::types::EstimatorKind;

pub trait BackgroundEstimator {
    fn name(&self) -> &'static str;

    /// Background luminance of `luma`. Returns 0 for an empty plane.
    fn estimate(&self, luma: &Array2<u8>) -> u8;
}

/// Brightest of the four corner pixels.
#[derive(Debug, Default, Clone, Copy)]
pub struct CornerEstimator;

impl BackgroundEstimator for CornerEstimator {
    fn name(&self) -> &'static str {
        "corners"
    }

    fn estimate(&self, luma: &Array2<u8>) -> u8 {
        let (rows, cols) = luma.dim();
        if rows == 0 || cols == 0 {
            return 0;
        }
        let corners = [
            luma[[0, 0]],
            luma[[0, cols - 1]],
            luma[[rows - 1, 0]],
            luma[[rows - 1, cols - 1]],
        ];
        debug!("Corner samples: {:?}", corners);
        corners.into_iter().max().unwrap_or(0)
    }
}

/// Most frequent luminance; ties resolve to the darker value.
#[derive(Debug, Default, Clone, Copy)]
pub struct HistogramModeEstimator;

impl BackgroundEstimator for HistogramModeEstimator {
    fn name(&self) -> &'static str {
        "histogram"
    }

    fn estimate(&self, luma: &Array2<u8>) -> u8 {
        let mut histogram = [0u64; 256];
        for &v in luma.iter() {
            histogram[v as usize] += 1;
        }

        let mut mode = 0usize;
        for (value, &count) in histogram.iter().enumerate() {
            if count > histogram[mode] {
                mode = value;
            }
        }
        mode as u8
    }
}

/// Median luminance over every border pixel (lower median for even counts).
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeEstimator;

impl BackgroundEstimator for EdgeEstimator {
    fn name(&self) -> &'static str {
        "edges"
    }

    fn estimate(&self, luma: &Array2<u8>) -> u8 {
        let (rows, cols) = luma.dim();
        if rows == 0 || cols == 0 {
            return 0;
        }

        let mut border: Vec<u8> = Vec::with_capacity(2 * (rows + cols));
        border.extend(luma.row(0).iter());
        if rows > 1 {
            border.extend(luma.row(rows - 1).iter());
        }
        if rows > 2 {
            border.extend(luma.slice(s![1..rows - 1, 0]).iter());
            if cols > 1 {
                border.extend(luma.slice(s![1..rows - 1, cols - 1]).iter());
            }
        }

        border.sort_unstable();
        border[(border.len() - 1) / 2]
    }
}

pub fn estimator_for(kind: EstimatorKind) -> Box<dyn BackgroundEstimator> {
    match kind {
        EstimatorKind::Corners => Box::new(CornerEstimator),
        EstimatorKind::Histogram => Box::new(HistogramModeEstimator),
        EstimatorKind::Edges => Box::new(EdgeEstimator),
    }
}

/// Content threshold: background plus tolerance. May exceed 255, in which
/// case no pixel qualifies as content.
pub fn content_threshold(background: u8, tolerance: u8) -> u16 {
    background as u16 + tolerance as u16
}
