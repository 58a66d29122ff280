#![doc = r#"
iconcrop — content-aware square cropping for app icons.

Given an icon rendered on a plain background, iconcrop finds the content,
squares it up around its centre, and resamples it to a fixed size
(1024 x 1024 by default). It powers the `iconcrop` CLI and can be embedded in
your own Rust applications.

How content is found
--------------------
1. The image is reduced to ITU-R 601-2 luminance.
2. A background intensity is estimated; by default the brightest of the four
   corner pixels.
3. Every pixel brighter than `background + tolerance` (tolerance 15) is
   content. The bounding box of the content is expanded to a square of side
   `max(width, height)` around its centre and clipped to the image.
4. When nothing is brighter than the threshold, a fallback crop trims 10% of
   the width from every side.

The heuristic assumes a dark, uniform background with brighter content that
does not touch the corners. Near image borders the clipped square can come out
off-centre or non-square, and the fallback is not square for non-square
inputs; both are kept as defaults and can be changed through `CropParams`
(`SquareMode::Shift`, `FallbackMode::Square`).

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> iconcrop::Result<()> {
    let outcome = iconcrop::crop_smart(
        Path::new("icon_source.png"),
        Path::new("AppIcon.png"),
    )?;
    println!("{outcome}");
    Ok(())
}
```

Custom parameters
-----------------
```rust,no_run
use std::path::Path;
use iconcrop::{crop_smart_with_params, CropParams, EstimatorKind, SquareMode};

fn main() -> iconcrop::Result<()> {
    let params = CropParams {
        size: 512,
        estimator: EstimatorKind::Histogram,
        square_mode: SquareMode::Shift,
        ..CropParams::default()
    };
    crop_smart_with_params(Path::new("in.png"), Path::new("out.jpg"), &params)?;
    Ok(())
}
```

In-memory
---------
```rust
use image::{Rgb, RgbImage};
use iconcrop::{crop_image, CropParams};

let mut img = RgbImage::new(200, 200);
for y in 50..150 {
    for x in 50..150 {
        img.put_pixel(x, y, Rgb([255, 255, 255]));
    }
}
let cropped = crop_image(&img, &CropParams::default()).unwrap();
assert_eq!(cropped.image.dimensions(), (1024, 1024));
```

Error handling
--------------
All public functions return `iconcrop::Result<T>`. `Error::Decode` means the
source could not be read or decoded, `Error::Write` means the destination
could not be encoded or written. Finding no content is not an error.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — analysis (luminance, background estimators, masks) and processing
  (square regions, resampling, the crop pipeline).
- [`io`] — decoding and encoding.
- [`types`] — boxes and strategy enums.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::analysis::background::{
    BackgroundEstimator, CornerEstimator, EdgeEstimator, HistogramModeEstimator, estimator_for,
};
pub use crate::core::params::CropParams;
pub use crate::core::processing::pipeline::{CropPlan, apply_plan, plan_crop};
pub use error::{Error, Result};
pub use types::{BoundingBox, CropBox, EstimatorKind, FallbackMode, SquareMode};

pub use api::{CropOutcome, CroppedImage, crop_image, crop_smart, crop_smart_with_params};
