use std::path::Path;

use image::{GenericImageView, Rgb, RgbImage};
use iconcrop::{
    BoundingBox, CropBox, CropParams, CropPlan, Error, FallbackMode, SquareMode, crop_smart,
    crop_smart_with_params, plan_crop,
};

fn white_block_on_black(size: u32, from: u32, to: u32) -> RgbImage {
    let mut img = RgbImage::new(size, size);
    for y in from..to {
        for x in from..to {
            img.put_pixel(x, y, Rgb([255, 255, 255]));
        }
    }
    img
}

fn save(img: &RgbImage, path: &Path) {
    img.save(path).unwrap();
}

#[test]
fn white_block_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    let destination = dir.path().join("AppIcon.png");
    save(&white_block_on_black(200, 50, 150), &source);

    let outcome = crop_smart(&source, &destination).unwrap();
    let expected_bbox = BoundingBox {
        left: 50,
        top: 50,
        right: 150,
        bottom: 150,
    };
    let expected_region = CropBox {
        left: 50,
        top: 50,
        right: 150,
        bottom: 150,
    };
    assert_eq!(
        outcome.plan,
        CropPlan::Smart {
            bbox: expected_bbox,
            region: expected_region
        }
    );
    assert_eq!(outcome.source_size, (200, 200));
    assert_eq!(
        outcome.to_string(),
        format!(
            "Smart Cropped from (50, 50, 150, 150) to (50,50,150,150) and saved to {}",
            destination.display()
        )
    );

    let written = image::open(&destination).unwrap().to_rgb8();
    assert_eq!(written.dimensions(), (1024, 1024));
    // the crop is entirely the white block
    assert!(written.get_pixel(512, 512).0.iter().all(|&c| c >= 254));
}

#[test]
fn uniform_image_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("flat.png");
    let destination = dir.path().join("flat_out.png");
    save(&RgbImage::from_pixel(100, 100, Rgb([90, 90, 90])), &source);

    let outcome = crop_smart(&source, &destination).unwrap();
    assert_eq!(
        outcome.plan,
        CropPlan::Fallback {
            margin: 10,
            region: CropBox {
                left: 10,
                top: 10,
                right: 90,
                bottom: 90
            }
        }
    );
    assert_eq!(
        outcome.to_string(),
        "No distinct content found. Falling back to center crop."
    );
    assert_eq!(image::open(&destination).unwrap().dimensions(), (1024, 1024));
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("out.png");

    let err = crop_smart(&dir.path().join("missing.png"), &destination).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(!destination.exists());
}

#[test]
fn missing_destination_directory_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    save(&white_block_on_black(64, 16, 48), &source);

    let err = crop_smart(&source, &dir.path().join("nope/out.png")).unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
}

#[test]
fn same_input_gives_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    let mut img = white_block_on_black(160, 30, 110);
    for (x, y, p) in img.enumerate_pixels_mut() {
        if p.0[0] == 255 {
            *p = Rgb([255, (x * 3) as u8, (y * 2) as u8]);
        }
    }
    save(&img, &source);

    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    crop_smart(&source, &first).unwrap();
    crop_smart(&source, &second).unwrap();
    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn output_is_square_for_any_aspect() {
    let dir = tempfile::tempdir().unwrap();
    for (w, h) in [(300, 120), (90, 250), (33, 33)] {
        let source = dir.path().join(format!("in_{w}x{h}.png"));
        let destination = dir.path().join(format!("out_{w}x{h}.png"));
        let mut img = RgbImage::from_pixel(w, h, Rgb([5, 5, 5]));
        img.put_pixel(w / 2, h / 2, Rgb([250, 250, 250]));
        img.put_pixel(w / 2 + 3, h / 2 + 4, Rgb([250, 250, 250]));
        save(&img, &source);

        crop_smart(&source, &destination).unwrap();
        assert_eq!(image::open(&destination).unwrap().dimensions(), (1024, 1024));
    }
}

#[test]
fn wide_fallback_is_trimmed_by_width_margin() {
    let img = RgbImage::from_pixel(300, 100, Rgb([0, 0, 0]));
    let plan = plan_crop(&img, &CropParams::default()).unwrap();
    assert_eq!(
        plan,
        CropPlan::Fallback {
            margin: 30,
            region: CropBox {
                left: 30,
                top: 30,
                right: 270,
                bottom: 70
            }
        }
    );

    let params = CropParams {
        fallback_mode: FallbackMode::Square,
        ..CropParams::default()
    };
    assert!(plan_crop(&img, &params).unwrap().region().is_square());
}

#[test]
fn bbox_is_minimal_rectangle_of_bright_pixels() {
    // deterministic scatter of content pixels over a uniform background
    let (w, h, v) = (120u32, 90u32, 40u8);
    let mut seed: u32 = 0x2545_F491;
    for _ in 0..25 {
        let mut img = RgbImage::from_pixel(w, h, Rgb([v, v, v]));
        let mut expected: Option<(u32, u32, u32, u32)> = None;
        for _ in 0..6 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let x = 1 + (seed >> 8) % (w - 2);
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let y = 1 + (seed >> 8) % (h - 2);
            img.put_pixel(x, y, Rgb([v + 16, v + 16, v + 16]));
            expected = Some(match expected {
                None => (x, y, x + 1, y + 1),
                Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x + 1), b.max(y + 1)),
            });
        }

        let (left, top, right, bottom) = expected.unwrap();
        match plan_crop(&img, &CropParams::default()).unwrap() {
            CropPlan::Smart { bbox, .. } => assert_eq!(
                bbox,
                BoundingBox {
                    left,
                    top,
                    right,
                    bottom
                }
            ),
            other => panic!("expected content, got {other:?}"),
        }
    }
}

#[test]
fn shift_mode_keeps_corner_content_square() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("edge.png");
    let destination = dir.path().join("edge.jpg");
    let mut img = RgbImage::new(100, 100);
    for y in 1..99 {
        for x in 1..10 {
            img.put_pixel(x, y, Rgb([255, 255, 255]));
        }
    }
    save(&img, &source);

    let params = CropParams {
        square_mode: SquareMode::Shift,
        size: 128,
        ..CropParams::default()
    };
    let outcome = crop_smart_with_params(&source, &destination, &params).unwrap();
    assert!(outcome.plan.region().is_square());
    assert_eq!(outcome.output_size, (128, 128));
    assert_eq!(image::open(&destination).unwrap().dimensions(), (128, 128));
}
