use super::*;

fn raster(width: u32, height: u32) -> LayerRgbaF32 {
    LayerRgbaF32::solid(
        Canvas { width, height },
        [1.0, 1.0, 1.0, 1.0],
    )
}

#[test]
fn content_height_excludes_both_paddings() {
    let block = TextBlock::new(raster(200, 480), 20, 40.0).unwrap();
    assert_eq!(block.content_height(), 440);
}

#[test]
fn start_offset_centers_the_first_line() {
    // 720-tall canvas, padding 20, line height 100:
    // 360 - (20 + 50) = 290.
    let block = TextBlock::new(raster(200, 480), 20, 100.0).unwrap();
    let canvas = Canvas {
        width: 1280,
        height: 720,
    };
    assert!((block.start_offset(canvas) - 290.0).abs() < 1e-9);
}

#[test]
fn end_offset_centers_the_last_line() {
    // 360 - (20 + 440 - 50) = -50.
    let block = TextBlock::new(raster(200, 480), 20, 100.0).unwrap();
    let canvas = Canvas {
        width: 1280,
        height: 720,
    };
    assert!((block.end_offset(canvas) - -50.0).abs() < 1e-9);
}

#[test]
fn single_line_block_scrolls_nowhere() {
    // content height == line height: start and end offsets coincide.
    let block = TextBlock::new(raster(100, 140), 20, 100.0).unwrap();
    let canvas = Canvas {
        width: 640,
        height: 360,
    };
    assert!((block.start_offset(canvas) - block.end_offset(canvas)).abs() < 1e-9);
}

#[test]
fn oversized_padding_is_rejected() {
    assert!(TextBlock::new(raster(100, 100), 50, 10.0).is_err());
    assert!(TextBlock::new(raster(100, 100), 60, 10.0).is_err());
}

#[test]
fn line_height_must_fit_the_content_area() {
    assert!(TextBlock::new(raster(100, 100), 10, 0.0).is_err());
    assert!(TextBlock::new(raster(100, 100), 10, -5.0).is_err());
    assert!(TextBlock::new(raster(100, 100), 10, 80.1).is_err());
    assert!(TextBlock::new(raster(100, 100), 10, f64::NAN).is_err());
    assert!(TextBlock::new(raster(100, 100), 10, 80.0).is_ok());
}
