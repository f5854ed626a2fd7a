use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas {
        width: w,
        height: h,
    }
}

#[test]
fn unfeathered_strip_is_binary() {
    // h = 10, factor 0.2: visible = 2, centered rows 4..=6.
    let mask = feathered_strip(canvas(4, 10), 0.2, 0).unwrap();
    assert_eq!(mask.len(), 40);
    for y in 0..10usize {
        let expect = if (4..=6).contains(&y) { 1.0 } else { 0.0 };
        for x in 0..4usize {
            assert_eq!(mask[y * 4 + x], expect, "row {y}");
        }
    }
}

#[test]
fn full_height_factor_covers_canvas() {
    let mask = feathered_strip(canvas(3, 8), 1.0, 0).unwrap();
    assert!(mask.iter().all(|&m| m == 1.0));
}

#[test]
fn feathered_strip_stays_in_unit_range() {
    let mask = feathered_strip(canvas(6, 200), 0.2, 5).unwrap();
    assert!(mask.iter().all(|&m| (0.0..=1.0).contains(&m)));
}

#[test]
fn feathering_softens_edges_only() {
    let w = 6usize;
    let mask = feathered_strip(canvas(6, 200), 0.2, 5).unwrap();
    // Strip rows are 80..=120; the kernel radius is 5, so the middle is
    // untouched and rows far outside stay dark.
    assert!((mask[100 * w] - 1.0).abs() < 1e-4);
    assert!(mask[0] < 1e-4);
    assert!(mask[199 * w] < 1e-4);
    // Edge rows land mid-ramp.
    let top_edge = mask[80 * w];
    assert!(top_edge > 0.1 && top_edge < 0.9);
}

#[test]
fn feathered_mask_is_vertically_symmetric() {
    let w = 6usize;
    let mask = feathered_strip(canvas(6, 200), 0.2, 8).unwrap();
    // Strip rows 80..=120 are symmetric about row 100.
    for d in 0..60usize {
        let above = mask[(100 - d) * w];
        let below = mask[(100 + d) * w];
        assert!((above - below).abs() < 1e-5, "d = {d}");
    }
}

#[test]
fn mask_decays_monotonically_below_the_strip() {
    let w = 6usize;
    let mask = feathered_strip(canvas(6, 200), 0.2, 10).unwrap();
    for y in 120..199usize {
        assert!(mask[(y + 1) * w] <= mask[y * w] + 1e-6, "row {y}");
    }
}

#[test]
fn kernel_is_normalized_and_symmetric() {
    let kernel = gaussian_kernel(50).unwrap();
    assert_eq!(kernel.len(), 101);
    let sum: f32 = kernel.iter().sum();
    assert!((sum - 1.0).abs() < 1e-4);
    for i in 0..50usize {
        assert!((kernel[i] - kernel[100 - i]).abs() < 1e-7);
    }
    assert!(kernel[50] > kernel[49]);
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert!(feathered_strip(canvas(0, 10), 0.2, 0).is_err());
    assert!(feathered_strip(canvas(10, 0), 0.2, 0).is_err());
    assert!(feathered_strip(canvas(10, 10), 0.0, 0).is_err());
    assert!(feathered_strip(canvas(10, 10), 1.5, 0).is_err());
    assert!(feathered_strip(canvas(10, 10), f64::NAN, 0).is_err());
}
