use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn fps_validation() {
    assert!(Fps::new(30, 1).is_ok());
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::whole(30).unwrap(), Fps { num: 30, den: 1 });
}

#[test]
fn fps_second_frame_conversions() {
    let fps = Fps::whole(30).unwrap();
    assert_eq!(fps.as_f64(), 30.0);
    assert_eq!(fps.secs_to_frames_round(2.5), 75);
    assert_eq!(fps.secs_to_frames_floor(0.5), 15);
    assert_eq!(fps.secs_to_frames_floor(-1.0), 0);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.frame_duration_secs() - 1001.0 / 30000.0).abs() < 1e-12);
}

#[test]
fn canvas_pixel_count() {
    let c = Canvas {
        width: 100,
        height: 50,
    };
    assert_eq!(c.pixel_count(), 5000);
}
