use super::*;

fn frame(width: u32, height: u32, fill: u8) -> FrameRgb {
    FrameRgb {
        width,
        height,
        data: vec![fill; width as usize * height as usize * 3],
    }
}

#[test]
fn captures_config_frames_and_end_marker() {
    let mut sink = InMemorySink::new();
    assert!(sink.config().is_none());
    assert!(!sink.is_ended());

    sink.begin(SinkConfig {
        width: 4,
        height: 2,
        fps: Fps { num: 30, den: 1 },
    })
    .unwrap();

    sink.push_frame(FrameIndex(0), &frame(4, 2, 10)).unwrap();
    sink.push_frame(FrameIndex(1), &frame(4, 2, 20)).unwrap();
    sink.end().unwrap();

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (4, 2));
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
    assert!(sink.is_ended());

    let frames = sink.frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].0, FrameIndex(0));
    assert!(frames[0].1.data.iter().all(|&b| b == 10));
    assert_eq!(frames[1].0, FrameIndex(1));
    assert!(frames[1].1.data.iter().all(|&b| b == 20));
}

#[test]
fn begin_resets_previous_stream_state() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 2,
        height: 2,
        fps: Fps { num: 30, den: 1 },
    };

    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(0), &frame(2, 2, 1)).unwrap();
    sink.end().unwrap();

    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_ended());
}
