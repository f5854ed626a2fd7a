use super::*;
use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps { num: 30, den: 1 },
    }
}

#[test]
fn begin_rejects_zero_fps() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("/tmp/glint-test/out.mp4"));
    let mut bad = cfg(4, 4);
    bad.fps = Fps { num: 0, den: 1 };
    assert!(sink.begin(bad).is_err());
    let mut bad = cfg(4, 4);
    bad.fps = Fps { num: 30, den: 0 };
    assert!(sink.begin(bad).is_err());
}

#[test]
fn begin_rejects_empty_and_odd_dimensions() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("/tmp/glint-test/out.mp4"));
    assert!(sink.begin(cfg(0, 4)).is_err());
    assert!(sink.begin(cfg(4, 0)).is_err());

    let err = sink.begin(cfg(5, 4)).unwrap_err();
    assert!(err.to_string().contains("even"), "{err}");
    assert!(sink.begin(cfg(4, 5)).is_err());
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("/tmp/glint-test/out.mp4"));
    let frame = FrameRgb {
        width: 4,
        height: 4,
        data: vec![0; 48],
    };
    let err = sink.push_frame(FrameIndex(0), &frame).unwrap_err();
    assert!(err.to_string().contains("not started"), "{err}");
}

#[test]
fn end_before_begin_is_an_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("/tmp/glint-test/out.mp4"));
    assert!(sink.end().is_err());
}

#[test]
fn refusing_to_overwrite_an_existing_file() {
    let dir = std::env::temp_dir().join("glint-ffmpeg-test");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("existing.mp4");
    std::fs::write(&out, b"not really an mp4").unwrap();

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: out.clone(),
        overwrite: false,
    });
    let err = sink.begin(cfg(4, 4)).unwrap_err();
    assert!(err.to_string().contains("already exists"), "{err}");

    std::fs::remove_file(&out).ok();
}

#[test]
fn ensure_parent_dir_creates_missing_directories() {
    let dir = std::env::temp_dir()
        .join("glint-ffmpeg-test")
        .join("nested")
        .join("deeper");
    std::fs::remove_dir_all(&dir).ok();

    ensure_parent_dir(&dir.join("out.mp4")).unwrap();
    assert!(dir.is_dir());

    std::fs::remove_dir_all(std::env::temp_dir().join("glint-ffmpeg-test").join("nested")).ok();
}

#[test]
fn ensure_parent_dir_accepts_bare_filenames() {
    ensure_parent_dir(Path::new("out.mp4")).unwrap();
}
