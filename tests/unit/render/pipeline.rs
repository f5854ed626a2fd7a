use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::error::GlintError;

/// Source whose frames carry their own index in every byte.
struct IndexedSource {
    frames: u64,
}

impl FrameSource for IndexedSource {
    fn canvas(&self) -> Canvas {
        Canvas {
            width: 2,
            height: 2,
        }
    }

    fn fps(&self) -> Fps {
        Fps { num: 30, den: 1 }
    }

    fn frame_count(&self) -> u64 {
        self.frames
    }

    fn render_frame(&self, idx: FrameIndex) -> GlintResult<FrameRgb> {
        Ok(FrameRgb {
            width: 2,
            height: 2,
            data: vec![idx.0 as u8; 12],
        })
    }
}

/// Sink that rejects the write at a chosen frame index.
#[derive(Default)]
struct FailingSink {
    fail_at: u64,
    pushes: u64,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> GlintResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameRgb) -> GlintResult<()> {
        if idx.0 == self.fail_at {
            return Err(GlintError::sink(format!("refused frame {}", idx.0)));
        }
        self.pushes += 1;
        Ok(())
    }

    fn end(&mut self) -> GlintResult<()> {
        panic!("end must not be called after a failed push");
    }
}

struct CountingObserver {
    seen: Vec<u64>,
}

impl RenderObserver for CountingObserver {
    fn frame_rendered(&mut self, idx: FrameIndex, _total: u64) {
        self.seen.push(idx.0);
    }
}

#[test]
fn sequential_render_pushes_every_frame_in_order() {
    let source = IndexedSource { frames: 10 };
    let mut sink = InMemorySink::new();
    let mut observer = CountingObserver { seen: Vec::new() };

    let stats = render_to_sink(
        &source,
        &mut sink,
        &RenderThreading::default(),
        &mut observer,
    )
    .unwrap();

    assert_eq!(stats.frames_total, 10);
    assert_eq!(stats.frames_rendered, 10);
    assert!(sink.is_ended());
    assert_eq!(sink.frames().len(), 10);
    for (i, (idx, frame)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert!(frame.data.iter().all(|&b| b == i as u8));
    }
    assert_eq!(observer.seen, (0..10).collect::<Vec<_>>());

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (2, 2));
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
}

#[test]
fn parallel_render_matches_sequential_output() {
    let source = IndexedSource { frames: 37 };

    let mut seq_sink = InMemorySink::new();
    render_to_sink(
        &source,
        &mut seq_sink,
        &RenderThreading::default(),
        &mut NoopObserver,
    )
    .unwrap();

    let mut par_sink = InMemorySink::new();
    render_to_sink(
        &source,
        &mut par_sink,
        &RenderThreading {
            parallel: true,
            chunk_size: 8,
            threads: Some(3),
        },
        &mut NoopObserver,
    )
    .unwrap();

    assert_eq!(seq_sink.frames(), par_sink.frames());
}

#[test]
fn empty_source_is_rejected() {
    let source = IndexedSource { frames: 0 };
    let mut sink = InMemorySink::new();
    assert!(
        render_to_sink(
            &source,
            &mut sink,
            &RenderThreading::default(),
            &mut NoopObserver
        )
        .is_err()
    );
}

#[test]
fn sink_failure_stops_emission_and_propagates() {
    let source = IndexedSource { frames: 10 };
    let mut sink = FailingSink {
        fail_at: 3,
        pushes: 0,
    };

    let err = render_to_sink(
        &source,
        &mut sink,
        &RenderThreading::default(),
        &mut NoopObserver,
    )
    .unwrap_err();

    assert!(err.to_string().contains("refused frame 3"));
    assert_eq!(sink.pushes, 3);
}

#[test]
fn zero_worker_threads_is_rejected() {
    let source = IndexedSource { frames: 4 };
    let mut sink = InMemorySink::new();
    assert!(
        render_to_sink(
            &source,
            &mut sink,
            &RenderThreading {
                parallel: true,
                chunk_size: 2,
                threads: Some(0),
            },
            &mut NoopObserver
        )
        .is_err()
    );
}
