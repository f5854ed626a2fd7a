use rayon::prelude::*;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{GlintError, GlintResult};
use crate::render::layer::FrameRgb;

/// A finite, restartable-from-zero lazy sequence of frames.
///
/// `render_frame` depends only on the source's immutable precomputed state
/// and the frame index, so frames may be computed in any order or in
/// parallel; the pipeline still emits them to the sink strictly in order.
pub trait FrameSource: Sync {
    fn canvas(&self) -> Canvas;
    fn fps(&self) -> Fps;
    fn frame_count(&self) -> u64;
    fn render_frame(&self, idx: FrameIndex) -> GlintResult<FrameRgb>;
}

/// Per-frame progress collaborator, decoupled from the render loop.
pub trait RenderObserver {
    fn frame_rendered(&mut self, idx: FrameIndex, total: u64);
}

/// Observer that does nothing.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl RenderObserver for NoopObserver {
    fn frame_rendered(&mut self, _idx: FrameIndex, _total: u64) {}
}

/// Threading and chunking controls for multi-frame rendering.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Compute frames within a chunk in parallel when `true`. Emission order
    /// stays sequential either way.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Aggregated rendering counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    pub frames_rendered: u64,
}

/// Drive `source` start to finish into `sink`.
///
/// Declares the stream format via `begin`, pushes every frame in strictly
/// increasing index order and finalizes with `end`. On the first failure -
/// whether a frame fails to render or the sink rejects a write - no further
/// frames are produced and the error propagates; the sink is dropped without
/// `end` and is responsible for releasing its resources, and the caller must
/// treat any partially written output as invalid.
pub fn render_to_sink<S: FrameSource + ?Sized>(
    source: &S,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
    observer: &mut dyn RenderObserver,
) -> GlintResult<RenderStats> {
    let total = source.frame_count();
    if total == 0 {
        return Err(GlintError::validation("frame source is empty"));
    }

    let canvas = source.canvas();
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps: source.fps(),
    })?;
    tracing::info!(frames = total, width = canvas.width, height = canvas.height, "render start");

    if threading.parallel {
        render_chunked_parallel(source, sink, threading, observer, total)?;
    } else {
        for i in 0..total {
            let idx = FrameIndex(i);
            let frame = source.render_frame(idx)?;
            sink.push_frame(idx, &frame)?;
            observer.frame_rendered(idx, total);
            tracing::debug!(frame = i, "frame emitted");
        }
    }

    sink.end()?;
    tracing::info!(frames = total, "render complete");
    Ok(RenderStats {
        frames_total: total,
        frames_rendered: total,
    })
}

fn render_chunked_parallel<S: FrameSource + ?Sized>(
    source: &S,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
    observer: &mut dyn RenderObserver,
    total: u64,
) -> GlintResult<()> {
    let chunk_size = threading.chunk_size.max(1) as u64;
    let pool = build_thread_pool(threading.threads)?;

    let mut chunk_start = 0u64;
    while chunk_start < total {
        let chunk_end = (chunk_start + chunk_size).min(total);

        let rendered: Vec<GlintResult<FrameRgb>> = pool.install(|| {
            (chunk_start..chunk_end)
                .into_par_iter()
                .map(|i| source.render_frame(FrameIndex(i)))
                .collect()
        });

        for (i, result) in (chunk_start..chunk_end).zip(rendered) {
            let idx = FrameIndex(i);
            let frame = result?;
            sink.push_frame(idx, &frame)?;
            observer.frame_rendered(idx, total);
            tracing::debug!(frame = i, "frame emitted");
        }

        chunk_start = chunk_end;
    }

    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> GlintResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GlintError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GlintError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
