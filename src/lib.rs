//! Glint generates short procedural animations by compositing static raster
//! assets through time-varying, parametrically defined alpha masks, streaming
//! the finished frames to an external encoder.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: decode assets into normalized [`LayerRgbaF32`] layers and
//!    precompute the per-effect scalar state ([`SweepField`], feather mask).
//! 2. **Sequence**: a [`FrameSource`] maps each [`FrameIndex`] to
//!    time -> progress -> eased progress -> animation parameter.
//! 3. **Composite**: alpha-over blend layers through the frame's mask into an
//!    opaque [`FrameRgb`].
//! 4. **Encode**: push frames in strict order to a [`FrameSink`] (the system
//!    `ffmpeg` over a raw `rgb24` pipe, or an in-memory sink for tests).
//!
//! Two effects ship: [`ShineEffect`] (a diagonal gaussian-band shine sweep
//! over an icon) and [`ScrollEffect`] (a vertically scrolling text block
//! revealed through a static feathered strip). Both are instances of the same
//! pattern: a per-pixel scalar field, an easing curve, and a per-frame
//! mask-driven composite.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod effects;
mod encode;
mod foundation;
mod mask;
mod render;

pub use animation::ease::Ease;
pub use animation::timeline::Timeline;
pub use assets::color::{hsl_to_rgb, rgb_to_hsl, with_lightness};
pub use assets::decode::{decode_image, load_image};
pub use assets::text::TextBlock;
pub use effects::scroll::{ScrollConfig, ScrollEffect};
pub use effects::shine::{ShineConfig, ShineEffect};
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use foundation::error::{GlintError, GlintResult};
pub use mask::feather::feathered_strip;
pub use mask::field::{GAUSS_BAND_DIVISOR, SweepField};
pub use render::composite::{composite_over, multiply_planes};
pub use render::layer::{FrameRgb, LayerRgbaF32};
pub use render::pipeline::{
    FrameSource, NoopObserver, RenderObserver, RenderStats, RenderThreading, render_to_sink,
};
