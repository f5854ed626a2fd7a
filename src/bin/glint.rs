use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use glint::{
    Canvas, FfmpegSink, FfmpegSinkOpts, FrameIndex, FrameSource, Fps, NoopObserver, RenderThreading,
    ScrollConfig, ScrollEffect, ShineConfig, ShineEffect, TextBlock, Timeline, render_to_sink,
};

#[derive(Parser, Debug)]
#[command(name = "glint", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the diagonal shine sweep over an icon (requires `ffmpeg` on PATH).
    Shine(ShineArgs),
    /// Render the scrolling feather-masked text sequence.
    Scroll(ScrollArgs),
}

#[derive(Parser, Debug)]
struct ShineArgs {
    /// Input icon image (alpha channel optional).
    #[arg(long)]
    icon: PathBuf,

    /// Output MP4 path (or PNG path with --frame).
    #[arg(long)]
    out: PathBuf,

    /// Full effect config as JSON; timing/geometry flags are ignored when set.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Total video length in seconds.
    #[arg(long, default_value_t = 2.5)]
    total_secs: f64,

    /// When the shine starts, in seconds.
    #[arg(long, default_value_t = 0.5)]
    start_secs: f64,

    /// How long the shine lasts, in seconds.
    #[arg(long, default_value_t = 1.0)]
    effect_secs: f64,

    /// Output frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Shine bar angle in degrees.
    #[arg(long, default_value_t = -60.0)]
    angle_deg: f64,

    /// Bar width as a fraction of the icon width.
    #[arg(long, default_value_t = 0.25)]
    width_factor: f64,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    /// Pre-rendered RGBA text block (stacked lines).
    #[arg(long)]
    text_block: PathBuf,

    /// Internal padding the text block was rendered with, in pixels.
    #[arg(long, default_value_t = 20)]
    padding: u32,

    /// Pixel height of one rendered line (excluding spacing).
    #[arg(long)]
    line_height: f64,

    /// Output MP4 path (or PNG path with --frame).
    #[arg(long)]
    out: PathBuf,

    /// Full effect config as JSON; timing/geometry flags are ignored when set.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Animation length in seconds.
    #[arg(long, default_value_t = 2.0)]
    total_secs: f64,

    /// Output frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output frame width.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Output frame height.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Reveal strip height as a fraction of the frame height.
    #[arg(long, default_value_t = 0.20)]
    visible_factor: f64,

    /// Feather blur radius in pixels.
    #[arg(long, default_value_t = 50)]
    feather: u32,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Overwrite the output file if it already exists.
    #[arg(long, default_value_t = true)]
    overwrite: bool,

    /// Compute frames in parallel (emission stays in order).
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override worker thread count (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Render only this frame index and write it as a PNG instead of an MP4.
    #[arg(long)]
    frame: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Shine(args) => cmd_shine(args),
        Command::Scroll(args) => cmd_scroll(args),
    }
}

fn cmd_shine(args: ShineArgs) -> anyhow::Result<()> {
    let icon = glint::load_image(&args.icon)?;

    let cfg = match &args.config {
        Some(path) => read_config::<ShineConfig>(path)?,
        None => {
            let timeline = Timeline::new(
                args.total_secs,
                args.start_secs,
                args.effect_secs,
                Fps::whole(args.fps)?,
            )?;
            ShineConfig {
                angle_deg: args.angle_deg,
                width_factor: args.width_factor,
                ..ShineConfig::new(timeline)
            }
        }
    };

    let effect = ShineEffect::new(icon, cfg)?;
    finish(&effect, &args.common, &args.out)
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    let layer = glint::load_image(&args.text_block)?;
    let block = TextBlock::new(layer, args.padding, args.line_height)?;

    let cfg = match &args.config {
        Some(path) => read_config::<ScrollConfig>(path)?,
        None => {
            let canvas = Canvas {
                width: args.width,
                height: args.height,
            };
            ScrollConfig {
                visible_height_factor: args.visible_factor,
                feather_px: args.feather,
                ..ScrollConfig::new(canvas, args.total_secs, Fps::whole(args.fps)?)
            }
        }
    };

    let effect = ScrollEffect::new(block, cfg)?;
    finish(&effect, &args.common, &args.out)
}

fn read_config<T: serde::de::DeserializeOwned>(path: &PathBuf) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config '{}'", path.display()))
}

fn finish<S: FrameSource>(source: &S, common: &CommonArgs, out: &PathBuf) -> anyhow::Result<()> {
    if let Some(frame) = common.frame {
        return write_png(source, FrameIndex(frame), out);
    }

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: out.clone(),
        overwrite: common.overwrite,
    });
    let threading = RenderThreading {
        parallel: common.parallel,
        chunk_size: common.chunk_size,
        threads: common.threads,
    };
    let stats = render_to_sink(source, &mut sink, &threading, &mut NoopObserver)?;

    eprintln!("wrote {} ({} frames)", out.display(), stats.frames_total);
    Ok(())
}

fn write_png<S: FrameSource>(source: &S, idx: FrameIndex, out: &PathBuf) -> anyhow::Result<()> {
    if idx.0 >= source.frame_count() {
        anyhow::bail!(
            "frame {} out of range (source has {} frames)",
            idx.0,
            source.frame_count()
        );
    }
    let frame = source.render_frame(idx)?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
