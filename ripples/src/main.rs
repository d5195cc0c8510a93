use animframe::{AnimationFrame, FrameConfig, FrameError, Style};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const RING_COUNT: i64 = 24;
const RING_SPACING: i64 = 50;
const RING_DRIFT: i64 = 10;
const CENTER_Y: i64 = 250;
const GROWTH: i64 = 15;

/// Concentric circles spreading out from the left edge
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// TOML file with window settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start playing instead of waiting at the first frame
    #[arg(long)]
    autoplay: bool,

    /// Run without a window and write frames to stdout as PPM images
    #[arg(long)]
    ppm: bool,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,
}

/// Center x and diameter of a ring once the pattern has spread by `spread`.
/// Rings further out start with a negative diameter and appear later.
fn ring(i: i64, spread: i64) -> (i64, i64) {
    let x = (RING_SPACING * (i + 1)) / 2 - i * RING_DRIFT;
    let diameter = spread - RING_SPACING * i;
    (x, diameter)
}

fn draw(af: &mut AnimationFrame, spread: i64) {
    for i in 0..RING_COUNT {
        let (x, diameter) = ring(i, spread);
        af.draw_circle(x, CENTER_Y, diameter, Style::Stroke);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match args.config {
        Some(path) => FrameConfig::load(path)?,
        None => FrameConfig::default(),
    };
    config.autoplay |= args.autoplay;

    let mut af = if args.ppm {
        let mut af = AnimationFrame::headless(config);
        af.stream_to(BufWriter::new(io::stdout()));
        af
    } else {
        AnimationFrame::with_config(config)?
    };

    info!(
        width = af.width(),
        height = af.height(),
        autoplay = af.config().autoplay,
        "starting"
    );

    let mut spread = 0;
    loop {
        if args.frames.map_or(false, |limit| af.frames_painted() >= limit) {
            break;
        }

        draw(&mut af, spread);
        match af.paint_frame() {
            Ok(()) => {}
            Err(FrameError::Closed) => break,
            Err(err) => return Err(err.into()),
        }
        spread += GROWTH;
    }

    info!(frames = af.frames_painted(), "done");
    Ok(())
}
