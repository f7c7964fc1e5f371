use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use glyphtrail::{
    Camera, CpuScene, FrameClock, GlyphAssetStore, LogoConfig, LogoSession, OrthographicCamera,
    SceneStyle,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glyphtrail", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame at a point in time as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Frames(FramesArgs),
    /// Print per-frame glyph and connector state as JSON lines.
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Directory holding one `<letter>.svg` per roster source.
    #[arg(long, default_value = "glyphs")]
    glyphs: PathBuf,

    /// Logo configuration JSON. Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for phase offsets and connector pairing.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Time in seconds since the animation started.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of frames to render.
    #[arg(long)]
    count: u64,

    /// Output directory; files are named `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 1)]
    frames: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<LogoConfig> {
    match path {
        Some(p) => Ok(LogoConfig::from_path(p)?),
        None => Ok(LogoConfig::default()),
    }
}

fn open_session(common: &CommonArgs) -> anyhow::Result<(LogoConfig, LogoSession)> {
    let cfg = load_config(common.config.as_deref())?;
    cfg.validate()?;
    let assets = GlyphAssetStore::load(&common.glyphs, cfg.sources())
        .with_context(|| format!("load glyphs from '{}'", common.glyphs.display()))?;
    tracing::info!(
        root = %assets.root().display(),
        sources = assets.len(),
        "glyph sources ready"
    );
    let session = match common.seed {
        Some(seed) => LogoSession::build(&cfg, &assets, &mut StdRng::seed_from_u64(seed))?,
        None => LogoSession::build(&cfg, &assets, &mut rand::rng())?,
    };
    Ok((cfg, session))
}

fn make_scene(cfg: &LogoConfig, session: &mut LogoSession) -> anyhow::Result<CpuScene> {
    let canvas = cfg.render.canvas;
    let mut camera = OrthographicCamera::new(cfg.camera.scale, canvas);
    session.resize(&mut camera, canvas);
    let mut scene = CpuScene::new(canvas, SceneStyle::from(&cfg.render))?;
    scene.set_view(camera.world_to_screen());
    Ok(scene)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (cfg, mut session) = open_session(&args.common)?;
    let mut clock = FrameClock::new(cfg.render.fps);
    for _ in 0..clock.frames_until(args.time) {
        session.tick(clock.tick());
    }

    let mut scene = make_scene(&cfg, &mut session)?;
    session.submit(&mut scene)?;
    let frame = scene.finish()?;
    frame.write_png(&args.out)?;

    eprintln!("wrote {} (t = {:.3}s)", args.out.display(), clock.time());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (cfg, mut session) = open_session(&args.common)?;
    let mut clock = FrameClock::new(cfg.render.fps);
    let mut scene = make_scene(&cfg, &mut session)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for i in 0..args.count {
        if i > 0 {
            session.tick(clock.tick());
        }
        session.submit(&mut scene)?;
        let frame = scene.finish()?;
        frame.write_png(&args.out_dir.join(format!("frame_{i:05}.png")))?;
    }

    eprintln!("wrote {} frames to {}", args.count, args.out_dir.display());
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let (cfg, mut session) = open_session(&args.common)?;
    let mut clock = FrameClock::new(cfg.render.fps);
    for _ in 0..args.frames {
        session.tick(clock.tick());
        tracing::debug!(frame = clock.frame(), time = clock.time(), "dump frame");
        let line = serde_json::to_string(&session.snapshot()).context("serialize snapshot")?;
        println!("{line}");
    }
    Ok(())
}
