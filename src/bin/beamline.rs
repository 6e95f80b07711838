use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "beamline", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every beam's computed path as JSON.
    Path(PathArgs),
    /// Write the surface at a point in time as SVG.
    Svg(SvgArgs),
    /// Render the surface at a point in time as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Seconds since the beams were mounted.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output SVG path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Seconds since the beams were mounted.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Length of the sequence in seconds.
    #[arg(long, default_value_t = 4.0)]
    seconds: f64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(serde::Serialize)]
struct PathReport {
    id: u64,
    from: String,
    to: String,
    path: Option<beamline::BeamPath>,
    d: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_scene(path: &Path) -> anyhow::Result<(beamline::SceneDef, beamline::MountedScene)> {
    let def = beamline::SceneDef::from_path(path)?;
    let scene = beamline::MountedScene::mount(&def)
        .with_context(|| format!("mount scene '{}'", path.display()))?;
    Ok((def, scene))
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let (def, scene) = load_scene(&args.in_path)?;
    let report: Vec<PathReport> = def
        .beams
        .iter()
        .zip(scene.paths())
        .map(|(beam, (id, path))| PathReport {
            id: id.0,
            from: beam.from.clone(),
            to: beam.to.clone(),
            path,
            d: path.map(|p| p.to_svg_d()),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let (_, scene) = load_scene(&args.in_path)?;
    scene.advance_to(args.time);
    let svg = scene.to_svg();

    match args.out {
        Some(out) => {
            ensure_parent(&out)?;
            std::fs::write(&out, svg).with_context(|| format!("write svg '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{svg}"),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (_, scene) = load_scene(&args.in_path)?;
    scene.advance_to(args.time);
    let frame = scene.rasterize()?;
    if frame.width == 0 || frame.height == 0 {
        anyhow::bail!("scene has no drawable surface (container unmounted or empty)");
    }

    ensure_parent(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if !(args.seconds.is_finite() && args.seconds >= 0.0) {
        anyhow::bail!("--seconds must be finite and >= 0");
    }
    let (_, scene) = load_scene(&args.in_path)?;
    let count = (args.seconds * f64::from(args.fps)).round() as u64;

    let mut sink = beamline::PngSequenceSink::new(&args.out_dir);
    scene.render_frames(args.fps, count, &mut sink)?;

    eprintln!("wrote {} frames to {}", sink.written().len(), args.out_dir.display());
    Ok(())
}
