use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use fresco::{DemoCategory, PixelSurface, Surface as _, SurfaceSpec, build_demo, catalog};

#[derive(Parser, Debug)]
#[command(name = "fresco", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the demo catalog.
    List(ListArgs),
    /// Render a demo to a PNG frame sequence.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Demo slug (see `fresco list`).
    demo: String,

    /// Number of frames to render.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Output directory for PNG frames.
    #[arg(long)]
    out: PathBuf,

    /// Surface width in device-independent pixels.
    #[arg(long, default_value_t = 500.0)]
    width: f64,

    /// Surface height in device-independent pixels.
    #[arg(long, default_value_t = 500.0)]
    height: f64,

    /// Physical pixels per device-independent pixel.
    #[arg(long, default_value_t = 1.0)]
    pixel_ratio: f64,

    /// Seed for all demo randomness.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn category_name(category: DemoCategory) -> &'static str {
    match category {
        DemoCategory::Basic => "basic",
        DemoCategory::Optimization => "optimization",
    }
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    if args.json {
        let rows: Vec<_> = catalog()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "slug": e.slug,
                    "title": e.title,
                    "category": e.category,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for group in [DemoCategory::Basic, DemoCategory::Optimization] {
        println!("{}:", category_name(group));
        for entry in catalog().iter().filter(|e| e.category == group) {
            println!("  {:<14}{}", entry.slug, entry.title);
        }
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let spec = SurfaceSpec::new(args.width, args.height, args.pixel_ratio)?;
    let mut surface = PixelSurface::create(spec)?;
    let mut demo = build_demo(&args.demo, spec, args.seed)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    for index in 0..args.frames {
        demo.step(&mut surface)?;
        let frame = surface.read_frame()?;
        let path = args.out.join(format!("frame_{index:04}.png"));
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
    }

    eprintln!("wrote {} frames to {}", args.frames, args.out.display());
    Ok(())
}
