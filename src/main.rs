use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use surfview::surface::{payload::read_data_file, ColorMapName, Hemisphere, SurfacePayload};
use surfview::{AppConfig, SurfViewApp};

/// Interactive viewer for cortical surface meshes.
#[derive(Parser, Debug)]
#[command(name = "surfview", version, about)]
struct Args {
    /// Surface payload (.json) or mesh (.obj)
    input: PathBuf,

    /// JSON array of per-vertex values, overriding the payload's data
    #[arg(long)]
    data: Option<PathBuf>,

    /// Initial color map (jet, summer, hot, cool, spring, bluered)
    #[arg(long)]
    color_map: Option<ColorMapName>,

    /// Hemisphere the mesh belongs to (left, right)
    #[arg(long)]
    hemisphere: Option<Hemisphere>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<u32>,
}

fn load_payload(args: &Args) -> Result<SurfacePayload> {
    let data = match &args.data {
        Some(path) => Some(
            read_data_file(path)
                .with_context(|| format!("reading data file {}", path.display()))?,
        ),
        None => None,
    };
    let color_map = args.color_map.unwrap_or_default();

    let is_obj = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("obj"));

    let mut payload = if is_obj {
        SurfacePayload::from_obj(&args.input, data.unwrap_or_default(), color_map.as_str())
            .with_context(|| format!("loading mesh {}", args.input.display()))?
    } else {
        let mut payload = SurfacePayload::from_json_file(&args.input)
            .with_context(|| format!("loading payload {}", args.input.display()))?;
        if let Some(data) = data {
            payload.data = data;
        }
        if args.color_map.is_some() {
            payload.color_map = color_map.as_str().to_string();
        }
        payload
    };

    if let Some(hemisphere) = args.hemisphere {
        payload.hemisphere = hemisphere;
    }
    Ok(payload)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = f64::from(width);
    }
    if let Some(height) = args.height {
        config.height = f64::from(height);
    }

    let payload = load_payload(&args)?;
    log::info!(
        "Loaded {} vertices from {}",
        payload.vertices.len() / 3,
        args.input.display()
    );

    SurfViewApp::new(config, payload)
        .run()
        .context("running viewer")?;
    Ok(())
}
