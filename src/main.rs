use std::fs;
use std::path::PathBuf;

use log::{error, info};
use structopt::StructOpt;

use sphere_tracer::{renderer, scene, Error, Result};

/// Render a scene of spheres to a PNG image
#[derive(StructOpt, Debug)]
#[structopt(name = "sphere-tracer")]
struct AppArguments {
    /// Scene description (JSON)
    #[structopt(parse(from_os_str), default_value = "scene.json")]
    scene: PathBuf,

    /// Output image path
    #[structopt(short, long, parse(from_os_str), default_value = "image.png")]
    output: PathBuf,

    /// Image width, overrides the scene
    #[structopt(long)]
    width: Option<u32>,

    /// Image height, overrides the scene
    #[structopt(long)]
    height: Option<u32>,

    /// Number of successive reflections, overrides the scene
    #[structopt(long)]
    depth: Option<u32>,

    /// No progress bar
    #[structopt(short, long)]
    quiet: bool,

    /// Verbose mode, logs the scene summary
    #[structopt(short, long)]
    verbose: bool,
}

fn run(args: AppArguments) -> Result<()> {
    let mut scene = scene::load(&args.scene)?;
    if let Some(w) = args.width {
        scene.render.width = w;
    }
    if let Some(h) = args.height {
        scene.render.height = h;
    }
    if let Some(d) = args.depth {
        scene.render.max_depth = d;
    }
    scene.log_summary();

    info!(
        "Rendering {}x{} image, {} spheres, {} lights, {} reflections",
        scene.render.width,
        scene.render.height,
        scene.spheres.len(),
        scene.lights().len(),
        scene.render.max_depth
    );
    let img = renderer::render(&scene, !args.quiet);

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    img.save(&args.output)?;

    info!("Saved → {}", args.output.display());
    Ok(())
}

fn main() {
    let args = AppArguments::from_args();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(args) {
        error!("{}", err);
        std::process::exit(1);
    }
}
