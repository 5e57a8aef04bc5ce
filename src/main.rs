use std::path::{Path, PathBuf};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{LevelFilter, info};
use raysphere::{
    chapters::{self, Chapter},
    cli::LogLevel,
    logger,
    render::canvas::{Canvas, ImageFormat},
    scene::io::yaml,
};

const DEFAULT_WIDTH: usize = 400;
const DEFAULT_HEIGHT: usize = 400;

/// Small ray tracer drawing lit spheres.
/// Renders scenes from yaml files or one of the built-in chapters.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The scene file to render
    #[clap(required_unless_present = "chapter", conflicts_with = "chapter")]
    scene_file: Option<PathBuf>,

    /// Built-in picture to draw instead of a scene file
    #[clap(long)]
    chapter: Option<Chapter>,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "png")]
    image_format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./<scene_filename or chapter>.<image_format>`
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    #[clap(long, help = format!("Width (in pixels) of the output image.
Overrides the one in the scene file. If not specified anywhere, defaults to {}", DEFAULT_WIDTH))]
    width: Option<usize>,

    #[clap(long, help = format!("Height (in pixels) of the output image.
Overrides the one in the scene file. If not specified anywhere, defaults to {}", DEFAULT_HEIGHT))]
    height: Option<usize>,

    /// Verbosity of the log printed to stderr
    #[clap(long, default_value = "info")]
    log_level: LogLevel,

    /// Don't show the progress bar while rendering
    #[clap(long)]
    no_progress: bool,
}

fn progressbar(args: &Args) -> Result<Option<ProgressBar>, String> {
    if args.no_progress {
        return Ok(None);
    }
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} pixels shaded: {human_pos}/{human_len} {percent}% ({eta})",
    )
    .map_err(|e| format!("Invalid progress bar template: {}", e))?;
    Ok(Some(ProgressBar::no_length().with_style(style)))
}

fn render_scene_file(args: &Args, scene_file: &Path) -> Result<Canvas, String> {
    let scene_source = std::fs::read_to_string(scene_file)
        .map_err(|e| format!("Failed to read scene file: {}", e))?;
    let config =
        yaml::parse_str(&scene_source).map_err(|e| format!("Failed to parse scene: {}", e))?;
    let scene = config
        .build_scene()
        .map_err(|e| format!("Failed to build scene: {}", e))?;

    let width = args.width.or(config.width).unwrap_or(DEFAULT_WIDTH);
    let height = args.height.or(config.height).unwrap_or(DEFAULT_HEIGHT);
    scene
        .render(width, height, progressbar(args)?)
        .map_err(|e| format!("Failed to render scene: {}", e))
}

fn default_output_path(args: &Args) -> PathBuf {
    let mut path = match (&args.scene_file, args.chapter) {
        (Some(scene_file), _) => scene_file
            .file_stem()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("scene")),
        (None, Some(chapter)) => PathBuf::from(chapter.to_string()),
        (None, None) => PathBuf::from("scene"),
    };
    path.set_extension(args.image_format.to_string());
    path
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    logger::init_logger(LevelFilter::from(args.log_level));

    let canvas = match (&args.scene_file, args.chapter) {
        (Some(scene_file), _) => render_scene_file(&args, scene_file)?,
        (None, Some(chapter)) => {
            chapters::run(chapter, args.width, args.height, progressbar(&args)?)
                .map_err(|e| format!("Failed to draw chapter {}: {}", chapter, e))?
        }
        (None, None) => return Err("Either a scene file or --chapter is required".to_string()),
    };

    let output_path = args
        .output_path
        .clone()
        .unwrap_or_else(|| default_output_path(&args));
    canvas
        .save(&output_path, args.image_format)
        .map_err(|e| format!("Failed to save image: {}", e))?;
    info!("image saved to {:?}", output_path);
    Ok(())
}
