use anyhow::{Context, Result, anyhow};
use artboard_ruler::canvas::Scene;
use artboard_ruler::ruler::{Axis, Point, RulerTag, Viewport, tick_interval};
use artboard_ruler::{Canvas, Config, FileStore, GuideStore, MemoryStore, Ruler, RulerStyle};
use clap::{ArgAction, Parser};
use log::{debug, info, warn};
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ARTBOARD_RULER_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "artboard-ruler")]
#[command(version = VERSION, about = "Inspect artboard guide lines and ruler layout")]
struct Cli {
    /// List artboards that have stored guide lines
    #[arg(long, action = ArgAction::SetTrue)]
    list: bool,

    /// Print the stored guide lines of an artboard as JSON
    #[arg(long, value_name = "ARTBOARD")]
    show: Option<String>,

    /// Forget all stored guide lines of an artboard
    #[arg(long, value_name = "ARTBOARD")]
    delete_artboard: Option<String>,

    /// Print the ruler tick labels for a viewport (requires --zoom)
    #[arg(long, action = ArgAction::SetTrue, requires = "zoom")]
    ticks: bool,

    /// Viewport zoom factor
    #[arg(long, value_name = "ZOOM", allow_negative_numbers = true)]
    zoom: Option<f64>,

    /// Horizontal viewport pan in device pixels
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pan_x: f64,

    /// Vertical viewport pan in device pixels
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pan_y: f64,

    /// Visible canvas width in device pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Visible canvas height in device pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Guide line storage directory (overrides the config file)
    #[arg(long, value_name = "DIR")]
    storage_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let wants_storage = cli.list || cli.show.is_some() || cli.delete_artboard.is_some();

    if !wants_storage && !cli.ticks {
        print_usage();
        return Ok(());
    }

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        Config::default()
    });

    if wants_storage {
        let dir = match &cli.storage_dir {
            Some(dir) => dir.clone(),
            None => config
                .storage_dir(&Config::config_dir()?)
                .context("Failed to resolve guide line storage directory")?,
        };
        info!("Using guide line storage at {}", dir.display());
        let mut guides = GuideStore::new(FileStore::new(dir));

        if let Some(artboard) = &cli.delete_artboard {
            delete_artboard(&mut guides, artboard)?;
        }
        if let Some(artboard) = &cli.show {
            show_artboard(&guides, artboard)?;
        }
        if cli.list {
            list_artboards(&guides);
        }
    }

    if cli.ticks {
        let zoom = cli.zoom.ok_or_else(|| anyhow!("--ticks requires --zoom"))?;
        let viewport = Viewport::new(zoom, Point::new(cli.pan_x, cli.pan_y), cli.width, cli.height);
        let style = RulerStyle::from_config(&config.ruler, &config.colors);
        print_ticks(viewport, style)?;
    }

    Ok(())
}

fn list_artboards(guides: &GuideStore<FileStore>) {
    let state = guides.read();
    if state.is_empty() {
        println!("No stored guide lines");
        return;
    }
    for (artboard, lines) in state.artboards() {
        println!("{artboard}\t{} guide line(s)", lines.len());
    }
}

fn show_artboard(guides: &GuideStore<FileStore>, artboard: &str) -> Result<()> {
    let lines = guides.guides(artboard);
    if lines.is_empty() {
        println!("No guide lines stored for artboard {artboard}");
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(&lines)?);
    Ok(())
}

fn delete_artboard(guides: &mut GuideStore<FileStore>, artboard: &str) -> Result<()> {
    let deleted = guides
        .delete(artboard)
        .with_context(|| format!("Failed to delete guide lines of artboard {artboard}"))?;
    if deleted {
        println!("Deleted guide lines for artboard {artboard}");
    } else {
        println!("No guide lines stored for artboard {artboard}");
    }
    Ok(())
}

fn print_ticks(viewport: Viewport, style: RulerStyle) -> Result<()> {
    if !viewport.is_renderable() {
        return Err(anyhow!(
            "Cannot lay out ruler for zoom {} and size {}x{}",
            viewport.zoom(),
            viewport.width,
            viewport.height
        ));
    }

    let mut scene = Scene::with_viewport(viewport);
    let mut ruler = Ruler::with_style(MemoryStore::new(), style);
    let scheme = ruler.style().scheme;
    ruler.initialize(Some(&mut scene), scheme, "");
    debug!("Laid out {} ruler objects", scene.objects().len());

    println!("interval: {}", tick_interval(viewport.zoom()));
    for (name, axis) in [("x", Axis::X), ("y", Axis::Y)] {
        let labels: Vec<&str> = scene
            .tagged(RulerTag::TickLabel(axis))
            .filter_map(|label| label.text())
            .collect();
        println!("{name}: {}", labels.join(" "));
    }
    Ok(())
}

fn print_usage() {
    println!("artboard-ruler: Inspect artboard guide lines and ruler layout");
    println!();
    println!("Usage:");
    println!("  artboard-ruler --list                      List artboards with guide lines");
    println!("  artboard-ruler --show <ARTBOARD>           Print an artboard's guide lines");
    println!("  artboard-ruler --delete-artboard <ARTBOARD>");
    println!("                                             Forget an artboard's guide lines");
    println!("  artboard-ruler --ticks --zoom <ZOOM>       Print ruler tick labels");
    println!("  artboard-ruler --help                      Show help");
    println!();
    println!("Guide lines are read from the directory configured under [storage] in");
    println!("~/.config/artboard-ruler/config.toml unless --storage-dir is given.");
}
