use clap::Parser;
use mathtext::{
    FixedMetrics, JsonNodeTypesetter, MarkupRenderer, PipelineError, Platform, RenderOptions,
    Viewport,
};
use std::fs;
use std::path::PathBuf;

/// Renders a typeset node tree (JSON) into a primitive tree (JSON).
#[derive(Parser, Debug)]
#[command(name = "mathtext", version, about)]
struct Cli {
    /// Path to a JSON array of typeset nodes.
    input: PathBuf,

    /// Path to a JSON object with render options.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Viewport width of the target device.
    #[arg(long, default_value_t = 375.0)]
    width: f32,

    /// Viewport height of the target device.
    #[arg(long, default_value_t = 812.0)]
    height: f32,

    /// Target platform: ios, android, web or other.
    #[arg(long, default_value = "ios")]
    platform: String,

    /// Status bar height reported by an Android host.
    #[arg(long)]
    status_bar: Option<f32>,

    /// Print compact JSON instead of pretty JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let options = match &cli.options {
        Some(path) => RenderOptions::from_json(&fs::read_to_string(path)?)?,
        None => RenderOptions::default(),
    };

    let platform = Platform::from_name(&cli.platform);
    let metrics = FixedMetrics::headless(platform);
    if platform != Platform::Web {
        let mut viewport = Viewport::new(cli.width, cli.height);
        if let Some(status_bar) = cli.status_bar {
            viewport = viewport.with_status_bar(status_bar);
        }
        metrics.set_viewport(viewport)?;
    }
    log::info!("Rendering {} for {:?}", cli.input.display(), platform);

    let markup = fs::read_to_string(&cli.input)?;
    let renderer = MarkupRenderer::new(JsonNodeTypesetter, metrics.shared()).with_options(options);
    let tree = renderer
        .render(&markup)
        .map_err(|e| PipelineError::Typeset(e.to_string()))?;

    let json = if cli.compact {
        serde_json::to_string(&tree)?
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    println!("{}", json);
    Ok(())
}
