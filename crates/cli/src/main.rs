#![deny(unsafe_code)]
//! CLI binary for backdrop.
//!
//! Subcommands:
//! - `blob` — render a gradient blob as HTML (or its description as JSON)
//! - `grid` — render a grid-pattern rectangle as HTML/SVG
//! - `list` — print every shape, variant and position key

mod error;

use backdrop_core::{
    render_blob, BackdropError, BlobConfig, BlobShape, ColorVariant, Decoration, GridPatternConfig,
    GridPatternRenderer, KeyedIds, Position,
};
use clap::{Parser, Subcommand};
use error::CliError;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "backdrop", about = "Decorative page-background generator")]
struct Cli {
    /// Output the structured description as JSON instead of markup.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a blurred gradient blob.
    Blob {
        /// Color variant (aurora, sunset, ocean, forest, lavender, golden).
        #[arg(long)]
        variant: Option<String>,

        /// Clip shape (organic, wave, cloud, splash).
        #[arg(long)]
        shape: Option<String>,

        /// Placement (top-right, top-left, bottom-right, bottom-left, center).
        #[arg(long)]
        position: Option<String>,

        /// Opacity in percent, 0 to 100.
        #[arg(long)]
        opacity: Option<f64>,

        /// Explicit gradient start color; needs --to as well.
        #[arg(long)]
        from: Option<String>,

        /// Explicit gradient end color; needs --from as well.
        #[arg(long)]
        to: Option<String>,

        /// Blob settings as a JSON object. Flags take precedence.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a grid-pattern rectangle.
    Grid {
        /// Tile width in user units.
        #[arg(short = 'W', long)]
        tile_width: Option<String>,

        /// Tile height in user units.
        #[arg(short = 'H', long)]
        tile_height: Option<String>,

        /// Derive the pattern id from this key instead of a counter.
        #[arg(long)]
        id_key: Option<String>,

        /// Grid settings as a JSON object. Flags take precedence.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List shapes, color variants and positions.
    List,
}

/// Parses `--params` and lays the explicit flags over it.
fn merge_params(raw: &str, flags: &[(&str, Option<Value>)]) -> Result<Value, CliError> {
    let mut params: Value = serde_json::from_str(raw)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let map = params
        .as_object_mut()
        .ok_or_else(|| CliError::Input("--params must be a JSON object".to_string()))?;
    for (name, value) in flags {
        if let Some(value) = value {
            map.insert((*name).to_string(), value.clone());
        }
    }
    Ok(params)
}

/// Writes `text` to `output`, or prints it when no file is given.
fn emit(text: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .map_err(|e| CliError::Io(format!("writing {}: {e}", path.display())))?;
            info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let shapes = BlobShape::list_names();
            let variants = ColorVariant::list_names();
            let positions = Position::list_names();
            if cli.json {
                let info = json!({
                    "shapes": shapes,
                    "variants": variants,
                    "positions": positions,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Shapes:");
                println!("  {}", shapes.join(", "));
                println!("Variants:");
                for variant in ColorVariant::ALL {
                    let (from, to) = variant.stops();
                    println!("  {:<10} {from} -> {to}", variant.name());
                }
                println!("Positions:");
                println!("  {}", positions.join(", "));
            }
        }
        Command::Blob {
            variant,
            shape,
            position,
            opacity,
            from,
            to,
            params,
            output,
        } => {
            // JSON has no NaN or infinity; they would arrive as null and read as unset.
            if let Some(value) = opacity.filter(|v| !v.is_finite()) {
                return Err(CliError::Render(BackdropError::InvalidRange {
                    name: "opacity",
                    value,
                    min: 0.0,
                    max: 100.0,
                }));
            }
            let params = merge_params(
                &params,
                &[
                    ("variant", variant.map(Value::from)),
                    ("shape", shape.map(Value::from)),
                    ("position", position.map(Value::from)),
                    ("opacity", opacity.map(Value::from)),
                    ("from_color", from.map(Value::from)),
                    ("to_color", to.map(Value::from)),
                ],
            )?;
            let config = BlobConfig::from_json(&params)?;
            let layers = render_blob(&config)?;
            let text = if cli.json {
                serde_json::to_string_pretty(&json!({
                    "config": config,
                    "layers": layers,
                }))?
            } else {
                layers.to_html()
            };
            emit(&text, output.as_deref())?;
        }
        Command::Grid {
            tile_width,
            tile_height,
            id_key,
            params,
            output,
        } => {
            let params = merge_params(
                &params,
                &[
                    ("tile_width", tile_width.map(Value::from)),
                    ("tile_height", tile_height.map(Value::from)),
                ],
            )?;
            let config = GridPatternConfig::from_json(&params)?;
            let grid = match id_key {
                Some(key) => {
                    let ids = KeyedIds::new("backdrop-grid", &key);
                    GridPatternRenderer::new(&ids).render(&config)?
                }
                None => GridPatternRenderer::default().render(&config)?,
            };
            let text = if cli.json {
                serde_json::to_string_pretty(&json!({
                    "config": config,
                    "pattern": grid,
                }))?
            } else {
                grid.to_html()
            };
            emit(&text, output.as_deref())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
