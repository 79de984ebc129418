use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phasecolor::api::legend::colormap_samples;
use phasecolor::assets::AssetLoader;
use phasecolor::models::{AppConfig, PlotConfig, PlotOverrides, PlotSpec};
use phasecolor::server;
use phasecolor::services::{render_plot, ComplexFunction};

#[derive(Parser)]
#[command(name = "phasecolor")]
#[command(about = "Phasecolor - domain coloring of complex functions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render a plot directly to a PNG file
    Render {
        /// Plot name from config.yaml (default: the configured default plot)
        plot: Option<String>,

        /// Render a catalogue function instead of a configured plot
        #[arg(short, long, conflicts_with = "plot")]
        function: Option<String>,

        /// Real axis range as "min,max"
        #[arg(short, long, value_parser = parse_range, allow_hyphen_values = true)]
        x: Option<[f64; 2]>,

        /// Imaginary axis range as "min,max"
        #[arg(short, long, value_parser = parse_range, allow_hyphen_values = true)]
        y: Option<[f64; 2]>,

        /// Color space: "hsl" or "oklch"
        #[arg(short, long)]
        mode: Option<String>,

        /// Septaphase variant (continuous, rounded, thresholded, lightness, phase, real, imaginary)
        #[arg(short, long)]
        variant: Option<String>,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Skip the modulus and phase contours
        #[arg(long)]
        no_contours: bool,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print sampled colormap entries as hex colors
    Colormap {
        /// Color space: "hsl" or "oklch"
        #[arg(short, long, default_value = "hsl")]
        mode: String,

        /// Number of entries
        #[arg(short, long, default_value_t = 12)]
        samples: usize,
    },
    /// Extract the embedded config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn parse_range(s: &str) -> Result<[f64; 2], String> {
    let (min, max) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"min,max\", got {s:?}"))?;
    let min: f64 = min.trim().parse().map_err(|e| format!("invalid min: {e}"))?;
    let max: f64 = max.trim().parse().map_err(|e| format!("invalid max: {e}"))?;
    Ok([min, max])
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            plot,
            function,
            x,
            y,
            mode,
            variant,
            width,
            height,
            no_contours,
            output,
        }) => {
            init_cli_tracing();
            let overrides = PlotOverrides {
                mode,
                variant,
                w: width,
                h: height,
                contours: no_contours.then_some(false),
            };
            run_render_command(plot, function, x, y, overrides, &output)
        }
        Some(Commands::Colormap { mode, samples }) => {
            init_cli_tracing();
            run_colormap_command(&mode, samples)
        }
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phasecolor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Render a plot directly to a PNG file (no server needed)
fn run_render_command(
    plot_name: Option<String>,
    function: Option<String>,
    x: Option<[f64; 2]>,
    y: Option<[f64; 2]>,
    overrides: PlotOverrides,
    output: &PathBuf,
) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);

    let mut plot = match (function, plot_name) {
        (Some(function), _) => {
            // Validate early for a clearer message than the resolve error
            function.parse::<ComplexFunction>()?;
            PlotConfig {
                function,
                x: [-2.0, 2.0],
                y: [-2.0, 2.0],
                mode: None,
                variant: None,
                contours: None,
            }
        }
        (None, Some(name)) => config
            .get_plot(&name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Plot not found: {name}"))?,
        (None, None) => config
            .get_default_plot()
            .map(|(_, plot)| plot.clone())
            .ok_or_else(|| anyhow::anyhow!("No plot named and no default_plot configured"))?,
    };
    if let Some(x) = x {
        plot.x = x;
    }
    if let Some(y) = y {
        plot.y = y;
    }

    let spec = PlotSpec::resolve(&plot, &config.defaults, &overrides)?;
    let png_bytes = render_plot(&spec)?;

    std::fs::write(output, &png_bytes)?;
    println!(
        "Rendered {} ({}x{}, {} bytes)",
        output.display(),
        spec.width,
        spec.height,
        png_bytes.len()
    );

    Ok(())
}

/// Print colormap samples, one "phase color" pair per line
fn run_colormap_command(mode: &str, samples: usize) -> anyhow::Result<()> {
    let mode = mode.parse()?;
    for sample in colormap_samples(mode, samples.clamp(2, domain_color::COLORMAP_SIZE)) {
        println!("{:+.4} {}", sample.phase, sample.color);
    }
    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Phasecolor v{VERSION}");
    println!("Domain coloring of complex functions\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::new(config_file.map(PathBuf::from));
    let config = AppConfig::load_from_assets(&loader);

    println!("\nConfig:  {}", loader.config_source());
    println!("Plots:   {}", config.plots.len());
    for name in config.plots.keys() {
        let marker = if config.default_plot.as_deref() == Some(name.as_str()) {
            " (default)"
        } else {
            ""
        };
        println!("  {name}{marker}");
    }

    println!("\nFunctions:");
    for function in ComplexFunction::ALL {
        println!("  {:<10} {}", function.name(), function.formula());
    }

    println!("\nCommands:");
    println!("  phasecolor serve      Start the HTTP server");
    println!("  phasecolor render     Render a plot to PNG file");
    println!("  phasecolor colormap   Print colormap entries");
    println!("  phasecolor init       Extract embedded config");
    println!("\nRun 'phasecolor --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phasecolor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(config = %asset_loader.config_source(), "Config source");

    // Seed if the configured path is missing
    if let Err(e) = asset_loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config");
    }

    let state = server::create_app_state(asset_loader)?;
    let app = server::build_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Phasecolor server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("-2,2"), Ok([-2.0, 2.0]));
        assert_eq!(parse_range(" -6.3 , 6.3 "), Ok([-6.3, 6.3]));
        assert!(parse_range("2").is_err());
        assert!(parse_range("a,1").is_err());
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "phasecolor", "render", "sin", "--mode", "oklch", "-x", "-6,6", "--no-contours", "-o",
            "out.png",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render { plot, x, mode, no_contours, .. }) => {
                assert_eq!(plot.as_deref(), Some("sin"));
                assert_eq!(x, Some([-6.0, 6.0]));
                assert_eq!(mode.as_deref(), Some("oklch"));
                assert!(no_contours);
            }
            _ => panic!("expected render command"),
        }
    }
}
