use clap::{Parser, Subcommand};
use photo_grid::{config, layout, output, render, scan};
use std::path::PathBuf;

/// Shared flags for commands that compute a layout.
#[derive(clap::Args, Clone)]
struct GridArgs {
    /// Viewport width in CSS pixels — resolved to a column count via the
    /// grid breakpoints in config.toml
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Column count override — bypasses the breakpoint table
    #[arg(long)]
    columns: Option<u32>,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "photo-grid")]
#[command(about = "Cover selection and grid layout for photo gallery sites")]
#[command(long_about = "\
Cover selection and grid layout for photo gallery sites

Your filesystem is the data source. Directories become albums, images are
ordered by numeric prefix, and album.toml sidecars carry metadata.

Content structure:

  content/
  ├── config.toml                  # Grid breakpoints (optional)
  ├── 010-Landscapes/              # Album (numbered = shown in nav)
  │   ├── album.toml               # Title, date, featured photo ids
  │   ├── description.txt          # Fallback album description
  │   ├── 001-dawn.jpg             # Ordered by numeric prefix
  │   └── 010-mountains.jpg        # Non-contiguous numbering OK
  ├── 020-Travel/                  # Container (has subdirs, not images)
  │   ├── 010-Japan/               # Nested album
  │   └── 020-Italy/
  └── wip-experiments/             # No number prefix = hidden from nav

Covers: featured landscape photos win, then featured portrait pairs, then
unfeatured photos — always the earliest in album order.

Grid: photos pack into rows of N columns; landscape photos span 2 columns,
portrait photos span 1. N comes from --columns, or from --width resolved
through the [grid] breakpoints in config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory for the preview site
    #[arg(long, default_value = "preview", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory and show discovered albums
    Scan {
        /// Write the scan manifest as JSON to this path
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Compute covers and packed rows for every album
    Layout(GridArgs),
    /// Write a static HTML preview of the computed layout
    Preview(GridArgs),
    /// Validate content directory without computing anything
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { manifest } => {
            let result = scan::scan(&cli.source)?;
            if let Some(path) = manifest {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&path, json)?;
                println!("Manifest written to {}", path.display());
            }
            output::print_scan_output(&result);
        }
        Command::Layout(grid_args) => {
            let manifest = scan::scan(&cli.source)?;
            let capacity = resolve_capacity(&manifest.config, &grid_args);
            init_thread_pool(&manifest.config.processing);
            let site = layout::layout_site(&manifest.albums, capacity);
            output::print_layout_output(&site, capacity);
        }
        Command::Preview(grid_args) => {
            let manifest = scan::scan(&cli.source)?;
            let capacity = resolve_capacity(&manifest.config, &grid_args);
            init_thread_pool(&manifest.config.processing);
            let site = layout::layout_site(&manifest.albums, capacity);
            for (path, error) in &site.failures {
                eprintln!("Failed: {path} ({error})");
            }
            render::render_preview(&manifest, &site, &cli.source, &cli.output)?;
            println!("Preview written to {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest);
            println!("==> Content is valid");
        }
    }

    Ok(())
}

/// Resolve the packing capacity: explicit --columns wins, otherwise --width
/// goes through the breakpoint table.
fn resolve_capacity(config: &config::SiteConfig, args: &GridArgs) -> u32 {
    args.columns
        .unwrap_or_else(|| config.grid.columns_for_width(args.width))
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
