use clap::{Parser, Subcommand};
use folio::viewer::{Step, Viewer};
use folio::{catalog, output, scan};
use std::path::PathBuf;
use tracing::warn;

/// Flag shared by commands that pick a filter before doing anything else.
#[derive(clap::Args, Clone)]
struct FilterArgs {
    /// Category to filter by ("all" for everything). Defaults to the
    /// catalog's initial category.
    #[arg(long, short)]
    category: Option<String>,
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Category-filtered media gallery with lightbox navigation")]
#[command(long_about = "\
Category-filtered media gallery with lightbox navigation

The catalog is read from gallery.toml in the source directory. Without one,
a sample photography portfolio is used.

Catalog structure:

  [display]
  all_label = \"All Work\"          # label of the unfiltered pill
  initial_category = \"all\"        # filter active at startup

  [[categories]]                  # optional, derived from items if omitted
  id = \"antelope-canyon\"
  name = \"Antelope Canyon\"

  [[items]]
  url = \"/images/photography/8.jpeg\"   # .mp4 .mov .webm .avi play as video
  category = \"antelope-canyon\"
  title = \"Antelope Canyon\"

Browse steps: next, prev, close, open:<index>, category:<id>

Run 'folio gen-catalog' to print a documented sample catalog.")]
#[command(version)]
struct Cli {
    /// Directory containing gallery.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the filter pills with item counts
    Categories(FilterArgs),
    /// List the items visible under a filter
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Open the lightbox on one visible item (0-based index)
    Show {
        #[command(flatten)]
        filter: FilterArgs,
        index: usize,
    },
    /// Replay lightbox steps, printing the lightbox after each
    Browse {
        #[command(flatten)]
        filter: FilterArgs,
        /// Steps such as open:0 next next prev category:misc close
        #[arg(required = true)]
        steps: Vec<Step>,
    },
    /// Build a catalog from a directory of category folders
    Scan {
        /// Media directory to scan
        dir: PathBuf,
        /// Prefix for generated item URLs
        #[arg(long, default_value = "/images/photography")]
        url_prefix: String,
        /// Write gallery.toml into --source instead of printing it
        #[arg(long)]
        write: bool,
    },
    /// Validate the catalog without browsing
    Check,
    /// Print a documented sample gallery.toml
    GenCatalog,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Categories(filter) => {
            let (viewer, all_label) = load_viewer(&cli.source, &filter)?;
            output::print_categories(viewer.gallery(), &all_label);
        }
        Command::List { filter, json } => {
            let (viewer, all_label) = load_viewer(&cli.source, &filter)?;
            if json {
                let entries = output::list_entries(viewer.visible_items());
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                output::print_visible(viewer.gallery(), &all_label);
            }
        }
        Command::Show { filter, index } => {
            let (mut viewer, _) = load_viewer(&cli.source, &filter)?;
            viewer.open(index)?;
            output::print_lightbox(&viewer);
        }
        Command::Browse { filter, steps } => {
            let (mut viewer, _) = load_viewer(&cli.source, &filter)?;
            for step in &steps {
                let result = viewer.apply(step);
                if let Err(err) = &result {
                    warn!(%step, error = %err, "step ignored");
                }
                println!("{}", output::format_step(step, &result));
                output::print_lightbox(&viewer);
            }
        }
        Command::Scan {
            dir,
            url_prefix,
            write,
        } => {
            let scanned = scan::scan(&dir, &url_prefix)?;
            scanned.validate()?;
            if write {
                catalog::write_catalog(&cli.source, &scanned)?;
                output::print_catalog(&scanned);
                println!(
                    "==> Wrote {}",
                    cli.source.join(catalog::CATALOG_FILE).display()
                );
            } else {
                print!("{}", scanned.to_toml()?);
            }
        }
        Command::Check => {
            let loaded = catalog::load_catalog(&cli.source)?;
            output::print_catalog(&loaded);
            println!("==> {}", output::format_summary(&loaded));
            loaded.into_model()?;
            println!("==> Catalog is valid");
        }
        Command::GenCatalog => {
            print!("{}", catalog::stock_catalog_toml());
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the catalog and build a viewer with the requested filter applied.
fn load_viewer(
    source: &std::path::Path,
    filter: &FilterArgs,
) -> Result<(Viewer, String), Box<dyn std::error::Error>> {
    let loaded = catalog::load_catalog(source)?;
    let all_label = loaded.display.all_label.clone();
    let mut viewer = Viewer::new(loaded.into_model()?);
    if let Some(category) = &filter.category {
        viewer.select_category(category)?;
    }
    Ok((viewer, all_label))
}
