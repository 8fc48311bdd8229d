//! The `after-site` command line: validate and preview site inputs.

use after_site::catalog::Catalog;
use after_site::config;
use after_site::gallery::{Gallery, PaginationSource};
use after_site::{output, render};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "after-site")]
#[command(about = "Inspect the After Entertainment site settings and portfolio")]
#[command(long_about = "\
Inspect the After Entertainment site settings and portfolio

The browser bundle (built with wasm-pack) embeds the portfolio catalog and
runs the page behavior. This tool validates the same inputs and previews the
gallery markup without a browser.

Portfolio catalog (static/portfolio.toml):

  [[entries]]                         # one table per project, newest first
  title = \"Nexus 런칭 쇼케이스\"
  description = \"...\"
  thumbnail = \"image/portfolio/1.jpg\"
  images = [\"image/portfolio/1.jpg\", \"image/portfolio/2.jpg\"]   # optional

Run 'after-site gen-config' to print a documented after-site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Portfolio catalog file (defaults to the embedded catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate config and catalog, then list the portfolio by page
    Check,
    /// Print the gallery markup for one page
    Render {
        /// 1-based page number (clamped to the available pages)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print the normalized catalog as JSON
    Catalog,
    /// Print a stock after-site.toml with all options documented
    GenConfig,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, after_site::catalog::CatalogError> {
    match path {
        Some(path) => Catalog::load(path),
        None => Catalog::stock(),
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            let catalog = load_catalog(cli.catalog.as_deref())?;
            println!("==> Checking {}", cli.config.display());
            let gallery = Gallery::new(catalog, config.gallery.page_size);
            output::print_catalog_output(&gallery);
            println!("==> Site inputs are valid");
        }
        Command::Render { page } => {
            let config = config::load_config(&cli.config)?;
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let mut gallery = Gallery::new(catalog, config.gallery.page_size);
            if gallery.page_count() == 0 {
                println!("Portfolio is empty");
                return Ok(());
            }
            let view = gallery.render(page);
            println!(
                "{}",
                render::render_page_preview(&view, &config.gallery.overlay_label).into_string()
            );
        }
        Command::Catalog => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
