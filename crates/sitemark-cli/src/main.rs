mod site;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sitemark_config::Config;
use std::path::{Path, PathBuf};
use std::{fs, process};

#[derive(Parser)]
#[command(name = "sitemark")]
#[command(about = "Build a static site from markdown")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every page and copy static files
    Build {
        /// Site configuration file
        #[arg(short, long, default_value = Config::FILE_NAME)]
        config: PathBuf,

        /// Override the configured base path (e.g. `/my-repo/`)
        #[arg(long)]
        base_path: Option<String>,
    },
    /// Print the HTML fragment for a single markdown file
    Render {
        /// Markdown file to render
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Command::Build { config, base_path } => build(&config, base_path),
        Command::Render { input } => render(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn build(config_path: &Path, base_path: Option<String>) -> Result<()> {
    let mut config = match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            log::info!("No config at {}, using defaults", config_path.display());
            let base_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
            Config::default().resolve_relative_to(base_dir)
        }
    };
    if let Some(base_path) = base_path {
        config.base_path = base_path;
    }

    // Everything that can fail up front runs before the output is cleared
    let template = fs::read_to_string(&config.template)
        .with_context(|| format!("Failed to read template {}", config.template.display()))?;
    let exclude = config.exclude_patterns()?;

    site::prepare_output(&config.output_dir, config.static_dir.as_deref())?;

    let count = site::generate_pages_recursive(
        &config.content_dir,
        &template,
        &config.output_dir,
        &config.base_path,
        &exclude,
    )?;
    log::info!(
        "Generated {count} pages into {}",
        config.output_dir.display()
    );
    Ok(())
}

fn render(input: &Path) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let html = sitemark_engine::markdown_to_html(&markdown)
        .with_context(|| format!("Failed to render {}", input.display()))?;
    println!("{html}");
    Ok(())
}
