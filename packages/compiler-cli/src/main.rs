//! viewc: compile parsed markup trees from the command line.
//!
//! Input is a JSON-serialized parsed tree (the external parser's output
//! format); components are discovered from a directory of marked definition
//! files.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use view_compiler::markup::ParsedNode;
use view_compiler::{ViewCache, ViewCompiler, ViewComponentDiscovery, ViewConfig};

#[derive(Parser)]
#[command(name = "viewc", about = "View template compiler", version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON parsed tree and print the emitted output
    Compile {
        /// Path to the JSON-serialized parsed tree
        tree: PathBuf,
        /// Directory of component-definition files to discover first
        #[arg(long)]
        components: Option<PathBuf>,
        /// Cache emitted artifacts under this directory and print the
        /// artifact path instead of the output
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },
    /// Discover components under a directory and list them
    Discover {
        root: PathBuf,
        /// Persist the discovery result to this cache file
        #[arg(long)]
        store_cache: Option<PathBuf>,
    },
    /// Remove all cached artifacts under a directory
    CacheClear { dir: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Command::Compile {
            tree,
            components,
            cache_dir,
        } => compile(tree, components, cache_dir),
        Command::Discover { root, store_cache } => discover(root, store_cache),
        Command::CacheClear { dir } => {
            ViewCache::new(dir).clear().context("failed to clear view cache")
        }
    }
}

fn compile(
    tree: PathBuf,
    components: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
) -> Result<()> {
    let content = fs::read_to_string(&tree)
        .with_context(|| format!("failed to read parsed tree {}", tree.display()))?;
    let nodes: Vec<ParsedNode> =
        serde_json::from_str(&content).context("parsed tree is not valid JSON")?;

    let mut config = ViewConfig::new();
    if let Some(root) = components {
        let discovery = ViewComponentDiscovery::new(root.join(".component-cache.json"));
        discovery
            .discover(&root, &mut config)
            .with_context(|| format!("component discovery failed under {}", root.display()))?;
    }

    let compiler = ViewCompiler::new(config);

    match cache_dir {
        Some(dir) => {
            let cache = ViewCache::new(dir);
            let source_path = tree.to_string_lossy().into_owned();
            let artifact = cache
                .cached_view_path(&source_path, || compiler.compile_to_string(&nodes))
                .context("compilation failed")?;
            println!("{}", artifact.display());
        }
        None => {
            let output = compiler
                .compile_to_string(&nodes)
                .context("compilation failed")?;
            println!("{output}");
        }
    }

    Ok(())
}

fn discover(root: PathBuf, store_cache: Option<PathBuf>) -> Result<()> {
    let cache_path =
        store_cache.unwrap_or_else(|| root.join(".component-cache.json"));
    let discovery = ViewComponentDiscovery::new(&cache_path);

    let mut config = ViewConfig::new();
    let count = discovery
        .discover(&root, &mut config)
        .with_context(|| format!("component discovery failed under {}", root.display()))?;

    for name in config.component_names() {
        println!("{name}");
    }
    tracing::info!(count, cache = %cache_path.display(), "storing discovery cache");
    discovery
        .store_cache(&config)
        .context("failed to store discovery cache")?;

    Ok(())
}
