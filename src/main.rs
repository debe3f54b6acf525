use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use stockbook::{
    config::{parse_threshold, InventoryConfig},
    core::store::InventoryStore,
    telemetry,
    types::Quantity,
};
use tracing::info;

/// stockbook - track item quantities in a JSON inventory file
#[derive(Parser)]
#[command(name = "stockbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Inventory file (default: $STOCKBOOK_FILE or inventory.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Low-stock threshold (default: $STOCKBOOK_LOW_THRESHOLD or 5)
    #[arg(short, long, global = true, value_parser = parse_threshold)]
    threshold: Option<Quantity>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add stock to an item; a negative quantity takes stock away
    Add {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: Quantity,
    },

    /// Remove stock from an item
    Remove {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: Quantity,
    },

    /// Print the quantity of an item
    Qty { item: String },

    /// List items below the low-stock threshold
    Low,

    /// Print every item and its quantity
    Report,

    /// Run a sample session against the inventory file
    Demo,
}

fn main() -> Result<()> {
    telemetry::init();

    let cli = Cli::parse();
    let mut cfg = InventoryConfig::from_env()?;
    if let Some(path) = cli.file {
        cfg.path = path;
    }
    if let Some(threshold) = cli.threshold {
        cfg.low_threshold = threshold;
    }

    match cli.command {
        Commands::Add { item, qty } => cmd_add(&cfg, &item, qty),
        Commands::Remove { item, qty } => cmd_remove(&cfg, &item, qty),
        Commands::Qty { item } => {
            let store = open(&cfg.path)?;
            println!("{}", store.quantity(&item));
            Ok(())
        }
        Commands::Low => {
            let store = open(&cfg.path)?;
            for item in store.check_low_items(cfg.low_threshold) {
                println!("{item}");
            }
            Ok(())
        }
        Commands::Report => {
            let store = open(&cfg.path)?;
            print!("{}", store.report());
            Ok(())
        }
        Commands::Demo => cmd_demo(&cfg),
    }
}

fn open(path: &Path) -> Result<InventoryStore> {
    let mut store = InventoryStore::new();
    store
        .load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    Ok(store)
}

fn cmd_add(cfg: &InventoryConfig, item: &str, qty: Quantity) -> Result<()> {
    let mut store = open(&cfg.path)?;
    let mut log = Vec::new();
    store.add(item, qty, Some(&mut log))?;
    for entry in &log {
        println!("{entry}");
    }
    store.save(&cfg.path)?;
    Ok(())
}

fn cmd_remove(cfg: &InventoryConfig, item: &str, qty: Quantity) -> Result<()> {
    let mut store = open(&cfg.path)?;
    store.remove(item, qty)?;
    store.save(&cfg.path)?;
    Ok(())
}

fn cmd_demo(cfg: &InventoryConfig) -> Result<()> {
    let mut store = InventoryStore::new();
    let mut log = Vec::new();

    // Rejections are logged by the store; the session carries on.
    let _ = store.add("apple", 10, Some(&mut log));
    let _ = store.add("banana", -2, Some(&mut log));
    let _ = store.add_value(Some(&json!(123)), Some(&json!("ten")), Some(&mut log));
    let _ = store.remove("apple", 3);
    let _ = store.remove("orange", 1);

    println!("Apple stock: {}", store.quantity("apple"));
    println!("Low items: {:?}", store.check_low_items(cfg.low_threshold));

    let _ = store.save(&cfg.path);
    store
        .load(&cfg.path)
        .with_context(|| format!("loading {}", cfg.path.display()))?;
    println!();
    print!("{}", store.report());

    info!("demo session finished");
    Ok(())
}
