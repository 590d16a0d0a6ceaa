//! # Stock Seeder
//!
//! Raises every stock key to a development-friendly level and saves the
//! snapshot, so a fresh checkout of the repo has something to sell.
//!
//! ## Usage
//! ```bash
//! # Seed the default snapshot (./gourmet.json)
//! cargo run -p gourmet-store --bin seed
//!
//! # Custom snapshot path and level
//! cargo run -p gourmet-store --bin seed -- --snapshot ./data/gourmet.json --level 500
//! ```
//!
//! Seeding goes through the public bulk stock update, so it exercises the
//! same per-key validation the staff stock panel does.

use std::collections::BTreeMap;
use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use gourmet_store::SnapshotStore;

/// Stock assigned to every key when no --level is given.
const DEFAULT_LEVEL: i64 = 100_000;

/// Snapshot written when no --snapshot is given.
const DEFAULT_SNAPSHOT: &str = "./gourmet.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut level: i64 = DEFAULT_LEVEL;
    let mut snapshot_path = String::from(DEFAULT_SNAPSHOT);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--level" | "-l" => {
                if i + 1 < args.len() {
                    level = args[i + 1].parse().unwrap_or(DEFAULT_LEVEL);
                    i += 1;
                }
            }
            "--snapshot" | "-s" => {
                if i + 1 < args.len() {
                    snapshot_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Gourmet Stock Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -l, --level <N>        Stock level per key (default: 100000)");
                println!("  -s, --snapshot <PATH>  Snapshot file path (default: ./gourmet.json)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Gourmet Stock Seeder");
    println!("=======================");
    println!("Snapshot: {}", snapshot_path);
    println!("Level:    {}", level);
    println!();

    let store = SnapshotStore::new(&snapshot_path);
    let mut system = store.load_or_default()?;

    let updates: BTreeMap<String, String> = system
        .ledger()
        .keys()
        .map(|key| (key.to_string(), level.to_string()))
        .collect();

    let applied = system.update_stock_levels(&updates)?;
    info!(
        keys = updates.len(),
        changed = applied.len(),
        "Stock levels raised"
    );

    store.save(&system)?;

    println!("✓ {} stock keys at level {}", updates.len(), level);
    println!("✓ Snapshot written to {}", snapshot_path);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
