//! # Demo Data Seeder
//!
//! Populates a data directory with the demo fixtures for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default directory (./data)
//! cargo run -p pressy-store --bin seed
//!
//! # Seed a custom directory
//! cargo run -p pressy-store --bin seed -- --dir /tmp/pressy
//! ```

use std::env;
use std::process;

use pressy_store::{seed, AppStore, KvStore, StoreResult};

fn main() -> StoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut dir = String::from("./data");

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dir" => match args.next() {
                Some(value) => dir = value,
                None => {
                    eprintln!("--dir requires a path");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                println!("Usage: seed [--dir <path>]");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {other}");
                process::exit(1);
            }
        }
    }

    println!("Seeding demo data into {dir} ...");

    let kv = KvStore::open(&dir)?;
    seed::seed_demo(&kv);

    // Re-open through the state store to confirm the slices load.
    let store = AppStore::open(kv);
    println!("✓ Seed complete!");
    println!("  services:      {}", store.services().len());
    println!("  orders:        {}", store.orders().len());
    println!("  expenses:      {}", store.expenses().len());
    println!("  employees:     {}", store.employees().len());
    println!("  notifications: {}", store.notifications().len());

    Ok(())
}
