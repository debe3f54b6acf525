//! In-memory inventory of item quantities with JSON file persistence.
//!
//! # Examples
//!
//! ```
//! use stockbook::{
//!     core::store::{Adjustment, InventoryStore},
//!     types::Quantity,
//! };
//!
//! let mut store = InventoryStore::new();
//! let mut log = Vec::new();
//! store.add("apple", 10, Some(&mut log)).expect("add");
//! assert_eq!(store.remove("apple", 3), Ok(Adjustment::Stocked(Quantity::Int(7))));
//! assert_eq!(store.quantity("apple"), Quantity::Int(7));
//! assert_eq!(store.check_low_items(8), vec!["apple"]);
//! assert_eq!(log.len(), 1);
//! ```
//!
//! Persisting to disk:
//! ```no_run
//! use stockbook::{core::store::InventoryStore, persist::LoadOutcome};
//!
//! let mut store = InventoryStore::new();
//! match store.load("inventory.json").expect("load") {
//!     LoadOutcome::Loaded { items, .. } => println!("{items} items"),
//!     LoadOutcome::Missing | LoadOutcome::Malformed { .. } => println!("starting empty"),
//! }
//! store.add("flour", 2.5, None).expect("add");
//! let _ = store.save("inventory.json");
//! print!("{}", store.report());
//! ```
#![deny(missing_docs)]

/// Inventory path and threshold configuration.
pub mod config;
/// Core in-memory store.
pub mod core;
/// Optional log of add operations.
pub mod journal;
/// Persistence errors and the JSON file backend.
pub mod persist;
/// Console report rendering.
pub mod report;
/// Logging initialization.
pub mod telemetry;
/// Shared primitive types.
pub mod types;
