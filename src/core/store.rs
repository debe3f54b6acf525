use std::{fmt, path::Path};

use hashbrown::HashMap;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    journal::LogEntry,
    persist::{json::JsonFile, LoadOutcome, PersistError, PersistResult},
    report::Report,
    types::{Quantity, DEFAULT_ITEM},
};

/// Rejected store mutation. The store is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Item name was empty or not text.
    #[error("invalid item: {0}")]
    InvalidItem(String),
    /// Quantity was not a finite number.
    #[error("invalid quantity for {item}: {qty}")]
    InvalidQuantity {
        /// Item the quantity was meant for.
        item: String,
        /// Rendered form of the rejected value.
        qty: String,
    },
    /// Removal targeted an item that is not in stock.
    #[error("item not in stock: {0}")]
    MissingItem(String),
}

/// Stock level of an item after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Item remains stocked with this quantity.
    Stocked(Quantity),
    /// Quantity reached zero or below and the entry was dropped.
    Depleted,
}

/// Ordered item/quantity pairs, serialized as a single JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StockSnapshot {
    /// Entries in store order.
    pub entries: Vec<(String, Quantity)>,
}

impl Serialize for StockSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (item, qty) in &self.entries {
            map.serialize_entry(item, qty)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StockSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = StockSnapshot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping item names to quantities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((item, qty)) = access.next_entry::<String, Quantity>()? {
                    entries.push((item, qty));
                }
                Ok(StockSnapshot { entries })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

/// Authoritative item-to-quantity mapping.
///
/// No entry ever holds a non-positive quantity: any mutation that would leave
/// one drops the item instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    quantities: HashMap<String, Quantity>,
    order: Vec<String>,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `snapshot`, returning it with the number of
    /// entries skipped for holding an empty name or a non-positive quantity.
    ///
    /// A repeated name keeps its first position and its last value.
    pub fn from_snapshot(snapshot: StockSnapshot) -> (Self, usize) {
        let mut store = Self::new();
        let mut skipped = 0;

        for (item, qty) in snapshot.entries {
            if item.is_empty() || !qty.is_finite() || !qty.is_positive() {
                warn!(item = %item, qty = %qty, "skipping invalid inventory entry");
                skipped += 1;
                continue;
            }
            store.put(item, qty);
        }

        (store, skipped)
    }

    /// Exports the current contents in store order.
    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot {
            entries: self.iter().map(|(item, qty)| (item.to_string(), qty)).collect(),
        }
    }

    /// Adds `qty` to `item`, creating the entry if needed.
    ///
    /// A negative `qty` decrements; if the total drops to zero or below the
    /// entry is removed. A total too large to represent is rejected. On
    /// success the add is appended to `log` when given.
    pub fn add(
        &mut self,
        item: &str,
        qty: impl Into<Quantity>,
        log: Option<&mut Vec<LogEntry>>,
    ) -> Result<Adjustment, StoreError> {
        let qty = qty.into();
        if item.is_empty() {
            return Err(reject(StoreError::InvalidItem(item.to_string())));
        }
        if !qty.is_finite() {
            return Err(reject(StoreError::InvalidQuantity {
                item: item.to_string(),
                qty: qty.to_string(),
            }));
        }

        let adjustment = self.apply_delta(item, qty)?;
        if let Some(log) = log {
            log.push(LogEntry::now(item, qty));
        }
        info!(item, qty = %qty, "added stock");
        Ok(adjustment)
    }

    /// Adds from dynamically typed input.
    ///
    /// A missing item falls back to [`DEFAULT_ITEM`] and a missing quantity
    /// to zero. Anything present must be a JSON string and a JSON number
    /// respectively; booleans are not numbers.
    pub fn add_value(
        &mut self,
        item: Option<&Value>,
        qty: Option<&Value>,
        log: Option<&mut Vec<LogEntry>>,
    ) -> Result<Adjustment, StoreError> {
        let item = match item {
            None => DEFAULT_ITEM,
            Some(Value::String(name)) => name.as_str(),
            Some(other) => return Err(reject(StoreError::InvalidItem(other.to_string()))),
        };

        let qty = match qty {
            None => Quantity::ZERO,
            Some(Value::Number(n)) => Quantity::from_json_number(n).ok_or_else(|| {
                reject(StoreError::InvalidQuantity {
                    item: item.to_string(),
                    qty: n.to_string(),
                })
            })?,
            Some(other) => {
                return Err(reject(StoreError::InvalidQuantity {
                    item: item.to_string(),
                    qty: other.to_string(),
                }));
            }
        };

        self.add(item, qty, log)
    }

    /// Subtracts `qty` from `item`, dropping the entry once it reaches zero.
    pub fn remove(&mut self, item: &str, qty: impl Into<Quantity>) -> Result<Adjustment, StoreError> {
        let qty = qty.into();
        if !self.quantities.contains_key(item) {
            return Err(reject(StoreError::MissingItem(item.to_string())));
        }
        if !qty.is_finite() {
            return Err(reject(StoreError::InvalidQuantity {
                item: item.to_string(),
                qty: qty.to_string(),
            }));
        }

        let adjustment = self.apply_delta(item, -qty)?;
        match adjustment {
            Adjustment::Depleted => info!(item, "item removed from stock"),
            Adjustment::Stocked(remaining) => {
                info!(item, qty = %qty, remaining = %remaining, "removed stock")
            }
        }
        Ok(adjustment)
    }

    /// Stored quantity for `item`, zero when absent.
    pub fn quantity(&self, item: &str) -> Quantity {
        self.quantities.get(item).copied().unwrap_or_default()
    }

    /// True when `item` is in stock.
    pub fn contains(&self, item: &str) -> bool {
        self.quantities.contains_key(item)
    }

    /// Number of stocked items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing is stocked.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates entries in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.order
            .iter()
            .filter_map(|item| self.quantities.get(item).map(|qty| (item.as_str(), *qty)))
    }

    /// Items whose quantity is strictly below `threshold`, in store order.
    pub fn check_low_items(&self, threshold: impl Into<Quantity>) -> Vec<&str> {
        let threshold = threshold.into();
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(item, _)| item)
            .collect()
    }

    /// Ordered listing of the current contents.
    pub fn report(&self) -> Report {
        Report::new(self.iter().map(|(item, qty)| (item.to_string(), qty)).collect())
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.quantities.clear();
        self.order.clear();
    }

    /// Replaces the contents with the inventory file at `path`.
    ///
    /// A missing file or a malformed one leaves the store empty and is
    /// reported through [`LoadOutcome`]. Other I/O failures are returned as
    /// errors and leave the store untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> PersistResult<LoadOutcome> {
        let path = path.as_ref();
        match JsonFile::new(path).read() {
            Ok(Some(snapshot)) => {
                let (store, skipped) = Self::from_snapshot(snapshot);
                *self = store;
                info!(path = %path.display(), items = self.len(), "loaded inventory");
                Ok(LoadOutcome::Loaded {
                    items: self.len(),
                    skipped,
                })
            }
            Ok(None) => {
                self.clear();
                warn!(path = %path.display(), "inventory file not found, starting empty");
                Ok(LoadOutcome::Missing)
            }
            Err(PersistError::Decode { reason, .. }) => {
                self.clear();
                error!(path = %path.display(), %reason, "invalid inventory file, starting empty");
                Ok(LoadOutcome::Malformed { reason })
            }
            Err(err) => Err(err),
        }
    }

    /// Writes the store to `path`, replacing any existing file.
    ///
    /// Failures are logged and returned; the in-memory state is unaffected.
    pub fn save(&self, path: impl AsRef<Path>) -> PersistResult<()> {
        let path = path.as_ref();
        match JsonFile::new(path).write(&self.snapshot()) {
            Ok(()) => {
                info!(path = %path.display(), items = self.len(), "saved inventory");
                Ok(())
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to save inventory");
                Err(err)
            }
        }
    }

    fn apply_delta(&mut self, item: &str, delta: Quantity) -> Result<Adjustment, StoreError> {
        let next = self.quantity(item) + delta;
        if !next.is_finite() {
            return Err(reject(StoreError::InvalidQuantity {
                item: item.to_string(),
                qty: delta.to_string(),
            }));
        }

        if next.is_positive() {
            self.put(item.to_string(), next);
            Ok(Adjustment::Stocked(next))
        } else {
            self.evict(item);
            Ok(Adjustment::Depleted)
        }
    }

    fn put(&mut self, item: String, qty: Quantity) {
        if let Some(slot) = self.quantities.get_mut(&item) {
            *slot = qty;
            return;
        }
        self.order.push(item.clone());
        self.quantities.insert(item, qty);
    }

    fn evict(&mut self, item: &str) {
        if self.quantities.remove(item).is_some() {
            if let Some(pos) = self.order.iter().position(|x| x == item) {
                self.order.remove(pos);
            }
        }
    }
}

fn reject(err: StoreError) -> StoreError {
    warn!(error = %err, "rejected inventory change");
    err
}
