use std::collections::BTreeMap;

use proptest::prelude::*;
use tempfile::TempDir;

use stockbook::{
    core::store::InventoryStore,
    types::Quantity,
};

#[derive(Debug, Clone)]
enum Action {
    Add { item_idx: u8, qty: i32 },
    AddReal { item_idx: u8, qty: f64 },
    Remove { item_idx: u8, qty: i32 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..12, -50i32..200).prop_map(|(item_idx, qty)| Action::Add { item_idx, qty }),
        (0u8..12, -10.0f64..40.0).prop_map(|(item_idx, qty)| Action::AddReal { item_idx, qty }),
        (0u8..12, -20i32..100).prop_map(|(item_idx, qty)| Action::Remove { item_idx, qty }),
    ]
}

fn item(idx: u8) -> String {
    format!("item-{idx}")
}

fn apply(store: &mut InventoryStore, action: &Action) {
    let _ = match action {
        Action::Add { item_idx, qty } => store.add(&item(*item_idx), *qty, None),
        Action::AddReal { item_idx, qty } => store.add(&item(*item_idx), *qty, None),
        Action::Remove { item_idx, qty } => store.remove(&item(*item_idx), *qty),
    };
}

proptest! {
    #[test]
    fn positive_adds_sum_per_item(adds in prop::collection::vec((0u8..8, 1i64..1_000), 1..100)) {
        let mut store = InventoryStore::new();
        let mut expected = BTreeMap::<String, i64>::new();

        for (idx, qty) in adds {
            store.add(&item(idx), qty, None).unwrap();
            *expected.entry(item(idx)).or_default() += qty;
        }

        for (name, total) in &expected {
            prop_assert_eq!(store.quantity(name), Quantity::Int(*total));
        }
        prop_assert_eq!(store.len(), expected.len());
    }

    #[test]
    fn add_then_remove_restores_prior_level(
        actions in prop::collection::vec(action_strategy(), 0..60),
        idx in 0u8..12,
        qty in 1i64..500,
    ) {
        let mut store = InventoryStore::new();
        for action in &actions {
            apply(&mut store, action);
        }

        let name = item(idx);
        let prior = store.quantity(&name);
        let was_present = store.contains(&name);
        prop_assume!(!was_present || prior.as_f64() > 1e-6);

        store.add(&name, qty, None).unwrap();
        store.remove(&name, qty).unwrap();

        prop_assert_eq!(store.contains(&name), was_present);
        if was_present {
            prop_assert!((store.quantity(&name).as_f64() - prior.as_f64()).abs() < 1e-6);
        } else {
            prop_assert_eq!(store.quantity(&name), Quantity::ZERO);
        }
    }

    #[test]
    fn no_entry_is_ever_non_positive(actions in prop::collection::vec(action_strategy(), 1..200)) {
        let mut store = InventoryStore::new();
        for action in &actions {
            apply(&mut store, action);
            for (_, qty) in store.iter() {
                prop_assert!(qty.is_positive());
            }
        }
        prop_assert!(store.check_low_items(0).is_empty());
    }

    #[test]
    fn low_items_match_full_scan(
        actions in prop::collection::vec(action_strategy(), 1..120),
        threshold in -5i64..150,
    ) {
        let mut store = InventoryStore::new();
        for action in &actions {
            apply(&mut store, action);
        }

        let threshold = Quantity::Int(threshold);
        let expected: Vec<&str> = store
            .iter()
            .filter(|(_, qty)| qty.as_f64() < threshold.as_f64())
            .map(|(name, _)| name)
            .collect();
        prop_assert_eq!(store.check_low_items(threshold), expected);
    }

    #[test]
    fn save_then_load_is_identity(actions in prop::collection::vec(action_strategy(), 0..80)) {
        let mut store = InventoryStore::new();
        for action in &actions {
            apply(&mut store, action);
        }

        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("inventory.json");
        store.save(&path).expect("save");

        let mut reloaded = InventoryStore::new();
        reloaded.add("scratch", 1, None).unwrap();
        reloaded.load(&path).expect("load");

        prop_assert_eq!(reloaded.snapshot(), store.snapshot());
    }
}
