// Tracker - The fixed plant list and today's watered flags, kept in sync with storage

use crate::models::{Plant, Summary};
use crate::scheduler::MidnightHandler;
use crate::storage::{DailyStateStore, KeyValueStore};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The single owner of the [`DailyStateStore`]. The UI layer and the reset
/// scheduler both go through it.
pub struct Tracker<S: KeyValueStore> {
    plants: Vec<Plant>,
    watered: Vec<bool>,
    store: DailyStateStore<S>,
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn new(plants: Vec<Plant>, mut store: DailyStateStore<S>) -> Self {
        let loaded = store.load();
        debug!(done = loaded.count, total = plants.len(), "tracker ready");
        let watered = plants
            .iter()
            .map(|plant| loaded.state.contains(&plant.id))
            .collect();

        Self {
            plants,
            watered,
            store,
        }
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn is_watered(&self, index: usize) -> bool {
        self.watered.get(index).copied().unwrap_or(false)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            done: self.watered.iter().filter(|w| **w).count(),
            total: self.plants.len(),
        }
    }

    /// Records a checkbox change and persists the complete state of every plant.
    pub fn on_item_toggled(&mut self, id: &str, checked: bool) {
        let Some(index) = self.plants.iter().position(|p| p.id == id) else {
            warn!(id, "toggle for unknown plant ignored");
            return;
        };

        self.watered[index] = checked;
        let flags = self.flags();
        self.store.save(&flags);
    }

    fn flags(&self) -> BTreeMap<String, bool> {
        self.plants
            .iter()
            .zip(&self.watered)
            .map(|(plant, watered)| (plant.id.clone(), *watered))
            .collect()
    }
}

impl<S: KeyValueStore> MidnightHandler for Tracker<S> {
    fn on_midnight(&mut self) {
        self.store.reset();
        self.watered.iter_mut().for_each(|w| *w = false);
    }
}
