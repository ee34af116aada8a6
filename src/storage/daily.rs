// Daily state store - Today's watered flags, invalidated when the day changes

use super::KeyValueStore;
use crate::date::DateService;
use crate::models::WateredState;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

const STORAGE_KEY_DATE: &str = "plants_last_date";
const STORAGE_KEY_WATERED: &str = "plants_watered_today";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub state: WateredState,
    pub count: usize,
}

impl Loaded {
    fn new(state: WateredState) -> Self {
        let count = state.count();
        Self { state, count }
    }
}

/// Sole owner of the persisted (day stamp, watered state) record.
///
/// Every call writes through to the backend before returning. Backend
/// failures are logged and swallowed: the caller then sees in-memory
/// defaults and the change is simply not persisted.
pub struct DailyStateStore<S: KeyValueStore> {
    backend: S,
    dates: DateService,
}

impl<S: KeyValueStore> DailyStateStore<S> {
    pub fn new(backend: S, dates: DateService) -> Self {
        Self { backend, dates }
    }

    pub fn load(&mut self) -> Loaded {
        let today = self.dates.today();
        let saved_date = self.read(STORAGE_KEY_DATE);

        if saved_date.as_deref() != Some(today.as_str()) {
            info!(
                saved = saved_date.as_deref().unwrap_or("<none>"),
                today = %today,
                "stored state is not from today, starting fresh"
            );
            self.reset();
            return Loaded::new(WateredState::new());
        }

        let state = match self.read(STORAGE_KEY_WATERED) {
            Some(raw) => WateredState::from_json(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "stored watered state is malformed, treating as empty");
                WateredState::new()
            }),
            None => WateredState::new(),
        };

        debug!(count = state.count(), "loaded today's state");
        Loaded::new(state)
    }

    /// Replaces today's record with the `true` entries of `full_state`.
    ///
    /// `full_state` must cover every item; this is an overwrite, not a merge.
    pub fn save(&mut self, full_state: &BTreeMap<String, bool>) {
        let today = self.dates.today();
        self.write(STORAGE_KEY_DATE, today.as_str());

        let state = WateredState::from_flags(full_state);
        match state.to_json() {
            Ok(json) => self.write(STORAGE_KEY_WATERED, &json),
            Err(err) => warn!(error = %err, "could not encode watered state"),
        }
        debug!(day = %today, count = state.count(), "saved watered state");
    }

    /// Overwrites the record with (today, empty).
    pub fn reset(&mut self) {
        let today = self.dates.today();
        self.write(STORAGE_KEY_DATE, today.as_str());
        self.write(STORAGE_KEY_WATERED, "{}");
        info!(day = %today, "watered state reset");
    }

    fn read(&self, key: &str) -> Option<String> {
        self.backend.get(key).unwrap_or_else(|err| {
            warn!(key, error = %err, "storage read failed");
            None
        })
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = self.backend.set(key, value) {
            warn!(key, error = %err, "storage write failed, state will not persist");
        }
    }
}
