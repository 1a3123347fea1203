use super::store::{KeyValueStore, StoreError};
use crate::domain::{default_habits, Habit};
use tracing::warn;

/// Storage key holding the whole habit list
pub const HABITS_KEY: &str = "habits-weekly";

/// Load the habit list.
///
/// A missing, unreadable or malformed value falls back to the default seed.
pub fn load_habits(store: &dyn KeyValueStore) -> Vec<Habit> {
    let raw = match store.get(HABITS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default_habits(),
        Err(e) => {
            warn!("failed to read stored habits, using defaults: {e}");
            return default_habits();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(habits) => habits,
        Err(e) => {
            warn!("stored habits are malformed, using defaults: {e}");
            default_habits()
        }
    }
}

/// Save the whole habit list
pub fn save_habits(store: &mut dyn KeyValueStore, habits: &[Habit]) -> Result<(), StoreError> {
    let json = serde_json::to_string(habits)?;
    store.set(HABITS_KEY, &json)
}

/// Erase the stored habit list
pub fn clear_habits(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(HABITS_KEY)
}
