use super::error::PersistError;
use super::store::KeyValueStore;
use crate::domain::{Settings, Task};
use serde_json::Value;

/// Storage key of the settings record
pub const SETTINGS_KEY: &str = "pomofocusSettings";
/// Storage key of the task list record
pub const TASKS_KEY: &str = "pomofocusTasks";

/// Everything restored at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub settings: Settings,
    pub tasks: Vec<Task>,
}

/// Restore settings and tasks.
///
/// Never fails: an unreadable or malformed record is logged and treated as
/// absent, so startup always proceeds with defaults.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Snapshot {
    let settings = match read_record(store, SETTINGS_KEY) {
        Some(value) => Settings::merged_over_defaults(&value),
        None => Settings::default(),
    };

    let tasks = match read_record(store, TASKS_KEY) {
        Some(value) => tasks_from_value(value),
        None => Vec::new(),
    };

    tracing::debug!(tasks = tasks.len(), "loaded persisted state");
    Snapshot { settings, tasks }
}

/// Write both records, overwriting previous values.
///
/// The two writes are independent; a failure on the second leaves the first in
/// place.
pub fn save<S: KeyValueStore + ?Sized>(
    store: &mut S,
    settings: &Settings,
    tasks: &[Task],
) -> Result<(), PersistError> {
    let settings_json = encode(SETTINGS_KEY, settings)?;
    let tasks_json = encode(TASKS_KEY, &tasks)?;

    store.set(SETTINGS_KEY, &settings_json)?;
    store.set(TASKS_KEY, &tasks_json)?;
    Ok(())
}

/// Drop both records
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), PersistError> {
    store.remove(SETTINGS_KEY)?;
    store.remove(TASKS_KEY)?;
    Ok(())
}

fn encode<T: serde::Serialize + ?Sized>(key: &str, value: &T) -> Result<String, PersistError> {
    serde_json::to_string_pretty(value).map_err(|source| PersistError::Encode {
        key: key.to_string(),
        source,
    })
}

fn read_record<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Value> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read persisted record, using defaults");
            return None;
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed persisted record, using defaults");
            None
        }
    }
}

fn tasks_from_value(value: Value) -> Vec<Task> {
    let Value::Array(entries) = value else {
        tracing::warn!("persisted tasks is not a JSON array, starting with no tasks");
        return Vec::new();
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let task = serde_json::from_value::<Task>(entry)
                .ok()
                .and_then(|t| Task::new(&t.title, t.estimated_units));
            if task.is_none() {
                tracing::warn!(index = idx, "dropping invalid persisted task");
            }
            task
        })
        .collect()
}
