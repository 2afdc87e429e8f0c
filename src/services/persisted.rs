//! JSON helpers over a key-value store.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// Read `key` as JSON, degrading to `T::default()` when missing or unreadable.
pub(crate) fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match load(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key, error = %err, "falling back to defaults");
            T::default()
        }
    }
}

fn load<T, S>(store: &S, key: &str) -> Result<Option<T>, AppError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(|err| AppError::CorruptPersistedState {
        key: key.to_string(),
        details: err.to_string(),
    })
}

/// Write `value` as JSON under `key`.
pub(crate) fn save<T, S>(store: &S, key: &str, value: &T) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|err| {
        AppError::Configuration(format!("Failed to serialize '{}': {}", key, err))
    })?;
    store.set(key, &raw)
}
