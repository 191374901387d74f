use serde::{de::DeserializeOwned, Serialize};

use crate::{errors::CacheError, store::KeyValueStore};

/// Typed cache on top of a [KeyValueStore]
///
/// Codec failures never reach the caller, they are logged and treated as a missing value.
pub trait CodableCache {
    fn set<T: Serialize>(&self, key: &str, value: &T);

    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T>;

    fn remove(&self, key: &str);
}

/// [CodableCache] storing values as JSON
#[derive(Debug, Default)]
pub struct JsonCache<S> {
    store: S,
}

impl<S: KeyValueStore> JsonCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Like [CodableCache::set], but reports encoding errors
    pub fn try_set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let data = serde_json::to_vec(value).map_err(|source| CacheError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set_data(key, data);
        Ok(())
    }

    /// Like [CodableCache::get], but reports decoding errors
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let Some(data) = self.store.data(key) else {
            return Ok(None);
        };

        serde_json::from_slice(&data)
            .map(Some)
            .map_err(|source| CacheError::Decode {
                key: key.to_string(),
                source,
            })
    }
}

impl<S: KeyValueStore> CodableCache for JsonCache<S> {
    fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_set(key, value) {
            tracing::warn!("{err}");
        }
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.try_get(key).unwrap_or_else(|err| {
            tracing::warn!("{err}");
            None
        })
    }

    fn remove(&self, key: &str) {
        self.store.remove(key);
    }
}
