//! Model caching so weights are loaded once per process.
//!
//! Model handles are immutable once constructed; the cache hands out clones of
//! a shared instance, which keeps every request in the process on the same
//! read-only weights.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use candle_core::Device;

use crate::error::Result;

/// Trait implemented by model option types to generate a stable cache key.
pub trait ModelOptions {
    fn cache_key(&self) -> String;
}

type CacheStorage = HashMap<(TypeId, String), Arc<dyn Any + Send + Sync>>;

/// A thread-safe cache for model instances.
pub struct ModelCache {
    cache: Arc<Mutex<CacheStorage>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get_or_create<M, F>(&self, key: &str, loader: F) -> Result<M>
    where
        M: Clone + Send + Sync + 'static,
        F: FnOnce() -> Result<M>,
    {
        let type_id = TypeId::of::<M>();
        let cache_key = (type_id, key.to_string());

        {
            let cache = self.cache.lock().unwrap();
            if let Some(cached) = cache.get(&cache_key) {
                if let Some(model) = cached.downcast_ref::<M>() {
                    return Ok(model.clone());
                }
            }
        }

        let model = loader()?;

        {
            let mut cache = self.cache.lock().unwrap();
            cache.insert(
                cache_key,
                Arc::new(model.clone()) as Arc<dyn Any + Send + Sync>,
            );
        }

        Ok(model)
    }

    pub fn clear(&self) {
        let mut cache = self.cache.lock().unwrap();
        cache.clear();
    }

    pub fn len(&self) -> usize {
        let cache = self.cache.lock().unwrap();
        cache.len()
    }

    pub fn is_empty(&self) -> bool {
        let cache = self.cache.lock().unwrap();
        cache.is_empty()
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_MODEL_CACHE: once_cell::sync::Lazy<ModelCache> =
    once_cell::sync::Lazy::new(ModelCache::new);

pub fn global_cache() -> &'static ModelCache {
    &GLOBAL_MODEL_CACHE
}

/// Cache key combining model options and device location.
pub fn build_cache_key<O: ModelOptions>(options: &O, device: &Device) -> String {
    format!("{}-{:?}", options.cache_key(), device.location())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestModel {
        id: String,
    }

    #[test]
    fn cache_returns_same_instance() {
        let cache = ModelCache::new();
        let model1 = cache
            .get_or_create::<TestModel, _>("test", || {
                Ok(TestModel {
                    id: "original".into(),
                })
            })
            .unwrap();
        let model2 = cache
            .get_or_create::<TestModel, _>("test", || Ok(TestModel { id: "new".into() }))
            .unwrap();
        assert_eq!(model1.id, model2.id);
    }

    #[test]
    fn cache_clear() {
        let cache = ModelCache::new();
        #[derive(Clone)]
        struct A;
        let _ = cache.get_or_create::<A, _>("k", || Ok(A)).unwrap();
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn distinct_keys_load_separately() {
        let cache = ModelCache::new();
        let a = cache
            .get_or_create::<TestModel, _>("a", || Ok(TestModel { id: "a".into() }))
            .unwrap();
        let b = cache
            .get_or_create::<TestModel, _>("b", || Ok(TestModel { id: "b".into() }))
            .unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(cache.len(), 2);
    }
}
