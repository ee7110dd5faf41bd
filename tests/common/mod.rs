//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use explorer_client::api::{ApiError, ExplorerApi};
use explorer_client::dispatch::{Clock, IntentDispatcher};
use explorer_client::model::RelevancyMap;
use explorer_client::storage::{KeyValueStore, MemoryStore, StorageError};
use explorer_client::store::Store;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

pub const FIXED_TIME: &str = "Mon Oct 19 2026 10:00:00 GMT+0000";

// -- Explorer service fake ----------------------------------------------------

/// In-memory stand-in for the explorer service.
///
/// Records every call as `"<op> <args>"` and fails the operations named
/// in `failing` with a 500 status error.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<String>>,
    failing: HashSet<&'static str>,
    search_delays: HashMap<String, u64>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(ops: &[&'static str]) -> Self {
        Self {
            failing: ops.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Delay the search for `term` by `ms` milliseconds.
    pub fn with_search_delay(mut self, term: &str, ms: u64) -> Self {
        self.search_delays.insert(term.to_string(), ms);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, op: &'static str, args: String) -> Result<(), ApiError> {
        self.calls.lock().push(format!("{op} {args}").trim_end().to_string());
        if self.failing.contains(op) {
            return Err(ApiError::Status {
                endpoint: op.to_string(),
                status: 500,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ExplorerApi for FakeApi {
    async fn create_model(&self, name: &str) -> Result<(), ApiError> {
        self.record("create_model", name.to_string())
    }

    async fn update_model(
        &self,
        name: &str,
        annotations: &RelevancyMap,
    ) -> Result<Value, ApiError> {
        self.record("update_model", name.to_string())?;
        let annotated = annotations.entries().filter(|(_, v)| *v != 0).count();
        Ok(json!({"model": name, "annotated": annotated}))
    }

    async fn list_models(&self) -> Result<Value, ApiError> {
        self.record("list_models", String::new())?;
        Ok(json!(["A", "B"]))
    }

    async fn search(&self, model: &str, term: &str) -> Result<Value, ApiError> {
        self.record("search", format!("{model} {term}"))?;
        if let Some(ms) = self.search_delays.get(term) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        Ok(json!({"model": model, "term": term, "results": [format!("https://{term}.example")]}))
    }

    async fn upload_seed_urls(&self, model: &str, urls: &[String]) -> Result<(), ApiError> {
        self.record("upload_seed_urls", format!("{model} {}", urls.join(",")))
    }

    async fn model_stats(&self, model: &str) -> Result<Value, ApiError> {
        self.record("model_stats", model.to_string())?;
        Ok(json!({"model": model, "positive": 3, "negative": 1}))
    }
}

// -- Storage fakes ------------------------------------------------------------

/// Store whose writes always fail.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: "/read-only/state.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> String {
        FIXED_TIME.to_string()
    }
}

// -- Builders -----------------------------------------------------------------

pub fn make_dispatcher(api: Arc<FakeApi>) -> (IntentDispatcher, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::new());
    let dispatcher = IntentDispatcher::new(api, storage.clone()).with_clock(Arc::new(FixedClock));
    (dispatcher, storage)
}

pub fn make_store(api: Arc<FakeApi>) -> Store {
    let (dispatcher, _) = make_dispatcher(api);
    Store::new(dispatcher)
}
