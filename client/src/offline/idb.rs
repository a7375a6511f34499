//! IndexedDB-backed record store.
//!
//! DESIGN
//! ======
//! One database (`MaritoOfflineDB`) holds every named store with out-of-line
//! keys. Values are written as JSON strings so the shape stays identical to
//! what the in-memory store keeps. Each operation opens the database, runs a
//! single-store transaction, and closes it again; the volume here is a handful
//! of records per session.

use records::StoreName;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{IdbDatabase, IdbObjectStore, IdbRequest, IdbTransactionMode};

use super::{RecordStore, StoreError};

pub const DB_NAME: &str = "MaritoOfflineDB";
pub const DB_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, Default)]
pub struct IdbStore;

fn backend(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Resolve with the request's result once it succeeds.
async fn settle(request: &IdbRequest) -> Result<JsValue, StoreError> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let req = request.clone();
        let on_success = Closure::once_into_js(move |_ev: web_sys::Event| {
            let result = req.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let on_error = Closure::once_into_js(move |_ev: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("indexeddb request failed"));
        });
        request.set_onsuccess(Some(on_success.unchecked_ref()));
        request.set_onerror(Some(on_error.unchecked_ref()));
    });
    JsFuture::from(promise).await.map_err(backend)
}

async fn open() -> Result<IdbDatabase, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    let factory = window
        .indexed_db()
        .map_err(backend)?
        .ok_or(StoreError::Unsupported("IndexedDB"))?;
    let request = factory.open_with_u32(DB_NAME, DB_VERSION).map_err(backend)?;

    let upgrading = request.clone();
    let on_upgrade = Closure::once_into_js(move |_ev: web_sys::Event| {
        let Ok(result) = upgrading.result() else {
            return;
        };
        let Ok(db) = result.dyn_into::<IdbDatabase>() else {
            return;
        };
        let existing = db.object_store_names();
        for store in StoreName::ALL {
            if !existing.contains(store.as_str()) {
                if let Err(e) = db.create_object_store(store.as_str()) {
                    leptos::logging::warn!("failed to create store {}: {e:?}", store.as_str());
                }
            }
        }
    });
    request.set_onupgradeneeded(Some(on_upgrade.unchecked_ref()));

    let db = settle(&request).await?;
    db.dyn_into::<IdbDatabase>().map_err(backend)
}

fn object_store(db: &IdbDatabase, store: StoreName, mode: IdbTransactionMode) -> Result<IdbObjectStore, StoreError> {
    db.transaction_with_str_and_mode(store.as_str(), mode)
        .and_then(|tx| tx.object_store(store.as_str()))
        .map_err(backend)
}

fn decode(value: &JsValue) -> Option<serde_json::Value> {
    value.as_string().and_then(|raw| serde_json::from_str(&raw).ok())
}

impl RecordStore for IdbStore {
    async fn put(&self, store: StoreName, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        let db = open().await?;
        let result = async {
            let os = object_store(&db, store, IdbTransactionMode::Readwrite)?;
            let request = os
                .put_with_key(&JsValue::from_str(&value.to_string()), &JsValue::from_str(key))
                .map_err(backend)?;
            settle(&request).await.map(|_| ())
        }
        .await;
        db.close();
        result
    }

    async fn get(&self, store: StoreName, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let db = open().await?;
        let result = async {
            let os = object_store(&db, store, IdbTransactionMode::Readonly)?;
            let request = os.get(&JsValue::from_str(key)).map_err(backend)?;
            let value = settle(&request).await?;
            Ok(decode(&value))
        }
        .await;
        db.close();
        result
    }

    async fn delete(&self, store: StoreName, key: &str) -> Result<(), StoreError> {
        let db = open().await?;
        let result = async {
            let os = object_store(&db, store, IdbTransactionMode::Readwrite)?;
            let request = os.delete(&JsValue::from_str(key)).map_err(backend)?;
            settle(&request).await.map(|_| ())
        }
        .await;
        db.close();
        result
    }

    async fn all(&self, store: StoreName) -> Result<Vec<serde_json::Value>, StoreError> {
        let db = open().await?;
        let result = async {
            let os = object_store(&db, store, IdbTransactionMode::Readonly)?;
            let request = os.get_all().map_err(backend)?;
            let values = settle(&request).await?;
            let array: js_sys::Array = values.dyn_into().map_err(backend)?;
            Ok(array.iter().filter_map(|v| decode(&v)).collect())
        }
        .await;
        db.close();
        result
    }
}
