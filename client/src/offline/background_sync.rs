//! Service worker registration and Background Sync tags.
//!
//! The Background Sync API is not in `web-sys`' stable surface, so the
//! `sync` manager is reached through `js_sys::Reflect` on the ready
//! registration.

use records::SyncTag;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{StoreError, SyncRegistrar};

pub const SERVICE_WORKER_URL: &str = "/sw.js";

#[derive(Clone, Copy, Debug, Default)]
pub struct ServiceWorkerSync;

fn container() -> Result<web_sys::ServiceWorkerContainer, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    let navigator = window.navigator();
    let has_sw = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !has_sw {
        return Err(StoreError::Unsupported("service workers"));
    }
    Ok(navigator.service_worker())
}

fn backend(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Register the offline service worker. Failures are logged.
pub async fn register_service_worker() {
    let result = async {
        let promise = container()?.register(SERVICE_WORKER_URL);
        JsFuture::from(promise).await.map_err(backend)
    }
    .await;
    match result {
        Ok(_) => leptos::logging::log!("service worker registered"),
        Err(e) => leptos::logging::warn!("service worker registration failed: {e}"),
    }
}

/// The `SyncManager` of the active registration.
async fn sync_manager() -> Result<JsValue, StoreError> {
    let ready = container()?.ready().map_err(backend)?;
    let registration = JsFuture::from(ready).await.map_err(backend)?;
    let sync = js_sys::Reflect::get(&registration, &JsValue::from_str("sync")).map_err(backend)?;
    if sync.is_undefined() || sync.is_null() {
        return Err(StoreError::Unsupported("background sync"));
    }
    Ok(sync)
}

impl SyncRegistrar for ServiceWorkerSync {
    async fn replays_in_background(&self) -> bool {
        sync_manager().await.is_ok()
    }

    async fn register(&self, tag: SyncTag) -> Result<(), StoreError> {
        let sync = sync_manager().await?;
        let register: js_sys::Function = js_sys::Reflect::get(&sync, &JsValue::from_str("register"))
            .map_err(backend)?
            .dyn_into()
            .map_err(backend)?;
        let promise: js_sys::Promise = register
            .call1(&sync, &JsValue::from_str(tag.as_str()))
            .map_err(backend)?
            .dyn_into()
            .map_err(backend)?;
        JsFuture::from(promise).await.map_err(backend)?;
        Ok(())
    }
}
