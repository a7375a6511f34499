//! Offline-first write queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! When a write fails for connectivity reasons (or the browser already knows
//! it is offline) the intended mutation is persisted to a local record store
//! and a background-sync tag is registered so the service worker can replay
//! it. The UI reports success optimistically. When the page itself sees the
//! browser come back online it flushes the queue: where the service worker
//! can replay, the page only re-registers the sync tags and leaves sending to
//! the worker, so a record is never sent from both sides. Elsewhere the page
//! replays the queue directly.
//!
//! DESIGN
//! ======
//! `RecordStore` and `SyncRegistrar` are the seams: IndexedDB and the service
//! worker registration in the browser, in-memory fakes everywhere else.

#![allow(async_fn_in_trait)]


#[cfg(feature = "hydrate")]
pub mod background_sync;
pub mod flows;
#[cfg(feature = "hydrate")]
pub mod idb;
pub mod memory;

use records::pending::coalesce;
use records::{PREFERENCES_CACHE_KEY, PendingMutation, PendingRecord, RecordError, StoreName, SyncTag, UserPreferences};

use crate::config;
use crate::net::http::{ApiError, ApiRequest, ErrorClass, Transport, call_unit};
use crate::net::{feedback, terms};
use crate::util::clock::now_ms;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No local database in this environment.
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("{0} is not supported by this browser")]
    Unsupported(&'static str),
    #[error("local storage error: {0}")]
    Backend(String),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Keyed JSON records grouped into named stores.
pub trait RecordStore {
    async fn put(&self, store: StoreName, key: &str, value: &serde_json::Value) -> Result<(), StoreError>;
    async fn get(&self, store: StoreName, key: &str) -> Result<Option<serde_json::Value>, StoreError>;
    async fn delete(&self, store: StoreName, key: &str) -> Result<(), StoreError>;
    async fn all(&self, store: StoreName) -> Result<Vec<serde_json::Value>, StoreError>;
}

/// Requests a background-sync wake-up for a tag.
pub trait SyncRegistrar {
    async fn register(&self, tag: SyncTag) -> Result<(), StoreError>;

    /// Whether a service worker replays registered tags on its own.
    async fn replays_in_background(&self) -> bool;
}

/// What a replay pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Records accepted by the server and removed locally.
    pub sent: usize,
    /// Records the server rejected; removed locally.
    pub dropped: usize,
    /// Records still queued because the connection dropped again.
    pub remaining: usize,
}

/// How a flush pass dealt with the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flush {
    /// The service worker owns replay; these tags were re-registered.
    HandedOff(Vec<SyncTag>),
    /// The page replayed the queue itself.
    Replayed(ReplayReport),
}

pub struct OfflineQueue<S, R> {
    store: S,
    sync: R,
}

impl<S: RecordStore, R: SyncRegistrar> OfflineQueue<S, R> {
    pub fn new(store: S, sync: R) -> Self {
        Self { store, sync }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a mutation and register its sync tag.
    ///
    /// Earlier queued records made obsolete by this one are removed first.
    /// A failed sync registration is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the record could not be persisted.
    pub async fn enqueue(&self, mutation: PendingMutation, token: Option<String>) -> Result<PendingRecord, StoreError> {
        let incoming = PendingRecord { id: uuid::Uuid::new_v4().to_string(), mutation, token, timestamp: now_ms() };
        let queued = self.pending().await?;
        let merged = coalesce(&queued, incoming);
        for (store, id) in &merged.remove {
            self.store.delete(*store, id).await?;
        }
        let record = merged.record;
        self.store
            .put(record.mutation.store(), &record.id, &record.to_value())
            .await?;
        leptos::logging::log!("queued {} for background sync", record.mutation.describe());

        let tag = record.mutation.sync_tag();
        if let Err(e) = self.sync.register(tag).await {
            leptos::logging::warn!("background sync registration failed for {}: {e}", tag.as_str());
        }
        Ok(record)
    }

    /// Every queued record across the pending stores, oldest first.
    /// Records that no longer decode are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if a store cannot be read.
    pub async fn pending(&self) -> Result<Vec<PendingRecord>, StoreError> {
        let mut records = Vec::new();
        for store in StoreName::PENDING {
            for value in self.store.all(store).await? {
                match PendingRecord::from_value(value) {
                    Ok(record) => records.push(record),
                    Err(e) => leptos::logging::warn!("skipping queued record in {}: {e}", store.as_str()),
                }
            }
        }
        records.sort_by_key(|r| r.timestamp);
        Ok(records)
    }

    /// Replay queued records in timestamp order.
    ///
    /// Each record is sent with the token captured when it was queued. A
    /// connectivity failure stops the pass and leaves the rest queued; any
    /// other failure drops that record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the queue cannot be read or updated.
    pub async fn replay(&self, transport: &impl Transport) -> Result<ReplayReport, StoreError> {
        let records = self.pending().await?;
        let mut report = ReplayReport::default();
        for (i, record) in records.iter().enumerate() {
            match send_pending(transport, record).await {
                Ok(()) => {
                    self.store.delete(record.mutation.store(), &record.id).await?;
                    report.sent += 1;
                }
                Err(e) if e.class() == ErrorClass::Connectivity => {
                    report.remaining = records.len() - i;
                    break;
                }
                Err(e) => {
                    leptos::logging::warn!("dropping queued {}: {e}", record.mutation.describe());
                    self.store.delete(record.mutation.store(), &record.id).await?;
                    report.dropped += 1;
                }
            }
        }
        Ok(report)
    }

    /// Hand queued records to the service worker when it can replay them,
    /// otherwise replay from the page.
    ///
    /// A tag whose registration fails stays queued for the next flush.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the queue cannot be read or updated.
    pub async fn flush(&self, transport: &impl Transport) -> Result<Flush, StoreError> {
        if !self.sync.replays_in_background().await {
            return Ok(Flush::Replayed(self.replay(transport).await?));
        }
        let mut tags: Vec<SyncTag> = Vec::new();
        for record in self.pending().await? {
            let tag = record.mutation.sync_tag();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        let mut handed = Vec::with_capacity(tags.len());
        for tag in tags {
            match self.sync.register(tag).await {
                Ok(()) => handed.push(tag),
                Err(e) => leptos::logging::warn!("could not hand {} to the service worker: {e}", tag.as_str()),
            }
        }
        Ok(Flush::HandedOff(handed))
    }

    /// Overwrite the cached preference set.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the cache cannot be written.
    pub async fn cache_preferences(&self, prefs: &UserPreferences) -> Result<(), StoreError> {
        let value = serde_json::to_value(prefs).map_err(|e| StoreError::Backend(e.to_string()))?;
        self.store
            .put(StoreName::UserPreferences, PREFERENCES_CACHE_KEY, &value)
            .await
    }

    /// The cached preference set, if one was ever stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the cache cannot be read.
    pub async fn cached_preferences(&self) -> Result<Option<UserPreferences>, StoreError> {
        let Some(value) = self.store.get(StoreName::UserPreferences, PREFERENCES_CACHE_KEY).await? else {
            return Ok(None);
        };
        Ok(serde_json::from_value(value).ok())
    }
}

async fn send_pending(transport: &impl Transport, record: &PendingRecord) -> Result<(), ApiError> {
    let token = record.token.as_deref();
    let request = match &record.mutation {
        PendingMutation::Feedback { payload } => feedback::submit_request(token, payload),
        PendingMutation::CommentEdit { comment_id, content } => terms::edit_request(token, comment_id, content),
        PendingMutation::CommentDelete { comment_id } => terms::delete_request(token, comment_id),
        PendingMutation::SettingsUpdate { update } => {
            ApiRequest::put(config::user_preferences(), update).bearer(token)
        }
    };
    call_unit(transport, request).await
}

/// Queue wired to IndexedDB and the service worker.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn browser_queue() -> OfflineQueue<idb::IdbStore, background_sync::ServiceWorkerSync> {
    OfflineQueue::new(idb::IdbStore, background_sync::ServiceWorkerSync)
}
