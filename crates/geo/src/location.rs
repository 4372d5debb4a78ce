//! One-shot device location.
//!
//! A [`LocationProvider`] delivers fixes to registered callbacks until the
//! listener is removed. [`request_current_location`] turns that into a
//! future resolving with the first fix. The listener is removed as soon as
//! a fix arrives, and also when the future is dropped before that, so an
//! abandoned request never leaks a registration.

use crate::error::{GeoError, Result};
use crate::Coordinate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Accuracy/power trade-off requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    /// Best available fix, typically GPS
    #[default]
    HighAccuracy,
    /// Block-level accuracy
    Balanced,
    /// City-level accuracy
    LowPower,
}

/// What the caller wants from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequest {
    /// Accuracy wanted
    pub priority: Priority,
    /// Desired interval between updates
    pub interval: Duration,
    /// Stop after this many fixes; `None` keeps updating
    pub max_updates: Option<u32>,
}

impl LocationRequest {
    /// A single high-accuracy fix, as soon as possible.
    pub fn high_accuracy_once() -> Self {
        Self {
            priority: Priority::HighAccuracy,
            interval: Duration::ZERO,
            max_updates: Some(1),
        }
    }
}

/// A position reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationFix {
    /// Reported position
    pub coordinate: Coordinate,
    /// Horizontal accuracy radius in meters, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f32>,
}

impl LocationFix {
    /// Fix at `coordinate` with unknown accuracy.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            accuracy_m: None,
        }
    }

    /// Sets the accuracy radius in meters.
    pub fn with_accuracy(mut self, meters: f32) -> Self {
        self.accuracy_m = Some(meters);
        self
    }

    /// Short text shown after a successful fix, e.g. `Lokasi: -7.2930, 112.8080`.
    pub fn summary(&self) -> String {
        format!(
            "Lokasi: {:.4}, {:.4}",
            self.coordinate.latitude, self.coordinate.longitude
        )
    }
}

/// Handle identifying one registration with a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked with each fix.
pub type LocationCallback = Box<dyn FnMut(LocationFix) + Send + 'static>;

/// Source of device location updates.
pub trait LocationProvider: Send + Sync {
    /// Whether the user granted location access.
    fn is_permitted(&self) -> bool;

    /// Registers `callback` for fixes matching `request`.
    fn request_updates(&self, request: LocationRequest, callback: LocationCallback)
        -> Result<ListenerId>;

    /// Removes a registration. Unknown ids are ignored.
    fn remove_updates(&self, id: ListenerId);
}

/// Removes the registration when dropped.
struct Registration {
    provider: Arc<dyn LocationProvider>,
    id: ListenerId,
}

impl Drop for Registration {
    fn drop(&mut self) {
        debug!(listener = self.id.0, "removing location listener");
        self.provider.remove_updates(self.id);
    }
}

/// Resolves with the next fix from `provider`.
///
/// Fails with [`GeoError::PermissionDenied`] before registering anything if
/// access was not granted, and with [`GeoError::LocationUnavailable`] if the
/// provider drops the listener without ever calling it.
pub async fn request_current_location(
    provider: Arc<dyn LocationProvider>,
) -> Result<LocationFix> {
    if !provider.is_permitted() {
        warn!("location requested without permission");
        return Err(GeoError::PermissionDenied);
    }

    let (tx, rx) = oneshot::channel();
    let mut tx = Some(tx);
    let callback: LocationCallback = Box::new(move |fix| {
        if let Some(tx) = tx.take() {
            // receiver gone means the request was abandoned
            let _ = tx.send(fix);
        }
    });

    let id = provider.request_updates(LocationRequest::high_accuracy_once(), callback)?;
    let _registration = Registration {
        provider: Arc::clone(&provider),
        id,
    };
    debug!(listener = id.0, "waiting for location fix");

    let fix = rx.await.map_err(|_| GeoError::LocationUnavailable)?;
    debug!(coordinate = %fix.coordinate, "location fix received");
    Ok(fix)
}

/// [`request_current_location`] bounded by `timeout`.
pub async fn request_current_location_within(
    provider: Arc<dyn LocationProvider>,
    timeout: Duration,
) -> Result<LocationFix> {
    tokio::time::timeout(timeout, request_current_location(provider))
        .await
        .map_err(|_| GeoError::LocationTimeout(timeout))?
}

struct Listener {
    request: LocationRequest,
    callback: LocationCallback,
    delivered: u32,
}

/// In-process provider fed by [`push`](ManualLocationProvider::push).
///
/// Useful where no positioning hardware exists: fixes are typed in or come
/// from another source and are handed to whoever is listening.
pub struct ManualLocationProvider {
    permitted: AtomicBool,
    next_id: AtomicU64,
    listeners: Mutex<BTreeMap<ListenerId, Listener>>,
}

impl Default for ManualLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ManualLocationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualLocationProvider")
            .field("permitted", &self.permitted.load(Ordering::Relaxed))
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ManualLocationProvider {
    /// Provider with permission granted.
    pub fn new() -> Self {
        Self {
            permitted: AtomicBool::new(true),
            next_id: AtomicU64::new(1),
            listeners: Mutex::new(BTreeMap::new()),
        }
    }

    /// Provider whose permission was refused.
    pub fn denied() -> Self {
        let provider = Self::new();
        provider.set_permitted(false);
        provider
    }

    pub fn set_permitted(&self, permitted: bool) {
        self.permitted.store(permitted, Ordering::Relaxed);
    }

    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    /// Delivers `fix` to every listener and returns how many were called.
    ///
    /// Listeners that reached their `max_updates` are dropped afterwards.
    /// Callbacks run under the provider lock and must not call back into it.
    pub fn push(&self, fix: LocationFix) -> usize {
        let mut listeners = self.lock();
        for listener in listeners.values_mut() {
            (listener.callback)(fix);
            listener.delivered += 1;
        }
        let delivered = listeners.len();

        listeners.retain(|_, l| l.request.max_updates.is_none_or(|max| l.delivered < max));
        debug!(delivered, remaining = listeners.len(), "location fix pushed");
        delivered
    }

    /// Drops every listener without delivering anything.
    pub fn shutdown(&self) {
        let dropped = std::mem::take(&mut *self.lock());
        debug!(dropped = dropped.len(), "location provider shut down");
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<ListenerId, Listener>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocationProvider for ManualLocationProvider {
    fn is_permitted(&self) -> bool {
        self.permitted.load(Ordering::Relaxed)
    }

    fn request_updates(
        &self,
        request: LocationRequest,
        callback: LocationCallback,
    ) -> Result<ListenerId> {
        if !self.is_permitted() {
            return Err(GeoError::PermissionDenied);
        }

        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().insert(
            id,
            Listener {
                request,
                callback,
                delivered: 0,
            },
        );
        Ok(id)
    }

    fn remove_updates(&self, id: ListenerId) {
        self.lock().remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn surabaya() -> LocationFix {
        LocationFix::new(Coordinate::new(-7.2930192, 112.8079525)).with_accuracy(12.5)
    }

    async fn wait_for_listener(provider: &ManualLocationProvider) {
        while provider.listener_count() == 0 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_high_accuracy_once() {
        let request = LocationRequest::high_accuracy_once();
        assert_eq!(request.priority, Priority::HighAccuracy);
        assert_eq!(request.max_updates, Some(1));
    }

    #[test]
    fn test_fix_summary() {
        assert_eq!(surabaya().summary(), "Lokasi: -7.2930, 112.8080");
    }

    #[test]
    fn test_manual_provider_delivery_and_limits() {
        let provider = ManualLocationProvider::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let once = LocationRequest::high_accuracy_once();
        provider
            .request_updates(once, Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        let counter = Arc::clone(&calls);
        let continuous = LocationRequest {
            max_updates: None,
            ..once
        };
        let id = provider
            .request_updates(continuous, Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        assert_eq!(provider.push(surabaya()), 2);
        assert_eq!(provider.listener_count(), 1);
        assert_eq!(provider.push(surabaya()), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        provider.remove_updates(id);
        provider.remove_updates(id);
        assert_eq!(provider.push(surabaya()), 0);
    }

    #[test]
    fn test_denied_provider_refuses_registration() {
        let provider = ManualLocationProvider::denied();
        let result = provider.request_updates(LocationRequest::high_accuracy_once(), Box::new(|_| {}));
        assert_eq!(result, Err(GeoError::PermissionDenied));
    }

    #[tokio::test]
    async fn test_request_resolves_with_first_fix() {
        let provider = Arc::new(ManualLocationProvider::new());
        let request = tokio::spawn(request_current_location(provider.clone()));

        wait_for_listener(&provider).await;
        provider.push(surabaya());

        let fix = request.await.unwrap().unwrap();
        assert_eq!(fix, surabaya());
        assert_eq!(provider.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_permission_denied_registers_nothing() {
        let provider = Arc::new(ManualLocationProvider::denied());
        let result = request_current_location(provider.clone()).await;
        assert_eq!(result, Err(GeoError::PermissionDenied));
        assert_eq!(provider.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_shutdown_is_unavailable() {
        let provider = Arc::new(ManualLocationProvider::new());
        let request = tokio::spawn(request_current_location(provider.clone()));

        wait_for_listener(&provider).await;
        provider.shutdown();

        assert_eq!(request.await.unwrap(), Err(GeoError::LocationUnavailable));
    }

    #[tokio::test]
    async fn test_dropping_request_removes_listener() {
        let provider = Arc::new(ManualLocationProvider::new());
        let mut request = Box::pin(request_current_location(provider.clone()));

        let pending = tokio::time::timeout(Duration::from_millis(20), &mut request).await;
        assert!(pending.is_err());
        assert_eq!(provider.listener_count(), 1);

        drop(request);
        assert_eq!(provider.listener_count(), 0);
        assert_eq!(provider.push(surabaya()), 0);
    }

    #[tokio::test]
    async fn test_timeout_reports_and_cleans_up() {
        let provider = Arc::new(ManualLocationProvider::new());
        let result =
            request_current_location_within(provider.clone(), Duration::from_millis(20)).await;

        assert_eq!(result, Err(GeoError::LocationTimeout(Duration::from_millis(20))));
        assert_eq!(provider.listener_count(), 0);
    }
}
