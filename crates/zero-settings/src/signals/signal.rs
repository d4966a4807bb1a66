//! Publish/subscribe signal carrying a namespace key

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde_json::Value;

/// Payload sent when a namespace's overrides change
#[derive(Debug, Clone, PartialEq)]
pub struct SettingChanged {
    /// The namespace key whose overrides changed
    pub setting: String,
    /// The new overrides, when the sender knows them
    pub value: Option<Value>,
    /// `true` when an override is applied, `false` when it is reverted
    pub enter: bool,
}

impl SettingChanged {
    pub fn new(setting: impl Into<String>) -> Self {
        Self {
            setting: setting.into(),
            value: None,
            enter: true,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Mark the event as the revert of an earlier change
    pub fn exiting(mut self) -> Self {
        self.enter = false;
        self
    }
}

/// Handler invoked for every event sent on a signal
pub type ChangeHandler = Arc<dyn Fn(&SettingChanged) + Send + Sync>;

/// Identifies one connected handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Synchronous publish/subscribe channel
///
/// Every handler receives every event; filtering on the key is up to the
/// handler. Handlers run on the sender's thread, in connection order, and may
/// connect or disconnect handlers themselves.
pub struct ChangeSignal {
    handlers: RwLock<Vec<(SubscriptionId, ChangeHandler)>>,
    next_id: AtomicU64,
}

impl Default for ChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeSignal {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Connect a handler
    pub fn connect<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&SettingChanged) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().push((id, Arc::new(handler)));
        id
    }

    /// Disconnect a handler, returning whether it was connected
    pub fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        handlers.len() != before
    }

    /// Send an event to every connected handler
    ///
    /// Returns the number of handlers invoked.
    pub fn send(&self, event: &SettingChanged) -> usize {
        // Snapshot first so handlers can touch the signal without deadlocking
        let handlers: Vec<ChangeHandler> = self
            .handlers
            .read()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn receiver_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl std::fmt::Debug for ChangeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeSignal")
            .field("receivers", &self.receiver_count())
            .finish()
    }
}

/// Process-wide signal for override changes
static SETTING_CHANGED: Lazy<ChangeSignal> = Lazy::new(ChangeSignal::new);

/// The process-wide "setting changed" signal
///
/// Hosts that mutate their global configuration store send on this signal;
/// resolvers registered for reload clear their caches in response.
pub fn setting_changed() -> &'static ChangeSignal {
    &SETTING_CHANGED
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serde_json::json;

    #[test]
    fn test_connect_send_disconnect() {
        let signal = ChangeSignal::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let id = signal.connect(move |event| sink.lock().push(event.setting.clone()));
        assert_eq!(signal.receiver_count(), 1);

        assert_eq!(signal.send(&SettingChanged::new("APP")), 1);
        assert_eq!(signal.send(&SettingChanged::new("OTHER")), 1);
        assert_eq!(*seen.lock(), vec!["APP".to_string(), "OTHER".to_string()]);

        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        assert_eq!(signal.send(&SettingChanged::new("APP")), 0);
        assert_eq!(seen.lock().len(), 2);
    }

    #[test]
    fn test_handlers_run_in_connection_order() {
        let signal = ChangeSignal::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for index in 0..3 {
            let order = order.clone();
            signal.connect(move |_| order.lock().push(index));
        }

        signal.send(&SettingChanged::new("APP"));
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_handler_may_disconnect_itself() {
        let signal = Arc::new(ChangeSignal::new());
        let slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));

        let inner_signal = signal.clone();
        let inner_slot = slot.clone();
        let id = signal.connect(move |_| {
            if let Some(id) = *inner_slot.lock() {
                inner_signal.disconnect(id);
            }
        });
        *slot.lock() = Some(id);

        assert_eq!(signal.send(&SettingChanged::new("APP")), 1);
        assert_eq!(signal.receiver_count(), 0);
    }

    #[test]
    fn test_event_builders() {
        let event = SettingChanged::new("APP").with_value(json!({"KEY": 1})).exiting();
        assert_eq!(event.setting, "APP");
        assert_eq!(event.value, Some(json!({"KEY": 1})));
        assert!(!event.enter);
    }

    #[test]
    fn test_global_signal_is_shared() {
        let a = setting_changed() as *const ChangeSignal;
        let b = setting_changed() as *const ChangeSignal;
        assert_eq!(a, b);
    }
}
