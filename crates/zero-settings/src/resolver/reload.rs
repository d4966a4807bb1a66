//! Automatic cache invalidation on change notifications

use std::sync::Arc;

use crate::log_info;
use crate::logging::Logger;
use crate::signals::{ChangeSignal, SubscriptionId};
use super::settings_resolver::SettingsResolver;

/// Clear the resolver's whole cache whenever `signal` reports its key
///
/// The subscription holds only a weak reference, so it never keeps the
/// resolver alive; once the resolver is dropped the handler does nothing.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use zero_settings::overrides::MemoryOverrideProvider;
/// use zero_settings::resolver::{register_for_reload, SettingsResolver};
/// use zero_settings::signals::{ChangeSignal, SettingChanged};
///
/// let provider = Arc::new(MemoryOverrideProvider::new());
/// let defaults = json!({"DEBUG": false}).as_object().cloned().unwrap();
/// let settings = Arc::new(SettingsResolver::new("MYLIB", defaults, provider.clone()).unwrap());
///
/// let signal = ChangeSignal::new();
/// register_for_reload(&settings, &signal);
///
/// assert_eq!(settings.get("DEBUG").unwrap(), json!(false));
/// provider.set_value("MYLIB", "DEBUG", json!(true));
/// signal.send(&SettingChanged::new("MYLIB"));
/// assert_eq!(settings.get("DEBUG").unwrap(), json!(true));
/// ```
pub fn register_for_reload(resolver: &Arc<SettingsResolver>, signal: &ChangeSignal) -> SubscriptionId {
    let weak = Arc::downgrade(resolver);
    signal.connect(move |event| {
        let Some(resolver) = weak.upgrade() else {
            return;
        };
        if event.setting == resolver.key() {
            log_info!(resolver.logger, "Overrides for '{}' changed, clearing cache", resolver.key());
            resolver.clear_cache(None);
        }
    })
}

/// Register against the process-wide [`setting_changed`](crate::signals::setting_changed) signal
pub fn register_for_global_reload(resolver: &Arc<SettingsResolver>) -> SubscriptionId {
    register_for_reload(resolver, crate::signals::setting_changed())
}

/// Stop automatic invalidation for a registration
pub fn unregister_for_reload(signal: &ChangeSignal, id: SubscriptionId) -> bool {
    signal.disconnect(id)
}
