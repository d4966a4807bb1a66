//! Change notification
//!
//! A minimal publish/subscribe channel the host fires whenever the overrides
//! of a namespace change. Resolvers subscribe through
//! [`register_for_reload`](crate::resolver::register_for_reload).

mod signal;

pub use signal::{ChangeSignal, ChangeHandler, SettingChanged, SubscriptionId, setting_changed};
