use dioxus::prelude::*;

use crate::utils::{ attach_root_sync, sync_root_class, ThemeStore };

/// Keeps the document root's class in step with the theme store for as
/// long as the calling component is mounted.
///
/// The class is applied once on the first render and then once per toggle.
/// The observer is removed when the component is dropped.
pub fn use_root_class(mut store: Signal<ThemeStore>) {
    let subscription = use_hook(move || {
        let subscription = attach_root_sync(&mut store.write(), sync_root_class);
        log::debug!("Root class sync attached ({:?})", subscription);
        subscription
    });

    use_drop(move || {
        // The store may already be gone if the provider unmounted first.
        if let Ok(mut store) = store.try_write() {
            store.unsubscribe(subscription);
            log::debug!("Root class sync detached ({:?})", subscription);
        }
    });
}
