use crate::error::ThemeError;
use crate::utils::theme_state::{ Subscription, ThemeMode, ThemeStore };

pub use platform::root_class_list;

/// A mutable set of class tokens on some element.
pub trait ClassList {
    fn remove(&mut self, token: &str) -> Result<(), ThemeError>;
    fn add(&mut self, token: &str) -> Result<(), ThemeError>;
}

/// Clears every theme token and adds the one for `mode`.
pub fn apply_mode<C: ClassList + ?Sized>(classes: &mut C, mode: ThemeMode) -> Result<(), ThemeError> {
    for stale in ThemeMode::ALL {
        classes.remove(stale.as_class())?;
    }
    classes.add(mode.as_class())
}

/// Applies `mode` to a resolved class list. Failures are logged and the
/// sync is skipped; returns whether the class list was updated.
pub fn sync_class_list<C: ClassList>(classes: Result<C, ThemeError>, mode: ThemeMode) -> bool {
    match classes.and_then(|mut classes| apply_mode(&mut classes, mode)) {
        Ok(()) => {
            log::debug!("Root element class set to {}", mode);
            true
        }
        Err(e) => {
            log::error!("Failed to apply theme class {}: {}", mode, e);
            false
        }
    }
}

pub fn sync_root_class(mode: ThemeMode) {
    sync_class_list(root_class_list(), mode);
}

/// Runs `sync` with the current mode now and again after every toggle.
pub fn attach_root_sync<F>(store: &mut ThemeStore, mut sync: F) -> Subscription
    where F: FnMut(ThemeMode) + 'static
{
    sync(store.mode());
    store.subscribe(sync)
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use wasm_bindgen::JsValue;

    use super::ClassList;
    use crate::error::ThemeError;

    pub struct RootClassList(web_sys::DomTokenList);

    impl ClassList for RootClassList {
        fn remove(&mut self, token: &str) -> Result<(), ThemeError> {
            self.0.remove_1(token).map_err(js_error)
        }

        fn add(&mut self, token: &str) -> Result<(), ThemeError> {
            self.0.add_1(token).map_err(js_error)
        }
    }

    fn js_error(err: JsValue) -> ThemeError {
        ThemeError::ClassList(format!("{:?}", err))
    }

    /// The class list of `<html>`.
    pub fn root_class_list() -> Result<RootClassList, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        let document = window.document().ok_or(ThemeError::NoDocument)?;
        let root = document.document_element().ok_or(ThemeError::NoRootElement)?;
        Ok(RootClassList(root.class_list()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use dioxus::prelude::document;

    use super::ClassList;
    use crate::error::ThemeError;

    // Desktop and mobile renderers run the page in a webview, so the class
    // list is only reachable through script evaluation.
    pub struct RootClassList;

    impl ClassList for RootClassList {
        fn remove(&mut self, token: &str) -> Result<(), ThemeError> {
            run(format!("document.documentElement.classList.remove({:?});", token))
        }

        fn add(&mut self, token: &str) -> Result<(), ThemeError> {
            run(format!("document.documentElement.classList.add({:?});", token))
        }
    }

    // The eval result only resolves asynchronously, after the observer has
    // returned, so a webview that lacks `<html>` cannot be reported here.
    fn run(script: String) -> Result<(), ThemeError> {
        let _ = document::eval(&script);
        Ok(())
    }

    pub fn root_class_list() -> Result<RootClassList, ThemeError> {
        Ok(RootClassList)
    }
}
