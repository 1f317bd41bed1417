//! URL based navigation.
//!
//! The browser location is mirrored into a signal; pages derive their state
//! (route, open dialog, pending ids) from it and change it only through
//! [`Navigator::navigate`].

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Query string without the leading `?`
    pub search: String,
}

impl Location {
    /// Split a relative URL like `/page-types/1?action=remove#x`
    pub fn from_url(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let (path, search) = match url.split_once('?') {
            Some((path, search)) => (path, search),
            None => (url, ""),
        };
        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            search: search.to_string(),
        }
    }

    fn current() -> Self {
        let Some(w) = window() else {
            return Self::default();
        };
        let location = w.location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        Self {
            path,
            search: search.trim_start_matches('?').to_string(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Navigator {
    location: RwSignal<Location>,
}

impl Navigator {
    pub fn new() -> Self {
        let location = RwSignal::new(Location::current());

        // Back/forward buttons
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            location.set(Location::current());
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Self { location }
    }

    pub fn path(&self) -> String {
        self.location.with(|l| l.path.clone())
    }

    pub fn search(&self) -> String {
        self.location.with(|l| l.search.clone())
    }

    /// Go to `url`. `replace == true` rewrites the current history entry
    /// (used when closing dialogs so "back" does not reopen them).
    pub fn navigate(&self, url: &str, replace: bool) {
        log::debug!("navigate: {} (replace={})", url, replace);
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let result = if replace {
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
            } else {
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
            };
            if let Err(e) = result {
                log::warn!("history update failed for {}: {:?}", url, e);
            }
        }
        self.location.set(Location::from_url(url));
    }

    pub fn back(&self) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_url() {
        let loc = Location::from_url("/page-types/1?action=remove#top");
        assert_eq!(loc.path, "/page-types/1");
        assert_eq!(loc.search, "action=remove");

        let loc = Location::from_url("/page-types");
        assert_eq!(loc.search, "");

        assert_eq!(Location::from_url("?x=1").path, "/");
    }
}
