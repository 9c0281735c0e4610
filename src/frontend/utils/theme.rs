use crate::frontend::utils::use_cookie;
use leptos::prelude::*;
use leptos_use::use_preferred_dark;

/// Cookie-backed theme preference. Falls back to the browser preference
/// until the user toggles it explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    cookie: WriteSignal<Option<bool>>,
    pub is_dark: Signal<bool>,
    pub name: Signal<&'static str>,
}

impl Theme {
    pub fn init() -> Self {
        let cookie = use_cookie("dark_mode");
        let is_dark = Signal::derive(move || {
            let default = || use_preferred_dark().get_untracked();
            cookie.0.get().unwrap_or_else(default)
        });
        let name = Signal::derive(move || if is_dark.get() { "forest" } else { "emerald" });
        Self {
            cookie: cookie.1,
            is_dark,
            name,
        }
    }

    pub fn toggle(&mut self) {
        let new = !self.is_dark.get_untracked();
        self.cookie.set(Some(new));
    }
}
