//! Persistence and environment helpers for the app shell.

use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const THEME_KEY: &str = "folio.theme";

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub(crate) fn load_theme() -> ThemeMode {
    if let Ok(value) = LocalStorage::get::<ThemeMode>(THEME_KEY) {
        return value;
    }
    if let Ok(value) = LocalStorage::get::<String>(THEME_KEY) {
        if let Some(theme) = ThemeMode::parse(&value) {
            return theme;
        }
    }
    ThemeMode::from_prefers_dark(prefers_dark_scheme())
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    set_storage(THEME_KEY, theme);
}

fn prefers_dark_scheme() -> bool {
    window()
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
