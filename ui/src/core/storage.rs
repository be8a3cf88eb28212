//! Local persistence of the language preference.
//!
//! Browser builds use `window.localStorage`; native builds keep a small JSON
//! document in the platform config directory. Anything unreadable or outside
//! `{en, lv}` is treated as absent.

#[cfg(not(target_arch = "wasm32"))]
use std::collections::BTreeMap;

use thiserror::Error;

use crate::i18n::Language;

/// Why a preference could not be written.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("localStorage rejected the write")]
    Rejected,
    #[error("unable to determine config directory")]
    NoConfigDir,
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stored preference, defaulting to English when absent.
pub fn load_language(key: &str) -> Language {
    read_value(key)
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or_default()
}

pub fn save_language(key: &str, lang: Language) {
    if let Err(err) = write_value(key, lang.code()) {
        tracing::warn!(%err, "failed to persist language preference");
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn read_value(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn write_value(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()
        .ok_or(StorageError::Unavailable)?
        .set_item(key, value)
        .map_err(|_| StorageError::Rejected)
}

#[cfg(not(target_arch = "wasm32"))]
fn preferences_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("lv", "ictstat", "ictstat")
        .map(|dirs| dirs.config_dir().join("preferences.json"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_value(key: &str) -> Option<String> {
    read_value_at(&preferences_path()?, key)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_value(key: &str, value: &str) -> Result<(), StorageError> {
    let path = preferences_path().ok_or(StorageError::NoConfigDir)?;
    write_value_at(&path, key, value)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_value_at(path: &std::path::Path, key: &str) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let map: BTreeMap<String, String> = serde_json::from_str(&raw).ok()?;
    map.get(key).cloned()
}

#[cfg(not(target_arch = "wasm32"))]
fn write_value_at(path: &std::path::Path, key: &str, value: &str) -> Result<(), StorageError> {
    let mut map: BTreeMap<String, String> = std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();
    map.insert(key.to_string(), value.to_string());

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(&map)?;
    std::fs::write(path, json)?;
    Ok(())
}
