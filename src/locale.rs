//! Locale preference and the locale-prefixed path scheme.
//! All routes live under `/{locale}/...`; an unknown or missing locale
//! segment falls back to the persisted preference, then the default.

use serde::{Deserialize, Serialize};

use crate::store::error::StoreResult;
use crate::store::storage::{KeyValueStorage, PREFERRED_LANGUAGE_KEY};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fr,
    Ar,
    En,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::Fr;

    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fr" => Some(Locale::Fr),
            "ar" => Some(Locale::Ar),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

/// Split a request path into its locale and the rest. When the first
/// segment is not a known locale the whole path is kept and the caller
/// redirects to the resolved locale.
pub fn resolve_locale_path<'a>(path: &'a str, preferred: Option<Locale>) -> (Locale, &'a str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (head, rest) = match trimmed.split_once('/') {
        Some((head, rest)) => (head, rest),
        None => (trimmed, ""),
    };
    match Locale::from_code(head) {
        Some(locale) => (locale, rest),
        None => (preferred.unwrap_or(Locale::DEFAULT), trimmed),
    }
}

/// Read the persisted locale preference, defaulting when absent or invalid
pub fn load_preferred<S: KeyValueStorage>(storage: &S) -> StoreResult<Locale> {
    Ok(storage
        .get(PREFERRED_LANGUAGE_KEY)?
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or(Locale::DEFAULT))
}

pub fn store_preferred<S: KeyValueStorage>(storage: &S, locale: Locale) -> StoreResult<()> {
    storage.set(PREFERRED_LANGUAGE_KEY, locale.code())
}
