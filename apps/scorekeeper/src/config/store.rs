use std::env;
use std::str::FromStr;

use crate::error::AppError;

const DEFAULT_SQLITE_FILE: &str = "whist.sqlite";

/// Where the saved records live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    /// SQLite database file; created on first use
    SqliteFile(String),
    /// In-process SQLite; gone when the connection closes
    SqliteMemory,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sqlite-file" => Ok(Self::SqliteFile(sqlite_file())),
            "sqlite-memory" => Ok(Self::SqliteMemory),
            other => Err(AppError::config(format!(
                "WHIST_DB must be 'sqlite-file' or 'sqlite-memory', got '{other}'"
            ))),
        }
    }
}

/// Read the store selection from `WHIST_DB` (default `sqlite-file`).
pub fn store_kind_from_env() -> Result<StoreKind, AppError> {
    match env::var("WHIST_DB") {
        Ok(value) => value.parse(),
        Err(_) => Ok(StoreKind::SqliteFile(sqlite_file())),
    }
}

/// Connection URL for the selected store.
///
/// File paths containing URL delimiters (`?`, `#`, `%`) are rejected rather
/// than silently producing a different path.
pub fn store_url(kind: &StoreKind) -> Result<String, AppError> {
    match kind {
        StoreKind::SqliteFile(path) => {
            if let Some(c) = path.chars().find(|c| matches!(c, '?' | '#' | '%')) {
                return Err(AppError::config(format!(
                    "WHIST_SQLITE_FILE may not contain '{c}', got '{path}'"
                )));
            }
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        StoreKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

fn sqlite_file() -> String {
    env::var("WHIST_SQLITE_FILE")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SQLITE_FILE.to_string())
}
