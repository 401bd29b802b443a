pub mod migrations;
pub mod models;
pub mod queries;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use viewraw_core::{CollaboratorError, SettingsSource};
use viewraw_types::ClickPolicy;

/// Plugin settings persisted in SQLite, so the click policy survives
/// restarts of the host.
pub struct SettingsStore {
    conn: Mutex<Connection>,
}

impl SettingsStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL so the settings UI can write while the client reads
        conn.pragma_update(None, "journal_mode", "WAL")?;

        migrations::run(&conn)?;

        info!("Settings database opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|e| anyhow::anyhow!("Settings lock poisoned: {}", e))?;
        f(&conn)
    }
}

impl SettingsSource for SettingsStore {
    fn click_policy(&self) -> std::result::Result<ClickPolicy, CollaboratorError> {
        self.get_click_policy()
            .map_err(|e| CollaboratorError::settings(format!("{e:#}")))
    }
}
