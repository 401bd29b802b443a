use crate::SettingsStore;
use crate::models::SettingRow;
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};
use tracing::warn;

use viewraw_core::plugin::PLUGIN_NAME;
use viewraw_types::{CLICK_METHOD, ClickPolicy};

impl SettingsStore {
    // -- Raw rows --

    pub fn get_setting(&self, plugin: &str, key: &str) -> Result<Option<SettingRow>> {
        self.with_conn(|conn| query_setting(conn, plugin, key))
    }

    /// Insert or overwrite one setting.
    pub fn put_setting(&self, plugin: &str, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO settings (plugin, key, value) VALUES (?1, ?2, ?3)
                 ON CONFLICT(plugin, key) DO UPDATE SET value = excluded.value, updated_at = ?4",
                rusqlite::params![plugin, key, value, now()],
            )?;
            Ok(())
        })
    }

    /// Insert a setting only if nothing is stored yet. Returns true if it was written.
    pub fn seed_setting(&self, plugin: &str, key: &str, value: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let inserted = conn.execute(
                "INSERT OR IGNORE INTO settings (plugin, key, value) VALUES (?1, ?2, ?3)",
                rusqlite::params![plugin, key, value],
            )?;
            Ok(inserted > 0)
        })
    }

    // -- Click policy --

    /// Stored click policy, or the default when unset or unreadable.
    pub fn get_click_policy(&self) -> Result<ClickPolicy> {
        let Some(row) = self.get_setting(PLUGIN_NAME, CLICK_METHOD)? else {
            return Ok(ClickPolicy::default());
        };
        Ok(row.value.parse().unwrap_or_else(|e| {
            warn!("Ignoring stored {} (updated {}): {}", row.key, row.updated_at, e);
            ClickPolicy::default()
        }))
    }

    pub fn set_click_policy(&self, policy: ClickPolicy) -> Result<()> {
        self.put_setting(PLUGIN_NAME, CLICK_METHOD, policy.as_str())
    }

    /// Seed the policy on a fresh database; an existing choice wins.
    pub fn seed_click_policy(&self, policy: ClickPolicy) -> Result<bool> {
        self.seed_setting(PLUGIN_NAME, CLICK_METHOD, policy.as_str())
    }
}

fn query_setting(conn: &Connection, plugin: &str, key: &str) -> Result<Option<SettingRow>> {
    let row = conn
        .query_row(
            "SELECT plugin, key, value, updated_at FROM settings WHERE plugin = ?1 AND key = ?2",
            [plugin, key],
            |row| {
                Ok(SettingRow {
                    plugin: row.get(0)?,
                    key: row.get(1)?,
                    value: row.get(2)?,
                    updated_at: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(row)
}

fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
