use std::path::PathBuf;

use anyhow::{Context, Result};

use viewraw_types::ClickPolicy;

/// Startup configuration, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// `VIEWRAW_SETTINGS_DB`
    pub settings_db: PathBuf,
    /// `VIEWRAW_DEFAULT_CLICK`: applied to a fresh settings database only.
    pub default_click: Option<ClickPolicy>,
}

impl HostConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env if present
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let settings_db = lookup("VIEWRAW_SETTINGS_DB").unwrap_or_else(|| "viewraw.db".into());
        let default_click = lookup("VIEWRAW_DEFAULT_CLICK")
            .map(|v| v.parse::<ClickPolicy>())
            .transpose()
            .context("VIEWRAW_DEFAULT_CLICK")?;

        Ok(Self {
            settings_db: PathBuf::from(settings_db),
            default_click,
        })
    }

    /// Open the settings store and apply the seed policy, if any.
    pub fn open_settings(&self) -> Result<viewraw_settings::SettingsStore> {
        let store = viewraw_settings::SettingsStore::open(&self.settings_db)?;
        if let Some(policy) = self.default_click {
            store.seed_click_policy(policy)?;
        }
        Ok(store)
    }
}

/// Install the `tracing` subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewraw=debug".into()),
        )
        .try_init();
}
