//! Settings read from `EMBLY__*` environment variables.

use std::path::PathBuf;

use config::{Config, Environment, Map};
use embly_home::{FixedHome, OsUser, UserContext};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    /// Home directory to use instead of the current user's (`EMBLY__HOME`).
    #[serde(default)]
    pub home: Option<PathBuf>,
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_source(None)
    }

    /// Loads from `vars` instead of the process environment when given.
    pub fn from_source(vars: Option<Map<String, String>>) -> anyhow::Result<Self> {
        let settings: Settings = Config::builder()
            // e.g. EMBLY__HOME -> home
            .add_source(
                Environment::with_prefix("EMBLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// An empty `EMBLY__HOME` counts as unset.
    pub fn user(&self) -> Box<dyn UserContext> {
        match self.home.as_ref().filter(|h| !h.as_os_str().is_empty()) {
            Some(home) => Box::new(FixedHome::new(home)),
            None => Box::new(OsUser),
        }
    }
}
