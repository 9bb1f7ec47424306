use crate::migration::{DeclarationSite, MigrationError};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "config/config.toml";
const ENV_PREFIX: &str = "CALLSITE_MIGRATIONS";

/// Options for the migration builders
///
/// `skip` counts frames above the builder call: `1` (default) is the direct
/// caller. Raise it when the builder is called through helper functions that
/// are not `#[track_caller]`. A `site` set with [`BuilderOptions::with_site`]
/// bypasses stack resolution entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuilderOptions {
    #[serde(default = "default_skip")]
    pub skip: usize,
    #[serde(skip)]
    pub site: Option<DeclarationSite>,
}

fn default_skip() -> usize {
    1
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            skip: default_skip(),
            site: None,
        }
    }
}

impl BuilderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of frames to skip
    #[must_use]
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Use an explicit declaration site instead of inspecting the call stack
    #[must_use]
    pub fn with_site(mut self, site: DeclarationSite) -> Self {
        self.site = Some(site);
        self
    }

    /// Load options from `config/config.toml`, falling back to env vars.
    ///
    /// Reads the `[migrations]` section, then `CALLSITE_MIGRATIONS__MIGRATIONS__*`
    /// environment variables. Missing values keep their defaults.
    pub fn load() -> Result<Self, MigrationError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Same as [`BuilderOptions::load`] with an explicit config file path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, MigrationError> {
        let path = path.as_ref();
        let builder = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                // A present but unreadable file falls back to env only
                if path.exists() {
                    log::warn!(
                        "failed to load {}, falling back to env: {}",
                        path.display(),
                        err
                    );
                }
                Config::builder()
                    .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {err}, then env-only error: {env_err}"
                        ))
                    })?
            }
        };

        match settings.get::<BuilderOptions>("migrations") {
            Ok(options) => Ok(options),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Migration options could not be loaded from file or environment: {e}"
            ))
            .into()),
        }
    }
}
