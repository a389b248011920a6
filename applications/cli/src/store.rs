/// TOML-backed settings store
use config::Source;
use quaver_settings::{Result, Settings, SettingsError, SettingsStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment prefix for overrides, e.g. `QUAVER_USERNAME`
pub const ENV_PREFIX: &str = "QUAVER";

/// Settings file on disk with environment overrides layered on top
///
/// Overrides only live for the process: saving writes back the file's own
/// value for every overridden key unless the caller changed it.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
    env_prefix: String,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_env_prefix(path, ENV_PREFIX)
    }

    pub fn with_env_prefix(path: impl Into<PathBuf>, env_prefix: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            env_prefix: env_prefix.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn environment(&self) -> config::Environment {
        config::Environment::with_prefix(&self.env_prefix).try_parsing(true)
    }

    /// Keys currently overridden by the environment
    fn env_keys(&self) -> Result<Vec<String>> {
        let overrides = self
            .environment()
            .collect()
            .map_err(|e| SettingsError::store(e.to_string()))?;
        Ok(overrides.into_keys().collect())
    }

    /// Settings file contents without any overrides
    fn file_table(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }

        fs::read_to_string(&self.path)?
            .parse()
            .map_err(|e: toml::de::Error| SettingsError::store(e.to_string()))
    }
}

fn to_table(settings: &Settings) -> Result<toml::Table> {
    match toml::Value::try_from(settings) {
        Ok(toml::Value::Table(table)) => Ok(table),
        Ok(_) => Err(SettingsError::store("settings did not serialize to a table")),
        Err(e) => Err(SettingsError::store(e.to_string())),
    }
}

impl SettingsStore for TomlFileStore {
    /// Load configuration from file and environment
    fn load(&self) -> Result<Settings> {
        let mut builder = config::Config::builder();

        // A missing file means first run
        if self.path.exists() {
            builder = builder.add_source(config::File::from(self.path.clone()));
        } else {
            tracing::debug!(path = %self.path.display(), "No settings file, using defaults");
        }

        builder = builder.add_source(self.environment());

        let config = builder
            .build()
            .map_err(|e| SettingsError::store(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| SettingsError::store(e.to_string()))
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        let mut table = to_table(settings)?;

        let overridden = self.env_keys()?;
        if !overridden.is_empty() {
            let merged = to_table(&self.load()?)?;
            let file = self.file_table()?;

            for key in overridden {
                // Changed by the caller, persist it
                if table.get(&key) != merged.get(&key) {
                    continue;
                }
                tracing::debug!(key = %key, "Not persisting environment override");
                match file.get(&key) {
                    Some(value) => {
                        table.insert(key, value.clone());
                    }
                    None => {
                        table.remove(&key);
                    }
                }
            }
        }

        let contents =
            toml::to_string_pretty(&table).map_err(|e| SettingsError::store(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;

        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}
