//! Configuration file and environment handling for dccseeder.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the home and current directory.
pub const CONFIG_FILE_NAME: &str = ".dccseeder.toml";

/// Prefix of every environment variable dccseeder reads.
pub const ENV_PREFIX: &str = "DCCSEEDER_";

/// Configuration file structure for .dccseeder.toml
///
/// Configuration files can be placed in:
/// - User home directory: ~/.dccseeder.toml (user defaults)
/// - Project directory: ./.dccseeder.toml (project defaults)
/// - Custom location via --config flag (replaces both)
///
/// Precedence order (highest to lowest):
/// 1. Command-line arguments (--output, --force, etc.)
/// 2. Environment (`DCCSEEDER_OUTPUT`, `DCCSEEDER_FORCE`, ...)
/// 3. Project config (./.dccseeder.toml) or --config file
/// 4. User config (~/.dccseeder.toml)
/// 5. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Write CSV here instead of stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Verbose logging of every match, skip and duplicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Let later differing mentions overwrite earlier ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,

    /// Skip unreadable books and sections instead of aborting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_error: Option<bool>,
}

/// Merged configuration plus what to report once logging is up
#[derive(Debug, Default)]
pub struct LoadedConfig {
    /// Files and environment merged
    pub config: Config,
    /// Config files that were read, lowest precedence first
    pub sources: Vec<PathBuf>,
    /// Discovered files that could not be used
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve file and environment configuration.
    ///
    /// With `explicit`, only that file is read and any failure is an error.
    /// Otherwise user and project files are discovered; a broken discovered
    /// file is reported in the returned warnings and ignored.
    pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
        let mut loaded = LoadedConfig::default();
        let files = match explicit {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                loaded.sources.push(path.to_path_buf());
                config
            }
            None => Self::discover(&mut loaded),
        };

        let env = Self::from_env_with(|key| std::env::var(key).ok())?;
        loaded.config = files.merge(env);
        Ok(loaded)
    }

    /// Find and merge the user and project config files
    fn discover(loaded: &mut LoadedConfig) -> Self {
        let user = dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .and_then(|path| Self::load_optional(&path, loaded));
        let project = Self::load_optional(Path::new(CONFIG_FILE_NAME), loaded);

        user.unwrap_or_default().merge(project.unwrap_or_default())
    }

    fn load_optional(path: &Path, loaded: &mut LoadedConfig) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(path) {
            Ok(config) => {
                loaded.sources.push(path.to_path_buf());
                Some(config)
            }
            Err(e) => {
                loaded
                    .warnings
                    .push(format!("Ignoring config {}: {e:#}", path.display()));
                None
            }
        }
    }

    /// Read `DCCSEEDER_*` variables through `lookup`.
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}")).filter(|v| !v.is_empty());
        let flag = |name: &str| -> Result<Option<bool>> {
            var(name)
                .map(|value| parse_bool(&value).with_context(|| format!("{ENV_PREFIX}{name}")))
                .transpose()
        };

        Ok(Self {
            output: var("OUTPUT").map(PathBuf::from),
            debug: flag("DEBUG")?,
            force: flag("FORCE")?,
            continue_on_error: flag("CONTINUE_ON_ERROR")?,
        })
    }

    /// Field-wise overlay: values set in `over` win.
    #[must_use]
    pub fn merge(self, over: Self) -> Self {
        Self {
            output: over.output.or(self.output),
            debug: over.debug.or(self.debug),
            force: over.force.or(self.force),
            continue_on_error: over.continue_on_error.or(self.continue_on_error),
        }
    }
}

/// Parse the usual spellings of a boolean switch
fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean (true/false, 1/0, yes/no, on/off), got '{other}'"),
    }
}
