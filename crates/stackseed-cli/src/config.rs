//! Setup file discovery and loading.
//!
//! The CLI owns configuration; the core crate only sees the typed
//! [`SetupConfig`] once every required key has been checked.
//!
//! # Resolution order
//!
//! 1. `--config FILE` / `STACKSEED_CONFIG`
//! 2. `./stackseed.yaml`
//! 3. `<config dir>/stackseed/config.yaml`
//!
//! Within the chosen file, `STACKSEED__SECTION__KEY` environment variables
//! override file values.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat, Value, ValueKind};
use tracing::{debug, instrument};

use stackseed_core::domain::{DomainValidator, KeyLookup, SetupConfig};

use crate::error::{CliError, CliResult};

/// File name looked up in the working directory and written by `init`.
pub const LOCAL_CONFIG_FILE: &str = "stackseed.yaml";

const ENV_PREFIX: &str = "STACKSEED";
const ENV_SEPARATOR: &str = "__";

/// A validated setup file and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedSetup {
    pub source: PathBuf,
    pub setup: SetupConfig,
}

impl LoadedSetup {
    /// Resolve, read, layer env overrides, and validate.
    ///
    /// Fails before any side effect: a missing file, a YAML or type error,
    /// or any missing required key.
    #[instrument(skip_all)]
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let source = resolve_path(explicit)?;
        debug!(path = %source.display(), "Loading setup file");

        let layered = Config::builder()
            .add_source(
                File::from(source.as_path())
                    .format(FileFormat::Yaml)
                    .required(true),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let setup = parse(&layered)?;
        Ok(Self { source, setup })
    }
}

fn parse(layered: &Config) -> CliResult<SetupConfig> {
    DomainValidator::validate_required_keys(&LayeredKeys(layered))
        .map_err(|e| CliError::Core(e.into()))?;

    let setup: SetupConfig = layered.clone().try_deserialize()?;
    DomainValidator::validate_setup(&setup).map_err(|e| CliError::Core(e.into()))?;
    Ok(setup)
}

/// Dotted-path view over the merged sources.
struct LayeredKeys<'a>(&'a Config);

impl KeyLookup for LayeredKeys<'_> {
    fn lookup(&self, key: &str) -> Option<String> {
        let value: Value = self.0.get(key).ok()?;
        match &value.kind {
            ValueKind::Nil | ValueKind::Table(_) | ValueKind::Array(_) => None,
            _ => value.into_string().ok(),
        }
    }
}

/// Pick the first existing candidate. An explicit path must exist.
pub fn resolve_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(CliError::ConfigNotFound {
                searched: vec![path.to_path_buf()],
            })
        };
    }

    let searched = candidate_paths();
    searched
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or(CliError::ConfigNotFound { searched })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(user) = user_config_path() {
        paths.push(user);
    }
    paths
}

/// Per-user setup file, e.g. `~/.config/stackseed/config.yaml` on Linux.
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "stackseed", "stackseed")
        .map(|d| d.config_dir().join("config.yaml"))
}
