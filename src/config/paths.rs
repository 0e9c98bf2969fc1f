// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! Candidates are tried in this order, the first one present wins:
//!
//! 1. a directory passed to [`config_dir_with_override`] (tests, embedding hosts)
//! 2. `--config-dir`, recorded once at start-up by [`init_cli_override`]
//! 3. the [`ENV_CONFIG_DIR`] environment variable, when not empty
//! 4. `IcedToast` under the platform config directory from `dirs`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "IcedToast";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Which candidate a config directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigDirSource {
    Override,
    Cli,
    Environment,
    Platform,
}

/// Records the `--config-dir` argument. Only the first `Some` sticks.
pub fn init_cli_override(config_dir: Option<String>) {
    if let Some(dir) = config_dir {
        let _ = CLI_CONFIG_DIR.set(PathBuf::from(dir));
    }
}

/// Config directory, preferring `override_dir` when given.
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    locate(
        override_dir,
        CLI_CONFIG_DIR.get().cloned(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
    .map(|(dir, _)| dir)
}

fn locate(
    override_dir: Option<PathBuf>,
    cli_dir: Option<PathBuf>,
    env_dir: Option<String>,
    platform_dir: Option<PathBuf>,
) -> Option<(PathBuf, ConfigDirSource)> {
    override_dir
        .map(|dir| (dir, ConfigDirSource::Override))
        .or_else(|| cli_dir.map(|dir| (dir, ConfigDirSource::Cli)))
        .or_else(|| {
            env_dir
                .filter(|dir| !dir.is_empty())
                .map(|dir| (PathBuf::from(dir), ConfigDirSource::Environment))
        })
        .or_else(|| platform_dir.map(|dir| (dir.join(APP_DIR_NAME), ConfigDirSource::Platform)))
}
