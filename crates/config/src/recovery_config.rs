// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path, ConfigSource, DEFAULT_CONFIG_NAME};
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sr_polynomial::{DuplicatePolicy, Interpolator};
use std::{env, io, path::PathBuf};
use tracing::debug;

/// Prefix for environment overrides, eg. `RECOVER_STRICT=true`.
pub const ENV_PREFIX: &str = "RECOVER_";

/// Runtime configuration for secret reconstruction.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct RecoveryConfig {
    /// How repeated x-coordinates among the selected shares are reported
    pub duplicates: DuplicatePolicy,
    /// Treat non-numeric labels and entries without `base`/`value` as errors
    /// instead of skipping them
    pub strict: bool,
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl RecoveryConfig {
    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    /// The configuration file that was loaded, if any.
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn interpolator(&self) -> Interpolator {
        Interpolator::new(self.duplicates)
    }
}

/// Builds the configuration from defaults, an optional YAML file and `RECOVER_*`
/// environment variables, in increasing order of precedence.
pub fn load_config(cli_file: Option<String>) -> Result<RecoveryConfig> {
    let source = resolve_config_path(
        find_in_parent,
        env::current_dir()?,
        DEFAULT_CONFIG_NAME,
        cli_file.map(PathBuf::from),
    );
    debug!(?source, "Resolved configuration source");

    let mut figment = Figment::from(Serialized::defaults(RecoveryConfig::default()));
    match &source {
        ConfigSource::Explicit(path) if !path.exists() => {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Configuration file not found: {}", path.display()),
            )
            .into());
        }
        ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
            figment = figment.merge(Yaml::file(path));
        }
        ConfigSource::None => {}
    }

    let mut config: RecoveryConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(&["duplicates", "strict"]))
        .extract()
        .context("Could not parse configuration")?;
    config.source = source.path().map(PathBuf::from);

    Ok(config)
}
