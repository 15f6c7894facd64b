// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

/// Name of the configuration file searched for from the working directory upwards.
pub const DEFAULT_CONFIG_NAME: &str = "recover.config.yaml";

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = PathBuf::from(path);

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Where configuration comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line; it must exist.
    Explicit(PathBuf),
    /// Found by searching parent directories.
    Discovered(PathBuf),
    /// No file, defaults and environment only.
    None,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Discovered(p) => Some(p),
            ConfigSource::None => None,
        }
    }
}

pub fn resolve_config_path<P: Into<PathBuf>>(
    find_in_parent: FindInParent,
    cwd: P,
    default_filename: &str,
    cli_file: Option<P>,
) -> ConfigSource {
    let cli_file: Option<PathBuf> = cli_file.map(Into::into);
    let cwd = cwd.into();

    if let Some(cli_file) = cli_file {
        // config is passed in and is absolute
        if cli_file.is_absolute() {
            return ConfigSource::Explicit(cli_file);
        }

        // config is passed in and is relative
        return ConfigSource::Explicit(clean(cwd.join(cli_file)));
    }

    // search from cwd
    match find_in_parent(&cwd, default_filename) {
        Some(found) => ConfigSource::Discovered(found),
        None => ConfigSource::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn not_found(_: &Path, _: &str) -> Option<PathBuf> {
        None
    }

    fn found(_: &Path, _: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/foo/recover.config.yaml"))
    }

    #[test]
    fn test_resolve_cli() -> Result<()> {
        let source = resolve_config_path(
            not_found,
            PathBuf::from("/foo/bar"),
            DEFAULT_CONFIG_NAME,
            None,
        );
        assert_eq!(source, ConfigSource::None);
        assert_eq!(source.path(), None);

        let source = resolve_config_path(
            found, // should be overridden by config attr
            PathBuf::from("/foo/bar"),
            DEFAULT_CONFIG_NAME,
            Some(PathBuf::from("/my/absolute/conf.yaml")),
        );
        assert_eq!(
            source,
            ConfigSource::Explicit(PathBuf::from("/my/absolute/conf.yaml"))
        );

        let source = resolve_config_path(
            found,
            PathBuf::from("/foo/bar"),
            DEFAULT_CONFIG_NAME,
            Some(PathBuf::from("../conf/./recover.yaml")),
        );
        assert_eq!(
            source,
            ConfigSource::Explicit(PathBuf::from("/foo/conf/recover.yaml"))
        );

        let source = resolve_config_path(
            found,
            PathBuf::from("/foo/bar"),
            DEFAULT_CONFIG_NAME,
            None,
        );
        assert_eq!(
            source.path(),
            Some(Path::new("/foo/recover.config.yaml"))
        );
        Ok(())
    }
}
