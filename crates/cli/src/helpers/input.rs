// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads the share document from `path`, or from `reader` when no path is given.
pub fn read_input<R: Read>(path: Option<&Path>, mut reader: R) -> Result<String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Reading share document");
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open file: {}", path.display()))
        }
        None => {
            debug!("Reading share document from stdin");
            let mut input = String::new();
            reader
                .read_to_string(&mut input)
                .context("Failed to read standard input")?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"keys": {{"k": 1}}}}"#)?;
        let input = read_input(Some(file.path()), std::io::empty())?;
        assert_eq!(input, r#"{"keys": {"k": 1}}"#);
        Ok(())
    }

    #[test]
    fn test_reads_reader_without_path() -> Result<()> {
        let input = read_input(None, "from stdin".as_bytes())?;
        assert_eq!(input, "from stdin");
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = read_input(Some(Path::new("/nope/shares.json")), std::io::empty())
            .expect_err("missing file should fail");
        assert!(err
            .to_string()
            .starts_with("Failed to open file: /nope/shares.json"));
    }
}
