//! File-based entry points around the fragmenter.
//!
//! Read failures come back as message strings so the console shell can print
//! and save them like any other result.

use crate::error::FormatError;
use crate::fragmenter::{self, FormatOptions};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Read `path` as UTF-8 and format it, reporting failures as a message.
pub fn format_from_path(path: &Path, variable_name: &str) -> String {
    format_from_path_with(path, &FormatOptions::with_variable_name(variable_name))
}

pub fn format_from_path_with(path: &Path, options: &FormatOptions) -> String {
    match try_format_from_path(path, options) {
        Ok(formatted) => formatted,
        Err(err) => {
            warn!(path = %path.display(), "Failed to format file: {err}");
            err.to_string()
        }
    }
}

pub fn try_format_from_path(path: &Path, options: &FormatOptions) -> Result<String, FormatError> {
    let content = read_text(path)?;
    info!(
        path = %path.display(),
        bytes = content.len(),
        "Loaded source text"
    );
    Ok(fragmenter::format_with(&content, options))
}

fn read_text(path: &Path) -> Result<String, FormatError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => FormatError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => FormatError::io("Error reading file", err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(label: &str) -> PathBuf {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("prose-literal-{label}-{nonce}.txt"))
    }

    #[test]
    fn formats_file_contents() {
        let path = scratch_path("ok");
        fs::write(&path, "Primera línea.\nSegunda \"línea\".\n").expect("write fixture");

        let out = format_from_path(&path, "dialogo");
        assert_eq!(
            out,
            "dialogo = (\n    \"Primera línea. \"\n    \"Segunda \\\"línea\\\". \"\n)"
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_reported_as_message() {
        let out = format_from_path(Path::new("missing.txt"), "texto");
        assert_eq!(out, "Error: could not find file missing.txt");
    }

    #[test]
    fn missing_file_maps_to_not_found_kind() {
        let path = scratch_path("absent");
        let result = try_format_from_path(&path, &FormatOptions::default());
        match result {
            Err(FormatError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_an_io_failure() {
        let path = scratch_path("latin1");
        fs::write(&path, [b'C', b'a', b'f', 0xE9, b'.']).expect("write fixture");

        let result = try_format_from_path(&path, &FormatOptions::default());
        assert!(matches!(result, Err(FormatError::Io { .. })));
        let message = format_from_path(&path, "texto");
        assert!(message.starts_with("Error reading file: "));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn directory_is_an_io_failure() {
        let dir = std::env::temp_dir();
        let result = try_format_from_path(&dir, &FormatOptions::default());
        assert!(matches!(result, Err(FormatError::Io { .. })));
    }
}
