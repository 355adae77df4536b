//! Output file naming and persistence.
//!
//! The formatted literal is written next to the caller, in the current working
//! directory, as `<input stem><suffix>.<extension>`.

use crate::error::FormatError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_SUFFIX: &str = "_formatted";
pub const DEFAULT_EXTENSION: &str = "txt";

/// Build the output file name for `input`, relative to the working directory.
///
/// Only the last extension is dropped: `notes.v2.txt` becomes
/// `notes.v2_formatted.txt`.
pub fn output_path_for(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        PathBuf::from(format!("{stem}{suffix}"))
    } else {
        PathBuf::from(format!("{stem}{suffix}.{extension}"))
    }
}

/// Write `content` to the derived output path and return its absolute location.
pub fn save_formatted_text(
    input: &Path,
    content: &str,
    suffix: &str,
    extension: &str,
) -> Result<PathBuf, FormatError> {
    let output = output_path_for(input, suffix, extension);
    write_to(&output, content)
}

pub(crate) fn write_to(output: &Path, content: &str) -> Result<PathBuf, FormatError> {
    fs::write(output, content).map_err(|err| FormatError::io("Error saving file", err))?;
    let absolute = std::path::absolute(output)
        .map_err(|err| FormatError::io("Error resolving output path", err))?;
    info!(
        path = %absolute.display(),
        bytes = content.len(),
        "Stored formatted text"
    );
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn derives_name_from_stem_only() {
        let out = output_path_for(
            Path::new("scripts/shrek_script.txt"),
            DEFAULT_SUFFIX,
            DEFAULT_EXTENSION,
        );
        assert_eq!(out, PathBuf::from("shrek_script_formatted.txt"));
    }

    #[test]
    fn keeps_inner_dots_and_handles_missing_extension() {
        assert_eq!(
            output_path_for(Path::new("notes.v2.txt"), DEFAULT_SUFFIX, DEFAULT_EXTENSION),
            PathBuf::from("notes.v2_formatted.txt")
        );
        assert_eq!(
            output_path_for(Path::new("README"), DEFAULT_SUFFIX, DEFAULT_EXTENSION),
            PathBuf::from("README_formatted.txt")
        );
    }

    #[test]
    fn honors_custom_suffix_and_extension() {
        let out = output_path_for(Path::new("/tmp/dialogo.md"), "-literal", ".py");
        assert_eq!(out, PathBuf::from("dialogo-literal.py"));
    }

    #[test]
    fn write_to_returns_absolute_path() {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        let target = std::env::temp_dir().join(format!("prose-literal-out-{nonce}.txt"));

        let saved = write_to(&target, "texto = (\n)").expect("write should succeed");
        assert!(saved.is_absolute());
        assert_eq!(
            fs::read_to_string(&saved).expect("saved file readable"),
            "texto = (\n)"
        );

        let _ = fs::remove_file(&saved);
    }

    #[test]
    fn write_failure_is_reported() {
        let target = std::env::temp_dir()
            .join("prose-literal-no-such-dir")
            .join("nested")
            .join("out.txt");
        let err = write_to(&target, "x").expect_err("parent directory is missing");
        assert!(err.to_string().starts_with("Error saving file: "));
    }
}
