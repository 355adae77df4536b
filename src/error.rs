use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures around reading the source text or saving the literal.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Error: could not find file {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl FormatError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        FormatError::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_path() {
        let err = FormatError::FileNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.to_string(), "Error: could not find file missing.txt");
    }

    #[test]
    fn io_message_keeps_context_and_cause() {
        let err = FormatError::io(
            "Error reading file",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(err.to_string(), "Error reading file: permission denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
