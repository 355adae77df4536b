use crate::fragmenter::FormatOptions;
use serde::Deserialize;

/// Flattened tool configuration; built from the TOML tables.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_variable_name")]
    pub variable_name: String,
    #[serde(default = "crate::config::defaults::default_escape_double_quotes")]
    pub escape_double_quotes: bool,
    #[serde(default = "crate::config::defaults::default_output_suffix")]
    pub output_suffix: String,
    #[serde(default = "crate::config::defaults::default_output_extension")]
    pub output_extension: String,
    #[serde(default = "crate::config::defaults::default_echo_to_stdout")]
    pub echo_to_stdout: bool,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            variable_name: crate::config::defaults::default_variable_name(),
            escape_double_quotes: crate::config::defaults::default_escape_double_quotes(),
            output_suffix: crate::config::defaults::default_output_suffix(),
            output_extension: crate::config::defaults::default_output_extension(),
            echo_to_stdout: crate::config::defaults::default_echo_to_stdout(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Formatting options, with an optional variable name from the command line.
    pub fn format_options(&self, variable_override: Option<&str>) -> FormatOptions {
        let variable_name = variable_override
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.variable_name);
        FormatOptions {
            variable_name: variable_name.to_string(),
            escape_double_quotes: self.escape_double_quotes,
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
