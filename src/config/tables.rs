use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    formatting: FormattingConfig,
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            variable_name: tables.formatting.variable_name,
            escape_double_quotes: tables.formatting.escape_double_quotes,
            output_suffix: tables.output.suffix,
            output_extension: tables.output.extension,
            echo_to_stdout: tables.output.echo_to_stdout,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            formatting: FormattingConfig {
                variable_name: config.variable_name.clone(),
                escape_double_quotes: config.escape_double_quotes,
            },
            output: OutputConfig {
                suffix: config.output_suffix.clone(),
                extension: config.output_extension.clone(),
                echo_to_stdout: config.echo_to_stdout,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct FormattingConfig {
    #[serde(default = "defaults::default_variable_name")]
    variable_name: String,
    #[serde(default = "defaults::default_escape_double_quotes")]
    escape_double_quotes: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        FormattingConfig {
            variable_name: defaults::default_variable_name(),
            escape_double_quotes: defaults::default_escape_double_quotes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct OutputConfig {
    #[serde(default = "defaults::default_output_suffix")]
    suffix: String,
    #[serde(default = "defaults::default_output_extension")]
    extension: String,
    #[serde(default = "defaults::default_echo_to_stdout")]
    echo_to_stdout: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            suffix: defaults::default_output_suffix(),
            extension: defaults::default_output_extension(),
            echo_to_stdout: defaults::default_echo_to_stdout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
