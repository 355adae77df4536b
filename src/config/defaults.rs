use crate::config::LogLevel;

pub(crate) fn default_variable_name() -> String {
    crate::fragmenter::DEFAULT_VARIABLE_NAME.to_string()
}

pub(crate) fn default_escape_double_quotes() -> bool {
    true
}

pub(crate) fn default_output_suffix() -> String {
    crate::output::DEFAULT_SUFFIX.to_string()
}

pub(crate) fn default_output_extension() -> String {
    crate::output::DEFAULT_EXTENSION.to_string()
}

pub(crate) fn default_echo_to_stdout() -> bool {
    true
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Warn
}
