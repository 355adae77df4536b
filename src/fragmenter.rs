//! Turns prose into a literal-concatenation block.
//!
//! The pipeline is `normalize` -> `split_sentences` -> `format_literal`. Each
//! step is a pure function over strings so the binary can wrap it with file
//! I/O without any shared state.
//!
//! Sentence starts are detected with the Unicode `Uppercase` property
//! (`\p{Uppercase}`), which covers ASCII capitals as well as accented Latin
//! capitals such as `É` or `Ñ`. Process locale plays no part.

use once_cell::sync::Lazy;
use regex::Regex;

/// Variable name used when the caller does not supply one.
pub const DEFAULT_VARIABLE_NAME: &str = "texto";

const INDENT: &str = "    ";

static RE_NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static RE_WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static RE_SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?](?P<gap>\s+)\p{Uppercase}").unwrap());

/// Options applied when rendering the literal block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub variable_name: String,
    pub escape_double_quotes: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            variable_name: DEFAULT_VARIABLE_NAME.to_string(),
            escape_double_quotes: true,
        }
    }
}

impl FormatOptions {
    pub fn with_variable_name(variable_name: impl Into<String>) -> Self {
        Self {
            variable_name: variable_name.into(),
            ..Self::default()
        }
    }
}

/// Collapse the text onto a single, single-spaced line.
pub fn normalize(text: &str) -> String {
    let text = RE_NEWLINE_RUN.replace_all(text, " ");
    let text = RE_WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Split normalized text at `[.!?]` + whitespace + uppercase letter.
///
/// The whitespace gap is the delimiter and is kept in neither fragment.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0usize;

    for caps in RE_SENTENCE_BOUNDARY.captures_iter(text) {
        let Some(gap) = caps.name("gap") else {
            continue;
        };
        push_fragment(&mut sentences, &text[start..gap.start()]);
        start = gap.end();
    }
    push_fragment(&mut sentences, &text[start..]);

    sentences
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Render sentences as indented quoted lines inside `<name> = ( ... )`.
///
/// Entries are not separated by commas; the output contract relies on
/// adjacent-literal concatenation.
pub fn format_literal(sentences: &[String], options: &FormatOptions) -> String {
    let mut lines = Vec::with_capacity(sentences.len() + 2);
    lines.push(format!("{} = (", options.variable_name));

    for sentence in sentences {
        let mut entry = sentence.clone();
        if !entry.ends_with(' ') {
            entry.push(' ');
        }
        if options.escape_double_quotes {
            entry = escape_double_quotes(&entry);
        }
        lines.push(format!("{INDENT}\"{entry}\""));
    }

    lines.push(")".to_string());
    lines.join("\n")
}

/// Prefix every `"` with a backslash. Existing backslashes are left alone.
pub fn escape_double_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Full transformation with the default escaping rules.
pub fn format(text: &str, variable_name: &str) -> String {
    format_with(text, &FormatOptions::with_variable_name(variable_name))
}

pub fn format_with(text: &str, options: &FormatOptions) -> String {
    let normalized = normalize(text);
    let sentences = split_sentences(&normalized);
    tracing::debug!(
        input_chars = text.chars().count(),
        sentences = sentences.len(),
        variable = %options.variable_name,
        "Fragmented text into sentences"
    );
    format_literal(&sentences, options)
}
