pub mod styles;
pub mod tokenizer;

use crate::Config;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub use styles::Style;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Input must be a string, found {found}")]
    Type { found: &'static str },
}

/// A conversion input whose type is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text(String),
    Other(Value),
}

impl Input {
    /// Name of the input's kind, as reported in type errors
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Text(_) => "string",
            Input::Other(value) => match value {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            },
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Input::Text(text) | Input::Other(Value::String(text)) => Some(text),
            Input::Other(_) => None,
        }
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Input::Text(text),
            other => Input::Other(other),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => write!(f, "{}", text),
            Input::Other(value) => write!(f, "{}", value),
        }
    }
}

/// How non-text input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fail with [`ConvertError::Type`]
    Strict,
    /// Produce an empty string
    #[default]
    Lenient,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Mode::Strict),
            "lenient" => Ok(Mode::Lenient),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Strict => write!(f, "strict"),
            Mode::Lenient => write!(f, "lenient"),
        }
    }
}

/// Convert text into the given style.
pub fn convert(text: &str, style: Style) -> String {
    let tokens = tokenizer::tokenize(text);
    style.join(&tokens)
}

/// Convert an input, failing when it is not text.
pub fn convert_strict(input: &Input, style: Style) -> Result<String, ConvertError> {
    match input.as_text() {
        Some(text) => Ok(convert(text, style)),
        None => Err(ConvertError::Type {
            found: input.kind(),
        }),
    }
}

/// Convert an input, yielding an empty string when it is not text.
pub fn convert_lenient(input: &Input, style: Style) -> String {
    input
        .as_text()
        .map(|text| convert(text, style))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub style: Style,
}

#[derive(Debug, Clone)]
pub struct FileConversion {
    pub path: PathBuf,
    pub line_count: usize,
    pub changed_count: usize,
    pub output: String,
}

pub struct CaseConverter {
    style: Style,
    mode: Mode,
}

impl CaseConverter {
    pub fn new(config: &Config) -> Self {
        Self::with_style(config.style, config.mode)
    }

    pub fn with_style(style: Style, mode: Mode) -> Self {
        Self { style, mode }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn convert_text(&self, text: &str) -> String {
        convert(text, self.style)
    }

    pub fn convert_input(&self, input: &Input) -> Result<String, ConvertError> {
        match self.mode {
            Mode::Strict => convert_strict(input, self.style),
            Mode::Lenient => Ok(convert_lenient(input, self.style)),
        }
    }

    pub fn convert_texts(&self, texts: &[String]) -> Vec<Conversion> {
        texts
            .iter()
            .map(|text| Conversion {
                input: text.clone(),
                output: self.convert_text(text),
                style: self.style,
            })
            .collect()
    }

    /// Convert a batch of JSON values, stopping at the first error in strict mode
    pub fn convert_values(&self, values: &[Value]) -> Result<Vec<Conversion>, ConvertError> {
        values
            .iter()
            .map(|value| {
                let input = Input::from(value.clone());
                let output = self.convert_input(&input)?;
                if self.mode == Mode::Lenient && input.as_text().is_none() {
                    log::warn!("Skipping non-text input of kind {}", input.kind());
                }
                Ok(Conversion {
                    input: input.to_string(),
                    output,
                    style: self.style,
                })
            })
            .collect()
    }

    /// Convert every line independently; the output has one entry per input line
    pub fn convert_lines(&self, content: &str) -> Vec<String> {
        content
            .par_lines()
            .map(|line| convert(line, self.style))
            .collect()
    }

    pub fn convert_file(&self, file_path: &Path, in_place: bool) -> Result<FileConversion> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        // Each line keeps its own terminator, so CRLF and mixed endings survive
        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        let converted: Vec<(String, bool)> = lines
            .par_iter()
            .map(|line| {
                let (body, ending) = split_line_ending(line);
                let output = convert(body, self.style);
                let changed = output != body;
                (output + ending, changed)
            })
            .collect();

        let changed_count = converted.iter().filter(|(_, changed)| *changed).count();
        let output: String = converted.into_iter().map(|(line, _)| line).collect();

        log::debug!(
            "Converted {} ({} lines, {} changed) to {}",
            file_path.display(),
            lines.len(),
            changed_count,
            self.style
        );

        if in_place && changed_count > 0 {
            fs::write(file_path, &output)
                .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
        }

        Ok(FileConversion {
            path: file_path.to_path_buf(),
            line_count: lines.len(),
            changed_count,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_concrete_scenarios() {
        assert_eq!(convert("Hello World", Style::Kebab), "hello-world");
        assert_eq!(convert("  _Hello-World__Test_ ", Style::Kebab), "hello-world-test");
        assert_eq!(convert("first name", Style::Camel), "firstName");
        assert_eq!(convert("SCREEN_NAME", Style::Camel), "screenName");
        assert_eq!(convert("123number_first", Style::Camel), "123numberFirst");
        assert_eq!(convert("First Name", Style::Dot), "first.name");
        assert_eq!(convert("!@#special$$$chars", Style::Dot), "special.chars");
        assert_eq!(convert("MiXeD_cAsE-Input", Style::Camel), "mixedCaseInput");
    }

    #[test]
    fn test_more_camel_examples() {
        assert_eq!(convert("user_id", Style::Camel), "userId");
        assert_eq!(convert("mobile-number", Style::Camel), "mobileNumber");
        assert_eq!(convert("  multiple   spaces  ", Style::Camel), "multipleSpaces");
        assert_eq!(convert("___leading__underscores", Style::Camel), "leadingUnderscores");
        assert_eq!(convert("trailing---", Style::Camel), "trailing");
    }

    #[test]
    fn test_empty_and_separator_only() {
        for style in Style::ALL {
            assert_eq!(convert("", style), "");
            assert_eq!(convert("___", style), "");
            assert_eq!(convert(" - _ -", style), "");
        }
    }

    #[test]
    fn test_separator_kind_does_not_matter() {
        for style in Style::ALL {
            assert_eq!(convert("a_b-c d", style), convert("a b c d", style));
        }
    }

    #[test]
    fn test_strict_rejects_non_text() {
        let input = Input::from(json!(12345));
        assert_eq!(
            convert_strict(&input, Style::Camel),
            Err(ConvertError::Type { found: "number" })
        );
        assert_eq!(
            convert_strict(&Input::from("user_id"), Style::Camel),
            Ok("userId".to_string())
        );
    }

    #[test]
    fn test_lenient_yields_empty() {
        assert_eq!(convert_lenient(&Input::from(json!(12345)), Style::Camel), "");
        assert_eq!(convert_lenient(&Input::from(json!(null)), Style::Dot), "");
        assert_eq!(convert_lenient(&Input::from("First Name"), Style::Dot), "first.name");
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(Input::from(json!("text")).kind(), "string");
        assert_eq!(Input::from(json!(true)).kind(), "boolean");
        assert_eq!(Input::from(json!([1, 2])).kind(), "array");
        assert_eq!(Input::from(json!({"a": 1})).kind(), "object");
    }

    #[test]
    fn test_type_error_message() {
        let err = ConvertError::Type { found: "number" };
        assert_eq!(err.to_string(), "Input must be a string, found number");
    }

    #[test]
    fn test_convert_values_by_mode() {
        let values = vec![json!("user_id"), json!(42), json!("SCREEN_NAME")];

        let lenient = CaseConverter::with_style(Style::Camel, Mode::Lenient);
        let outputs: Vec<_> = lenient
            .convert_values(&values)
            .unwrap()
            .into_iter()
            .map(|c| c.output)
            .collect();
        assert_eq!(outputs, vec!["userId", "", "screenName"]);

        let strict = CaseConverter::with_style(Style::Camel, Mode::Strict);
        assert_eq!(
            strict.convert_values(&values),
            Err(ConvertError::Type { found: "number" })
        );
    }

    #[test]
    fn test_convert_lines_preserves_line_count() {
        let converter = CaseConverter::with_style(Style::Kebab, Mode::Lenient);
        let lines = converter.convert_lines("Hello World\n\nfoo_bar\n___");
        assert_eq!(lines, vec!["hello-world", "", "foo-bar", ""]);
    }

    #[test]
    fn test_convert_file_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "First Name\nlast.name\nemail\n").unwrap();

        let converter = CaseConverter::with_style(Style::Dot, Mode::Lenient);
        let result = converter.convert_file(&path, true).unwrap();

        assert_eq!(result.line_count, 3);
        assert_eq!(result.changed_count, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first.name\nlast.name\nemail\n");
    }

    #[test]
    fn test_convert_file_dry_run_leaves_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "user_id").unwrap();

        let converter = CaseConverter::with_style(Style::Camel, Mode::Strict);
        let result = converter.convert_file(&path, false).unwrap();

        assert_eq!(result.output, "userId");
        assert_eq!(fs::read_to_string(&path).unwrap(), "user_id");
    }

    #[test]
    fn test_convert_file_keeps_crlf_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "user_id\r\nalready\r\n").unwrap();

        let converter = CaseConverter::with_style(Style::Camel, Mode::Lenient);
        let result = converter.convert_file(&path, true).unwrap();

        assert_eq!(result.line_count, 2);
        assert_eq!(result.changed_count, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "userId\r\nalready\r\n");
    }

    #[test]
    fn test_convert_file_keeps_mixed_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "First Name\r\n\nlast_name").unwrap();

        let converter = CaseConverter::with_style(Style::Kebab, Mode::Lenient);
        let result = converter.convert_file(&path, false).unwrap();

        assert_eq!(result.line_count, 3);
        assert_eq!(result.changed_count, 2);
        assert_eq!(result.output, "first-name\r\n\nlast-name");
    }

    #[test]
    fn test_string_value_in_other_is_text() {
        let input = Input::Other(json!("user_id"));
        assert_eq!(convert_strict(&input, Style::Camel), Ok("userId".to_string()));
        assert_eq!(convert_lenient(&input, Style::Kebab), "user-id");
    }

    #[test]
    fn test_converter_from_config() {
        let config = Config {
            style: Style::Kebab,
            mode: Mode::Strict,
            ..Default::default()
        };
        let converter = CaseConverter::new(&config);
        assert_eq!(converter.style(), Style::Kebab);
        assert_eq!(converter.mode(), Mode::Strict);
        assert_eq!(converter.convert_text("Hello World"), "hello-world");
    }
}
