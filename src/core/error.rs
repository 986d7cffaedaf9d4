use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationMissingArgument,
    ValidationInvalidArgument,

    InputFileNotFound,
    OutputFileExists,

    DataParseFailed,
    DataEmpty,

    ChartRenderFailed,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::InputFileNotFound => "input.file_not_found",
            ErrorCode::OutputFileExists => "output.file_exists",

            ErrorCode::DataParseFailed => "data.parse_failed",
            ErrorCode::DataEmpty => "data.empty",

            ErrorCode::ChartRenderFailed => "chart.render_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataParseDetails {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: hint.into(),
        });
        self
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        let details = serde_json::json!({ "args": args });
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            details,
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            value,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn input_file_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("Input file '{}' does not exist or is not a regular file", path);
        let details = serde_json::to_value(FileDetails { path })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(ErrorCode::InputFileNotFound, message, details)
    }

    pub fn output_file_exists(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("Output file '{}' already exists", path);
        let details = serde_json::to_value(FileDetails { path })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(ErrorCode::OutputFileExists, message, details)
            .with_hint("Existing files are never overwritten; choose a different name or remove the file")
    }

    pub fn data_parse(
        path: impl Into<String>,
        line: Option<usize>,
        problem: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let problem = problem.into();
        let message = match line {
            Some(n) => format!("Failed to parse '{}' at line {}: {}", path, n, problem),
            None => format!("Failed to parse '{}': {}", path, problem),
        };
        let details = serde_json::to_value(DataParseDetails {
            path,
            line,
            problem,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(ErrorCode::DataParseFailed, message, details)
    }

    pub fn data_empty(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("Data file '{}' contains no usable values", path);
        let details = serde_json::to_value(FileDetails { path })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(ErrorCode::DataEmpty, message, details)
    }

    pub fn chart_render(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::ChartRenderFailed,
            "Failed to render chart",
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(ErrorCode::InternalIoError, "I/O operation failed", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON serialization failed",
            details,
        )
    }

    pub fn internal_unexpected(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            message,
            Value::Object(serde_json::Map::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_file_exists_carries_path_and_hint() {
        let err = Error::output_file_exists("slurm-run1");
        assert_eq!(err.code.as_str(), "output.file_exists");
        assert!(err.message.contains("slurm-run1"));
        assert_eq!(err.details["path"], "slurm-run1");
        assert!(!err.hints.is_empty());
    }

    #[test]
    fn data_parse_includes_line_number_when_known() {
        let err = Error::data_parse("runs.txt", Some(7), "invalid float literal");
        assert!(err.message.contains("line 7"));
        assert_eq!(err.details["line"], 7);
    }

    #[test]
    fn display_uses_message_only() {
        let err = Error::input_file_not_found("template.json");
        assert_eq!(
            err.to_string(),
            "Input file 'template.json' does not exist or is not a regular file"
        );
    }
}
