//! CLI response formatting and output.
//!
//! Successful commands print a JSON envelope on stdout; failures render a
//! coded message with hints on stderr and map to an exit code.

use evobee_tools::{Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

pub fn print_success<T: Serialize>(data: T) {
    use std::io::{self, Write};

    let response = CliResponse::success(data);
    let payload = match serde_json::to_string_pretty(&response) {
        Ok(payload) => payload,
        Err(e) => {
            print_error(&Error::internal_json(
                e.to_string(),
                Some("serialize response".to_string()),
            ));
            return;
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    // exit gracefully on SIGPIPE
    let _ = writeln!(handle, "{}", payload);
}

pub fn print_error(err: &Error) {
    eprintln!("error[{}]: {}", err.code.as_str(), err.message);
    for hint in &err.hints {
        eprintln!("  hint: {}", hint.message);
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationMissingArgument | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::InputFileNotFound
        | ErrorCode::OutputFileExists
        | ErrorCode::DataParseFailed
        | ErrorCode::DataEmpty
        | ErrorCode::ChartRenderFailed
        | ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_exit_code_2() {
        let err = Error::validation_invalid_argument("numruns", "must be positive", None);
        let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(exit_code, 2);
    }

    #[test]
    fn file_errors_map_to_exit_code_1() {
        let err = Error::output_file_exists("slurm-run1");
        let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(exit_code, 1);
    }

    #[test]
    fn success_keeps_command_exit_code() {
        let (value, exit_code) =
            map_cmd_result_to_json(Ok((serde_json::json!({"ok": true}), 0)));
        assert_eq!(exit_code, 0);
        assert_eq!(value.unwrap()["ok"], true);
    }
}
