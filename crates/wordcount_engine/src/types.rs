use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use wordcount_core::{Count, ParseError, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("not a countable file: {path:?}")]
    InvalidDocument { path: PathBuf },
    #[error("cannot run {program}: {message}")]
    Spawn { program: String, message: String },
    #[error("texcount exited with {}: {stderr}", exit_label(.code))]
    ExitStatus { code: Option<i32>, stderr: String },
    #[error("texcount did not finish within {}ms", millis(.timeout))]
    Timeout { timeout: Duration },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

fn millis(timeout: &Duration) -> u128 {
    timeout.as_millis()
}

/// The background counting thread has exited.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("counting engine stopped")]
pub struct EngineStopped;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CountCompleted {
        request_id: RequestId,
        result: Result<Count, CountError>,
    },
}
