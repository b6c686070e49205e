use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::{CountError, Invocation, ToolOutput};

#[async_trait::async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, CountError>;
}

/// Runs the counting tool as a child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait::async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, CountError> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        // Dropping the output future on timeout kills the child.
        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| CountError::Timeout {
                timeout: self.timeout,
            })?
            .map_err(|err| CountError::Spawn {
                program: invocation.program.clone(),
                message: err.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(CountError::ExitStatus {
                code: output.status.code(),
                stderr,
            });
        }

        Ok(ToolOutput { stdout, stderr })
    }
}
