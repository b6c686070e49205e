use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::runtime::Runtime;
use wordcount_core::RequestId;
use wordcount_logging::{wc_error, wc_trace};

use crate::{count_document, CountSettings, EngineEvent, EngineStopped, ProcessRunner, ToolRunner};

enum EngineCommand {
    Count { request_id: RequestId, path: PathBuf },
}

/// Counts documents on a background tokio runtime.
///
/// Requests run concurrently and may complete out of order; callers match
/// completions by request id.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: CountSettings) -> Self {
        let runner = Arc::new(ProcessRunner::new(settings.timeout));
        Self::with_runner(settings, runner)
    }

    pub fn with_runner(settings: CountSettings, runner: Arc<dyn ToolRunner>) -> Self {
        Self::spawn(settings, runner, tokio::runtime::Runtime::new)
    }

    fn spawn(
        settings: CountSettings,
        runner: Arc<dyn ToolRunner>,
        build_runtime: fn() -> io::Result<Runtime>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let settings = Arc::new(settings);

        thread::spawn(move || {
            let runtime = match build_runtime() {
                Ok(runtime) => runtime,
                Err(err) => {
                    wc_error!("cannot start counting runtime: {}", err);
                    // Requests fail from here on, then receivers see the disconnect.
                    drop(cmd_rx);
                    drop(event_tx);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let runner = runner.clone();
                let settings = settings.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(runner.as_ref(), &settings, command, event_tx).await;
                });
            }
            // Let in-flight counts report before the runtime goes away.
            runtime.shutdown_timeout(settings.timeout);
        });

        Self { cmd_tx, event_rx }
    }

    pub fn request(
        &self,
        request_id: RequestId,
        path: impl Into<PathBuf>,
    ) -> Result<(), EngineStopped> {
        self.cmd_tx
            .send(EngineCommand::Count {
                request_id,
                path: path.into(),
            })
            .map_err(|_| EngineStopped)
    }

    pub fn try_recv(&self) -> Result<Option<EngineEvent>, EngineStopped> {
        match self.event_rx.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(EngineStopped),
        }
    }

    /// Waits up to `timeout` for the next event; `Ok(None)` when none arrived in time.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineStopped> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(EngineStopped),
        }
    }
}

async fn handle_command(
    runner: &dyn ToolRunner,
    settings: &CountSettings,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Count { request_id, path } => {
            let result = count_document(runner, settings, &path).await;
            wc_trace!("count {} finished ok={}", request_id, result.is_ok());
            let _ = event_tx.send(EngineEvent::CountCompleted { request_id, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CountError, Invocation, ToolOutput};

    struct Unreachable;

    #[async_trait::async_trait]
    impl ToolRunner for Unreachable {
        async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, CountError> {
            Err(CountError::Spawn {
                program: invocation.program.clone(),
                message: "runner should not be called".to_string(),
            })
        }
    }

    fn failing_runtime() -> io::Result<Runtime> {
        Err(io::Error::other("no threads left"))
    }

    #[test]
    fn runtime_failure_is_reported_as_stopped() {
        let engine = EngineHandle::spawn(
            CountSettings::default(),
            Arc::new(Unreachable),
            failing_runtime,
        );

        assert_eq!(
            engine.recv_timeout(Duration::from_secs(5)),
            Err(EngineStopped)
        );
        assert_eq!(engine.try_recv(), Err(EngineStopped));
        assert_eq!(engine.request(1, "/d/a.tex"), Err(EngineStopped));
    }
}
