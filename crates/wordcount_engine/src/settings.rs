use std::time::Duration;

pub const DEFAULT_COMMAND: &str = "texcount";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSettings {
    /// Program to run; looked up on `PATH` when not a path.
    pub command: String,
    /// Extra arguments passed before the engine's own flags.
    pub args: Vec<String>,
    /// Count included files together with the main document (`-merge`).
    pub merge: bool,
    pub timeout: Duration,
}

impl Default for CountSettings {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            args: Vec::new(),
            merge: false,
            timeout: Duration::from_secs(30),
        }
    }
}
