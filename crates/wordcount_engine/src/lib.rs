//! Word count engine: texcount invocation and background counting.
mod counter;
mod engine;
mod invocation;
mod runner;
mod settings;
mod types;

pub use counter::count_document;
pub use engine::EngineHandle;
pub use invocation::Invocation;
pub use runner::{ProcessRunner, ToolRunner};
pub use settings::{CountSettings, DEFAULT_COMMAND};
pub use types::{CountError, EngineEvent, EngineStopped, ToolOutput};
