//! Word count core: texcount output parsing, template formatting and the
//! pure status state machine.
mod count;
mod effect;
mod format;
mod msg;
mod parse;
mod state;
mod update;

pub use count::{Count, InstanceCounts, MathCounts, WordCounts};
pub use effect::Effect;
pub use format::{format, Placeholder, UNAVAILABLE};
pub use msg::Msg;
pub use parse::{parse, ParseError};
pub use state::{is_tex_language, language_for_path, RequestId, StatusState, StatusView};
pub use update::update;
