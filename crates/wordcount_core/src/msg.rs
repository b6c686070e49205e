use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A document became the active one.
    DocumentActivated { path: PathBuf, language_id: String },
    /// No document is active any more.
    DocumentClosed,
    /// The active document changed on disk or the user asked for a recount.
    RefreshRequested,
    /// Configuration supplied a new status template.
    TemplateChanged(String),
    /// The engine finished a count; `None` when counting failed.
    CountCompleted {
        request_id: crate::RequestId,
        count: Option<crate::Count>,
    },
}
