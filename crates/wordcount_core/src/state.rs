use std::path::{Path, PathBuf};

use crate::{format, Count};

pub type RequestId = u64;

const TEX_LANGUAGES: &[&str] = &["tex", "latex", "latex-expl3", "doctex"];

/// Whether documents with this language id get a word count.
pub fn is_tex_language(language_id: &str) -> bool {
    TEX_LANGUAGES.contains(&language_id)
}

/// Best-effort language id for a file, based on its extension.
pub fn language_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("tex" | "ltx" | "latex") => "latex",
        Some("dtx") => "doctex",
        _ => "plaintext",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveDocument {
    path: PathBuf,
    countable: bool,
}

/// What the status indicator should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub visible: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusState {
    document: Option<ActiveDocument>,
    template: String,
    last_issued: RequestId,
    // Results for requests below this id belong to an earlier document.
    document_epoch: RequestId,
    last_applied: Option<RequestId>,
    count: Option<Count>,
}

impl StatusState {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> StatusView {
        StatusView {
            visible: self.is_countable(),
            text: format(self.count.as_ref(), &self.template),
        }
    }

    pub fn count(&self) -> Option<&Count> {
        self.count.as_ref()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub(crate) fn countable_path(&self) -> Option<&Path> {
        self.document
            .as_ref()
            .filter(|doc| doc.countable)
            .map(|doc| doc.path.as_path())
    }

    pub(crate) fn is_countable(&self) -> bool {
        self.countable_path().is_some()
    }

    pub(crate) fn set_template(&mut self, template: String) {
        self.template = template;
    }

    pub(crate) fn issue_request(&mut self) -> RequestId {
        self.last_issued += 1;
        self.last_issued
    }

    /// Switch documents, invalidating every request issued so far.
    pub(crate) fn activate(&mut self, document: Option<(PathBuf, bool)>) {
        self.document = document.map(|(path, countable)| ActiveDocument { path, countable });
        self.document_epoch = self.last_issued + 1;
        self.last_applied = None;
        self.count = None;
    }

    /// Applies a completed count unless a newer one is already shown.
    pub(crate) fn apply_completion(&mut self, request_id: RequestId, count: Option<Count>) -> bool {
        if !self.is_countable()
            || request_id < self.document_epoch
            || request_id > self.last_issued
        {
            return false;
        }
        if self.last_applied.is_some_and(|applied| request_id <= applied) {
            return false;
        }
        self.last_applied = Some(request_id);
        self.count = count;
        true
    }
}
