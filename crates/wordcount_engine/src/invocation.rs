use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{CountError, CountSettings};

/// A fully resolved texcount command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
}

impl Invocation {
    /// `<command> <args..> [-merge] -brief <file name>`, run from the file's directory.
    ///
    /// texcount resolves `\input` relative to its working directory, so only the
    /// file name is passed.
    pub fn for_document(settings: &CountSettings, path: &Path) -> Result<Self, CountError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| CountError::InvalidDocument {
                path: path.to_path_buf(),
            })?;
        let cwd = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut args: Vec<OsString> = settings.args.iter().map(OsString::from).collect();
        if settings.merge {
            args.push("-merge".into());
        }
        args.push("-brief".into());
        args.push(file_name.to_os_string());

        Ok(Self {
            program: settings.command.clone(),
            args,
            cwd,
        })
    }
}
