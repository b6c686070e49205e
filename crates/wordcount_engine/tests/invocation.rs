use std::ffi::OsString;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use wordcount_engine::{CountError, CountSettings, Invocation};

fn args(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

#[test]
fn default_invocation_is_brief_count_of_file_name() {
    let invocation =
        Invocation::for_document(&CountSettings::default(), Path::new("/home/u/thesis/main.tex"))
            .unwrap();

    assert_eq!(invocation.program, "texcount");
    assert_eq!(invocation.args, args(&["-brief", "main.tex"]));
    assert_eq!(invocation.cwd, PathBuf::from("/home/u/thesis"));
}

#[test]
fn configured_args_come_first_then_merge() {
    let settings = CountSettings {
        command: "/opt/texlive/bin/texcount".to_string(),
        args: vec!["-inc".to_string(), "-utf8".to_string()],
        merge: true,
        ..CountSettings::default()
    };
    let invocation = Invocation::for_document(&settings, Path::new("doc/ch1.tex")).unwrap();

    assert_eq!(invocation.program, "/opt/texlive/bin/texcount");
    assert_eq!(
        invocation.args,
        args(&["-inc", "-utf8", "-merge", "-brief", "ch1.tex"])
    );
    assert_eq!(invocation.cwd, PathBuf::from("doc"));
}

#[test]
fn bare_file_name_runs_in_current_directory() {
    let invocation =
        Invocation::for_document(&CountSettings::default(), Path::new("paper.tex")).unwrap();
    assert_eq!(invocation.cwd, PathBuf::from("."));
}

#[test]
fn path_without_file_name_is_rejected() {
    let err = Invocation::for_document(&CountSettings::default(), Path::new("/")).unwrap_err();
    assert_eq!(
        err,
        CountError::InvalidDocument {
            path: PathBuf::from("/")
        }
    );
}
