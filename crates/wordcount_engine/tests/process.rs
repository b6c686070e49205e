#![cfg(unix)]

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wordcount_core::parse;
use wordcount_engine::{
    count_document, CountError, CountSettings, Invocation, ProcessRunner, ToolRunner,
};

fn shell(script: &str, dir: &Path) -> Invocation {
    Invocation {
        program: "sh".to_string(),
        args: vec![OsString::from("-c"), OsString::from(script)],
        cwd: dir.to_path_buf(),
    }
}

/// Writes a shell stand-in for texcount that fails unless called with `-brief`.
fn fake_texcount(dir: &Path, stdout: &str) -> String {
    let path = dir.join("fake-texcount.sh");
    let script = format!(
        "for arg in \"$@\"; do [ \"$arg\" = -brief ] && printf '%s\\n' '{stdout}' && exit 0; done\nexit 1\n"
    );
    fs::write(&path, script).unwrap();
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn captures_stdout_and_stderr() {
    let temp = TempDir::new().unwrap();
    let runner = ProcessRunner::new(Duration::from_secs(10));

    let output = runner
        .run(&shell("echo '7+1+0 (0/0/2/1)'; echo warn >&2", temp.path()))
        .await
        .unwrap();

    assert_eq!(output.stdout, "7+1+0 (0/0/2/1)\n");
    assert_eq!(output.stderr, "warn\n");
}

#[tokio::test]
async fn runs_in_invocation_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("marker"), "").unwrap();
    let runner = ProcessRunner::new(Duration::from_secs(10));

    let output = runner
        .run(&shell("ls marker", temp.path()))
        .await
        .unwrap();
    assert_eq!(output.stdout.trim(), "marker");
}

#[tokio::test]
async fn non_zero_exit_reports_stderr() {
    let temp = TempDir::new().unwrap();
    let runner = ProcessRunner::new(Duration::from_secs(10));

    let err = runner
        .run(&shell("echo 'File not found' >&2; exit 3", temp.path()))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CountError::ExitStatus {
            code: Some(3),
            stderr: "File not found\n".to_string(),
        }
    );
}

#[tokio::test]
async fn missing_program_is_a_spawn_error() {
    let temp = TempDir::new().unwrap();
    let runner = ProcessRunner::new(Duration::from_secs(10));
    let invocation = Invocation {
        program: "definitely-not-texcount-2f9c".to_string(),
        args: Vec::new(),
        cwd: temp.path().to_path_buf(),
    };

    let err = runner.run(&invocation).await.unwrap_err();
    assert!(
        matches!(&err, CountError::Spawn { program, .. } if program == "definitely-not-texcount-2f9c"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn slow_tool_times_out() {
    let temp = TempDir::new().unwrap();
    let runner = ProcessRunner::new(Duration::from_millis(200));

    let err = runner
        .run(&shell("sleep 5", temp.path()))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CountError::Timeout {
            timeout: Duration::from_millis(200)
        }
    );
    assert_eq!(err.to_string(), "texcount did not finish within 200ms");
}

#[tokio::test]
async fn counts_document_with_external_tool() {
    let temp = TempDir::new().unwrap();
    let script = fake_texcount(temp.path(), "12+3+4 (5/6/7/8)");
    let document = temp.path().join("main.tex");
    fs::write(&document, "\\documentclass{article}").unwrap();
    let settings = CountSettings {
        command: "sh".to_string(),
        args: vec![script],
        merge: true,
        ..CountSettings::default()
    };
    let runner = ProcessRunner::new(settings.timeout);

    let count = count_document(&runner, &settings, &document).await.unwrap();
    assert_eq!(count, parse("12+3+4 (5/6/7/8)").unwrap());
}
