use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use wordcount_core::{parse, ParseError};
use wordcount_engine::{
    count_document, CountError, CountSettings, Invocation, ToolOutput, ToolRunner,
};

struct FakeRunner {
    result: Result<ToolOutput, CountError>,
    seen: Arc<Mutex<Vec<Invocation>>>,
}

impl FakeRunner {
    fn stdout(stdout: &str) -> Self {
        Self::new(Ok(ToolOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
        }))
    }

    fn new(result: Result<ToolOutput, CountError>) -> Self {
        Self {
            result,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl ToolRunner for FakeRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, CountError> {
        self.seen.lock().unwrap().push(invocation.clone());
        self.result.clone()
    }
}

#[tokio::test]
async fn parses_runner_stdout() {
    let runner = FakeRunner::stdout("!!! Unknown macro \\foo\n\n12+3+4 (5/6/7/8)\n(errors:2)\n");
    let settings = CountSettings::default();

    let count = count_document(&runner, &settings, "/tmp/a.tex".as_ref())
        .await
        .unwrap();

    assert_eq!(count, parse("12+3+4 (5/6/7/8)").unwrap());
    let seen = runner.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].program, "texcount");
}

#[tokio::test]
async fn unparseable_stdout_is_a_parse_error() {
    let runner = FakeRunner::stdout("texcount: unknown option -brief\n");
    let err = count_document(&runner, &CountSettings::default(), "a.tex".as_ref())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CountError::Parse(ParseError::Malformed {
            line: "texcount: unknown option -brief".to_string()
        })
    );
}

#[tokio::test]
async fn runner_failure_is_propagated() {
    let failure = CountError::ExitStatus {
        code: Some(2),
        stderr: "File not found".to_string(),
    };
    let runner = FakeRunner::new(Err(failure.clone()));
    let err = count_document(&runner, &CountSettings::default(), "a.tex".as_ref())
        .await
        .unwrap_err();

    assert_eq!(err, failure);
    assert_eq!(err.to_string(), "texcount exited with status 2: File not found");
}

#[tokio::test]
async fn invalid_document_never_reaches_runner() {
    let runner = FakeRunner::stdout("1+0+0 (0/0/0/0)");
    let err = count_document(&runner, &CountSettings::default(), "/".as_ref())
        .await
        .unwrap_err();

    assert!(matches!(err, CountError::InvalidDocument { .. }));
    assert!(runner.seen.lock().unwrap().is_empty());
}
