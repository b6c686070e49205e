use std::path::Path;

use wordcount_core::{parse, Count};
use wordcount_logging::{wc_debug, wc_error, wc_warn};

use crate::{CountError, CountSettings, Invocation, ToolRunner};

/// Run texcount for `path` and parse its output.
pub async fn count_document(
    runner: &dyn ToolRunner,
    settings: &CountSettings,
    path: &Path,
) -> Result<Count, CountError> {
    let invocation = match Invocation::for_document(settings, path) {
        Ok(invocation) => invocation,
        Err(err) => {
            wc_warn!("A valid file was not given for texcount: {}", err);
            return Err(err);
        }
    };
    wc_debug!(
        "texcount program={} args={:?} cwd={:?}",
        invocation.program,
        invocation.args,
        invocation.cwd
    );

    let output = runner.run(&invocation).await.inspect_err(|err| {
        wc_error!("cannot count words in {:?}: {}", path, err);
    })?;
    if !output.stderr.trim().is_empty() {
        wc_debug!("texcount stderr: {}", output.stderr.trim());
    }

    parse(&output.stdout).map_err(|err| {
        wc_error!("cannot parse texcount output for {:?}: {}", path, err);
        CountError::from(err)
    })
}
