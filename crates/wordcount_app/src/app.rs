use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, SystemTime};

use anyhow::Context;
use wordcount_core::{language_for_path, update, Effect, Msg, StatusState};
use wordcount_engine::{EngineEvent, EngineHandle, EngineStopped};
use wordcount_logging::{wc_debug, wc_info, wc_warn};

use crate::cli::Cli;
use crate::config::AppConfig;

const FAILURE_NOTICE: &str = "texcount failed. Please refer to the log for details";

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::resolve(&cli)?;
    let settings = config.count_settings();
    let language_id = cli
        .language
        .clone()
        .unwrap_or_else(|| language_for_path(&cli.file).to_string());

    // Completions should arrive well within the tool timeout.
    let wait = settings.timeout + Duration::from_secs(5);
    let mut app = StatusApp::new(EngineHandle::new(settings), &config.template);
    app.dispatch(Msg::DocumentActivated {
        path: cli.file.clone(),
        language_id: language_id.clone(),
    })?;

    if !app.state.view().visible {
        wc_info!(
            "{:?} ({}) is not a TeX document; nothing to count",
            cli.file,
            language_id
        );
        return Ok(ExitCode::SUCCESS);
    }

    if cli.watch {
        return app.watch(&cli.file, Duration::from_millis(cli.interval.max(1)));
    }

    let Some(event) = app
        .engine
        .recv_timeout(wait)
        .context("counting engine stopped without a result")?
    else {
        anyhow::bail!("texcount gave no result within {}s", wait.as_secs());
    };
    app.handle_event(event)?;
    let view = app.state.view();
    println!("{}", view.text);
    if app.state.count().is_some() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Wires the pure status state machine to the counting engine.
struct StatusApp {
    state: StatusState,
    engine: EngineHandle,
}

impl StatusApp {
    fn new(engine: EngineHandle, template: &str) -> Self {
        Self {
            state: StatusState::new(template),
            engine,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Result<(), EngineStopped> {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = update(state, msg);
        self.state = next;
        self.run_effects(effects)
    }

    fn run_effects(&self, effects: Vec<Effect>) -> Result<(), EngineStopped> {
        for effect in effects {
            match effect {
                Effect::RequestCount { request_id, path } => {
                    wc_debug!("RequestCount request_id={} path={:?}", request_id, path);
                    self.engine.request(request_id, path)?;
                }
                Effect::Hide => {
                    wc_debug!("status hidden");
                }
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: EngineEvent) -> Result<(), EngineStopped> {
        match event {
            EngineEvent::CountCompleted { request_id, result } => {
                let count = match result {
                    Ok(count) => Some(count),
                    Err(err) => {
                        wc_debug!("count {} failed: {}", request_id, err);
                        eprintln!("{FAILURE_NOTICE}");
                        None
                    }
                };
                self.dispatch(Msg::CountCompleted { request_id, count })
            }
        }
    }

    /// Recount whenever the file's modification time changes.
    ///
    /// Runs until killed; returns only when the engine stops.
    fn watch(&mut self, path: &Path, interval: Duration) -> anyhow::Result<ExitCode> {
        let mut last_modified = modified(path);
        let mut shown: Option<String> = None;
        loop {
            while let Some(event) = self
                .engine
                .recv_timeout(interval)
                .context("counting engine stopped while watching")?
            {
                self.handle_event(event)?;
                self.print_if_changed(&mut shown);
            }
            self.print_if_changed(&mut shown);

            let current = modified(path);
            if current != last_modified {
                last_modified = current;
                if current.is_some() {
                    wc_debug!("{:?} changed, recounting", path);
                    self.dispatch(Msg::RefreshRequested)?;
                } else {
                    wc_warn!("cannot read {:?}; keeping last count", path);
                }
            }
        }
    }

    fn print_if_changed(&self, shown: &mut Option<String>) {
        let view = self.state.view();
        if view.visible && shown.as_deref() != Some(view.text.as_str()) {
            println!("{}", view.text);
            *shown = Some(view.text);
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
