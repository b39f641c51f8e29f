use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use monitor_core::{Controller, MonitorViewModel};
use monitor_engine::{
    message_channel, CatalogSettings, EndpointCatalog, MessageReceiver, ReplayRunner, RunHandle,
    TaskRunner,
};
use monitor_logging::{monitor_debug, monitor_info};

use super::cli::{Command, Options};
use super::config::{load_config, MonitorConfig};
use super::effects::{AlertSink, EffectRunner, TerminalAlert};
use super::logging;
use super::ui;

pub fn run_app(options: Options) -> Result<()> {
    logging::initialize(options.log);

    let config = load_config(&options.config);
    let mut app = App::new(config, io::stdout(), TerminalAlert::new(), options.quiet);
    app.init();

    match options.command {
        Command::Run {
            script,
            url,
            delay_ms,
        } => {
            let delay_ms = delay_ms.unwrap_or(app.config.replay_delay_ms);
            let runner = load_replay(&script, delay_ms)?;
            app.run_session(Arc::new(runner), &url)?;
        }
        Command::Endpoints { url } => {
            app.show_endpoints(url)?;
        }
    }
    Ok(())
}

fn load_replay(path: &Path, delay_ms: u64) -> Result<ReplayRunner> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("Failed to read message script {:?}", path))?;
    let runner = ReplayRunner::from_jsonl(&script)
        .with_context(|| format!("Invalid message script {:?}", path))?;
    Ok(runner.with_delay(Duration::from_millis(delay_ms)))
}

/// Composition root: owns the controller, the output and the initialization flag.
pub struct App<W: Write, A: AlertSink> {
    config: MonitorConfig,
    controller: Controller,
    effects: EffectRunner<A>,
    out: W,
    quiet: bool,
    initialized: bool,
    frames_rendered: usize,
}

impl<W: Write, A: AlertSink> App<W, A> {
    pub fn new(config: MonitorConfig, out: W, alerts: A, quiet: bool) -> Self {
        Self {
            config,
            controller: Controller::default(),
            effects: EffectRunner::new(alerts),
            out,
            quiet,
            initialized: false,
            frames_rendered: 0,
        }
    }

    /// Sets up the controller once. Later calls leave the running state alone and
    /// return `false`.
    pub fn init(&mut self) -> bool {
        if self.initialized {
            monitor_debug!("Monitor already initialized");
            return false;
        }
        self.initialized = true;
        self.controller = Controller::new(self.config.headings.clone());
        monitor_info!("Monitor initialized");
        true
    }

    /// Runs one task and shows its messages until it stops reporting.
    pub fn run_session(
        &mut self,
        runner: Arc<dyn TaskRunner>,
        target_url: &str,
    ) -> Result<MonitorViewModel> {
        self.init();
        let (port, receiver) = message_channel();
        let handle = RunHandle::spawn(runner, target_url, port)
            .context("Failed to start the task runner")?;

        let shown = self.show_frames(&receiver);
        // A runner still posting sees the closed channel and returns.
        drop(receiver);
        let outcome = handle.join();
        shown?;

        if self.quiet || self.frames_rendered == 0 {
            self.render()?;
        }
        outcome.with_context(|| format!("Run for {} failed", target_url))?;

        monitor_info!("Run for {} stopped reporting", target_url);
        Ok(self.controller.view())
    }

    fn show_frames(&mut self, receiver: &MessageReceiver) -> Result<()> {
        while let Some(frame) = receiver.recv() {
            let effects = self.controller.dispatch(frame);
            self.effects.enqueue(effects);
            if self.controller.consume_dirty() && !self.quiet {
                self.render()?;
            }
        }
        Ok(())
    }

    /// Prints the endpoint selection list. A failed fetch is returned as an error and no
    /// list is shown.
    pub fn show_endpoints(&mut self, url: Option<String>) -> Result<()> {
        let settings = CatalogSettings {
            url: url.unwrap_or_else(|| self.config.endpoints_url.clone()),
            ..CatalogSettings::default()
        };
        let catalog = EndpointCatalog::new(settings);
        let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
        let options = runtime
            .block_on(catalog.selection_options())
            .context("Failed to load the endpoint list")?;

        for line in ui::render::render_endpoint_options(&options) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let lines = ui::render::render(&self.controller.view());
        if self.frames_rendered > 0 {
            writeln!(self.out, "{}", ui::constants::FRAME_SEPARATOR)?;
        }
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        self.frames_rendered += 1;
        Ok(())
    }
}
