use std::time::{Duration, Instant};

use crate::{
    config::PipelineConfig,
    foundation::error::AutoslideResult,
    process::{invocation::ToolInvocation, runner::ToolRunner},
};

/// Program name used in banners.
pub const PROGRAM_NAME: &str = "autoslide";
/// Program version used in banners and `--version`.
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wall-clock time spent in one named pipeline stage.
#[derive(Clone, Debug, PartialEq)]
pub struct StageTiming {
    /// Stage name, e.g. `"narrate"`.
    pub stage: &'static str,
    /// Elapsed time.
    pub elapsed: Duration,
}

/// Run clock: started on construction, records stage timings in execution order.
#[derive(Clone, Debug)]
pub struct RunClock {
    started: Instant,
    stages: Vec<StageTiming>,
}

impl Default for RunClock {
    fn default() -> Self {
        Self::start()
    }
}

impl RunClock {
    /// Start a new clock.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            stages: Vec::new(),
        }
    }

    /// Append a stage timing.
    pub fn record(&mut self, stage: &'static str, elapsed: Duration) {
        self.stages.push(StageTiming { stage, elapsed });
    }

    /// Time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Recorded stages, in execution order.
    pub fn stages(&self) -> &[StageTiming] {
        &self.stages
    }

    /// Human-readable timing table, one stage per line plus a total.
    pub fn report(&self) -> String {
        let width = self
            .stages
            .iter()
            .map(|s| s.stage.len())
            .max()
            .unwrap_or(0)
            .max("total".len());
        let mut out = String::new();
        for s in &self.stages {
            out.push_str(&format!(
                "{:<width$}  {:>10.3} s\n",
                s.stage,
                s.elapsed.as_secs_f64()
            ));
        }
        out.push_str(&format!(
            "{:<width$}  {:>10.3} s",
            "total",
            self.elapsed().as_secs_f64()
        ));
        out
    }
}

/// Explicit per-run state handed to every pipeline stage.
///
/// Owns the resolved config, the tool runner and the run clock.
pub struct RunContext {
    config: PipelineConfig,
    runner: Box<dyn ToolRunner>,
    clock: RunClock,
}

impl RunContext {
    /// Create a context and start its clock.
    pub fn new(config: PipelineConfig, runner: Box<dyn ToolRunner>) -> Self {
        Self {
            config,
            runner,
            clock: RunClock::start(),
        }
    }

    /// Resolved configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run clock.
    pub fn clock(&self) -> &RunClock {
        &self.clock
    }

    /// Run one external tool through the configured runner.
    pub fn run_tool(&self, inv: &ToolInvocation) -> AutoslideResult<()> {
        tracing::debug!("run: {inv}");
        self.runner.run(inv)
    }

    /// Run `f` as a named stage and record its wall-clock time, successful or not.
    pub fn stage<T>(
        &mut self,
        name: &'static str,
        f: impl FnOnce(&mut Self) -> AutoslideResult<T>,
    ) -> AutoslideResult<T> {
        let t0 = Instant::now();
        let out = f(self);
        self.clock.record(name, t0.elapsed());
        out
    }

    /// Log the initiation banner.
    pub fn initiate(&self) {
        tracing::info!("initiate {PROGRAM_NAME}");
        tracing::info!("version: {PROGRAM_VERSION}");
        if let Some(user) = self.config.username.as_deref() {
            tracing::info!("user: {user}");
        }
    }

    /// Log the termination banner and the stage timing report.
    pub fn terminate(&self) {
        tracing::info!("time report:\n{}", self.clock.report());
        tracing::info!("terminate {PROGRAM_NAME}");
    }
}

#[cfg(test)]
#[path = "../tests/unit/context.rs"]
mod tests;
