use std::{
    io::{ErrorKind, Write as _},
    process::{Command, Stdio},
    sync::{Arc, Mutex},
};

use crate::{
    foundation::error::{AutoslideError, AutoslideResult},
    process::invocation::ToolInvocation,
};

/// Executes [`ToolInvocation`]s to completion.
///
/// Contract: `run` blocks until the tool exits and returns `Ok(())` only for a zero exit status.
pub trait ToolRunner: Send {
    /// Run one tool invocation.
    fn run(&self, inv: &ToolInvocation) -> AutoslideResult<()>;
}

/// Runner that spawns real processes found on `PATH`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, inv: &ToolInvocation) -> AutoslideResult<()> {
        let mut cmd = Command::new(inv.program());
        cmd.args(inv.arg_list())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .stdin(if inv.stdin_bytes().is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        let mut child = cmd.spawn().map_err(|e| {
            AutoslideError::tool(format!(
                "failed to spawn {} (is it installed and on PATH?): {e}",
                inv.program()
            ))
        })?;

        // Feed stdin from a separate thread so a chatty stderr cannot deadlock the pipe.
        let feeder = match (child.stdin.take(), inv.stdin_bytes()) {
            (Some(mut stdin), Some(bytes)) => {
                let bytes = bytes.to_vec();
                Some(std::thread::spawn(move || stdin.write_all(&bytes)))
            }
            _ => None,
        };

        let output = child.wait_with_output().map_err(|e| {
            AutoslideError::tool(format!(
                "failed to wait for {} to finish: {e}",
                inv.program()
            ))
        })?;
        let fed = feeder.map(|h| h.join());

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(AutoslideError::tool(format!(
                "{} exited with status {}: {}",
                inv.program(),
                output.status,
                stderr.trim()
            )));
        }

        match fed {
            None | Some(Ok(Ok(()))) => {}
            // The tool succeeded without draining its input.
            Some(Ok(Err(e))) if e.kind() == ErrorKind::BrokenPipe => {
                tracing::debug!(program = inv.program(), "tool closed stdin early: {e}");
            }
            Some(Ok(Err(e))) => {
                return Err(AutoslideError::tool(format!(
                    "failed to write stdin of {}: {e}",
                    inv.program()
                )));
            }
            Some(Err(_)) => {
                return Err(AutoslideError::tool(format!(
                    "stdin feeder thread for {} panicked",
                    inv.program()
                )));
            }
        }

        if !stderr.trim().is_empty() {
            tracing::debug!(program = inv.program(), "tool stderr: {}", stderr.trim());
        }
        Ok(())
    }
}

type ToolHandler = dyn Fn(&ToolInvocation) -> AutoslideResult<()> + Send + Sync;

/// Runner that records every invocation instead of spawning processes, for tests and dry runs.
///
/// An optional handler can simulate the tool (e.g. write the file it would have produced) or
/// fail the call. Clones share the same call log.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<ToolInvocation>>>,
    handler: Option<Arc<ToolHandler>>,
}

impl RecordingRunner {
    /// Runner that accepts every invocation and does nothing else.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that delegates each invocation to `handler` after recording it.
    pub fn with_handler(
        handler: impl Fn(&ToolInvocation) -> AutoslideResult<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Arc::default(),
            handler: Some(Arc::new(handler)),
        }
    }

    /// Snapshot of recorded invocations, in call order.
    pub fn calls(&self) -> Vec<ToolInvocation> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Program names of recorded invocations, in call order.
    pub fn programs(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| c.program().to_string())
            .collect()
    }
}

impl std::fmt::Debug for RecordingRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingRunner")
            .field("calls", &self.calls().len())
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, inv: &ToolInvocation) -> AutoslideResult<()> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(inv.clone());
        match self.handler.as_ref() {
            Some(handler) => handler(inv),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/process/runner.rs"]
mod tests;
