//! Typed external-tool invocations.
//!
//! Every pipeline stage describes the command it needs as a [`ToolInvocation`] and hands it to
//! the [`ToolRunner`] carried by the run context.

/// Argument-list command description.
pub mod invocation;
/// Runner trait and built-in runners.
pub mod runner;
