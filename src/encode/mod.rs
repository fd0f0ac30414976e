//! Final video encoding.

/// Compositing and encoding through the system `ffmpeg` binary.
pub mod ffmpeg;
