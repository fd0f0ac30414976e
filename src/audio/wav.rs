use std::path::Path;

use crate::foundation::error::{AutoslideError, AutoslideResult};

/// Header facts needed to place a narration clip on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavInfo {
    /// Frames (samples per channel).
    pub frames: u32,
    /// Sample rate in Hz, non-zero.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
}

impl WavInfo {
    /// `frames / sample_rate` in seconds.
    pub fn duration_secs(&self) -> f64 {
        f64::from(self.frames) / f64::from(self.sample_rate)
    }
}

/// Read the WAV header of `path` without decoding samples.
pub fn probe_wav(path: &Path) -> AutoslideResult<WavInfo> {
    let reader = hound::WavReader::open(path).map_err(|e| {
        AutoslideError::audio(format!(
            "failed to read WAV header of '{}': {e}",
            path.display()
        ))
    })?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return Err(AutoslideError::audio(format!(
            "'{}' declares a sample rate of zero",
            path.display()
        )));
    }
    Ok(WavInfo {
        frames: reader.duration(),
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/wav.rs"]
mod tests;
