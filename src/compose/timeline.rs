use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    audio::wav::probe_wav,
    foundation::core::SlideIndex,
    foundation::error::{AutoslideError, AutoslideResult},
};

/// Placement of one slide clip on the output timeline, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimelineEntry {
    /// Slide this clip shows.
    pub index: SlideIndex,
    /// Offset from the start of the video.
    pub start_secs: f64,
    /// Narration length of the slide.
    pub duration_secs: f64,
}

impl TimelineEntry {
    /// Exclusive end of the clip.
    pub fn end_secs(&self) -> f64 {
        self.start_secs + self.duration_secs
    }
}

/// Back-to-back slide clips: each entry starts where the previous one ends.
///
/// Invariant: `entries[0].start_secs == 0` and
/// `entries[i].start_secs == sum(entries[..i].duration_secs)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    fade_in_secs: f64,
    total_secs: f64,
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Lay out clips of the given durations sequentially, fading the first one in.
    pub fn from_durations(durations: &[f64], fade_in_secs: f64) -> AutoslideResult<Self> {
        if !fade_in_secs.is_finite() || fade_in_secs < 0.0 {
            return Err(AutoslideError::validation(
                "fade-in window must be finite and >= 0",
            ));
        }

        let mut entries = Vec::with_capacity(durations.len());
        let mut start = 0.0f64;
        for (i, &duration) in durations.iter().enumerate() {
            if !duration.is_finite() || duration < 0.0 {
                return Err(AutoslideError::validation(format!(
                    "slide {i} has invalid duration {duration}"
                )));
            }
            let entry = TimelineEntry {
                index: SlideIndex(i),
                start_secs: start,
                duration_secs: duration,
            };
            start = entry.end_secs();
            entries.push(entry);
        }

        Ok(Self {
            fade_in_secs,
            total_secs: start,
            entries,
        })
    }

    /// Entries in slide order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Number of clips.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no clips.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all clip durations.
    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    /// Fade-in window configured for the first clip.
    pub fn fade_in_secs(&self) -> f64 {
        self.fade_in_secs
    }

    /// Fade-in to apply to clip `index`, if any. Only the first clip fades in.
    pub fn fade_in_for(&self, index: SlideIndex) -> Option<f64> {
        (index.0 == 0 && self.fade_in_secs > 0.0 && !self.entries.is_empty())
            .then_some(self.fade_in_secs)
    }

    /// Pretty JSON manifest of the timeline.
    pub fn to_json_pretty(&self) -> AutoslideResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AutoslideError::serde(e.to_string()))
    }

    /// Write the JSON manifest to `path`, creating parent directories as needed.
    pub fn write_json(&self, path: &Path) -> AutoslideResult<()> {
        let json = self.to_json_pretty()?;
        crate::encode::ffmpeg::ensure_parent_dir(path)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write timeline '{}'", path.display()))?;
        Ok(())
    }
}

/// Read every narration header and lay the slides out back to back.
pub fn build_timeline(audio_files: &[PathBuf], fade_in_secs: f64) -> AutoslideResult<Timeline> {
    let mut durations = Vec::with_capacity(audio_files.len());
    for (i, path) in audio_files.iter().enumerate() {
        let info = probe_wav(path)?;
        let d = info.duration_secs();
        tracing::debug!(
            slide = i,
            frames = info.frames,
            sample_rate = info.sample_rate,
            channels = info.channels,
            "slide duration: {d} s"
        );
        durations.push(d);
    }
    let timeline = Timeline::from_durations(&durations, fade_in_secs)?;
    for e in timeline.entries() {
        tracing::debug!(slide = e.index.0, "slide start time: {} s", e.start_secs);
    }
    tracing::debug!("slides full duration: {} s", timeline.total_secs());
    Ok(timeline)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/timeline.rs"]
mod tests;
