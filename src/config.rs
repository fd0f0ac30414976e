use std::path::PathBuf;

use crate::{
    audio::voice::VoiceEffect,
    foundation::core::{DECK_FILE_NAME, Fps, SLIDE_IMAGE_PATTERN},
    foundation::error::{AutoslideError, AutoslideResult},
};

/// Default Markdown input path.
pub const DEFAULT_INPUT: &str = "slides.md";
/// Default video output path.
pub const DEFAULT_OUTPUT: &str = "slides.mp4";
/// Fade-in window applied to the first clip, in seconds.
pub const FADE_IN_SECS: f64 = 0.3;
/// Heading delimiter the Markdown is split on.
pub const SLIDE_DELIMITER: char = '#';

/// Binaries used for each external stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolPaths {
    /// Markdown -> beamer PDF.
    pub pandoc: String,
    /// PDF -> per-page PNG (ImageMagick).
    pub convert: String,
    /// Text -> WAV (Festival).
    pub text2wave: String,
    /// Audio effects.
    pub sox: String,
    /// Video compositing and encoding.
    pub ffmpeg: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            pandoc: "pandoc".to_string(),
            convert: "convert".to_string(),
            text2wave: "text2wave".to_string(),
            sox: "sox".to_string(),
            ffmpeg: "ffmpeg".to_string(),
        }
    }
}

/// Rasterizer parameters for turning the deck into slide images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterSettings {
    /// Input density in DPI.
    pub density: u32,
    /// PNG quality setting.
    pub quality: u8,
    /// Output geometry, `WIDTHxHEIGHT`.
    pub scale: String,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            density: 1200,
            quality: 85,
            scale: "1200x900".to_string(),
        }
    }
}

/// Everything one pipeline run needs, resolved up front.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Markdown slides.
    pub input: PathBuf,
    /// Final video.
    pub output: PathBuf,
    /// Directory holding the deck and per-slide intermediates.
    pub work_dir: PathBuf,
    /// User name shown in the run banner.
    pub username: Option<String>,
    /// Skip the voice effect and keep the synthesized narration as-is.
    pub normal_voice: bool,
    /// Optional path for a JSON dump of the computed timeline.
    pub timeline_json: Option<PathBuf>,
    /// Heading delimiter for segmentation.
    pub delimiter: char,
    /// Output frame rate.
    pub fps: Fps,
    /// Fade-in window of the first clip, in seconds.
    pub fade_in_secs: f64,
    /// Value passed to `text2wave -scale`.
    pub speech_scale: f32,
    /// Effect chain applied when `normal_voice` is off.
    pub voice_effect: VoiceEffect,
    /// Deck rasterizer parameters.
    pub raster: RasterSettings,
    /// ffmpeg video encoder.
    pub video_codec: String,
    /// ffmpeg audio encoder.
    pub audio_codec: String,
    /// Overwrite an existing output video.
    pub overwrite: bool,
    /// External tool binaries.
    pub tools: ToolPaths,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            work_dir: PathBuf::from("."),
            username: None,
            normal_voice: false,
            timeline_json: None,
            delimiter: SLIDE_DELIMITER,
            fps: Fps { num: 30, den: 1 },
            fade_in_secs: FADE_IN_SECS,
            speech_scale: 1.0,
            voice_effect: VoiceEffect::default(),
            raster: RasterSettings::default(),
            video_codec: "mpeg4".to_string(),
            audio_codec: "libvorbis".to_string(),
            overwrite: true,
            tools: ToolPaths::default(),
        }
    }
}

impl PipelineConfig {
    /// Config with default settings for the given input/output pair.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Builder-style override of the work directory.
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    /// Reject settings no stage could honor.
    pub fn validate(&self) -> AutoslideResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.fade_in_secs.is_finite() || self.fade_in_secs < 0.0 {
            return Err(AutoslideError::validation(
                "fade-in window must be finite and >= 0",
            ));
        }
        if !self.speech_scale.is_finite() || self.speech_scale <= 0.0 {
            return Err(AutoslideError::validation(
                "speech scale must be finite and > 0",
            ));
        }
        if self.video_codec.trim().is_empty() || self.audio_codec.trim().is_empty() {
            return Err(AutoslideError::validation("codecs must be non-empty"));
        }
        if self.delimiter.is_whitespace() {
            return Err(AutoslideError::validation(
                "slide delimiter must not be whitespace",
            ));
        }
        self.voice_effect.validate()?;
        Ok(())
    }

    /// Path of the intermediate slide deck.
    pub fn deck_path(&self) -> PathBuf {
        self.work_dir.join(DECK_FILE_NAME)
    }

    /// Rasterizer output pattern inside the work directory.
    pub fn image_pattern(&self) -> PathBuf {
        self.work_dir.join(SLIDE_IMAGE_PATTERN)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
