use std::path::Path;

use anyhow::Context as _;

use crate::{
    config::PipelineConfig,
    context::RunContext,
    foundation::error::{AutoslideError, AutoslideResult},
    process::invocation::ToolInvocation,
};

/// Modulation shape of the sox phaser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaserShape {
    /// `-s`
    Sinusoidal,
    /// `-t`
    Triangular,
}

/// sox `phaser gain-in gain-out delay decay speed [-s|-t]` parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phaser {
    /// Input gain.
    pub gain_in: f32,
    /// Output gain.
    pub gain_out: f32,
    /// Delay in milliseconds.
    pub delay_ms: f32,
    /// Feedback decay.
    pub decay: f32,
    /// Modulation speed in Hz.
    pub speed_hz: f32,
    /// Modulation shape.
    pub shape: PhaserShape,
}

impl Default for Phaser {
    fn default() -> Self {
        Self {
            gain_in: 1.0,
            gain_out: 0.5,
            delay_ms: 4.0,
            decay: 0.5,
            speed_hz: 1.0,
            shape: PhaserShape::Sinusoidal,
        }
    }
}

/// The "deep phaser voice": pitch shift, slow-down, then a phaser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoiceEffect {
    /// Pitch shift in cents.
    pub pitch_cents: i32,
    /// Tempo factor; below 1 slows speech down without changing pitch.
    pub tempo: f32,
    /// Phaser applied last.
    pub phaser: Phaser,
}

impl Default for VoiceEffect {
    fn default() -> Self {
        Self {
            pitch_cents: -400,
            tempo: 0.8,
            phaser: Phaser::default(),
        }
    }
}

impl VoiceEffect {
    /// Reject parameters sox would refuse.
    pub fn validate(&self) -> AutoslideResult<()> {
        if !self.tempo.is_finite() || self.tempo <= 0.0 {
            return Err(AutoslideError::validation(
                "voice tempo must be finite and > 0",
            ));
        }
        let p = &self.phaser;
        let all_finite = [p.gain_in, p.gain_out, p.delay_ms, p.decay, p.speed_hz]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite || p.speed_hz <= 0.0 || p.delay_ms <= 0.0 {
            return Err(AutoslideError::validation(
                "phaser parameters must be finite with positive delay and speed",
            ));
        }
        Ok(())
    }

    /// Effect arguments appended after the sox input/output paths.
    pub fn sox_effect_args(&self) -> Vec<String> {
        let p = &self.phaser;
        vec![
            "pitch".to_string(),
            self.pitch_cents.to_string(),
            "tempo".to_string(),
            self.tempo.to_string(),
            "phaser".to_string(),
            p.gain_in.to_string(),
            p.gain_out.to_string(),
            p.delay_ms.to_string(),
            p.decay.to_string(),
            p.speed_hz.to_string(),
            match p.shape {
                PhaserShape::Sinusoidal => "-s".to_string(),
                PhaserShape::Triangular => "-t".to_string(),
            },
        ]
    }
}

/// `sox <input> <output> <effects...>`
pub fn sox_invocation(cfg: &PipelineConfig, input: &Path, output: &Path) -> ToolInvocation {
    ToolInvocation::new(&cfg.tools.sox)
        .arg(input)
        .arg(output)
        .args(cfg.voice_effect.sox_effect_args())
}

/// Filter `audio` in place through the configured effect chain.
///
/// sox writes into a uniquely named temporary file next to `audio`, which is then renamed over
/// the original. The temporary file is removed on every failure path.
pub fn apply_voice_effect(ctx: &RunContext, audio: &Path) -> AutoslideResult<()> {
    let dir = match audio.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let stem = audio
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "narration".to_string());

    let tmp = tempfile::Builder::new()
        .prefix(&format!(".{stem}."))
        .suffix(".wav")
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temporary file in '{}'", dir.display()))?
        .into_temp_path();

    ctx.run_tool(&sox_invocation(ctx.config(), audio, &tmp))?;

    tmp.persist(audio).map_err(|e| {
        AutoslideError::Other(anyhow::Error::new(e.error).context(format!(
            "failed to replace '{}' with filtered audio",
            audio.display()
        )))
    })?;
    Ok(())
}

/// Apply the voice effect to every narration file, in slide order.
pub fn apply_voice_effects(
    ctx: &RunContext,
    audio_files: &[impl AsRef<Path>],
) -> AutoslideResult<()> {
    for audio in audio_files {
        let audio = audio.as_ref();
        tracing::debug!("apply voice effect to {}", audio.display());
        apply_voice_effect(ctx, audio)?;
    }
    tracing::info!("applied voice effect to {} file(s)", audio_files.len());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/audio/voice.rs"]
mod tests;
