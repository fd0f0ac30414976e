use std::path::Path;

use anyhow::Context as _;

use crate::{
    compose::timeline::Timeline,
    config::PipelineConfig,
    context::RunContext,
    foundation::core::SlideFiles,
    foundation::error::{AutoslideError, AutoslideResult},
    process::invocation::ToolInvocation,
};

/// Output frame size shared by every clip, in pixels (both even).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Round `width`/`height` down to even values (yuv420p requires it), keeping at least 2x2.
    pub fn even(width: u32, height: u32) -> Self {
        Self {
            width: (width - width % 2).max(2),
            height: (height - height % 2).max(2),
        }
    }
}

/// Check every slide asset exists and derive the canvas from the first slide image.
pub fn probe_canvas(slides: &[SlideFiles]) -> AutoslideResult<Canvas> {
    for s in slides {
        for p in [&s.image, &s.audio] {
            if !p.is_file() {
                return Err(AutoslideError::validation(format!(
                    "missing asset for slide {}: '{}'",
                    s.index,
                    p.display()
                )));
            }
        }
    }

    let first = slides
        .first()
        .ok_or_else(|| AutoslideError::validation("cannot compose a video with no slides"))?;
    let (w, h) = image::image_dimensions(&first.image)
        .with_context(|| format!("failed to read slide image '{}'", first.image.display()))?;
    if w == 0 || h == 0 {
        return Err(AutoslideError::validation(format!(
            "slide image '{}' has zero size",
            first.image.display()
        )));
    }
    Ok(Canvas::even(w, h))
}

/// Build the `-filter_complex` graph: normalize each still to the canvas, fade in the first
/// clip, pad/trim each narration to its slot, then concatenate in slide order.
pub fn filter_graph(timeline: &Timeline, canvas: Canvas, fps_rate: &str) -> String {
    let Canvas { width, height } = canvas;
    let mut parts = Vec::with_capacity(timeline.len() + 1);
    let mut concat_inputs = String::new();

    for e in timeline.entries() {
        let i = e.index.0;
        let fade = match timeline.fade_in_for(e.index) {
            Some(d) => format!(",fade=t=in:st=0:d={d}"),
            None => String::new(),
        };
        parts.push(format!(
            "[{vin}:v]scale={width}:{height}:force_original_aspect_ratio=decrease,\
             pad={width}:{height}:(ow-iw)/2:(oh-ih)/2,setsar=1,fps={fps_rate},\
             format=yuv420p{fade}[v{i}]",
            vin = 2 * i,
        ));
        parts.push(format!(
            "[{ain}:a]aformat=sample_rates=44100:channel_layouts=stereo,apad,\
             atrim=0:{dur},asetpts=PTS-STARTPTS[a{i}]",
            ain = 2 * i + 1,
            dur = e.duration_secs,
        ));
        concat_inputs.push_str(&format!("[v{i}][a{i}]"));
    }

    parts.push(format!(
        "{concat_inputs}concat=n={}:v=1:a=1[v][a]",
        timeline.len()
    ));
    parts.join(";")
}

/// Single ffmpeg call that turns the slide pairs into the final video.
pub fn compose_invocation(
    cfg: &PipelineConfig,
    slides: &[SlideFiles],
    timeline: &Timeline,
    canvas: Canvas,
) -> AutoslideResult<ToolInvocation> {
    if slides.is_empty() {
        return Err(AutoslideError::validation(
            "cannot compose a video with no slides",
        ));
    }
    if slides.len() != timeline.len() {
        return Err(AutoslideError::validation(format!(
            "timeline has {} entries for {} slides",
            timeline.len(),
            slides.len()
        )));
    }

    let rate = cfg.fps.to_ffmpeg_rate();
    let mut inv = ToolInvocation::new(&cfg.tools.ffmpeg)
        .arg(if cfg.overwrite { "-y" } else { "-n" })
        .args(["-loglevel", "error"]);

    for (files, entry) in slides.iter().zip(timeline.entries()) {
        inv = inv
            .args(["-loop", "1", "-framerate", rate.as_str(), "-t"])
            .arg(entry.duration_secs.to_string())
            .arg("-i")
            .arg(&files.image)
            .arg("-i")
            .arg(&files.audio);
    }

    Ok(inv
        .arg("-filter_complex")
        .arg(filter_graph(timeline, canvas, &rate))
        .args(["-map", "[v]", "-map", "[a]", "-r", rate.as_str()])
        .args(["-c:v", cfg.video_codec.as_str(), "-c:a", cfg.audio_codec.as_str()])
        // Vorbis in MP4 is still flagged experimental by ffmpeg's muxer.
        .args(["-strict", "-2"])
        .arg(&cfg.output))
}

/// Render the final video for `slides` laid out on `timeline`.
pub fn compose_video(
    ctx: &RunContext,
    slides: &[SlideFiles],
    timeline: &Timeline,
) -> AutoslideResult<()> {
    let cfg = ctx.config();
    let canvas = probe_canvas(slides)?;
    tracing::debug!("video canvas: {}x{}", canvas.width, canvas.height);

    ensure_parent_dir(&cfg.output)?;
    if !cfg.overwrite && cfg.output.exists() {
        return Err(AutoslideError::validation(format!(
            "output file '{}' already exists",
            cfg.output.display()
        )));
    }

    let inv = compose_invocation(cfg, slides, timeline, canvas)?;
    tracing::info!("rendering video {}", cfg.output.display());
    ctx.run_tool(&inv)
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> AutoslideResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
