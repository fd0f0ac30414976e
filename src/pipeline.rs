use std::path::{Path, PathBuf};

use crate::{
    audio::{narrate::narrate_slides, voice::apply_voice_effects},
    cleanup::remove_slide_files,
    compose::timeline::{Timeline, build_timeline},
    context::{RunContext, StageTiming},
    encode::ffmpeg::compose_video,
    foundation::core::SlideFiles,
    foundation::error::{AutoslideError, AutoslideResult},
    slides::{
        deck::{check_slide_count, render_slides},
        segment::split_slides,
    },
};

/// Summary of a successful run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Number of slides rendered and narrated.
    pub slides: usize,
    /// Clip placement used for the video.
    pub timeline: Timeline,
    /// Path of the written video.
    pub output: PathBuf,
    /// Per-stage wall-clock timings, in execution order.
    pub stages: Vec<StageTiming>,
}

/// Read the Markdown source. Fails before any external tool runs.
pub fn load_markdown(path: &Path) -> AutoslideResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        AutoslideError::input(format!(
            "failed to read Markdown '{}': {e}",
            path.display()
        ))
    })
}

/// Run the whole Markdown -> narrated video pipeline.
///
/// Stages run strictly in order; the first failure aborts the run and leaves intermediates on
/// disk. Per-slide intermediates are removed only after the video is written.
pub fn run(ctx: &mut RunContext) -> AutoslideResult<RunReport> {
    ctx.config().validate()?;

    let markdown = ctx.stage("load", |ctx| load_markdown(&ctx.config().input))?;
    tracing::info!("Markdown input:\n\n{markdown}");

    let images = ctx.stage("render", |ctx| render_slides(ctx))?;

    let segments = split_slides(&markdown, ctx.config().delimiter);
    tracing::info!("number of slides: {}", segments.len());
    check_slide_count(&images, &segments)?;

    let audio = ctx.stage("narrate", |ctx| narrate_slides(ctx, &segments))?;

    if ctx.config().normal_voice {
        tracing::info!("normal voice requested; skipping voice effect");
    } else {
        ctx.stage("voice", |ctx| apply_voice_effects(ctx, &audio))?;
    }

    let fade_in_secs = ctx.config().fade_in_secs;
    let timeline = ctx.stage("timeline", |_| build_timeline(&audio, fade_in_secs))?;
    if let Some(path) = ctx.config().timeline_json.as_deref() {
        timeline.write_json(path)?;
        tracing::info!("wrote timeline {}", path.display());
    }

    let slides = SlideFiles::for_count(&ctx.config().work_dir, segments.len());
    ctx.stage("compose", |ctx| compose_video(ctx, &slides, &timeline))?;

    ctx.stage("cleanup", |ctx| {
        Ok(remove_slide_files(&ctx.config().work_dir, slides.len()))
    })?;

    Ok(RunReport {
        slides: slides.len(),
        timeline,
        output: ctx.config().output.clone(),
        stages: ctx.clock().stages().to_vec(),
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
