use std::path::{Path, PathBuf};

use crate::{
    config::PipelineConfig,
    context::RunContext,
    foundation::core::SlideFiles,
    foundation::error::AutoslideResult,
    process::invocation::ToolInvocation,
    slides::segment::Segment,
};

/// Drop every ASCII punctuation character (the POSIX `[[:punct:]]` class).
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// `text2wave -scale S -o <wav>`, with the cleaned text (plus a trailing newline) on stdin.
pub fn tts_invocation(cfg: &PipelineConfig, text: &str, out: &Path) -> ToolInvocation {
    let mut spoken = strip_punctuation(text);
    spoken.push('\n');
    ToolInvocation::new(&cfg.tools.text2wave)
        .arg("-scale")
        .arg(cfg.speech_scale.to_string())
        .arg("-o")
        .arg(out)
        .stdin(spoken)
}

/// Synthesize narration for every segment, returning the audio paths in slide order.
pub fn narrate_slides(ctx: &RunContext, segments: &[Segment]) -> AutoslideResult<Vec<PathBuf>> {
    let cfg = ctx.config();
    let mut out = Vec::with_capacity(segments.len());
    for seg in segments {
        let files = SlideFiles::new(&cfg.work_dir, seg.index);
        tracing::debug!(
            slide = seg.index.0,
            "synthesize narration {}",
            files.audio.display()
        );
        ctx.run_tool(&tts_invocation(cfg, seg.narration_text(), &files.audio))?;
        out.push(files.audio);
    }
    tracing::info!("synthesized narration for {} slide(s)", out.len());
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/audio/narrate.rs"]
mod tests;
