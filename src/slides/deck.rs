use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    config::PipelineConfig,
    context::RunContext,
    foundation::core::{SlideFiles, SlideIndex},
    foundation::error::{AutoslideError, AutoslideResult},
    process::invocation::ToolInvocation,
    slides::segment::Segment,
};

/// `pandoc -t beamer <input> -o <work>/slides.pdf`
pub fn deck_invocation(cfg: &PipelineConfig) -> ToolInvocation {
    ToolInvocation::new(&cfg.tools.pandoc)
        .args(["-t", "beamer"])
        .arg(&cfg.input)
        .arg("-o")
        .arg(cfg.deck_path())
}

/// `convert -density D <deck> -quality Q -scale WxH <work>/slide_%d.png`
pub fn rasterize_invocation(cfg: &PipelineConfig) -> ToolInvocation {
    ToolInvocation::new(&cfg.tools.convert)
        .arg("-density")
        .arg(cfg.raster.density.to_string())
        .arg(cfg.deck_path())
        .arg("-quality")
        .arg(cfg.raster.quality.to_string())
        .arg("-scale")
        .arg(&cfg.raster.scale)
        .arg(cfg.image_pattern())
}

/// Render the Markdown into a deck, rasterize it, and return the slide images in page order.
pub fn render_slides(ctx: &RunContext) -> AutoslideResult<Vec<PathBuf>> {
    let cfg = ctx.config();
    std::fs::create_dir_all(&cfg.work_dir).with_context(|| {
        format!(
            "failed to create work directory '{}'",
            cfg.work_dir.display()
        )
    })?;

    tracing::info!("render deck {}", cfg.deck_path().display());
    ctx.run_tool(&deck_invocation(cfg))?;

    let stale = remove_stale_slide_images(&cfg.work_dir)?;
    if stale > 0 {
        tracing::debug!("removed {stale} stale slide image(s)");
    }

    tracing::info!("rasterize deck into slide images");
    ctx.run_tool(&rasterize_invocation(cfg))?;

    let images = discover_slide_images(&cfg.work_dir);
    if images.is_empty() {
        return Err(AutoslideError::validation(format!(
            "rasterizer produced no slide images in '{}'",
            cfg.work_dir.display()
        )));
    }
    tracing::debug!("rasterized {} slide image(s)", images.len());
    Ok(images)
}

/// Delete `slide_<N>.png` files left in `work_dir` by an earlier run, returning how many were
/// removed. Discovery counts whatever matches, so this runs before every rasterization.
pub fn remove_stale_slide_images(work_dir: &Path) -> AutoslideResult<usize> {
    let entries = std::fs::read_dir(work_dir)
        .with_context(|| format!("failed to list work directory '{}'", work_dir.display()))?;

    let mut removed = 0;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to list work directory '{}'", work_dir.display()))?;
        let name = entry.file_name();
        let Some(index) = name
            .to_str()
            .and_then(|n| n.strip_prefix("slide_"))
            .and_then(|n| n.strip_suffix(".png"))
        else {
            continue;
        };
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let path = entry.path();
        std::fs::remove_file(&path)
            .with_context(|| format!("failed to remove stale slide image '{}'", path.display()))?;
        removed += 1;
    }
    Ok(removed)
}

/// Collect `slide_0.png`, `slide_1.png`, ... from `work_dir`, stopping at the first gap.
pub fn discover_slide_images(work_dir: &Path) -> Vec<PathBuf> {
    (0..)
        .map(|i| SlideFiles::new(work_dir, SlideIndex(i)).image)
        .take_while(|p| p.is_file())
        .collect()
}

/// Fail fast when the rendered page count and the Markdown segment count disagree.
pub fn check_slide_count(images: &[PathBuf], segments: &[Segment]) -> AutoslideResult<()> {
    if images.len() != segments.len() {
        return Err(AutoslideError::validation(format!(
            "slide count mismatch: deck rendered {} image(s) but the Markdown splits into {} segment(s)",
            images.len(),
            segments.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/slides/deck.rs"]
mod tests;
