use std::path::{Path, PathBuf};

use crate::foundation::error::{AutoslideError, AutoslideResult};

/// File name of the intermediate slide deck rendered from the Markdown source.
pub const DECK_FILE_NAME: &str = "slides.pdf";

/// Rasterizer output pattern; `%d` is replaced with the 0-based page number.
pub const SLIDE_IMAGE_PATTERN: &str = "slide_%d.png";

/// 0-based slide number, shared by segments, images, narration and timeline entries.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct SlideIndex(pub usize);

impl std::fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-slide intermediate files, named `slide_<N>.png` / `slide_<N>.wav` in the work directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideFiles {
    /// Slide this pair belongs to.
    pub index: SlideIndex,
    /// Rasterized slide image.
    pub image: PathBuf,
    /// Synthesized narration.
    pub audio: PathBuf,
}

impl SlideFiles {
    /// Construct the file pair for `index` inside `work_dir`.
    pub fn new(work_dir: &Path, index: SlideIndex) -> Self {
        Self {
            index,
            image: work_dir.join(format!("slide_{}.png", index.0)),
            audio: work_dir.join(format!("slide_{}.wav", index.0)),
        }
    }

    /// File pairs for slides `0..count`.
    pub fn for_count(work_dir: &Path, count: usize) -> Vec<Self> {
        (0..count)
            .map(|i| Self::new(work_dir, SlideIndex(i)))
            .collect()
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> AutoslideResult<Self> {
        if den == 0 {
            return Err(AutoslideError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(AutoslideError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// `num/den` form accepted by ffmpeg rate options.
    pub fn to_ffmpeg_rate(self) -> String {
        if self.den == 1 {
            self.num.to_string()
        } else {
            format!("{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
