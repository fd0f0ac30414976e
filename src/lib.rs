//! autoslide turns a Markdown slide outline into a narrated video.
//!
//! # Pipeline overview
//!
//! 1. **Load**: read the Markdown source
//! 2. **Render**: `pandoc -t beamer` into a deck, then rasterize one PNG per page
//! 3. **Segment**: split the Markdown on `#` into per-slide text
//! 4. **Narrate**: pipe each slide's text (punctuation stripped) through `text2wave`
//! 5. **Voice** (optional): run each narration through a `sox` pitch/tempo/phaser chain
//! 6. **Compose**: lay slides out back to back by narration length and encode with `ffmpeg`
//! 7. **Cleanup**: delete the per-slide intermediates
//!
//! Every external tool call is a typed [`ToolInvocation`] executed by the [`ToolRunner`] held in
//! the [`RunContext`]; swapping in a [`RecordingRunner`] runs the pipeline without any tools.
#![forbid(unsafe_code)]

mod audio;
mod cleanup;
mod compose;
mod config;
mod context;
mod encode;
mod foundation;
mod pipeline;
mod process;
mod slides;

pub use audio::narrate::{narrate_slides, strip_punctuation, tts_invocation};
pub use audio::voice::{
    Phaser, PhaserShape, VoiceEffect, apply_voice_effect, apply_voice_effects, sox_invocation,
};
pub use audio::wav::{WavInfo, probe_wav};
pub use cleanup::remove_slide_files;
pub use compose::timeline::{Timeline, TimelineEntry, build_timeline};
pub use config::{
    DEFAULT_INPUT, DEFAULT_OUTPUT, FADE_IN_SECS, PipelineConfig, RasterSettings, SLIDE_DELIMITER,
    ToolPaths,
};
pub use context::{PROGRAM_NAME, PROGRAM_VERSION, RunClock, RunContext, StageTiming};
pub use encode::ffmpeg::{
    Canvas, compose_invocation, compose_video, ensure_parent_dir, filter_graph, probe_canvas,
};
pub use foundation::core::{DECK_FILE_NAME, Fps, SLIDE_IMAGE_PATTERN, SlideFiles, SlideIndex};
pub use foundation::error::{AutoslideError, AutoslideResult};
pub use pipeline::{RunReport, load_markdown, run};
pub use process::invocation::ToolInvocation;
pub use process::runner::{RecordingRunner, SystemRunner, ToolRunner};
pub use slides::deck::{
    check_slide_count, deck_invocation, discover_slide_images, rasterize_invocation,
    remove_stale_slide_images, render_slides,
};
pub use slides::segment::{Segment, split_slides};
