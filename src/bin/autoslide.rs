use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser};
use tracing::Level;

use autoslide::{
    DEFAULT_INPUT, DEFAULT_OUTPUT, PipelineConfig, RunContext, SystemRunner, ToolPaths,
};

#[derive(Parser, Debug)]
#[command(
    name = "autoslide",
    version,
    about = "Turn a Markdown slide outline into a narrated video"
)]
struct Cli {
    /// Show verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// User name shown in the run banner.
    #[arg(short, long, env = "USER")]
    username: Option<String>,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    silent: bool,

    /// Markdown slides file.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Slides video file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Engage normal voice (not the deep phaser voice).
    #[arg(long)]
    normalvoice: bool,

    /// Directory for the deck and per-slide intermediates.
    #[arg(long, default_value = ".")]
    work_dir: PathBuf,

    /// Also write the computed timeline as JSON.
    #[arg(long)]
    timeline: Option<PathBuf>,

    #[command(flatten)]
    tools: ToolArgs,
}

#[derive(Args, Debug)]
struct ToolArgs {
    /// Markdown to beamer converter.
    #[arg(long, env = "AUTOSLIDE_PANDOC", default_value = "pandoc")]
    pandoc: String,

    /// PDF rasterizer (ImageMagick).
    #[arg(long, env = "AUTOSLIDE_CONVERT", default_value = "convert")]
    convert: String,

    /// Text-to-speech synthesizer (Festival).
    #[arg(long, env = "AUTOSLIDE_TEXT2WAVE", default_value = "text2wave")]
    text2wave: String,

    /// Audio effects processor.
    #[arg(long, env = "AUTOSLIDE_SOX", default_value = "sox")]
    sox: String,

    /// Video compositor.
    #[arg(long, env = "AUTOSLIDE_FFMPEG", default_value = "ffmpeg")]
    ffmpeg: String,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.silent {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            username: self.username,
            normal_voice: self.normalvoice,
            timeline_json: self.timeline,
            tools: ToolPaths {
                pandoc: self.tools.pandoc,
                convert: self.tools.convert,
                text2wave: self.tools.text2wave,
                sox: self.tools.sox,
                ffmpeg: self.tools.ffmpeg,
            },
            ..PipelineConfig::new(self.input, self.output).with_work_dir(self.work_dir)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = RunContext::new(cli.into_config(), Box::new(SystemRunner::new()));
    ctx.initiate();

    let report = autoslide::run(&mut ctx).context("slide video pipeline failed")?;
    tracing::info!(
        "wrote {} ({} slide(s), {:.3} s)",
        report.output.display(),
        report.slides,
        report.timeline.total_secs()
    );

    ctx.terminate();
    Ok(())
}
