use std::path::PathBuf;

use super::*;
use crate::foundation::core::SlideIndex;

fn two_slides() -> (Vec<SlideFiles>, Timeline) {
    let slides = SlideFiles::for_count(Path::new("/w"), 2);
    let timeline = Timeline::from_durations(&[1.5, 2.25], 0.3).unwrap();
    (slides, timeline)
}

#[test]
fn canvas_rounds_down_to_even() {
    assert_eq!(
        Canvas::even(1201, 900),
        Canvas {
            width: 1200,
            height: 900
        }
    );
    assert_eq!(
        Canvas::even(1, 1),
        Canvas {
            width: 2,
            height: 2
        }
    );
}

#[test]
fn graph_fades_only_first_clip_and_concats_in_order() {
    let (_, tl) = two_slides();
    let g = filter_graph(&tl, Canvas::even(1200, 900), "30");
    let chains: Vec<&str> = g.split(';').collect();
    assert_eq!(chains.len(), 5);

    assert!(chains[0].starts_with("[0:v]scale=1200:900"));
    assert!(chains[0].ends_with(",fade=t=in:st=0:d=0.3[v0]"));
    assert!(chains[1].starts_with("[1:a]"));
    assert!(chains[1].contains("atrim=0:1.5"));
    assert!(chains[2].starts_with("[2:v]"));
    assert!(!chains[2].contains("fade"));
    assert!(chains[3].contains("atrim=0:2.25"));
    assert_eq!(chains[4], "[v0][a0][v1][a1]concat=n=2:v=1:a=1[v][a]");
}

#[test]
fn invocation_lists_inputs_then_output_settings() {
    let (slides, tl) = two_slides();
    let mut cfg = PipelineConfig::new("/w/talk.md", "/out/talk.mp4");
    cfg.work_dir = PathBuf::from("/w");
    let inv = compose_invocation(&cfg, &slides, &tl, Canvas::even(1200, 900)).unwrap();

    assert_eq!(inv.program(), "ffmpeg");
    assert_eq!(inv.arg_list()[0], "-y");
    let args: Vec<String> = inv
        .arg_list()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let inputs: Vec<&str> = args
        .windows(2)
        .filter(|w| w[0] == "-i")
        .map(|w| w[1].as_str())
        .collect();
    assert_eq!(
        inputs,
        vec![
            "/w/slide_0.png",
            "/w/slide_0.wav",
            "/w/slide_1.png",
            "/w/slide_1.wav"
        ]
    );
    let durations: Vec<&str> = args
        .windows(2)
        .filter(|w| w[0] == "-t")
        .map(|w| w[1].as_str())
        .collect();
    assert_eq!(durations, vec!["1.5", "2.25"]);

    assert_eq!(inv.value_after("-r").unwrap(), "30");
    assert_eq!(inv.value_after("-c:v").unwrap(), "mpeg4");
    assert_eq!(inv.value_after("-c:a").unwrap(), "libvorbis");
    assert_eq!(inv.last_arg().unwrap(), "/out/talk.mp4");
}

#[test]
fn no_overwrite_uses_dash_n() {
    let (slides, tl) = two_slides();
    let mut cfg = PipelineConfig::default();
    cfg.overwrite = false;
    let inv = compose_invocation(&cfg, &slides, &tl, Canvas::even(64, 48)).unwrap();
    assert_eq!(inv.arg_list()[0], "-n");
}

#[test]
fn slide_and_timeline_counts_must_agree() {
    let (slides, _) = two_slides();
    let one = Timeline::from_durations(&[1.0], 0.3).unwrap();
    let cfg = PipelineConfig::default();
    assert!(compose_invocation(&cfg, &slides, &one, Canvas::even(64, 48)).is_err());
    let none = Timeline::from_durations(&[], 0.3).unwrap();
    assert!(compose_invocation(&cfg, &[], &none, Canvas::even(64, 48)).is_err());
}

#[test]
fn probe_canvas_reads_first_image() {
    let dir = tempfile::tempdir().unwrap();
    let files = SlideFiles::new(dir.path(), SlideIndex(0));
    image::RgbImage::new(101, 75).save(&files.image).unwrap();
    std::fs::write(&files.audio, b"wav").unwrap();
    assert_eq!(
        probe_canvas(std::slice::from_ref(&files)).unwrap(),
        Canvas {
            width: 100,
            height: 74
        }
    );
}

#[test]
fn probe_canvas_reports_missing_assets() {
    let dir = tempfile::tempdir().unwrap();
    let files = SlideFiles::new(dir.path(), SlideIndex(0));
    image::RgbImage::new(8, 8).save(&files.image).unwrap();
    let err = probe_canvas(&[files]).unwrap_err();
    assert!(err.to_string().contains("missing asset for slide 0"));
}

#[test]
fn ensure_parent_dir_creates_nested_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("a/b/out.mp4");
    ensure_parent_dir(&out).unwrap();
    assert!(dir.path().join("a/b").is_dir());
    ensure_parent_dir(Path::new("bare.mp4")).unwrap();
}
