use super::*;

#[test]
fn slide_files_use_index_derived_names() {
    let files = SlideFiles::new(Path::new("work"), SlideIndex(3));
    assert_eq!(files.image, PathBuf::from("work/slide_3.png"));
    assert_eq!(files.audio, PathBuf::from("work/slide_3.wav"));
}

#[test]
fn for_count_is_ordered_and_dense() {
    let all = SlideFiles::for_count(Path::new("."), 3);
    let idx: Vec<usize> = all.iter().map(|f| f.index.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert!(SlideFiles::for_count(Path::new("."), 0).is_empty());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::new(30, 1).unwrap(), Fps { num: 30, den: 1 });
}

#[test]
fn fps_formats_for_ffmpeg() {
    assert_eq!(Fps::new(30, 1).unwrap().to_ffmpeg_rate(), "30");
    assert_eq!(Fps::new(30000, 1001).unwrap().to_ffmpeg_rate(), "30000/1001");
}

