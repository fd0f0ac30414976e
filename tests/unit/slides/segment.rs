use super::*;

fn texts(segments: &[Segment]) -> Vec<&str> {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn two_headings_give_two_segments() {
    let segs = split_slides("# Intro\nHello.\n# Done\nBye.", '#');
    assert_eq!(texts(&segs), vec![" Intro\nHello.\n", " Done\nBye."]);
    assert_eq!(segs[0].index, SlideIndex(0));
    assert_eq!(segs[1].index, SlideIndex(1));
    assert_eq!(segs[0].narration_text(), " Intro\nHello.");
    assert_eq!(segs[1].narration_text(), " Done\nBye.");
}

#[test]
fn doubled_delimiters_drop_empty_pieces() {
    let segs = split_slides("## A\n##B", '#');
    assert_eq!(texts(&segs), vec![" A\n", "B"]);
    assert_eq!(segs[1].index, SlideIndex(1));
}

#[test]
fn no_delimiter_is_one_segment_and_empty_is_none() {
    assert_eq!(texts(&split_slides("just text\n", '#')), vec!["just text\n"]);
    assert!(split_slides("", '#').is_empty());
    assert!(split_slides("###", '#').is_empty());
}

#[test]
fn whitespace_only_pieces_are_kept() {
    // Only truly empty pieces are discarded.
    let segs = split_slides("# A\n#\n", '#');
    assert_eq!(texts(&segs), vec![" A\n", "\n"]);
    assert_eq!(segs[1].narration_text(), "");
}

#[test]
fn splitting_is_idempotent() {
    let doc = "# One\nfirst\n# Two\nsecond\n# Three\n";
    assert_eq!(split_slides(doc, '#'), split_slides(doc, '#'));
}

#[test]
fn custom_delimiter() {
    let segs = split_slides("a|b||c", '|');
    assert_eq!(texts(&segs), vec!["a", "b", "c"]);
}
