use crate::foundation::core::SlideIndex;

/// Text of one slide, as cut from the Markdown source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Position in the deck.
    pub index: SlideIndex,
    /// Raw text between two delimiters, delimiter excluded.
    pub text: String,
}

impl Segment {
    /// Text handed to narration: the raw segment with trailing newlines removed.
    pub fn narration_text(&self) -> &str {
        self.text.trim_end_matches('\n')
    }
}

/// Split `markdown` on `delimiter` and keep the non-empty pieces, indexed in order.
///
/// A document without the delimiter yields one segment (none if it is empty). Runs of
/// delimiters such as `##` produce empty pieces, which are dropped.
pub fn split_slides(markdown: &str, delimiter: char) -> Vec<Segment> {
    markdown
        .split(delimiter)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(i, piece)| Segment {
            index: SlideIndex(i),
            text: piece.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/slides/segment.rs"]
mod tests;
