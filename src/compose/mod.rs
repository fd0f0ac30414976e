/// Sequential slide timeline.
pub mod timeline;
