use std::path::Path;

use crate::foundation::core::SlideFiles;

/// Remove the per-slide image and audio intermediates for slides `0..count`.
///
/// Best-effort: failures are logged and never fail the run. Returns how many files were removed.
pub fn remove_slide_files(work_dir: &Path, count: usize) -> usize {
    let mut removed = 0;
    for files in SlideFiles::for_count(work_dir, count) {
        for path in [&files.image, &files.audio] {
            match std::fs::remove_file(path) {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!("failed to remove '{}': {e}", path.display()),
            }
        }
    }
    tracing::debug!("removed {removed} intermediate file(s)");
    removed
}

#[cfg(test)]
#[path = "../tests/unit/cleanup.rs"]
mod tests;
