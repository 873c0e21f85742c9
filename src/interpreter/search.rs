//! Keyword search over the work history
//!
//! The rendered experience text is split into blank-line separated blocks
//! and filtered with a case-insensitive substring test. No ranking, no
//! tokenization.

use crate::dataset::render::render_experience;
use crate::dataset::CvDataset;

/// Experience blocks containing `keyword`, ignoring case
pub fn matching_blocks(cv: &CvDataset, keyword: &str) -> Vec<String> {
    let needle = keyword.to_lowercase();
    render_experience(cv)
        .split("\n\n")
        .filter(|block| block.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

/// Matching blocks joined by a blank line, or the no-match message
pub fn search_experience(cv: &CvDataset, keyword: &str) -> String {
    let matches = matching_blocks(cv, keyword);
    if matches.is_empty() {
        format!("No matches for '{}'.", keyword)
    } else {
        matches.join("\n\n")
    }
}
