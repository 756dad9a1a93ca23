//! Rule engine - keyword rules and the moves they trigger

mod action;
mod engine;

pub use action::{MoveOutcome, move_file};
pub use engine::{FileMove, MoveFailure, RuleEngine, RuleReport, RunOptions, RunReport};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Substring that marks a directory entry as a PDF candidate (case-sensitive)
pub const CANDIDATE_MARKER: &str = "pdf";

/// A keyword and the folder its matches are moved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Literal text searched for on the first page
    pub short_word: String,

    /// Destination folder, relative to the base folder
    pub folder: PathBuf,
}

impl Rule {
    /// Create a new rule
    pub fn new(short_word: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            short_word: short_word.into(),
            folder: folder.into(),
        }
    }
}

/// Whether a directory entry name marks a PDF candidate.
///
/// This is a plain substring test, so `pdfs_old.txt` qualifies and `A.PDF`
/// does not.
pub fn is_candidate(name: &str) -> bool {
    name.contains(CANDIDATE_MARKER)
}
