//! Configuration schema

use crate::rules::Rule;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the staging folder scanned for candidate PDFs
pub const UNPROCESSED_DIR: &str = "Unprocessed";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Folder holding `Unprocessed/` and every destination folder
    pub base_folder: PathBuf,

    /// Keyword rules, evaluated in order
    #[serde(default)]
    pub matches: Vec<Rule>,
}

impl Config {
    /// Folder scanned for PDFs awaiting classification
    pub fn unprocessed_folder(&self) -> PathBuf {
        self.base_folder.join(UNPROCESSED_DIR)
    }

    /// Absolute destination folder for a rule
    pub fn destination_folder(&self, rule: &Rule) -> PathBuf {
        self.base_folder.join(&rule.folder)
    }
}
