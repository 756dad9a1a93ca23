//! Rule engine - runs every rule over the unprocessed folder

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

use super::action::{MoveOutcome, move_file};
use super::{Rule, is_candidate};
use crate::config::Config;
use crate::error::{ClassifyError, LocateError};
use crate::pdf::{TextSource, locate};

const SEPARATOR: &str = "===============================================";

/// Options for a classification run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report planned moves without renaming anything
    pub dry_run: bool,
}

/// A file that matched a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMove {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// False for dry runs
    pub applied: bool,
}

/// A rename that the filesystem refused
#[derive(Debug)]
pub struct MoveFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: std::io::Error,
}

/// Outcome of one rule
#[derive(Debug)]
pub struct RuleReport {
    pub rule: Rule,
    pub moves: Vec<FileMove>,
    /// Matches left in place because the destination already existed
    pub conflicts: Vec<FileMove>,
    pub failures: Vec<MoveFailure>,
    /// Error that stopped this rule before every candidate was checked
    pub aborted: Option<LocateError>,
}

impl RuleReport {
    fn new(rule: &Rule) -> Self {
        Self {
            rule: rule.clone(),
            moves: Vec::new(),
            conflicts: Vec::new(),
            failures: Vec::new(),
            aborted: None,
        }
    }
}

/// Outcome of a whole run, one report per rule in config order
#[derive(Debug, Default)]
pub struct RunReport {
    pub rules: Vec<RuleReport>,
}

impl RunReport {
    /// Number of files moved (or planned, for dry runs)
    pub fn move_count(&self) -> usize {
        self.rules.iter().map(|r| r.moves.len()).sum()
    }

    pub fn conflict_count(&self) -> usize {
        self.rules.iter().map(|r| r.conflicts.len()).sum()
    }

    /// Move failures plus aborted rules
    pub fn error_count(&self) -> usize {
        self.rules
            .iter()
            .map(|r| r.failures.len() + usize::from(r.aborted.is_some()))
            .sum()
    }
}

/// Engine that applies keyword rules to the unprocessed folder
pub struct RuleEngine<S> {
    source: S,
    options: RunOptions,
}

impl<S: TextSource> RuleEngine<S> {
    /// Create an engine reading PDF text through `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: RunOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Run every rule in order.
    ///
    /// Each rule rescans the unprocessed folder, so files moved by an earlier
    /// rule are not seen by later ones. Fails only when the folder cannot be
    /// listed, in which case no further rules run.
    pub fn run(&self, config: &Config) -> Result<RunReport, ClassifyError> {
        let unprocessed = config.unprocessed_folder();
        let mut report = RunReport::default();

        for rule in &config.matches {
            info!("Short Word: {}", rule.short_word);
            info!("Folder: {}", rule.folder.display());

            let destination_folder = config.destination_folder(rule);
            let rule_report = self.apply_rule(rule, &unprocessed, &destination_folder)?;
            report.rules.push(rule_report);

            info!("{}", SEPARATOR);
        }

        Ok(report)
    }

    fn apply_rule(
        &self,
        rule: &Rule,
        unprocessed: &Path,
        destination_folder: &Path,
    ) -> Result<RuleReport, ClassifyError> {
        let mut report = RuleReport::new(rule);

        for (name, source) in list_candidates(unprocessed)? {
            let found = match locate(&self.source, &source, &rule.short_word) {
                Ok(found) => found,
                Err(e) => {
                    warn!("Error: {}", e);
                    report.aborted = Some(e);
                    break;
                }
            };

            if !found {
                trace!("No match: {}", source.display());
                continue;
            }

            let destination = destination_folder.join(&name);
            info!("{}", destination.display());

            let planned = FileMove {
                source: source.clone(),
                destination: destination.clone(),
                applied: false,
            };

            match move_file(&source, &destination, self.options.dry_run) {
                Ok(MoveOutcome::Moved) => report.moves.push(FileMove {
                    applied: true,
                    ..planned
                }),
                Ok(MoveOutcome::Planned) => report.moves.push(planned),
                Ok(MoveOutcome::Conflict) => {
                    warn!(
                        "Destination exists, leaving {} in place: {}",
                        source.display(),
                        destination.display()
                    );
                    report.conflicts.push(planned);
                }
                Err(error) => {
                    warn!(
                        "Failed to move {} to {}: {}",
                        source.display(),
                        destination.display(),
                        error
                    );
                    report.failures.push(MoveFailure {
                        source,
                        destination,
                        error,
                    });
                }
            }
        }

        Ok(report)
    }
}

/// List the regular files in `folder` whose names mark them as PDF
/// candidates, sorted by name
fn list_candidates(folder: &Path) -> Result<Vec<(OsString, PathBuf)>, ClassifyError> {
    let unreadable = |source| ClassifyError::DirectoryUnreadable {
        path: folder.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = entry.file_name();
        let display_name = name.to_string_lossy();

        if !is_candidate(&display_name) {
            trace!("Skipping non-candidate: {}", display_name);
            continue;
        }

        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            || entry.path().is_file();
        if !is_file {
            debug!("Skipping non-file entry: {}", display_name);
            continue;
        }

        let path = entry.path();
        candidates.push((name, path));
    }

    candidates.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(candidates)
}
