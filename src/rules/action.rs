//! Moving matched files into their destination folder

use std::io;
use std::path::Path;
use tracing::info;

/// Result of a move attempt that did not fail outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The file was renamed to its destination
    Moved,
    /// The destination was free, but nothing was done (dry run)
    Planned,
    /// A file already exists at the destination; the source is untouched
    Conflict,
}

/// Move `source` to `destination` without ever overwriting an existing file.
///
/// The destination's parent folder must already exist.
pub fn move_file(source: &Path, destination: &Path, dry_run: bool) -> io::Result<MoveOutcome> {
    if destination.try_exists()? {
        return Ok(MoveOutcome::Conflict);
    }

    if dry_run {
        info!(
            "[dry-run] {} -> {}",
            source.display(),
            destination.display()
        );
        return Ok(MoveOutcome::Planned);
    }

    info!("Moving {} -> {}", source.display(), destination.display());
    std::fs::rename(source, destination)?;
    Ok(MoveOutcome::Moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn test_move() {
        let dir = assert_fs::TempDir::new().unwrap();
        let source = dir.child("Unprocessed/a.pdf");
        source.write_str("pdf").unwrap();
        dir.child("Invoices").create_dir_all().unwrap();
        let destination = dir.child("Invoices/a.pdf");

        let outcome = move_file(source.path(), destination.path(), false).unwrap();

        assert_eq!(outcome, MoveOutcome::Moved);
        source.assert(predicate::path::missing());
        destination.assert("pdf");
    }

    #[test]
    fn test_existing_destination_is_conflict() {
        let dir = assert_fs::TempDir::new().unwrap();
        let source = dir.child("Unprocessed/a.pdf");
        source.write_str("new").unwrap();
        let destination = dir.child("Invoices/a.pdf");
        destination.write_str("old").unwrap();

        let outcome = move_file(source.path(), destination.path(), false).unwrap();

        assert_eq!(outcome, MoveOutcome::Conflict);
        source.assert("new");
        destination.assert("old");
    }

    #[test]
    fn test_dry_run_leaves_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let source = dir.child("Unprocessed/a.pdf");
        source.write_str("pdf").unwrap();
        dir.child("Invoices").create_dir_all().unwrap();
        let destination = dir.child("Invoices/a.pdf");

        let outcome = move_file(source.path(), destination.path(), true).unwrap();

        assert_eq!(outcome, MoveOutcome::Planned);
        source.assert(predicate::path::exists());
        destination.assert(predicate::path::missing());
    }

    #[test]
    fn test_missing_destination_folder_fails() {
        let dir = assert_fs::TempDir::new().unwrap();
        let source = dir.child("Unprocessed/a.pdf");
        source.write_str("pdf").unwrap();

        let result = move_file(source.path(), &dir.path().join("Nowhere/a.pdf"), false);

        assert!(result.is_err());
        source.assert(predicate::path::exists());
    }
}
