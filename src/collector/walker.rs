//! Discovery of trial trace files.
//!
//! Layout: `<root>/<mode>/<sut>/<trial>.trace.txt`. Anything else in the
//! tree (stray files at the mode or SUT level, lockfiles, logs) is skipped.
//! Entries are visited in lexicographic order so passes are reproducible.

use crate::utils::config::TRACE_SUFFIXES;
use crate::utils::error::CollectError;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MODE_DEPTH: usize = 1;
const SUT_DEPTH: usize = 2;
const TRIAL_DEPTH: usize = 3;

/// One trial trace, tagged with the condition it ran under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialFile {
    pub mode: String,
    pub sut: String,
    pub path: PathBuf,
}

/// Find every trial trace under `root`
///
/// **Public** - used by the collector
///
/// # Errors
/// * `CollectError::Io` - a directory in the tree cannot be listed
pub fn discover_trials(root: &Path) -> Result<Vec<TrialFile>, CollectError> {
    let mut trials = Vec::new();
    let mut mode = String::new();
    let mut sut = String::new();

    for entry in sorted_walk(root, TRIAL_DEPTH) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling_stray(&e, TRIAL_DEPTH) => continue,
            Err(e) => return Err(walk_error(root, e)),
        };
        let is_dir = entry.file_type().is_dir();

        match entry.depth() {
            MODE_DEPTH | SUT_DEPTH if !is_dir => {
                debug!("Skipping non-directory {}", entry.path().display());
            }
            MODE_DEPTH => mode = file_name(entry.path()),
            SUT_DEPTH => sut = file_name(entry.path()),
            _ => {
                if let Some(path) = trace_file(&entry) {
                    trials.push(TrialFile {
                        mode: mode.clone(),
                        sut: sut.clone(),
                        path,
                    });
                }
            }
        }
    }

    debug!("Discovered {} trial traces under {}", trials.len(), root.display());
    Ok(trials)
}

/// Trace files directly inside `dir`, sorted
///
/// # Errors
/// * `CollectError::Io` - `dir` cannot be listed
pub fn discover_trace_files(dir: &Path) -> Result<Vec<PathBuf>, CollectError> {
    let mut files = Vec::new();
    for entry in sorted_walk(dir, 1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling_stray(&e, 1) => continue,
            Err(e) => return Err(walk_error(dir, e)),
        };
        if let Some(path) = trace_file(&entry) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Whether a file name's suffixes are exactly `.trace.txt`
///
/// Leading dots belong to the stem, so `.trace.txt` alone does not count,
/// and neither does `run.1.trace.txt`.
pub fn is_trace_file_name(name: &str) -> bool {
    if name.ends_with('.') {
        return false;
    }
    let mut parts = name.trim_start_matches('.').split('.');
    parts.next();
    parts.eq(TRACE_SUFFIXES.iter().copied())
}

/// Depth-first walk below `dir`, each directory's entries sorted by name
///
/// **Private** - internal helper
fn sorted_walk(dir: &Path, max_depth: usize) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
}

/// Path of `entry` if it is a regular trace file
fn trace_file(entry: &walkdir::DirEntry) -> Option<PathBuf> {
    let is_trace = entry
        .file_name()
        .to_str()
        .is_some_and(is_trace_file_name);

    if is_trace && entry.file_type().is_file() {
        Some(entry.path().to_path_buf())
    } else {
        debug!("Skipping {}", entry.path().display());
        None
    }
}

/// Whether a walk error is a broken symlink that would be skipped anyway
///
/// Only a link named like a trace at `trial_depth` is a real trial whose
/// target went missing; any other dangling link is a stray.
fn is_dangling_stray(err: &walkdir::Error, trial_depth: usize) -> bool {
    let Some(path) = err.path() else {
        return false;
    };
    if err.loop_ancestor().is_some() {
        return false;
    }

    let is_link = path
        .symlink_metadata()
        .is_ok_and(|m| m.file_type().is_symlink());
    let dangling = is_link && path.metadata().is_err();
    if !dangling {
        return false;
    }

    let trace_named = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(is_trace_file_name);
    if err.depth() == trial_depth && trace_named {
        return false;
    }

    debug!("Skipping dangling symlink {}", path.display());
    true
}

fn walk_error(root: &Path, err: walkdir::Error) -> CollectError {
    let path = err.path().unwrap_or(root).to_path_buf();
    CollectError::Io {
        path,
        source: err.into(),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_trace_file_name() {
        assert!(is_trace_file_name("1.trace.txt"));
        assert!(is_trace_file_name("trial-07.trace.txt"));
        assert!(is_trace_file_name("..run.trace.txt"));
    }

    #[test]
    fn test_is_trace_file_name_rejects_strays() {
        assert!(!is_trace_file_name("1.txt"));
        assert!(!is_trace_file_name("1.trace"));
        assert!(!is_trace_file_name("1.trace.txt.lock"));
        assert!(!is_trace_file_name("run.1.trace.txt"));
        assert!(!is_trace_file_name(".trace.txt"));
        assert!(!is_trace_file_name("1.trace.txt."));
        assert!(!is_trace_file_name("1.TRACE.TXT"));
    }

    #[test]
    fn test_discover_trials_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for rel in ["b/y/2.trace.txt", "a/z/1.trace.txt", "b/x/1.trace.txt"] {
            let path = dir.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "").unwrap();
        }

        let trials = discover_trials(dir.path()).unwrap();
        let tags: Vec<(&str, &str)> = trials
            .iter()
            .map(|t| (t.mode.as_str(), t.sut.as_str()))
            .collect();
        assert_eq!(tags, vec![("a", "z"), ("b", "x"), ("b", "y")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_trials_skips_dangling_links() {
        let dir = tempfile::tempdir().unwrap();
        let sut = dir.path().join("native/c");
        std::fs::create_dir_all(&sut).unwrap();
        std::fs::write(sut.join("1.trace.txt"), "").unwrap();
        std::os::unix::fs::symlink("gone", sut.join(".#1.lock")).unwrap();
        std::os::unix::fs::symlink("gone", dir.path().join("native/stale")).unwrap();

        let trials = discover_trials(dir.path()).unwrap();
        assert_eq!(trials.len(), 1);
        assert!(trials[0].path.ends_with("native/c/1.trace.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_trials_dangling_trace_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let sut = dir.path().join("native/c");
        std::fs::create_dir_all(&sut).unwrap();
        std::os::unix::fs::symlink("gone", sut.join("1.trace.txt")).unwrap();

        assert!(matches!(
            discover_trials(dir.path()),
            Err(CollectError::Io { .. })
        ));
    }
}
