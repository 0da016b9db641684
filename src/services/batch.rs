//! Input discovery and output planning for batch conversion.
//!
//! Everything here is checked before the first file is written: missing
//! inputs, duplicate output names and existing targets all abort the batch
//! up front.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// One planned conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Expand the given files and directories into a list of PNG files.
///
/// Directories are read non-recursively and their PNGs taken in sorted
/// order. Files must have a `.png` extension.
pub fn collect_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, CliError> {
    let mut results = Vec::new();
    for raw in paths {
        let path = raw.as_ref();
        if path.is_file() {
            if !is_png(path) {
                return Err(CliError::UnsupportedInput(path.to_path_buf()));
            }
            results.push(path.to_path_buf());
        } else if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)
                .map_err(|e| CliError::io(path, e))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && is_png(p))
                .collect();
            entries.sort();
            tracing::debug!(dir = %path.display(), count = entries.len(), "Scanned directory");
            results.extend(entries);
        } else {
            return Err(CliError::MissingInput(path.to_path_buf()));
        }
    }
    if results.is_empty() {
        return Err(CliError::NoInputs);
    }
    Ok(results)
}

/// `{prefix}{stem}{suffix}.{extension}` for every input, rejecting clashes.
pub fn output_names(
    inputs: &[PathBuf],
    prefix: &str,
    suffix: &str,
    extension: &str,
) -> Result<Vec<String>, CliError> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(inputs.len());
    for input in inputs {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        let name = format!("{prefix}{stem}{suffix}.{extension}");
        if !seen.insert(name.clone()) {
            return Err(CliError::DuplicateOutput(name));
        }
        names.push(name);
    }
    Ok(names)
}

/// Fail if any of `targets` exists and `force` is off.
pub fn check_conflicts(targets: &[PathBuf], force: bool) -> Result<(), CliError> {
    if force {
        return Ok(());
    }
    let conflicts: Vec<PathBuf> = targets.iter().filter(|p| p.exists()).cloned().collect();
    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(CliError::OutputExists(conflicts))
    }
}

/// Pair inputs with their targets in `output_dir` and validate the plan.
pub fn plan_jobs(
    inputs: Vec<PathBuf>,
    output_dir: &Path,
    prefix: &str,
    suffix: &str,
    extension: &str,
    force: bool,
) -> Result<Vec<Job>, CliError> {
    let names = output_names(&inputs, prefix, suffix, extension)?;
    let jobs: Vec<Job> = inputs
        .into_iter()
        .zip(names)
        .map(|(input, name)| Job {
            input,
            output: output_dir.join(name),
        })
        .collect();
    let targets: Vec<PathBuf> = jobs.iter().map(|j| j.output.clone()).collect();
    check_conflicts(&targets, force)?;
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_names() {
        let inputs = vec![PathBuf::from("a/cat.png"), PathBuf::from("b/dog.PNG")];
        let names = output_names(&inputs, "x_", "_v1", "sc2").unwrap();
        assert_eq!(names, vec!["x_cat_v1.sc2", "x_dog_v1.sc2"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let inputs = vec![PathBuf::from("a/cat.png"), PathBuf::from("b/cat.png")];
        match output_names(&inputs, "", "", "sc4") {
            Err(CliError::DuplicateOutput(name)) => assert_eq!(name, "cat.sc4"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_is_png() {
        assert!(is_png(Path::new("x.png")));
        assert!(is_png(Path::new("x.PnG")));
        assert!(!is_png(Path::new("x.jpg")));
        assert!(!is_png(Path::new("png")));
    }
}
