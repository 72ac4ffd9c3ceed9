use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::regex::Regex;

/// Scans one file line by line, printing matching lines to `out`.
/// Returns whether at least one line matched.
pub fn scan_file(regex: &Regex, path: &Path, prefix: bool, out: &mut dyn Write) -> Result<bool> {
    let file = File::open(path).with_context(|| format!("cannot open '{}'", path.display()))?;
    let name = prefix.then(|| path.display().to_string());
    scan_lines(regex, BufReader::new(file), name.as_deref(), out)
        .with_context(|| format!("error reading '{}'", path.display()))
}

/// Scans a buffered reader; matching lines are printed as `prefix:line`
/// when a prefix is given, bare otherwise.
pub fn scan_lines<R: BufRead>(
    regex: &Regex,
    reader: R,
    prefix: Option<&str>,
    out: &mut dyn Write,
) -> Result<bool> {
    let mut matched = false;
    for line in reader.lines() {
        let line = line?;
        if regex.is_match(&line) {
            matched = true;
            match prefix {
                Some(name) => writeln!(out, "{name}:{line}")?,
                None => writeln!(out, "{line}")?,
            }
        }
    }
    Ok(matched)
}

/// Collects every regular file under `root` (which may itself be a file),
/// sorted by path. Symlinks are not followed.
pub fn walk(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files(path: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let metadata =
        fs::metadata(path).with_context(|| format!("cannot stat '{}'", path.display()))?;
    if metadata.is_dir() {
        let entries =
            fs::read_dir(path).with_context(|| format!("cannot read directory '{}'", path.display()))?;
        for entry in entries {
            let entry =
                entry.with_context(|| format!("cannot read directory '{}'", path.display()))?;
            let file_type = entry
                .file_type()
                .with_context(|| format!("cannot stat '{}'", entry.path().display()))?;
            let child = entry.path();
            if file_type.is_dir() {
                collect_files(&child, files)?;
            } else if file_type.is_file() {
                files.push(child);
            }
        }
    } else if metadata.is_file() {
        files.push(path.to_path_buf());
    }
    Ok(())
}
