//! Batch formatting
//!
//! Formats one date per line from readers or text files, and expands glob
//! patterns into the list of files to read.

use glob::glob;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::date::DateFormatter;
use crate::error::{Error, Result};

/// Format every line of `reader`, one output entry per input line
///
/// Blank lines format to `""`. Errors are tagged with the 1-based line number.
pub fn format_lines<R: BufRead>(reader: R, formatter: &DateFormatter) -> Result<Vec<String>> {
    let mut formatted = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let output = formatter.format(Some(&line)).map_err(|e| Error::Line {
            line: index + 1,
            source: Box::new(e),
        })?;
        formatted.push(output);
    }

    Ok(formatted)
}

/// Format every line of a text file
pub fn format_file(path: &Path, formatter: &DateFormatter) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    debug!("Formatting dates from {}", path.display());
    let file = File::open(path)?;
    format_lines(BufReader::new(file), formatter)
}

/// Expand glob patterns in input paths
///
/// Patterns without glob characters are taken literally. The result is sorted
/// for consistent ordering.
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        // Check if pattern contains glob characters
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let entries = glob(pattern).map_err(|e| Error::InvalidGlob(format!("{}: {}", pattern, e)))?;

            let mut matched = false;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => warn!("glob error for {}: {}", pattern, e),
                }
            }
            if !matched {
                return Err(Error::NoFilesMatched(pattern.clone()));
            }
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }

    paths.sort();

    Ok(paths)
}
