//! Whole-file loading.
//!
//! A file is read in one go; blank lines are skipped and every other line
//! must describe one shape. Lines that fail validation are logged, recorded
//! in the [`LoadReport`], and skipped. Only an unreadable file is an error.

use std::fs;
use std::path::Path;

use shapevault_types::{ConeModel, RectangleModel};
use tracing::{info, warn};

use crate::error::{IoError, IoResult};
use crate::factory::{cone_from_line, rectangle_from_line};

/// A line that was skipped during loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the source file.
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

/// Shapes loaded from a file plus the lines that were skipped.
#[derive(Clone, Debug)]
pub struct LoadReport<S> {
    pub shapes: Vec<S>,
    pub rejected: Vec<RejectedLine>,
}

impl<S> LoadReport<S> {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Load rectangles, one `x y width height` line each.
pub fn load_rectangles(path: impl AsRef<Path>) -> IoResult<LoadReport<RectangleModel>> {
    load_with(path.as_ref(), "rectangle", rectangle_from_line)
}

/// Load cones, one `cx cy cz radius height` line each.
pub fn load_cones(path: impl AsRef<Path>) -> IoResult<LoadReport<ConeModel>> {
    load_with(path.as_ref(), "cone", cone_from_line)
}

fn load_with<S>(
    path: &Path,
    kind: &str,
    parse: impl Fn(&str) -> IoResult<S>,
) -> IoResult<LoadReport<S>> {
    let content = fs::read_to_string(path).map_err(|source| IoError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut shapes = Vec::new();
    let mut rejected = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse(line) {
            Ok(shape) => shapes.push(shape),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    line = index + 1,
                    %error,
                    "invalid {kind} line skipped"
                );
                rejected.push(RejectedLine {
                    line_number: index + 1,
                    content: line.to_string(),
                    reason: error.to_string(),
                });
            }
        }
    }

    info!(
        path = %path.display(),
        loaded = shapes.len(),
        rejected = rejected.len(),
        "{kind} file loaded"
    );
    Ok(LoadReport { shapes, rejected })
}
