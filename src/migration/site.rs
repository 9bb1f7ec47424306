//! Declaration site resolution
//!
//! A migration's identity comes from the file it is declared in. The site is
//! either injected by the caller (see [`declaration_site!`](crate::declaration_site))
//! or resolved from the call stack:
//!
//! - `skip = 0` resolves to this module's own file
//! - `skip = 1` resolves to the direct caller through `#[track_caller]`
//! - `skip >= 2` walks the native stack past the direct caller's frame
//!
//! Deeper skips need debug info. Marking wrappers `#[track_caller]` keeps
//! `skip = 1` working through any number of them and needs no stack walk.

use crate::migration::MigrationError;
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// Source location a migration was declared at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationSite {
    file: String,
    line: Option<u32>,
}

impl DeclarationSite {
    /// Create a site from a file path
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
        }
    }

    /// Attach a line number
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file()).at_line(location.line())
    }

    /// Site of whoever called this function (or the nearest non-`#[track_caller]` caller)
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl fmt::Display for DeclarationSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => f.write_str(&self.file),
        }
    }
}

/// Resolve the declaration site `skip` frames above the builder
///
/// `caller` is the `#[track_caller]` location of the public entry point.
pub(crate) fn resolve(skip: usize, caller: &Location<'_>) -> Result<DeclarationSite, MigrationError> {
    match skip {
        0 => Ok(DeclarationSite::new(file!()).at_line(line!())),
        1 => Ok(DeclarationSite::from_location(caller)),
        _ => walk_frames(skip, caller),
    }
}

/// Find the direct caller's frame on the native stack and step `skip - 1` frames further out
fn walk_frames(skip: usize, caller: &Location<'_>) -> Result<DeclarationSite, MigrationError> {
    let mut frames: Vec<(PathBuf, Option<u32>)> = Vec::new();
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if let Some(path) = symbol.filename() {
                frames.push((path.to_path_buf(), symbol.lineno()));
            }
        });
        true
    });

    // Frames from this crate sit between the tracer and the caller; start after the outermost one.
    let internal = [Path::new(file!()), Path::new(BUILDER_FILE)];
    let start = frames
        .iter()
        .rposition(|(path, _)| internal.iter().any(|own| path.ends_with(own)))
        .map_or(0, |idx| idx + 1);

    let anchor = Path::new(caller.file());
    let caller_idx = frames[start..]
        .iter()
        .position(|(path, _)| path.ends_with(anchor))
        .map(|idx| start + idx)
        .ok_or_else(|| MigrationError::InvalidCallSite {
            skip,
            reason: format!(
                "no frame found for caller {}:{} (is debug info available?)",
                caller.file(),
                caller.line()
            ),
        })?;

    let target = caller_idx
        .checked_add(skip - 1)
        .and_then(|idx| frames.get(idx))
        .ok_or_else(|| MigrationError::InvalidCallSite {
            skip,
            reason: format!("stack has only {} resolvable frame(s)", frames.len()),
        })?;

    let (path, line) = target;
    let site = DeclarationSite::new(path.to_string_lossy().into_owned());
    Ok(match line {
        Some(line) => site.at_line(*line),
        None => site,
    })
}

/// Path of the builder module as `file!()` reports it
const BUILDER_FILE: &str = "src/migration/builder.rs";
