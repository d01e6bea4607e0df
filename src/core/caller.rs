//! Call-site resolution for the `caller` field
//!
//! Logging entry points are `#[track_caller]`, so the location handed in is
//! the code that called the logger. Skipping further frames (for wrappers that
//! are not `#[track_caller]`) walks the stack from that location outward.

use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// Source location a record was logged from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub file: String,
    pub line: u32,
    /// Frames between the user's call site and the point of emission,
    /// as counted by the configuration's skip policy
    pub depth: usize,
}

impl Caller {
    pub fn from_location(location: &Location<'_>, depth: usize) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
            depth,
        }
    }

    /// The frame `frames_above` levels up from `location`.
    ///
    /// With `frames_above == 0` this is `location` itself. Otherwise the stack
    /// is walked; when the frame holding `location` cannot be found (no debug
    /// info) or the stack is not that deep, `location` is reported instead.
    pub fn resolve(location: &Location<'_>, frames_above: usize, depth: usize) -> Self {
        if frames_above == 0 {
            return Self::from_location(location, depth);
        }

        let frames = symbolized_frames();
        let anchor = frames
            .iter()
            .position(|(file, line)| *line == location.line() && file.ends_with(location.file()));

        match anchor.and_then(|at| frames.get(at + frames_above).map(|frame| (at, frame))) {
            Some((at, (file, line))) => Self {
                file: display_path(file, source_root(&frames[at].0, location.file())),
                line: *line,
                depth,
            },
            None => Self::from_location(location, depth),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Every frame of the current stack that has a file and line, innermost first.
/// Inlined calls show up as their own entries.
fn symbolized_frames() -> Vec<(PathBuf, u32)> {
    let mut frames = Vec::new();
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
                frames.push((file.to_path_buf(), line));
            }
        });
        true
    });
    frames
}

/// The prefix debug info adds in front of the paths `Location` reports
fn source_root<'p>(anchor: &'p Path, relative: &str) -> Option<&'p str> {
    anchor.to_str()?.strip_suffix(relative)
}

fn display_path(file: &Path, root: Option<&str>) -> String {
    let full = file.display().to_string();
    match root.filter(|root| !root.is_empty()) {
        Some(root) => full.strip_prefix(root).map(str::to_string).unwrap_or(full),
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline(never)]
    fn resolve_from_helper(frames_above: usize) -> Caller {
        Caller::resolve(Location::caller(), frames_above, 0)
    }

    #[test]
    fn test_zero_frames_is_the_location() {
        let here = Location::caller();
        assert_eq!(Caller::resolve(here, 0, 2), Caller::from_location(here, 2));
    }

    #[test]
    fn test_one_frame_up_reaches_the_helper_caller() {
        let (line, caller) = (line!(), resolve_from_helper(1));
        assert_eq!(caller.to_string(), format!("{}:{}", file!(), line));
    }

    #[test]
    fn test_too_deep_falls_back_to_location() {
        let caller = resolve_from_helper(100_000);
        assert_eq!(caller.file, file!());
        assert_ne!(caller.line, line!());
    }

    #[test]
    fn test_display_path_strips_root() {
        let file = Path::new("/work/app/src/main.rs");
        assert_eq!(display_path(file, Some("/work/app/")), "src/main.rs");
        assert_eq!(display_path(file, Some("/elsewhere/")), "/work/app/src/main.rs");
        assert_eq!(display_path(file, Some("")), "/work/app/src/main.rs");
        assert_eq!(
            source_root(Path::new("/work/app/src/lib.rs"), "src/lib.rs"),
            Some("/work/app/")
        );
    }
}
