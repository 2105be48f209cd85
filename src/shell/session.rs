// Session state
//
// The tracked directories, which one is active, and the flags the event loop
// and the resolver share. Owned by the event loop and lent out as `&mut`.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::fs::paths;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("at least one start directory is required")]
    NoDirectories,
}

/// A working directory slot with its `cd -` partner.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TrackedDir {
    current: PathBuf,
    previous: PathBuf,
}

impl TrackedDir {
    fn new(path: &Path) -> Self {
        let path = paths::absolutize(path);
        Self {
            current: path.clone(),
            previous: path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    dirs: Vec<TrackedDir>,
    active: usize,
    pub show_hidden: bool,
    quit_requested: bool,
}

impl Session {
    pub fn new<I, P>(start_dirs: I) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let dirs: Vec<TrackedDir> = start_dirs
            .into_iter()
            .map(|dir| TrackedDir::new(dir.as_ref()))
            .collect();
        if dirs.is_empty() {
            return Err(SessionError::NoDirectories);
        }
        Ok(Self {
            dirs,
            active: 0,
            show_hidden: false,
            quit_requested: false,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.dirs[self.active].current
    }

    pub fn previous_dir(&self) -> &Path {
        &self.dirs[self.active].previous
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Move the active slot to `path`, remembering where it was.
    pub fn set_path(&mut self, path: &Path) {
        let path = paths::absolutize(path);
        let slot = &mut self.dirs[self.active];
        debug!(from = %slot.current.display(), to = %path.display(), "Changing directory");
        slot.previous = std::mem::replace(&mut slot.current, path);
    }

    /// Change to `path` unless it is already current. Returns whether
    /// anything changed.
    pub fn change_to(&mut self, path: &Path) -> bool {
        if paths::absolutize(path) == self.current_dir() {
            return false;
        }
        self.set_path(path);
        true
    }

    /// `cd -`: swap current and previous. Returns whether anything changed.
    pub fn toggle_previous(&mut self) -> bool {
        let slot = &mut self.dirs[self.active];
        if slot.current == slot.previous {
            return false;
        }
        std::mem::swap(&mut slot.current, &mut slot.previous);
        true
    }

    pub fn cycle_next(&mut self) {
        self.active = (self.active + 1) % self.dirs.len();
    }

    pub fn cycle_previous(&mut self) {
        self.active = (self.active + self.dirs.len() - 1) % self.dirs.len();
    }

    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(["/a", "/b", "/c"]).unwrap()
    }

    #[test]
    fn test_empty_start_dirs_rejected() {
        let dirs: Vec<PathBuf> = Vec::new();
        assert_eq!(Session::new(dirs).unwrap_err(), SessionError::NoDirectories);
    }

    #[test]
    fn test_start_dirs_absolutized() {
        let session = Session::new(["."]).unwrap();
        assert!(session.current_dir().is_absolute());
        assert_eq!(session.current_dir(), session.previous_dir());
    }

    #[test]
    fn test_set_path_remembers_previous() {
        let mut s = session();
        s.set_path(Path::new("/a/sub/../x"));
        assert_eq!(s.current_dir(), Path::new("/a/x"));
        assert_eq!(s.previous_dir(), Path::new("/a"));
    }

    #[test]
    fn test_change_to_same_is_noop() {
        let mut s = session();
        assert!(!s.change_to(Path::new("/a/.")));
        assert!(s.change_to(Path::new("/z")));
        assert_eq!(s.current_dir(), Path::new("/z"));
    }

    #[test]
    fn test_toggle_previous_is_symmetric() {
        let mut s = session();
        s.set_path(Path::new("/b"));
        for _ in 0..5 {
            assert!(s.toggle_previous());
            assert_eq!(s.current_dir(), Path::new("/a"));
            assert!(s.toggle_previous());
            assert_eq!(s.current_dir(), Path::new("/b"));
        }
    }

    #[test]
    fn test_toggle_without_history_is_noop() {
        let mut s = session();
        assert!(!s.toggle_previous());
        assert_eq!(s.current_dir(), Path::new("/a"));
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut s = session();
        s.cycle_previous();
        assert_eq!(s.active_index(), 2);
        s.cycle_next();
        assert_eq!(s.active_index(), 0);
        s.cycle_next();
        s.cycle_next();
        s.cycle_next();
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut s = session();
        s.set_path(Path::new("/x"));
        s.cycle_next();
        assert_eq!(s.current_dir(), Path::new("/b"));
        s.cycle_previous();
        assert_eq!(s.current_dir(), Path::new("/x"));
    }

    #[test]
    fn test_quit_flag() {
        let mut s = session();
        assert!(!s.quit_requested());
        s.request_quit();
        assert!(s.quit_requested());
    }
}
