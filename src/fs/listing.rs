// Directory listing as shown on screen and used for tab completion

use std::io;
use std::path::{Path, PathBuf};

use super::probe::{DirEntryInfo, EntryKind, FileProbe};

/// Visible entries of one directory, in name order.
#[derive(Debug, Clone)]
pub struct Listing {
    pub dir: PathBuf,
    pub entries: Vec<DirEntryInfo>,
}

impl Listing {
    /// Read `dir`, dropping dot-entries unless `show_hidden` is set.
    pub fn read(probe: &dyn FileProbe, dir: &Path, show_hidden: bool) -> io::Result<Self> {
        let entries = probe
            .list_dir(dir)?
            .into_iter()
            .filter(|entry| show_hidden || !entry.is_hidden())
            .collect();
        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// The most recently modified subdirectory, if any.
    pub fn freshest_subdirectory(&self) -> Option<&DirEntryInfo> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Directory)
            .max_by_key(|entry| entry.modified)
    }
}
