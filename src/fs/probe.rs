// FileProbe - filesystem questions asked by the resolver and the listing
//
// The trait is the seam that lets the resolver be tested against temp
// directories and a controlled search path instead of the user's real PATH.

use std::fs;
use std::io::{self, Read};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// How a directory entry is shown in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Executable,
    Symlink,
    Binary,
    Plain,
}

impl EntryKind {
    /// Marker drawn right after the entry name.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            EntryKind::Directory => Some("/"),
            EntryKind::Executable => Some("*"),
            EntryKind::Symlink => Some("^"),
            EntryKind::Binary => Some("¤"),
            EntryKind::Plain => None,
        }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
    pub modified: Option<SystemTime>,
}

impl DirEntryInfo {
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

pub trait FileProbe {
    /// True for directories, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;

    /// True for regular files, following symlinks.
    fn is_file(&self, path: &Path) -> bool;

    fn is_executable(&self, path: &Path) -> bool;

    fn is_symlink(&self, path: &Path) -> bool;

    /// Heuristic: the first block of the file contains NUL or is not UTF-8.
    fn is_binary(&self, path: &Path) -> bool;

    /// Entries of `dir` sorted by name, classified for display.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// Resolve a bare program name against the search path.
    fn which(&self, name: &str) -> Option<PathBuf>;

    /// Executable names found on the search path, in search order.
    fn path_executables(&self) -> Vec<String>;

    /// Absolute path of `path` with every symlink resolved.
    fn real_path(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Bytes inspected by the binary heuristic.
const BINARY_SNIFF_LEN: usize = 512;

/// [`FileProbe`] backed by the real filesystem.
#[derive(Debug, Clone)]
pub struct RealFileProbe {
    search_path: Vec<PathBuf>,
}

impl RealFileProbe {
    /// Use the directories listed in `$PATH`.
    pub fn from_env() -> Self {
        let search_path = std::env::var_os("PATH")
            .map(|paths| std::env::split_paths(&paths).collect())
            .unwrap_or_default();
        Self { search_path }
    }

    /// Use an explicit search path instead of `$PATH`.
    pub fn with_search_path(search_path: Vec<PathBuf>) -> Self {
        Self { search_path }
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    fn classify(&self, path: &Path) -> EntryKind {
        if self.is_dir(path) {
            EntryKind::Directory
        } else if self.is_executable(path) {
            EntryKind::Executable
        } else if self.is_symlink(path) {
            EntryKind::Symlink
        } else if self.is_binary(path) {
            EntryKind::Binary
        } else {
            EntryKind::Plain
        }
    }
}

impl Default for RealFileProbe {
    fn default() -> Self {
        Self::from_env()
    }
}

impl FileProbe for RealFileProbe {
    fn is_dir(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && path.is_file()
    }

    fn is_executable(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        }
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn is_binary(&self, path: &Path) -> bool {
        let mut file = match fs::File::open(path) {
            Ok(file) => file,
            Err(_) => return false,
        };
        let mut buf = [0u8; BINARY_SNIFF_LEN];
        let read = match file.read(&mut buf) {
            Ok(n) => n,
            Err(_) => return false,
        };
        let head = &buf[..read];
        if head.contains(&0) {
            return true;
        }
        match std::str::from_utf8(head) {
            Ok(_) => false,
            // A multi-byte char cut off at the end of the sniff window is fine
            Err(e) => e.error_len().is_some(),
        }
    }

    fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            let modified = fs::metadata(&path).and_then(|m| m.modified()).ok();
            entries.push(DirEntryInfo {
                kind: self.classify(&path),
                name,
                modified,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        if name.contains('/') {
            let path = PathBuf::from(name);
            return self.is_executable(&path).then_some(path);
        }
        self.search_path
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| self.is_executable(candidate))
    }

    fn path_executables(&self) -> Vec<String> {
        let mut names = Vec::new();
        for dir in &self.search_path {
            let Ok(read) = fs::read_dir(dir) else {
                continue;
            };
            let mut found: Vec<String> = read
                .filter_map(|entry| entry.ok())
                .filter(|entry| self.is_executable(&entry.path()))
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect();
            found.sort();
            names.extend(found);
        }
        names
    }

    fn real_path(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn make_executable(path: &Path) {
        let mut file = File::create(path).unwrap();
        writeln!(file, "#!/bin/sh\necho hi").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_is_dir_and_is_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("notes.txt");
        fs::write(&file, "text").unwrap();

        let probe = RealFileProbe::with_search_path(vec![]);
        assert!(probe.is_dir(tmp.path()));
        assert!(!probe.is_file(tmp.path()));
        assert!(probe.is_file(&file));
        assert!(!probe.is_dir(&file));
        assert!(!probe.is_dir(Path::new("")));
    }

    #[test]
    fn test_is_executable() {
        let tmp = TempDir::new().unwrap();
        let script = tmp.path().join("run.sh");
        make_executable(&script);
        let plain = tmp.path().join("plain.txt");
        fs::write(&plain, "x").unwrap();

        let probe = RealFileProbe::with_search_path(vec![]);
        assert!(probe.is_executable(&script));
        assert!(!probe.is_executable(&plain));
        assert!(!probe.is_executable(tmp.path()));
    }

    #[test]
    fn test_is_binary() {
        let tmp = TempDir::new().unwrap();
        let bin = tmp.path().join("blob.bin");
        fs::write(&bin, [0x7f, b'E', b'L', b'F', 0, 0, 1]).unwrap();
        let text = tmp.path().join("readme.md");
        fs::write(&text, "# hello ¤\n").unwrap();

        let probe = RealFileProbe::with_search_path(vec![]);
        assert!(probe.is_binary(&bin));
        assert!(!probe.is_binary(&text));
    }

    #[test]
    fn test_list_dir_sorted_and_classified() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();
        make_executable(&tmp.path().join("a.sh"));
        fs::write(tmp.path().join(".hidden"), "h").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("b.txt"), tmp.path().join("link")).unwrap();

        let probe = RealFileProbe::with_search_path(vec![]);
        let entries = probe.list_dir(tmp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![".hidden", "a.sh", "b.txt", "link", "src"]);

        let kind_of = |name: &str| entries.iter().find(|e| e.name == name).unwrap().kind;
        assert_eq!(kind_of("src"), EntryKind::Directory);
        assert_eq!(kind_of("a.sh"), EntryKind::Executable);
        assert_eq!(kind_of("b.txt"), EntryKind::Plain);
        assert_eq!(kind_of("link"), EntryKind::Symlink);
        assert!(entries[0].is_hidden());
    }

    #[test]
    fn test_list_dir_missing_errors() {
        let probe = RealFileProbe::with_search_path(vec![]);
        assert!(probe.list_dir(Path::new("/definitely/not/here")).is_err());
    }

    #[test]
    fn test_which_uses_search_path_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        make_executable(&second.path().join("tool"));
        make_executable(&first.path().join("tool"));
        fs::write(first.path().join("data"), "not executable").unwrap();

        let probe = RealFileProbe::with_search_path(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(probe.which("tool"), Some(first.path().join("tool")));
        assert_eq!(probe.which("data"), None);
        assert_eq!(probe.which("missing"), None);
        assert_eq!(probe.which(""), None);
    }

    #[test]
    fn test_path_executables() {
        let bin = TempDir::new().unwrap();
        make_executable(&bin.path().join("zeta"));
        make_executable(&bin.path().join("alpha"));
        fs::write(bin.path().join("readme"), "x").unwrap();

        let probe = RealFileProbe::with_search_path(vec![
            bin.path().to_path_buf(),
            PathBuf::from("/definitely/not/here"),
        ]);
        assert_eq!(probe.path_executables(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_real_path_resolves_symlinks() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let probe = RealFileProbe::with_search_path(vec![]);
        let real = probe.real_path(&link).unwrap();
        assert_eq!(real, fs::canonicalize(&target).unwrap());
        assert!(probe.real_path(&tmp.path().join("missing")).is_err());
    }

    #[test]
    fn test_entry_kind_suffix() {
        assert_eq!(EntryKind::Directory.suffix(), Some("/"));
        assert_eq!(EntryKind::Binary.suffix(), Some("¤"));
        assert_eq!(EntryKind::Plain.suffix(), None);
    }
}
