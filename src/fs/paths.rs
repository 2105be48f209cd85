// Lexical path helpers
//
// Tracked directories are kept absolute and cleaned so that equality checks
// ("is this the directory we are already in?") are plain comparisons.

use std::path::{Component, Path, PathBuf};

/// Lexically normalise a path: drop `.`, fold `..` into its parent, collapse
/// repeated separators. Symlinks are not consulted.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Join `rel` onto `base`, treating `rel` as relative even when it starts
/// with `/`, then clean the result.
pub fn join_clean(base: &Path, rel: &str) -> PathBuf {
    let trimmed = rel.trim_start_matches('/');
    if trimmed.is_empty() {
        return clean(base);
    }
    clean(&base.join(trimmed))
}

/// Make `path` absolute against the process working directory and clean it.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return clean(path);
    }
    match std::env::current_dir() {
        Ok(cwd) => clean(&cwd.join(path)),
        Err(_) => clean(path),
    }
}

/// Expand a leading `~` or `~/` to `home`.
pub fn expand_tilde(input: &str, home: &Path) -> PathBuf {
    if input == "~" {
        return home.to_path_buf();
    }
    match input.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(input),
    }
}

/// Render `path` for the prompt, with the home directory shown as `~`.
pub fn abbreviate_home(path: &Path, home: &Path) -> String {
    if home.as_os_str().is_empty() || home == Path::new("/") {
        return path.display().to_string();
    }
    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}

/// Parent of `path`, or `path` itself at the root.
pub fn parent_or_self(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| path.to_path_buf())
}
