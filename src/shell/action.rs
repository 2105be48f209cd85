// Resolver results

use std::path::PathBuf;
use thiserror::Error;

/// What happened when one command line was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ChangedDirectory(PathBuf),
    EditedFile {
        path: String,
        error: Option<String>,
    },
    RanProcess {
        output: String,
        error: Option<String>,
    },
    Listed(PathBuf),
    Echoed(String),
    Error(String),
    NoOp,
}

impl Action {
    /// The directory listing should be redrawn after this action.
    pub fn refreshes_listing(&self) -> bool {
        matches!(
            self,
            Action::ChangedDirectory(_) | Action::Listed(_) | Action::EditedFile { error: None, .. }
        )
    }

    /// Error text carried by this action, if any.
    pub fn error_text(&self) -> Option<&str> {
        match self {
            Action::Error(message) => Some(message),
            Action::EditedFile { error, .. } | Action::RanProcess { error, .. } => {
                error.as_deref()
            }
            _ => None,
        }
    }
}

/// Commands the resolver could not make sense of.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("cd WHAT?")]
    CdWhat,

    #[error("WHAT DO YOU MEAN, {0}?")]
    Unknown(String),
}

impl From<ResolveError> for Action {
    fn from(err: ResolveError) -> Self {
        Action::Error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refreshes_listing() {
        assert!(Action::ChangedDirectory("/tmp".into()).refreshes_listing());
        assert!(Action::Listed("/tmp".into()).refreshes_listing());
        assert!(Action::EditedFile {
            path: "a.txt".into(),
            error: None
        }
        .refreshes_listing());
        assert!(!Action::EditedFile {
            path: "a.txt".into(),
            error: Some("boom".into())
        }
        .refreshes_listing());
        assert!(!Action::Echoed("x".into()).refreshes_listing());
        assert!(!Action::NoOp.refreshes_listing());
    }

    #[test]
    fn test_error_text() {
        assert_eq!(Action::Error("bad".into()).error_text(), Some("bad"));
        assert_eq!(
            Action::RanProcess {
                output: String::new(),
                error: Some("exit status: 1".into())
            }
            .error_text(),
            Some("exit status: 1")
        );
        assert_eq!(Action::Quit.error_text(), None);
    }

    #[test]
    fn test_resolve_error_messages() {
        assert_eq!(ResolveError::CdWhat.to_string(), "cd WHAT?");
        assert_eq!(
            Action::from(ResolveError::Unknown("frob".into())),
            Action::Error("WHAT DO YOU MEAN, frob?".into())
        );
    }
}
