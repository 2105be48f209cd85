// ProcessRunner trait and its error type

use std::path::Path;
use thiserror::Error;

/// Failures from launching or running a child process.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{0}: executable file not found in $PATH")]
    NotFound(String),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child ran but exited unsuccessfully; `output` holds whatever it
    /// printed before that.
    #[error("{program}: {status}{}", format_output(.output))]
    Failed {
        program: String,
        status: String,
        output: String,
    },
}

fn format_output(output: &str) -> String {
    let trimmed = output.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}

pub trait ProcessRunner {
    /// Run to completion with stdout and stderr captured and combined.
    fn run(&self, executable: &str, args: &[String], cwd: &Path) -> Result<String, RunError>;

    /// Run with the terminal handed over to the child (editors, pagers).
    fn run_interactive(&self, executable: &Path, args: &[String], cwd: &Path)
        -> Result<(), RunError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_display_includes_output() {
        let err = RunError::Failed {
            program: "make".into(),
            status: "exit status: 2".into(),
            output: "no rule to make target\n".into(),
        };
        assert_eq!(err.to_string(), "make: exit status: 2\nno rule to make target");
    }

    #[test]
    fn test_failed_display_without_output() {
        let err = RunError::Failed {
            program: "false".into(),
            status: "exit status: 1".into(),
            output: String::new(),
        };
        assert_eq!(err.to_string(), "false: exit status: 1");
    }

    #[test]
    fn test_not_found_display() {
        let err = RunError::NotFound("nano".into());
        assert_eq!(err.to_string(), "nano: executable file not found in $PATH");
    }
}
