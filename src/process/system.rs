// SystemRunner - ProcessRunner backed by std::process
//
// Children inherit the environment. Captured runs get a null stdin so they
// cannot steal keystrokes; interactive runs get the real terminal while the
// UI is suspended.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use super::runner::{ProcessRunner, RunError};
use crate::tui::terminal;

#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

/// A relative path with a separator (`./build.sh`) is taken relative to the
/// child's working directory rather than ours.
fn program_path(executable: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(executable);
    if executable.contains('/') && path.is_relative() {
        cwd.join(path)
    } else {
        path.to_path_buf()
    }
}

fn spawn_error(program: &str, source: io::Error) -> RunError {
    if source.kind() == io::ErrorKind::NotFound {
        RunError::NotFound(program.to_string())
    } else {
        RunError::Spawn {
            program: program.to_string(),
            source,
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, executable: &str, args: &[String], cwd: &Path) -> Result<String, RunError> {
        debug!(executable, ?args, cwd = %cwd.display(), "Running captured command");

        let output = Command::new(program_path(executable, cwd))
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(executable, e))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&stderr);
        }

        if output.status.success() {
            Ok(combined)
        } else {
            warn!(executable, status = %output.status, "Command exited unsuccessfully");
            Err(RunError::Failed {
                program: executable.to_string(),
                status: output.status.to_string(),
                output: combined,
            })
        }
    }

    fn run_interactive(
        &self,
        executable: &Path,
        args: &[String],
        cwd: &Path,
    ) -> Result<(), RunError> {
        let program = executable.display().to_string();
        debug!(program = %program, ?args, cwd = %cwd.display(), "Handing terminal to child");

        terminal::suspend();
        let status = Command::new(executable).args(args).current_dir(cwd).status();
        terminal::resume();

        let status = status.map_err(|e| spawn_error(&program, e))?;
        if status.success() {
            Ok(())
        } else {
            Err(RunError::Failed {
                program,
                status: status.to_string(),
                output: String::new(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_captures_stdout() {
        let tmp = TempDir::new().unwrap();
        let out = SystemRunner::new()
            .run("echo", &["hello".to_string()], tmp.path())
            .unwrap();
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_run_uses_working_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("marker.txt"), "").unwrap();
        let out = SystemRunner::new().run("ls", &[], tmp.path()).unwrap();
        assert!(out.contains("marker.txt"));
    }

    #[test]
    fn test_run_combines_stderr() {
        let tmp = TempDir::new().unwrap();
        let out = SystemRunner::new()
            .run(
                "sh",
                &["-c".to_string(), "echo out; echo err >&2".to_string()],
                tmp.path(),
            )
            .unwrap();
        assert_eq!(out, "out\nerr\n");
    }

    #[test]
    fn test_run_nonzero_exit_keeps_output() {
        let tmp = TempDir::new().unwrap();
        let script = tmp.path().join("fail.sh");
        fs::write(&script, "echo partial\necho broken >&2\nexit 3\n").unwrap();

        let err = SystemRunner::new()
            .run("sh", &["fail.sh".to_string()], tmp.path())
            .unwrap_err();
        match err {
            RunError::Failed { output, status, .. } => {
                assert!(output.contains("partial"));
                assert!(output.contains("broken"));
                assert!(status.contains('3'));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_run_missing_program() {
        let tmp = TempDir::new().unwrap();
        let err = SystemRunner::new()
            .run("zzz_no_such_program_xyz", &[], tmp.path())
            .unwrap_err();
        assert!(matches!(err, RunError::NotFound(name) if name == "zzz_no_such_program_xyz"));
    }

    #[test]
    fn test_program_path_relative_to_cwd() {
        let cwd = Path::new("/work");
        assert_eq!(program_path("./x.sh", cwd), PathBuf::from("/work/./x.sh"));
        assert_eq!(program_path("ls", cwd), PathBuf::from("ls"));
        assert_eq!(program_path("/bin/ls", cwd), PathBuf::from("/bin/ls"));
    }
}
