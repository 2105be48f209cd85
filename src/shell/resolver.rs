// Command resolver
//
// Turns one submitted command line into an Action by walking the ordered
// rule table in `rules.rs`. Side effects (changing the tracked directory,
// launching the editor or a program) happen here; redrawing is left to the
// event loop.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::action::{Action, ResolveError};
use super::rules::{Command, RULES};
use super::session::Session;
use crate::fs::FileProbe;
use crate::process::{ProcessRunner, RunError};

pub struct Resolver {
    probe: Arc<dyn FileProbe>,
    runner: Arc<dyn ProcessRunner>,
    editor: String,
    home: PathBuf,
}

impl Resolver {
    /// `editor` is the `$EDITOR`-style command: a program name or path,
    /// optionally followed by arguments.
    pub fn new(
        probe: Arc<dyn FileProbe>,
        runner: Arc<dyn ProcessRunner>,
        editor: impl Into<String>,
        home: PathBuf,
    ) -> Self {
        Self {
            probe,
            runner,
            editor: editor.into(),
            home,
        }
    }

    pub fn probe(&self) -> &dyn FileProbe {
        self.probe.as_ref()
    }

    pub fn runner(&self) -> &dyn ProcessRunner {
        self.runner.as_ref()
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// File name of the editor program, e.g. `vim` for `/usr/bin/vim -p`.
    pub fn editor_base_name(&self) -> &str {
        let program = self.editor.split_whitespace().next().unwrap_or("");
        Path::new(program)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(program)
    }

    /// Resolve `cmd` against the session's active directory.
    pub fn execute(&self, session: &mut Session, cmd: &str) -> Action {
        let command = Command {
            text: cmd,
            cwd: session.current_dir().to_path_buf(),
        };

        RULES
            .iter()
            .find_map(|rule| {
                let action = (rule.apply)(self, session, &command)?;
                debug!(rule = rule.name, command = cmd, ?action, "Resolved command");
                Some(action)
            })
            .unwrap_or_else(|| ResolveError::Unknown(cmd.to_string()).into())
    }

    /// Switch the active tracked directory to `path` if it is not there
    /// already.
    pub(crate) fn change_dir(&self, session: &mut Session, path: &Path) -> Action {
        if session.change_to(path) {
            Action::ChangedDirectory(session.current_dir().to_path_buf())
        } else {
            Action::NoOp
        }
    }

    /// Open `file` in the editor (a blank buffer when `file` is empty).
    pub(crate) fn edit(&self, file: &str, cwd: &Path) -> Action {
        let mut words = self.editor.split_whitespace();
        let program = words.next().unwrap_or("");
        let mut args: Vec<String> = words.map(String::from).collect();
        if !file.is_empty() {
            args.push(file.to_string());
        }

        let editor_path = if program.contains('/') {
            Some(PathBuf::from(program))
        } else {
            self.probe.which(program)
        };

        let error = match editor_path {
            Some(path) => {
                info!(editor = %path.display(), file, "Opening editor");
                self.runner
                    .run_interactive(&path, &args, cwd)
                    .err()
                    .map(|e| e.to_string())
            }
            None => Some(RunError::NotFound(program.to_string()).to_string()),
        };

        Action::EditedFile {
            path: file.to_string(),
            error,
        }
    }

    /// Run with captured output in `cwd`.
    pub(crate) fn run_captured(&self, executable: &str, args: &[String], cwd: &Path) -> Action {
        match self.runner.run(executable, args, cwd) {
            Ok(output) => Action::RanProcess {
                output,
                error: None,
            },
            Err(e) => Action::RanProcess {
                output: String::new(),
                error: Some(e.to_string()),
            },
        }
    }

    /// Run a program that may need the terminal.
    pub(crate) fn run_interactive(&self, executable: &Path, cwd: &Path) -> Action {
        let error = self
            .runner
            .run_interactive(executable, &[], cwd)
            .err()
            .map(|e| e.to_string());
        Action::RanProcess {
            output: String::new(),
            error,
        }
    }
}
