// Event loop
//
// Reads one key at a time, applies it to the line editor or the session,
// hands submitted lines to the resolver and redraws after every key.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use super::keymap::{key_action, KeyAction};
use super::render::{Body, Screen};
use crate::config::constants::{LAZYGIT, TIG};
use crate::config::ColorScheme;
use crate::editor::LineEditor;
use crate::fs::{paths, Listing};
use crate::shell::{Action, Resolver, Session};
use crate::tui::{Canvas, Key, KeySource};

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// Quit word, Ctrl-C/Ctrl-D on an empty line, or Esc twice.
    Quit,
    /// Ctrl-Q on an empty line.
    Forced,
}

pub struct EventLoop<C: Canvas, K: KeySource> {
    canvas: C,
    keys: K,
    session: Session,
    resolver: Resolver,
    colors: ColorScheme,
    poll_timeout: Duration,
    line: LineEditor,
    body: Body,
    esc_armed: bool,
    exit: Option<LoopExit>,
}

impl<C: Canvas, K: KeySource> EventLoop<C, K> {
    pub fn new(
        canvas: C,
        keys: K,
        session: Session,
        resolver: Resolver,
        colors: ColorScheme,
        poll_timeout: Duration,
    ) -> Self {
        Self {
            canvas,
            keys,
            session,
            resolver,
            colors,
            poll_timeout,
            line: LineEditor::new(),
            body: Body::Empty,
            esc_armed: false,
            exit: None,
        }
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<LoopExit> {
        self.list_directory();
        self.redraw()?;

        loop {
            if let Some(exit) = self.exit {
                debug!(?exit, dir = %self.session.current_dir().display(), "Leaving event loop");
                return Ok(exit);
            }
            let key = self
                .keys
                .next_key(self.poll_timeout)
                .context("Failed to read key")?;
            if let Some(key) = key {
                self.handle_key(key);
                self.redraw()?;
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn line(&self) -> &LineEditor {
        &self.line
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn exit(&self) -> Option<LoopExit> {
        self.exit
    }

    /// Apply one key.
    pub fn handle_key(&mut self, key: Key) {
        let action = key_action(&key);
        if action != KeyAction::Escape {
            self.esc_armed = false;
        }

        match action {
            KeyAction::Insert(text) => self.line.insert(&text),
            KeyAction::MoveLeft => self.line.move_left(),
            KeyAction::MoveRight => self.line.move_right(),
            KeyAction::MoveHome => self.line.move_home(),
            KeyAction::MoveEnd => self.line.move_end(),
            KeyAction::Backspace => {
                if self.line.is_empty() {
                    self.go_to_parent();
                } else {
                    self.line.delete_before();
                }
            }
            KeyAction::DeleteOrToggleHidden => {
                // crossterm reports a ^H Backspace as Ctrl-h
                if self.line.is_empty() {
                    self.go_to_parent();
                } else if self.line.cursor() == 0 {
                    self.session.toggle_hidden();
                    self.list_directory();
                } else {
                    self.line.delete_before();
                }
            }
            KeyAction::DeleteAt => self.line.delete_at(),
            KeyAction::DeleteToEnd => self.line.delete_to_end(),
            KeyAction::Submit => self.submit(),
            KeyAction::Tab => {
                if self.line.is_empty() {
                    self.session.cycle_next();
                    self.list_directory();
                } else {
                    self.complete();
                }
            }
            KeyAction::NextDir => {
                self.session.cycle_next();
                self.list_directory();
            }
            KeyAction::PreviousDir => {
                self.session.cycle_previous();
                self.list_directory();
            }
            KeyAction::ParentDir => self.go_to_parent(),
            KeyAction::ResolveSymlinks => self.resolve_symlinks(),
            KeyAction::FreshestSubdir => self.enter_freshest_subdirectory(),
            KeyAction::ToggleHidden => {
                self.session.toggle_hidden();
                self.list_directory();
            }
            KeyAction::Redraw => {
                self.canvas.invalidate();
                self.list_directory();
            }
            KeyAction::RunTig => self.run_tool(TIG),
            KeyAction::RunLazygit => self.run_tool(LAZYGIT),
            KeyAction::Interrupt => self.clear_or_exit(LoopExit::Quit),
            KeyAction::ForceQuit => self.clear_or_exit(LoopExit::Forced),
            KeyAction::Escape => {
                if self.esc_armed {
                    self.exit = Some(LoopExit::Quit);
                } else {
                    self.line.clear();
                    self.esc_armed = true;
                }
            }
            KeyAction::Resize(width, height) => self.canvas.resize(width, height),
            KeyAction::Ignore => {}
        }

        if self.exit.is_none() && self.session.quit_requested() {
            self.exit = Some(LoopExit::Quit);
        }
    }

    fn redraw(&mut self) -> Result<()> {
        let screen = Screen {
            colors: &self.colors,
            home: self.resolver.home(),
        };
        screen.render(&mut self.canvas, &self.session, &self.line, &self.body);
        self.canvas.draw().context("Failed to draw screen")
    }

    fn clear_or_exit(&mut self, exit: LoopExit) {
        if self.line.is_empty() {
            self.exit = Some(exit);
        } else {
            self.line.clear();
        }
    }

    fn submit(&mut self) {
        if self.line.is_empty() {
            self.list_directory();
            return;
        }
        let command = self.line.text();
        self.line.clear();

        let action = self.resolver.execute(&mut self.session, &command);
        if matches!(action, Action::EditedFile { .. } | Action::RanProcess { .. }) {
            // a child may have drawn over the screen
            self.canvas.invalidate();
        }
        self.show(action);
    }

    fn show(&mut self, action: Action) {
        self.body = match action {
            Action::Quit => {
                self.exit = Some(LoopExit::Quit);
                return;
            }
            Action::ChangedDirectory(_) | Action::Listed(_) | Action::EditedFile { error: None, .. } => {
                self.list_directory();
                return;
            }
            Action::EditedFile {
                error: Some(error), ..
            } => Body::Error(error),
            Action::RanProcess {
                output,
                error: Some(error),
            } => {
                if output.trim().is_empty() {
                    Body::Error(error)
                } else {
                    Body::Error(format!("{}\n{}", output.trim_end(), error))
                }
            }
            Action::RanProcess { output, error: None } => Body::Output(output),
            Action::Echoed(text) => Body::Output(text),
            Action::Error(message) => Body::Error(message),
            Action::NoOp => Body::Empty,
        };
    }

    fn list_directory(&mut self) {
        let dir = self.session.current_dir().to_path_buf();
        self.body = match Listing::read(self.resolver.probe(), &dir, self.session.show_hidden) {
            Ok(listing) => Body::Listing(listing),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Could not list directory");
                Body::Error(format!("could not list {}", dir.display()))
            }
        };
    }

    fn change_and_list(&mut self, path: &Path) {
        self.session.change_to(path);
        self.list_directory();
    }

    fn go_to_parent(&mut self) {
        let parent = paths::parent_or_self(self.session.current_dir());
        self.change_and_list(&parent);
    }

    fn resolve_symlinks(&mut self) {
        let dir = self.session.current_dir().to_path_buf();
        match self.resolver.probe().real_path(&dir) {
            Ok(real) => self.change_and_list(&real),
            Err(e) => self.body = Body::Error(format!("{}: {}", dir.display(), e)),
        }
    }

    fn enter_freshest_subdirectory(&mut self) {
        let dir = self.session.current_dir().to_path_buf();
        let freshest: Option<PathBuf> = Listing::read(self.resolver.probe(), &dir, self.session.show_hidden)
            .ok()
            .and_then(|listing| listing.freshest_subdirectory().map(|entry| dir.join(&entry.name)));
        match freshest {
            Some(path) => self.change_and_list(&path),
            None => self.list_directory(),
        }
    }

    /// Tab completion against the directory entries, then PATH executables.
    fn complete(&mut self) {
        let dir = self.session.current_dir().to_path_buf();
        let names: Vec<String> = Listing::read(self.resolver.probe(), &dir, self.session.show_hidden)
            .map(|listing| listing.names().map(String::from).collect())
            .unwrap_or_default();
        if self.line.complete_against(&names) {
            return;
        }
        let executables = self.resolver.probe().path_executables();
        self.line.complete_against(&executables);
    }

    fn run_tool(&mut self, program: &str) {
        let dir = self.session.current_dir().to_path_buf();
        let Some(executable) = self.resolver.probe().which(program) else {
            self.body = Body::Error(format!("{program}: executable file not found in $PATH"));
            return;
        };
        let result = self.resolver.runner().run_interactive(&executable, &[], &dir);
        self.canvas.invalidate();
        match result {
            Ok(()) => self.list_directory(),
            Err(e) => self.body = Body::Error(e.to_string()),
        }
    }
}
