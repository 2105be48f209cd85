// Resolution rules
//
// One entry per way a command line can be understood, tried top to bottom.
// A handler returns `None` to pass the command on to the next rule.

use std::path::PathBuf;

use super::action::{Action, ResolveError};
use super::resolver::Resolver;
use super::session::Session;
use crate::config::constants::{LIST_WORDS, QUIT_WORDS};
use crate::fs::paths;

/// A command line being resolved, with the directory it runs in.
pub(crate) struct Command<'a> {
    pub text: &'a str,
    pub cwd: PathBuf,
}

pub(crate) type RuleFn = fn(&Resolver, &mut Session, &Command<'_>) -> Option<Action>;

pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: RuleFn,
}

pub(crate) static RULES: &[Rule] = &[
    Rule { name: "quit", apply: quit },
    Rule { name: "relative-directory", apply: relative_directory },
    Rule { name: "absolute-directory", apply: absolute_directory },
    Rule { name: "relative-file", apply: relative_file },
    Rule { name: "absolute-file", apply: absolute_file },
    Rule { name: "list", apply: list },
    Rule { name: "which", apply: which },
    Rule { name: "cd", apply: cd },
    Rule { name: "echo", apply: echo },
    Rule { name: "editor", apply: editor },
    Rule { name: "multi-field", apply: multi_field },
    Rule { name: "path-lookup", apply: path_lookup },
    Rule { name: "unresolvable", apply: unresolvable },
];

/// Rule names in the order they are tried.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|rule| rule.name).collect()
}

/// `~`-expanded path, only when it ends up absolute. Bare relative names are
/// handled against the active directory by the relative rules.
fn absolute_path(resolver: &Resolver, text: &str) -> Option<PathBuf> {
    let path = paths::expand_tilde(text, resolver.home());
    path.is_absolute().then_some(path)
}

fn quit(_: &Resolver, session: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    if !QUIT_WORDS.contains(&cmd.text) {
        return None;
    }
    session.request_quit();
    Some(Action::Quit)
}

fn relative_directory(resolver: &Resolver, session: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    let path = paths::join_clean(&cmd.cwd, cmd.text);
    resolver
        .probe()
        .is_dir(&path)
        .then(|| resolver.change_dir(session, &path))
}

fn absolute_directory(resolver: &Resolver, session: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    let path = absolute_path(resolver, cmd.text)?;
    resolver
        .probe()
        .is_dir(&path)
        .then(|| resolver.change_dir(session, &path))
}

fn relative_file(resolver: &Resolver, _: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    let path = paths::join_clean(&cmd.cwd, cmd.text);
    let probe = resolver.probe();
    if !probe.is_file(&path) {
        return None;
    }

    if cmd.text.starts_with("./") && probe.is_executable(&path) {
        let (program, rest) = cmd.text.split_once(' ').unwrap_or((cmd.text, ""));
        let args: Vec<String> = rest.split_whitespace().map(String::from).collect();
        return Some(resolver.run_captured(program, &args, &cmd.cwd));
    }

    Some(resolver.edit(cmd.text, &cmd.cwd))
}

fn absolute_file(resolver: &Resolver, _: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    let path = absolute_path(resolver, cmd.text)?;
    resolver
        .probe()
        .is_file(&path)
        .then(|| resolver.edit(&path.to_string_lossy(), &cmd.cwd))
}

fn list(_: &Resolver, _: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    LIST_WORDS
        .contains(&cmd.text)
        .then(|| Action::Listed(cmd.cwd.clone()))
}

fn which(resolver: &Resolver, _: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    let name = cmd.text.strip_prefix("which ")?.trim();
    let found = resolver
        .probe()
        .which(name)
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    Some(Action::Echoed(found))
}

fn cd(resolver: &Resolver, session: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    let rest = if cmd.text == "cd" || cmd.text == "-" {
        ""
    } else {
        cmd.text.strip_prefix("cd ")?.trim()
    };

    if rest.is_empty() && cmd.text != "-" {
        let home = resolver.home().to_path_buf();
        return Some(resolver.change_dir(session, &home));
    }

    if !rest.is_empty() {
        let target = Some(paths::join_clean(&cmd.cwd, rest))
            .filter(|path| resolver.probe().is_dir(path))
            .or_else(|| absolute_path(resolver, rest).filter(|path| resolver.probe().is_dir(path)));
        if let Some(target) = target {
            return Some(resolver.change_dir(session, &target));
        }
    }

    if cmd.text == "-" || rest == "-" {
        return Some(if session.toggle_previous() {
            Action::ChangedDirectory(session.current_dir().to_path_buf())
        } else {
            Action::NoOp
        });
    }

    Some(ResolveError::CdWhat.into())
}

fn echo(_: &Resolver, _: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    if cmd.text == "echo" {
        return Some(Action::NoOp);
    }
    cmd.text
        .strip_prefix("echo ")
        .map(|rest| Action::Echoed(rest.to_string()))
}

fn editor(resolver: &Resolver, _: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    let base = resolver.editor_base_name();
    if base.is_empty() {
        return None;
    }
    if cmd.text == base {
        return Some(resolver.edit("", &cmd.cwd));
    }
    let file = cmd.text.strip_prefix(base)?.strip_prefix(' ')?;
    Some(resolver.edit(file, &cmd.cwd))
}

fn multi_field(resolver: &Resolver, _: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    if !cmd.text.contains(char::is_whitespace) {
        return None;
    }
    let mut fields = cmd.text.split_whitespace();
    let program = fields.next()?;
    let args: Vec<String> = fields.next().map(String::from).into_iter().collect();
    Some(resolver.run_captured(program, &args, &cmd.cwd))
}

fn path_lookup(resolver: &Resolver, _: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    let executable = resolver.probe().which(cmd.text)?;
    Some(resolver.run_interactive(&executable, &cmd.cwd))
}

fn unresolvable(_: &Resolver, _: &mut Session, cmd: &Command<'_>) -> Option<Action> {
    Some(ResolveError::Unknown(cmd.text.to_string()).into())
}
