// Help text shown by `megacli --help`

/// Commands and hotkeys, appended after clap's usage block.
pub const AFTER_HELP: &str = "\
Commands:
  <dir>              change to a directory (relative, absolute or ~/...)
  <file>             open a file in $EDITOR
  ./<script> [args]  run an executable file and show its output
  cd [dir|-]         change directory; `cd` alone goes home, `cd -` goes back
  -                  same as `cd -`
  l, ls, dir         list the current directory
  which <name>       show where a program lives on PATH
  echo <text>        print text
  <editor> [file]    open the editor directly
  <prog> <arg>       run a program with one argument and show its output
  <prog>             run a program interactively
  exit, quit, q, bye quit and print the current directory to stderr

Hotkeys:
  Tab                complete, or switch directory on an empty line
  Ctrl-N / Ctrl-P    next / previous tracked directory
  Backspace, Ctrl-B  go to the parent directory (Backspace on an empty line)
  Ctrl-H / Ctrl-O    toggle hidden files (Ctrl-H at the start of a non-empty line)
  Ctrl-W             resolve symlinks in the current path
  Ctrl-Space         enter the most recently modified subdirectory
  Ctrl-A / Ctrl-E    start / end of line
  Ctrl-K             delete to end of line
  Ctrl-L             redraw
  Ctrl-T / Ctrl-G    run tig / lazygit
  Ctrl-C, Ctrl-D     clear the line, or quit on an empty line
  Ctrl-Q             clear the line, or quit without printing the directory
  Esc Esc            quit

Environment:
  EDITOR             editor command (default: vi)
  MEGACLI_LOG        log filter, e.g. `debug` (log file in the cache directory)";
