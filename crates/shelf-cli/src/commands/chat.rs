use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use shelf_application::{Command, Screen, ShelfUseCase};
use shelf_core::{Pricer, SessionStore};

use super::utils::print_screen;

const COMMANDS: [&str; 2] = ["/start", "/reset"];

/// Completion and highlighting for slash commands and `#N` button presses.
#[derive(Clone)]
struct ChatHelper {
    commands: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else if line.starts_with('#') {
            Owned(line.bright_yellow().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ChatHelper {}

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Command(Command),
    /// 1-based button number on the last screen.
    Press(usize),
    Text(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    match line {
        "quit" | "exit" => Input::Quit,
        "/start" => Input::Command(Command::Start),
        "/reset" => Input::Command(Command::Reset),
        _ => match line.strip_prefix('#').and_then(|n| n.parse().ok()) {
            Some(n) => Input::Press(n),
            None => Input::Text(line),
        },
    }
}

pub async fn run(store: Arc<dyn SessionStore>, pricer: Arc<dyn Pricer>, user: &str) -> Result<()> {
    let usecase = ShelfUseCase::new(store, pricer);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ChatHelper::new()));

    println!("{}", "=== Shelfbot ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '#N' to press button N, '/reset' to start over, or 'quit' to exit.".bright_black()
    );

    let mut screen = usecase.handle_command(user, Command::Start).await?;
    print_screen(&screen);

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        let next = match classify(trimmed) {
            Input::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Input::Command(command) => usecase.handle_command(user, command).await?,
            Input::Press(n) => match press(&screen, n) {
                Some(token) => usecase.handle_action(user, &token).await?,
                None => {
                    println!("{}", format!("No button #{}", n).yellow());
                    continue;
                }
            },
            Input::Text(text) => usecase.handle_text(user, text).await?,
        };

        screen = next;
        print_screen(&screen);
    }

    Ok(())
}

/// Token of the `n`-th button (1-based) on `screen`.
fn press(screen: &Screen, n: usize) -> Option<String> {
    n.checked_sub(1)
        .and_then(|i| screen.keyboard.buttons().nth(i))
        .map(|b| b.action.to_token())
}
