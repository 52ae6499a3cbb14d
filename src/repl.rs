use crate::dispatch::CommandShell;
use crate::error::ShellError;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

/// Prefix completion of the first word against the registered command names.
pub struct CommandCompleter {
    commands: Vec<String>,
}

impl Completer for CommandCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let head = &line[..pos];
        if head.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(head))
            .cloned()
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// Interactive loop: banner, prompt, history, dispatch per line.
///
/// `exit`, Ctrl-C and Ctrl-D all leave the loop; empty lines are skipped.
pub fn run(shell: &CommandShell) -> Result<(), ShellError> {
    let names = shell.registry().names();

    print!("Registered commands:");
    for name in &names {
        print!(" [{name}]");
    }
    println!();
    println!();

    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CommandCompleter { commands: names }));

    let prompt = format!("\x1b[34m{}:>\x1b[0m ", shell.prompt());

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" {
                    break;
                }
                rl.add_history_entry(line)?;
                shell.run_command(line);
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completer() -> CommandCompleter {
        CommandCompleter {
            commands: vec![
                "echo".to_string(),
                "exit".to_string(),
                "lines".to_string(),
            ],
        }
    }

    #[test]
    fn completes_first_word_prefix() {
        let helper = completer();
        let history = DefaultHistory::default();
        let ctx = Context::new(&history);
        let (start, candidates) = helper.complete("e", 1, &ctx).expect("completion");
        assert_eq!(start, 0);
        assert_eq!(candidates, vec!["echo".to_string(), "exit".to_string()]);
    }

    #[test]
    fn no_completion_past_the_first_word() {
        let helper = completer();
        let history = DefaultHistory::default();
        let ctx = Context::new(&history);
        let (_, candidates) = helper.complete("echo e", 6, &ctx).expect("completion");
        assert!(candidates.is_empty());
    }
}
