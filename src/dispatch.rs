use crate::command::{CommandHandler, CommandRegistry};
use crate::error::ShellError;
use crate::pipeline::{self, run_piped};
use crate::tokenizer::split_words;
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Arguments for one piped dispatch: what the handler gets, and the literal
/// command string the consumer shell gets.
struct PipelineRequest<'a> {
    handler_args: &'a [String],
    shell_command: String,
}

/// Splits residual arguments at the first pipe marker.
///
/// The marker is only honored when more than one residual argument exists
/// and the marker is not the final token; otherwise `|` is treated as a
/// literal argument. Anything after the marker is rejoined with single
/// spaces, so a second `|` ends up inside the shell command string and is
/// interpreted by the shell itself.
fn split_pipe(args: &[String]) -> Option<PipelineRequest<'_>> {
    if args.len() <= 1 {
        return None;
    }
    let marker = args.iter().position(|arg| arg == "|")?;
    if marker + 1 >= args.len() {
        return None;
    }
    Some(PipelineRequest {
        handler_args: &args[..marker],
        shell_command: args[marker + 1..].join(" "),
    })
}

/// Runs a raw shell command with the terminal's own streams attached.
pub fn run_shell(command: &str) -> Result<(), ShellError> {
    let status = Command::new(pipeline::SHELL)
        .arg("-c")
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;
    if !status.success() {
        return Err(ShellError::String(status.to_string()));
    }
    Ok(())
}

/// Per-line command dispatch over a populated registry.
pub struct CommandShell {
    registry: CommandRegistry,
    prompt: String,
}

impl CommandShell {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            prompt: prompt.into(),
        }
    }

    pub fn register(&mut self, handler: Box<dyn CommandHandler>) {
        self.registry.register(handler);
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Dispatches one input line to the terminal.
    pub fn run_command(&self, line: &str) {
        let stdout = io::stdout();
        let mut term = stdout.lock();
        self.dispatch(line, &mut term);
    }

    /// Dispatches one input line, writing all user-visible text to `term`.
    ///
    /// A leading `!` bypasses the registry and runs the remainder verbatim
    /// with inherited streams. Everything else is tokenized, resolved, and
    /// run either directly or through a shell pipeline, followed by a blank
    /// separator line. Failures are printed here; nothing escalates.
    pub fn dispatch(&self, line: &str, term: &mut dyn Write) {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix('!') {
            if let Err(err) = run_shell(rest.trim()) {
                let _ = writeln!(term, "{err}");
            }
            return;
        }

        let words = split_words(line);
        let Some((name, args)) = words.split_first() else {
            return;
        };

        match self.registry.lookup(name) {
            Some(handler) => match split_pipe(args) {
                Some(request) => {
                    if let Err(err) =
                        run_piped(handler, &request.shell_command, request.handler_args, term)
                    {
                        let _ = writeln!(term, "{err}");
                    }
                }
                None => {
                    // The returned status is not surfaced anywhere yet.
                    handler.execute(term, args);
                }
            },
            None => {
                let _ = writeln!(term, "{name}: command not found");
            }
        }
        let _ = writeln!(term);
    }
}
