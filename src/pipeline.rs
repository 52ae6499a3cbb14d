use crate::command::CommandHandler;
use crate::error::ShellError;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

pub const SHELL: &str = "/bin/bash";

/// Runs `handler` with its output forwarded through `shell_command`.
///
/// The consumer shell is spawned with its stdin piped and its stdout/stderr
/// captured, then moved onto a worker thread that drains it to completion.
/// The handler writes into the child's stdin; dropping that writer is the
/// end-of-input signal, and joining the worker is the completion signal.
/// Only after the join does the captured child stdout reach `term`, so the
/// forwarded text is exactly what the handler wrote, transformed. A consumer
/// that fails to run is reported as an error instead of being forwarded.
///
/// Draining on a separate thread matters: a consumer that produces more
/// output than a pipe buffer holds would otherwise stop reading its stdin
/// and deadlock against the still-writing handler.
pub fn run_piped(
    handler: &dyn CommandHandler,
    shell_command: &str,
    args: &[String],
    term: &mut dyn Write,
) -> Result<i32, ShellError> {
    let mut child = Command::new(SHELL)
        .arg("-c")
        .arg(shell_command)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let mut sink = child
        .stdin
        .take()
        .ok_or_else(|| ShellError::String("consumer shell has no stdin".to_string()))?;

    let drain = thread::spawn(move || child.wait_with_output());

    let status = handler.execute(&mut sink, args);
    drop(sink);

    let output = drain
        .join()
        .map_err(|_| ShellError::String("pipeline worker panicked".to_string()))??;

    if !output.status.success() {
        return Err(ShellError::String(output.status.to_string()));
    }

    term.write_all(&output.stdout)?;
    if !output.stderr.is_empty() {
        io::stderr().write_all(&output.stderr)?;
    }
    Ok(status)
}
