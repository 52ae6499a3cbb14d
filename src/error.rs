use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ShellError {
    String(String),
    Io(std::io::Error),
    Readline(rustyline::error::ReadlineError),
}

impl Error for ShellError {}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShellError::String(message) => write!(f, "{message}"),
            ShellError::Io(err) => write!(f, "{err}"),
            ShellError::Readline(err) => write!(f, "{err}"),
        }
    }
}

impl From<String> for ShellError {
    fn from(err: String) -> Self {
        ShellError::String(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}
