use std::collections::HashMap;
use std::io::Write;

/// A registered command implementation.
///
/// Ordinary output goes to `out`, never to the process-wide stdout; during
/// piped execution `out` is the stdin of the consumer shell, so a handler
/// needs no awareness of whether it is being forwarded.
pub trait CommandHandler {
    /// Registry key for this command.
    fn name(&self) -> &str;

    /// Runs the command with the residual argument list, returning a status.
    fn execute(&self, out: &mut dyn Write, args: &[String]) -> i32;
}

/// Name to handler mapping, built once at startup and read-only afterwards.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handler` under its declared name. A later registration with
    /// the same name overwrites the earlier one.
    pub fn register(&mut self, handler: Box<dyn CommandHandler>) {
        self.handlers.insert(handler.name().to_string(), handler);
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    /// Registered command names, sorted for the banner and completion.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        name: &'static str,
        text: &'static str,
    }

    impl CommandHandler for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn execute(&self, out: &mut dyn Write, _args: &[String]) -> i32 {
            let _ = writeln!(out, "{}", self.text);
            0
        }
    }

    #[test]
    fn lookup_finds_registered_handler() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(Fixed {
            name: "greet",
            text: "hello",
        }));
        let handler = registry.lookup("greet").expect("handler lookup");
        assert_eq!(handler.name(), "greet");
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn later_registration_overwrites_earlier() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(Fixed {
            name: "greet",
            text: "first",
        }));
        registry.register(Box::new(Fixed {
            name: "greet",
            text: "second",
        }));

        let handler = registry.lookup("greet").expect("handler lookup");
        let mut out = Vec::new();
        handler.execute(&mut out, &[]);
        assert_eq!(String::from_utf8(out).expect("utf8 output"), "second\n");
        assert_eq!(registry.names(), vec!["greet".to_string()]);
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = CommandRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.register(Box::new(Fixed { name, text: "" }));
        }
        assert_eq!(registry.names(), vec!["alpha", "mid", "zeta"]);
    }
}
