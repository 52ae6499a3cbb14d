//! Interactive shell binary over the built-in demonstration commands.

use cmdsh::about;
use cmdsh::command::CommandHandler;
use cmdsh::dispatch::CommandShell;
use cmdsh::repl;
use std::io::Write;
use std::{env, error::Error};

#[derive(Debug, Default)]
struct CliArgs {
    show_help: bool,
    show_version: bool,
    prompt: Option<String>,
}

fn print_help() {
    println!(
        "Usage:\n  \
cmdsh [--help|-h] [--version|-V]\n  \
cmdsh [--prompt NAME]\n\n  \
Inside the shell: 'cmd args | shell-pipeline' forwards a command's output\n  \
through bash, and '!shell command' runs bash directly."
    );
}

fn parse_cli_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--help" | "-h" => {
                parsed.show_help = true;
                idx += 1;
            }
            "--version" | "-V" => {
                parsed.show_version = true;
                idx += 1;
            }
            "--prompt" => {
                if idx + 1 >= args.len() {
                    return Err("Missing NAME after --prompt".to_string());
                }
                parsed.prompt = Some(args[idx + 1].clone());
                idx += 2;
            }
            arg => {
                return Err(format!("Unknown option '{arg}'"));
            }
        }
    }
    Ok(parsed)
}

struct EchoCommand;

impl CommandHandler for EchoCommand {
    fn name(&self) -> &str {
        "echo"
    }

    fn execute(&self, out: &mut dyn Write, args: &[String]) -> i32 {
        let _ = writeln!(out, "{}", args.join(" "));
        0
    }
}

struct LinesCommand;

impl CommandHandler for LinesCommand {
    fn name(&self) -> &str {
        "lines"
    }

    fn execute(&self, out: &mut dyn Write, args: &[String]) -> i32 {
        for arg in args {
            let _ = writeln!(out, "{arg}");
        }
        0
    }
}

struct VersionCommand;

impl CommandHandler for VersionCommand {
    fn name(&self) -> &str {
        "version"
    }

    fn execute(&self, out: &mut dyn Write, _args: &[String]) -> i32 {
        let _ = writeln!(out, "{}", about::version_cli_text());
        0
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_cli_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            print_help();
            return Ok(());
        }
    };
    if cli.show_help {
        print_help();
        return Ok(());
    }
    if cli.show_version {
        println!("{}", about::version_cli_text());
        return Ok(());
    }

    let mut shell = CommandShell::new(cli.prompt.unwrap_or_else(|| "cmdsh".to_string()));
    shell.register(Box::new(EchoCommand));
    shell.register(Box::new(LinesCommand));
    shell.register(Box::new(VersionCommand));

    repl::run(&shell)?;
    Ok(())
}
