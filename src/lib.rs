//! Interactive command shell: a registry of named command handlers, per-line
//! dispatch with single-stage pipe forwarding through `/bin/bash`, and a raw
//! shell passthrough escape.

pub mod about;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod pipeline;
pub mod repl;
pub mod tokenizer;
