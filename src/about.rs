pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_cli_text() -> String {
    format!("cmdsh {VERSION}\nInteractive command shell with pipe forwarding")
}
