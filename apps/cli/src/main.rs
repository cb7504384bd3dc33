//! # McShell Entry Point
//!
//! ```bash
//! # Arrow-key menus on a terminal
//! cargo run -p mcshell-cli
//!
//! # Scripted order through the numbered prompt
//! printf '1\n6\n6\n' | cargo run -p mcshell-cli -- --no-color
//! ```

use mcshell_cli::CommandLine;

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();

    mcshell_cli::init_tracing();
    mcshell_cli::run(&args)?;

    Ok(())
}
