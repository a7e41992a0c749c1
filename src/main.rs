use colored::*;
use std::process;

mod cli;
mod toml;

fn main() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    match cli::run() {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".bright_red(), e);
            process::exit(e.exit_code());
        }
    }
}
