mod def;
include!(concat!(env!("OUT_DIR"), "/rustc_version.rs"));
use clap::Parser;
use std::io::{Read, Write};

pub mod log;
pub mod output;

use crate::toml::{self, Error};
use output::OutputMode;

pub fn run() -> Result<(), Error> {
    let cli = def::Args::parse();

    // Split log strings upon comma, trim them and flatten all in
    // `logs`, remove empty values
    let logs = cli.log.unwrap_or_else(Vec::new);
    let logs = logs
        .iter()
        .flat_map(|log| log.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>();

    log::setup(cli.verbose, logs, cli.log_time).map_err(Error::Usage)?;

    if cli.color && cli.no_color {
        return Err(Error::Usage(
            "Cannot use both --color and --no-color".to_string(),
        ));
    }
    if cli.color {
        colored::control::set_override(true);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.version {
        println!("version: {}", env!("CARGO_PKG_VERSION"));
        println!("Rust: {}", RUSTC_VERSION);
        return Ok(());
    }

    let file = cli
        .file
        .ok_or_else(|| Error::Usage("Missing TOML file".to_string()))?;
    let operation = cli
        .operation
        .ok_or_else(|| Error::Usage("Missing operation".to_string()))?;

    if cli.in_place && file == "-" {
        return Err(Error::Usage(
            "--in-place is invalid when input file is '-' (stdin)".to_string(),
        ));
    }

    ::log::debug!("reading TOML from '{}'", file);
    let text = read_input(&file)?;
    let mut doc = toml::parse_document(&text)?;
    let mode = OutputMode::from_flag(cli.raw);

    match operation {
        def::Operations::Read { path } => {
            if cli.in_place {
                return Err(Error::Usage(
                    "--in-place is invalid with the read operation".to_string(),
                ));
            }
            let path = toml::Path::parse(&path)?;
            ::log::debug!("reading value at '{}'", path);
            let node = toml::read(doc.as_item(), &path)?;
            print!("{}", mode.render_value(node));
            std::io::stdout().flush()?;
        }
        def::Operations::Create { args } => {
            let (path, value) = split_payload(args)?;
            ::log::debug!("creating '{}' = {}", path, value);
            toml::create(&mut doc, &path, &value)?;
            write_output(&mode.render_document(&doc), cli.in_place, &file)?;
        }
        def::Operations::Update { args } => {
            let (path, value) = split_payload(args)?;
            ::log::debug!("updating '{}' = {}", path, value);
            toml::update(&mut doc, &path, &value)?;
            write_output(&mode.render_document(&doc), cli.in_place, &file)?;
        }
        def::Operations::Delete { path } => {
            let path = toml::Path::parse(&path)?;
            ::log::debug!("deleting '{}'", path);
            toml::delete(&mut doc, &path)?;
            write_output(&mode.render_document(&doc), cli.in_place, &file)?;
        }
    }

    Ok(())
}

/// Split the variadic `PATH.. VALUE` positional of create/update.
fn split_payload(mut args: Vec<String>) -> Result<(toml::Path, String), Error> {
    let value = args
        .pop()
        .ok_or_else(|| Error::Usage("Missing value".to_string()))?;
    let path = toml::Path::parse(&args)?;
    Ok((path, value))
}

fn read_input(file: &str) -> Result<String, Error> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
            .map_err(|e| Error::Io(format!("error reading '{}': {}", file, e)))
    }
}

fn write_output(text: &str, in_place: bool, file: &str) -> Result<(), Error> {
    if in_place {
        std::fs::write(file, text)
            .map_err(|e| Error::Io(format!("error writing '{}': {}", file, e)))
    } else {
        print!("{}", text);
        std::io::stdout().flush()?;
        Ok(())
    }
}
