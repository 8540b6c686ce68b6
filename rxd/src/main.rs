//! # rxd
//!
//! A CLI hex dumper producing `xxd`-compatible output.
//!
//! ## Overview
//!
//! rxd is built on top of rxdlib and renders any file (or standard
//! input) as fixed-width dump rows: an 8-digit offset column, grouped
//! hexadecimal octet values, and a printable-character sidebar. The
//! layout is byte-for-byte compatible with `xxd -c <cols> -g <groupsize>`.
//!
//! ## Usage
//!
//! ```bash
//! # Dump a file
//! rxd firmware.bin
//!
//! # Dump standard input
//! cat firmware.bin | rxd
//!
//! # 8 octets per line, grouped in fours
//! rxd -c 8 -g 4 firmware.bin
//!
//! # Upper-case hex letters
//! rxd -u firmware.bin
//! ```

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use rxdlib::{dump_source, DumpOptions, DEFAULT_COLS, DEFAULT_GROUP_SIZE, STDIN_PATH};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("rxd")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("xxd-compatible hex dumper with byte-exact layout")
        .arg(
            Arg::new("infile")
                .help("File to dump, or '-' for standard input")
                .default_value(STDIN_PATH),
        )
        .arg(
            Arg::new("cols")
                .short('c')
                .long("cols")
                .value_parser(clap::value_parser!(usize))
                .default_value("16")
                .help("Format <cols> octets per line. Default 16. Max 256"),
        )
        .arg(
            Arg::new("groupsize")
                .short('g')
                .long("groupsize")
                .value_parser(clap::value_parser!(usize))
                .default_value("2")
                .help("Group output in <groupsize> octet chunks. Default 2"),
        )
        .arg(
            Arg::new("uppercase")
                .short('u')
                .action(ArgAction::SetTrue)
                .help("Use upper-case hex letters. Default is lower-case"),
        )
}

/// Extract layout options from matches, capped the way xxd caps its
/// arguments.
fn extract_options(matches: &ArgMatches) -> DumpOptions {
    DumpOptions::new()
        .cols(
            matches
                .get_one::<usize>("cols")
                .copied()
                .unwrap_or(DEFAULT_COLS),
        )
        .group_size(
            matches
                .get_one::<usize>("groupsize")
                .copied()
                .unwrap_or(DEFAULT_GROUP_SIZE),
        )
        .uppercase(matches.get_flag("uppercase"))
        .normalized()
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let infile = matches
        .get_one::<String>("infile")
        .map(|s| s.as_str())
        .unwrap_or(STDIN_PATH);
    let options = extract_options(matches);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    dump_source(infile, &options, &mut out)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
