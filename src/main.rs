// Copyright (C) 2024-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

use std::io::ErrorKind;
use std::process::ExitCode;

use glob::Pattern;
use lexopt::prelude::*;

use statmode::logger::{Level, Logger};
use statmode::ranges::Ranges;
use statmode::{print_constants, print_ctype_table, print_modes};

#[derive(Debug)]
struct Args {
    constants: bool,
    ctype: bool,
    long: bool,
    log_level: Level,
    values: Vec<String>,
}

fn executable() -> String {
    std::env::args().next().unwrap_or_else(|| "statmode".into())
}

fn print_help() {
    let executable = executable();
    println!(
        "Usage:
    {executable} [-l|--long] [-v|--debug] MODE...
    {executable} {{-c|--constants}} [-v] [PATTERN...]
    {executable} {{-k|--ctype}} [RANGES]

Render file modes like ls does. MODE can be given as decimal, octal
(leading 0 or 0o) or hexadecimal (leading 0x) number.

Optional arguments:
  -c, --constants  List the named constants (matching the globbing patterns).
  -k, --ctype      Print the character class table for the bytes in RANGES
                   (e.g. 0-31,127 or 0x41-0x5a; default: all bytes).
  -l, --long       Print file type name, permission bits and file type bits.
  -v, --verbose    Verbose output
  --debug          Debug output
  -h, --help       print help message
  -V, --version    print version number and exit",
    );
}

fn print_version() {
    let name = std::option_env!("CARGO_BIN_NAME").unwrap_or("statmode");
    let version = std::option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    println!("{} {}", name, version);
}

fn parse_args() -> Result<Args, lexopt::Error> {
    let mut constants = 0;
    let mut ctype = 0;
    let mut long = false;
    let mut log_level = Level::Warning;
    let mut values = Vec::new();
    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('c') | Long("constants") => {
                constants = 1;
            }
            Long("debug") => {
                log_level = Level::Debug;
            }
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            Short('k') | Long("ctype") => {
                ctype = 1;
            }
            Short('l') | Long("long") => {
                long = true;
            }
            Short('v') | Long("verbose") => {
                if log_level <= Level::Info {
                    log_level = Level::Info;
                }
            }
            Short('V') | Long("version") => {
                print_version();
                std::process::exit(0);
            }
            // Allow negative numbers to reach the range check.
            Short(c) if c.is_ascii_digit() => {
                let rest = match parser.optional_value() {
                    Some(rest) => rest.string()?,
                    None => String::new(),
                };
                values.push(format!("-{c}{rest}"));
            }
            Value(val) => {
                values.push(val.string()?);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    if constants + ctype > 1 {
        return Err("--constants and --ctype cannot be combined!".into());
    }
    if ctype == 1 && values.len() > 1 {
        return Err(format!("unexpected argument {:?}", values[1]).into());
    }
    if constants + ctype == 0 && values.is_empty() {
        return Err("missing argument MODE".into());
    }

    Ok(Args {
        constants: constants == 1,
        ctype: ctype == 1,
        long,
        log_level,
        values,
    })
}

fn parse_patterns(values: &[String]) -> Result<Vec<Pattern>, String> {
    values
        .iter()
        .map(|s| Pattern::new(s).map_err(|e| format!("invalid pattern '{s}': {e}")))
        .collect()
}

fn main() -> ExitCode {
    let executable = executable();
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: Error: {}", executable, e);
            return ExitCode::from(2);
        }
    };

    let mut stdout = std::io::stdout();
    let mut logger = Logger::new_stderr(args.log_level);
    let result = if args.constants {
        let patterns = match parse_patterns(&args.values) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{}: Error: {}", executable, e);
                return ExitCode::from(2);
            }
        };
        print_constants(&mut stdout, &patterns, &mut logger)
    } else if args.ctype {
        let ranges = match args.values.first() {
            None => Ranges::default(),
            Some(s) => match s.parse::<Ranges>() {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{}: Error: invalid ranges '{}': {}", executable, s, e);
                    return ExitCode::from(2);
                }
            },
        };
        print_ctype_table(&mut stdout, &ranges, &mut logger)
    } else {
        print_modes(&args.values, &mut stdout, args.long, &mut logger)
    };

    if let Err(e) = result {
        match e.kind() {
            ErrorKind::BrokenPipe => {}
            _ => {
                eprintln!("{}: Error: {}", executable, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
