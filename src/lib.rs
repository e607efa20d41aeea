// Copyright (C) 2024-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! stat mode bits, ls-style mode strings and ASCII character classes.
//!
//! The mode functions operate on the platform's `mode_t` ([`Mode`]).
//! Integers from other sources need to be converted with [`to_mode`] or
//! [`parse_mode`] first, which reject values that do not fit.

use std::io::{Result, Write};

use glob::Pattern;

use crate::extended_error::ExtendedError;
use crate::logger::Logger;

#[macro_use]
pub mod logger;

pub mod constants;
pub mod ctype;
mod extended_error;
pub mod filetype;
pub mod flags;
pub mod mode;
pub mod permission;
pub mod ranges;

pub use crate::constants::{constants, lookup, Constant};
pub use crate::filetype::*;
pub use crate::flags::*;
pub use crate::logger::Level;
pub use crate::mode::{
    filemode, filemode_string, parse_mode, s_ifmt, s_imode, to_mode, Mode, ModeOutOfRange,
};
pub use crate::permission::*;
use crate::ranges::Ranges;

fn write_long_format<W: Write>(out: &mut W, mode: Mode) -> Result<()> {
    let filetype = match FileType::from_mode(mode) {
        Some(filetype) => filetype.name(),
        None => "unknown",
    };
    writeln!(
        out,
        "{}\t{}\t{:04o}\t{:06o}",
        filemode_string(mode),
        filetype,
        s_imode(mode),
        s_ifmt(mode)
    )
}

/// Print the ls-style representation of the given modes.
///
/// All modes are parsed before anything is printed. In long format the
/// file type name, the permission bits and the file type bits follow.
pub fn print_modes<S: AsRef<str>, W: Write, LW: Write>(
    values: &[S],
    out: &mut W,
    long: bool,
    logger: &mut Logger<LW>,
) -> Result<()> {
    let mut modes = Vec::with_capacity(values.len());
    for value in values {
        let value = value.as_ref();
        let mode = parse_mode(value).map_err(|e| e.add_prefix(value))?;
        debug!(logger, "parsed '{value}' as {mode:#o}")?;
        modes.push(mode);
    }
    for mode in modes {
        if long {
            write_long_format(out, mode)?;
        } else {
            writeln!(out, "{}", filemode_string(mode))?;
        }
    }
    Ok(())
}

/// Print the named constants that match one of the patterns (or all).
pub fn print_constants<W: Write, LW: Write>(
    out: &mut W,
    patterns: &[Pattern],
    logger: &mut Logger<LW>,
) -> Result<()> {
    let mut count = 0;
    for constant in constants::matching(patterns) {
        writeln!(out, "{}\t{}", constant.name, constant.formatted_value())?;
        count += 1;
    }
    match count {
        0 => warn!(logger, "No constant matches the given patterns.")?,
        1 => info!(logger, "1 constant listed.")?,
        _ => info!(logger, "{count} constants listed.")?,
    }
    Ok(())
}

/// Print the character class table for the bytes in the given ranges.
///
/// Each line contains the byte, its ASCII glyph (or `.`), the class
/// flags, and the lower and upper case mapping.
pub fn print_ctype_table<W: Write, LW: Write>(
    out: &mut W,
    ranges: &Ranges,
    logger: &mut Logger<LW>,
) -> Result<()> {
    for c in ranges.bytes() {
        let glyph = if c.is_ascii_graphic() {
            char::from(c)
        } else {
            '.'
        };
        writeln!(
            out,
            "{c:#04x}\t{glyph}\t{}\t{:#04x}\t{:#04x}",
            ctype::flag_names(ctype::classify(c)),
            ctype::to_lower(c),
            ctype::to_upper(c)
        )?;
    }
    debug!(logger, "character table dumped")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::logger::Level;

    #[test]
    fn test_print_modes() {
        let mut output = Vec::new();
        let mut logger = Logger::new_vec(Level::Warning);
        print_modes(&["0o100644", "040755", "0o104644"], &mut output, false, &mut logger).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "-rw-r--r--\ndrwxr-xr-x\n-rwSr--r--\n"
        );
        assert_eq!(logger.get_logs(), "");
    }

    #[test]
    fn test_print_modes_long_format() {
        let mut output = Vec::new();
        let mut logger = Logger::new_vec(Level::Debug);
        print_modes(&["0o46777", "0o644"], &mut output, true, &mut logger).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            concat!(
                "drwsrwsrwx\tdirectory\t6777\t040000\n",
                "?rw-r--r--\tunknown\t0644\t000000\n"
            )
        );
        assert_eq!(
            logger.get_logs(),
            "parsed '0o46777' as 0o46777\nparsed '0o644' as 0o644\n"
        );
    }

    #[test]
    fn test_print_modes_out_of_range_prints_nothing() {
        let mut output = Vec::new();
        let mut logger = Logger::new_vec(Level::Warning);
        let got = print_modes(&["0o644", "-1"], &mut output, false, &mut logger).unwrap_err();
        assert_eq!(got.kind(), ErrorKind::InvalidInput);
        assert_eq!(got.to_string(), "-1: mode out of range");
        assert!(output.is_empty());
    }

    #[test]
    fn test_print_constants() {
        let mut output = Vec::new();
        let mut logger = Logger::new_vec(Level::Info);
        let patterns = vec![Pattern::new("S_IS*").unwrap()];
        print_constants(&mut output, &patterns, &mut logger).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "S_ISUID\t0o4000\nS_ISGID\t0o2000\nS_ISVTX\t0o1000\n"
        );
        assert_eq!(logger.get_logs(), "3 constants listed.\n");
    }

    #[test]
    fn test_print_constants_single_match() {
        let mut output = Vec::new();
        let mut logger = Logger::new_vec(Level::Info);
        let patterns = vec![Pattern::new("ST_MODE").unwrap()];
        print_constants(&mut output, &patterns, &mut logger).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "ST_MODE\t0\n");
        assert_eq!(logger.get_logs(), "1 constant listed.\n");
    }

    #[test]
    fn test_print_constants_no_match() {
        let mut output = Vec::new();
        let mut logger = Logger::new_vec(Level::Warning);
        let patterns = vec![Pattern::new("XYZ*").unwrap()];
        print_constants(&mut output, &patterns, &mut logger).unwrap();
        assert!(output.is_empty());
        assert_eq!(
            logger.get_logs(),
            "No constant matches the given patterns.\n"
        );
    }

    #[test]
    fn test_print_ctype_table() {
        let mut output = Vec::new();
        let mut logger = Logger::new_vec(Level::Warning);
        let ranges = "9,0x41,0x7a,0xe4".parse::<Ranges>().unwrap();
        print_ctype_table(&mut output, &ranges, &mut logger).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            concat!(
                "0x09\t.\tspace\t0x09\t0x09\n",
                "0x41\tA\tupper|xdigit\t0x61\t0x41\n",
                "0x7a\tz\tlower\t0x7a\t0x5a\n",
                "0xe4\t.\t-\t0xe4\t0xe4\n",
            )
        );
    }
}
