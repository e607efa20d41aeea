// Copyright (C) 2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

use std::fmt;
use std::io::{Error, ErrorKind, Result};
use std::num::IntErrorKind;

use crate::filetype::{filetype_char, S_IFMT};
use crate::permission::{fileperm, S_IMODE};

/// File mode as returned in `st_mode` by the stat family of calls.
#[cfg(unix)]
pub type Mode = libc::mode_t;
/// File mode as returned in `st_mode` by the stat family of calls.
#[cfg(not(unix))]
pub type Mode = u16;

/// The value does not fit into the platform's mode type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeOutOfRange;

impl fmt::Display for ModeOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("mode out of range")
    }
}

impl std::error::Error for ModeOutOfRange {}

impl From<ModeOutOfRange> for Error {
    fn from(err: ModeOutOfRange) -> Self {
        Error::new(ErrorKind::InvalidInput, err)
    }
}

/// Convert an integer into a mode.
///
/// Negative values and values wider than the platform's `mode_t` are
/// rejected. This is the only fallible step: everything that takes a
/// [`Mode`] is total.
pub fn to_mode<T>(value: T) -> std::result::Result<Mode, ModeOutOfRange>
where
    T: TryInto<Mode>,
{
    value.try_into().map_err(|_| ModeOutOfRange)
}

/// Parse a mode given as decimal, octal (`0o` or leading `0`) or
/// hexadecimal (`0x`) number.
///
/// A sign is only accepted in front of the radix prefix. Negative numbers
/// other than zero are out of range.
pub fn parse_mode(s: &str) -> Result<Mode> {
    let invalid = || Error::new(ErrorKind::InvalidInput, format!("Invalid mode value '{s}'"));
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (digits, radix) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or(unsigned.strip_prefix("0X"))
    {
        (hex, 16)
    } else if let Some(octal) = unsigned
        .strip_prefix("0o")
        .or(unsigned.strip_prefix("0O"))
    {
        (octal, 8)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (&unsigned[1..], 8)
    } else {
        (unsigned, 10)
    };
    // from_str_radix accepts a sign of its own.
    if digits.starts_with(['+', '-']) {
        return Err(invalid());
    }
    let value = match u128::from_str_radix(digits, radix) {
        Ok(value) => value,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Err(ModeOutOfRange.into()),
        Err(_) => return Err(invalid()),
    };
    if negative && value != 0 {
        return Err(ModeOutOfRange.into());
    }
    Ok(to_mode(value)?)
}

/// Return the portion of the file's mode that can be set by chmod.
pub fn s_imode(mode: Mode) -> Mode {
    mode & S_IMODE
}

/// Return the portion of the file's mode that describes the file type.
pub fn s_ifmt(mode: Mode) -> Mode {
    mode & S_IFMT
}

/// ls-style ASCII representation of the mode, e.g. `-rwxr-xr-x`.
pub fn filemode(mode: Mode) -> [u8; 10] {
    let mut buf = [0; 10];
    buf[0] = filetype_char(mode);
    buf[1..].copy_from_slice(&fileperm(mode));
    buf
}

/// Convert a file's mode to a string of the form `-rwxrwxrwx`.
pub fn filemode_string(mode: Mode) -> String {
    filemode(mode).iter().map(|&c| char::from(c)).collect()
}
