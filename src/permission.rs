// Copyright (C) 2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! Permission bits of a mode. Their values are defined by POSIX.

use crate::mode::Mode;

/// The portion of the mode that can be set by chmod.
pub const S_IMODE: Mode = 0o7777;

pub const S_ISUID: Mode = 0o4000;
pub const S_ISGID: Mode = 0o2000;
/// File locking enforcement
pub const S_ENFMT: Mode = S_ISGID;
pub const S_ISVTX: Mode = 0o1000;

// Unix V7 synonyms
pub const S_IREAD: Mode = S_IRUSR;
pub const S_IWRITE: Mode = S_IWUSR;
pub const S_IEXEC: Mode = S_IXUSR;

pub const S_IRWXU: Mode = 0o700;
pub const S_IRUSR: Mode = 0o400;
pub const S_IWUSR: Mode = 0o200;
pub const S_IXUSR: Mode = 0o100;

pub const S_IRWXG: Mode = 0o070;
pub const S_IRGRP: Mode = 0o040;
pub const S_IWGRP: Mode = 0o020;
pub const S_IXGRP: Mode = 0o010;

pub const S_IRWXO: Mode = 0o007;
pub const S_IROTH: Mode = 0o004;
pub const S_IWOTH: Mode = 0o002;
pub const S_IXOTH: Mode = 0o001;

fn bit_char(mode: Mode, bit: Mode, c: u8) -> u8 {
    if mode & bit != 0 {
        c
    } else {
        b'-'
    }
}

// Execute character combined with set-uid, set-gid or sticky bit.
// `lower` is used when the class is executable, `upper` when it is not.
fn exec_char(mode: Mode, exec: Mode, special: Mode, lower: u8, upper: u8) -> u8 {
    match (mode & special != 0, mode & exec != 0) {
        (true, true) => lower,
        (true, false) => upper,
        (false, true) => b'x',
        (false, false) => b'-',
    }
}

/// ls-style ASCII representation of the nine permission characters.
pub fn fileperm(mode: Mode) -> [u8; 9] {
    [
        bit_char(mode, S_IRUSR, b'r'),
        bit_char(mode, S_IWUSR, b'w'),
        exec_char(mode, S_IXUSR, S_ISUID, b's', b'S'),
        bit_char(mode, S_IRGRP, b'r'),
        bit_char(mode, S_IWGRP, b'w'),
        exec_char(mode, S_IXGRP, S_ISGID, b's', b'S'),
        bit_char(mode, S_IROTH, b'r'),
        bit_char(mode, S_IWOTH, b'w'),
        exec_char(mode, S_IXOTH, S_ISVTX, b't', b'T'),
    ]
}
