// Copyright (C) 2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! Registry of all named constants, for consumers that look them up by name.

use glob::Pattern;

use crate::filetype::*;
use crate::flags::*;
use crate::permission::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    Decimal,
    Hexadecimal,
    Octal,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Constant {
    pub name: &'static str,
    pub value: u64,
    pub notation: Notation,
    pub description: &'static str,
}

impl Constant {
    /// Format the value in the notation that is common for this constant.
    pub fn formatted_value(&self) -> String {
        match self.notation {
            Notation::Decimal => self.value.to_string(),
            Notation::Hexadecimal => format!("{:#x}", self.value),
            Notation::Octal => format!("{:#o}", self.value),
        }
    }
}

macro_rules! constant {
    ($name:ident, $notation:ident, $description:literal) => {
        Constant {
            name: stringify!($name),
            value: $name as u64,
            notation: Notation::$notation,
            description: $description,
        }
    };
}

static CONSTANTS: [Constant; 51] = [
    constant!(S_IFDIR, Octal, "directory"),
    constant!(S_IFCHR, Octal, "character device"),
    constant!(S_IFBLK, Octal, "block device"),
    constant!(S_IFREG, Octal, "regular file"),
    constant!(S_IFIFO, Octal, "fifo (named pipe)"),
    constant!(S_IFLNK, Octal, "symbolic link"),
    constant!(S_IFSOCK, Octal, "socket file"),
    constant!(S_IFDOOR, Octal, "door"),
    constant!(S_IFPORT, Octal, "event port"),
    constant!(S_IFWHT, Octal, "whiteout"),
    constant!(S_ISUID, Octal, "set UID bit"),
    constant!(S_ISGID, Octal, "set GID bit"),
    constant!(S_ISVTX, Octal, "sticky bit"),
    constant!(S_ENFMT, Octal, "file locking enforcement"),
    constant!(S_IREAD, Octal, "Unix V7 synonym for S_IRUSR"),
    constant!(S_IWRITE, Octal, "Unix V7 synonym for S_IWUSR"),
    constant!(S_IEXEC, Octal, "Unix V7 synonym for S_IXUSR"),
    constant!(S_IRWXU, Octal, "mask for owner permissions"),
    constant!(S_IRUSR, Octal, "read by owner"),
    constant!(S_IWUSR, Octal, "write by owner"),
    constant!(S_IXUSR, Octal, "execute by owner"),
    constant!(S_IRWXG, Octal, "mask for group permissions"),
    constant!(S_IRGRP, Octal, "read by group"),
    constant!(S_IWGRP, Octal, "write by group"),
    constant!(S_IXGRP, Octal, "execute by group"),
    constant!(S_IRWXO, Octal, "mask for others (not in group) permissions"),
    constant!(S_IROTH, Octal, "read by others"),
    constant!(S_IWOTH, Octal, "write by others"),
    constant!(S_IXOTH, Octal, "execute by others"),
    constant!(UF_NODUMP, Hexadecimal, "do not dump file"),
    constant!(UF_IMMUTABLE, Hexadecimal, "file may not be changed"),
    constant!(UF_APPEND, Hexadecimal, "file may only be appended to"),
    constant!(
        UF_OPAQUE,
        Hexadecimal,
        "directory is opaque when viewed through a union stack"
    ),
    constant!(UF_NOUNLINK, Hexadecimal, "file may not be renamed or deleted"),
    constant!(UF_COMPRESSED, Hexadecimal, "macOS: file is hfs-compressed"),
    constant!(UF_HIDDEN, Hexadecimal, "macOS: file should not be displayed"),
    constant!(SF_ARCHIVED, Hexadecimal, "file may be archived"),
    constant!(SF_IMMUTABLE, Hexadecimal, "file may not be changed"),
    constant!(SF_APPEND, Hexadecimal, "file may only be appended to"),
    constant!(SF_NOUNLINK, Hexadecimal, "file may not be renamed or deleted"),
    constant!(SF_SNAPSHOT, Hexadecimal, "file is a snapshot file"),
    constant!(ST_MODE, Decimal, "index of the mode in a stat tuple"),
    constant!(ST_INO, Decimal, "index of the inode number in a stat tuple"),
    constant!(ST_DEV, Decimal, "index of the device in a stat tuple"),
    constant!(ST_NLINK, Decimal, "index of the link count in a stat tuple"),
    constant!(ST_UID, Decimal, "index of the user ID in a stat tuple"),
    constant!(ST_GID, Decimal, "index of the group ID in a stat tuple"),
    constant!(ST_SIZE, Decimal, "index of the size in a stat tuple"),
    constant!(ST_ATIME, Decimal, "index of the access time in a stat tuple"),
    constant!(ST_MTIME, Decimal, "index of the modification time in a stat tuple"),
    constant!(ST_CTIME, Decimal, "index of the change time in a stat tuple"),
];

#[cfg(windows)]
static PLATFORM_CONSTANTS: [Constant; 17] = [
    constant!(FILE_ATTRIBUTE_ARCHIVE, Hexadecimal, "archive"),
    constant!(FILE_ATTRIBUTE_COMPRESSED, Hexadecimal, "compressed"),
    constant!(FILE_ATTRIBUTE_DEVICE, Hexadecimal, "device"),
    constant!(FILE_ATTRIBUTE_DIRECTORY, Hexadecimal, "directory"),
    constant!(FILE_ATTRIBUTE_ENCRYPTED, Hexadecimal, "encrypted"),
    constant!(FILE_ATTRIBUTE_HIDDEN, Hexadecimal, "hidden"),
    constant!(FILE_ATTRIBUTE_INTEGRITY_STREAM, Hexadecimal, "integrity stream"),
    constant!(FILE_ATTRIBUTE_NORMAL, Hexadecimal, "no other attributes set"),
    constant!(FILE_ATTRIBUTE_NOT_CONTENT_INDEXED, Hexadecimal, "not content indexed"),
    constant!(FILE_ATTRIBUTE_NO_SCRUB_DATA, Hexadecimal, "no scrub data"),
    constant!(FILE_ATTRIBUTE_OFFLINE, Hexadecimal, "offline"),
    constant!(FILE_ATTRIBUTE_READONLY, Hexadecimal, "read-only"),
    constant!(FILE_ATTRIBUTE_REPARSE_POINT, Hexadecimal, "reparse point"),
    constant!(FILE_ATTRIBUTE_SPARSE_FILE, Hexadecimal, "sparse file"),
    constant!(FILE_ATTRIBUTE_SYSTEM, Hexadecimal, "system"),
    constant!(FILE_ATTRIBUTE_TEMPORARY, Hexadecimal, "temporary"),
    constant!(FILE_ATTRIBUTE_VIRTUAL, Hexadecimal, "virtual"),
];

#[cfg(not(windows))]
static PLATFORM_CONSTANTS: [Constant; 0] = [];

/// Iterate over all named constants available on this platform.
pub fn constants() -> impl Iterator<Item = &'static Constant> {
    CONSTANTS.iter().chain(PLATFORM_CONSTANTS.iter())
}

/// Look up a named constant.
pub fn lookup(name: &str) -> Option<&'static Constant> {
    constants().find(|constant| constant.name == name)
}

/// Iterate over the named constants matching one of the globbing patterns.
/// All constants match if no pattern is given.
pub fn matching(patterns: &[Pattern]) -> impl Iterator<Item = &'static Constant> + '_ {
    constants().filter(move |constant| {
        patterns.is_empty() || patterns.iter().any(|p| p.matches(constant.name))
    })
}
