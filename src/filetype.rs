// Copyright (C) 2025-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! File type bits of a mode and the `S_IS*` predicates.
//!
//! Only the names of the `S_IF*` constants are defined by POSIX, not their
//! values. The common types use the same values on all platforms, though.
//! Door, event port and whiteout only exist on some platforms and are `0`
//! everywhere else.

use crate::mode::Mode;

#[cfg(unix)]
mod platform {
    use crate::mode::Mode;

    pub const S_IFMT: Mode = libc::S_IFMT;
    pub const S_IFDIR: Mode = libc::S_IFDIR;
    pub const S_IFCHR: Mode = libc::S_IFCHR;
    pub const S_IFBLK: Mode = libc::S_IFBLK;
    pub const S_IFREG: Mode = libc::S_IFREG;
    pub const S_IFIFO: Mode = libc::S_IFIFO;
    pub const S_IFLNK: Mode = libc::S_IFLNK;
    pub const S_IFSOCK: Mode = libc::S_IFSOCK;
}

#[cfg(not(unix))]
mod platform {
    use crate::mode::Mode;

    pub const S_IFMT: Mode = 0o170_000;
    pub const S_IFDIR: Mode = 0o040_000;
    pub const S_IFCHR: Mode = 0o020_000;
    pub const S_IFBLK: Mode = 0o060_000;
    pub const S_IFREG: Mode = 0o100_000;
    pub const S_IFIFO: Mode = 0o010_000;
    pub const S_IFLNK: Mode = 0o120_000;
    pub const S_IFSOCK: Mode = 0o140_000;
}

pub use platform::*;

#[cfg(any(target_os = "illumos", target_os = "solaris"))]
pub const S_IFDOOR: Mode = 0o150_000;
#[cfg(not(any(target_os = "illumos", target_os = "solaris")))]
pub const S_IFDOOR: Mode = 0;

#[cfg(any(target_os = "illumos", target_os = "solaris"))]
pub const S_IFPORT: Mode = 0o160_000;
#[cfg(not(any(target_os = "illumos", target_os = "solaris")))]
pub const S_IFPORT: Mode = 0;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
pub const S_IFWHT: Mode = 0o160_000;
#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
)))]
pub const S_IFWHT: Mode = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharacterDevice,
    Fifo,
    Socket,
    Door,
    EventPort,
    Whiteout,
}

impl FileType {
    /// All file types, common ones first.
    pub const ALL: [FileType; 10] = [
        Self::Regular,
        Self::Directory,
        Self::Symlink,
        Self::BlockDevice,
        Self::CharacterDevice,
        Self::Fifo,
        Self::Socket,
        Self::Door,
        Self::EventPort,
        Self::Whiteout,
    ];

    /// Return the type bits of this file type or `None` if the platform
    /// does not know this file type.
    pub fn bits(self) -> Option<Mode> {
        let bits = match self {
            Self::Regular => S_IFREG,
            Self::Directory => S_IFDIR,
            Self::Symlink => S_IFLNK,
            Self::BlockDevice => S_IFBLK,
            Self::CharacterDevice => S_IFCHR,
            Self::Fifo => S_IFIFO,
            Self::Socket => S_IFSOCK,
            Self::Door => S_IFDOOR,
            Self::EventPort => S_IFPORT,
            Self::Whiteout => S_IFWHT,
        };
        if bits == 0 {
            None
        } else {
            Some(bits)
        }
    }

    pub fn matches(self, mode: Mode) -> bool {
        self.bits().is_some_and(|bits| mode & S_IFMT == bits)
    }

    pub fn from_mode(mode: Mode) -> Option<Self> {
        Self::ALL.into_iter().find(|filetype| filetype.matches(mode))
    }

    /// File type character as used by `ls -l`.
    pub fn char(self) -> u8 {
        match self {
            Self::Regular => b'-',
            Self::Directory => b'd',
            Self::Symlink => b'l',
            Self::BlockDevice => b'b',
            Self::CharacterDevice => b'c',
            Self::Fifo => b'p',
            Self::Socket => b's',
            Self::Door => b'D',
            Self::EventPort => b'P',
            Self::Whiteout => b'w',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Regular => "regular file",
            Self::Directory => "directory",
            Self::Symlink => "symbolic link",
            Self::BlockDevice => "block device",
            Self::CharacterDevice => "character device",
            Self::Fifo => "fifo",
            Self::Socket => "socket",
            Self::Door => "door",
            Self::EventPort => "event port",
            Self::Whiteout => "whiteout",
        }
    }
}

/// Return the file type character of the mode or `?` for unknown types.
pub fn filetype_char(mode: Mode) -> u8 {
    match FileType::from_mode(mode) {
        Some(filetype) => filetype.char(),
        None => b'?',
    }
}

/// Return true if mode is from a directory.
pub fn s_isdir(mode: Mode) -> bool {
    FileType::Directory.matches(mode)
}

/// Return true if mode is from a character special device file.
pub fn s_ischr(mode: Mode) -> bool {
    FileType::CharacterDevice.matches(mode)
}

/// Return true if mode is from a block special device file.
pub fn s_isblk(mode: Mode) -> bool {
    FileType::BlockDevice.matches(mode)
}

/// Return true if mode is from a regular file.
pub fn s_isreg(mode: Mode) -> bool {
    FileType::Regular.matches(mode)
}

/// Return true if mode is from a FIFO (named pipe).
pub fn s_isfifo(mode: Mode) -> bool {
    FileType::Fifo.matches(mode)
}

/// Return true if mode is from a symbolic link.
pub fn s_islnk(mode: Mode) -> bool {
    FileType::Symlink.matches(mode)
}

/// Return true if mode is from a socket.
pub fn s_issock(mode: Mode) -> bool {
    FileType::Socket.matches(mode)
}

/// Return true if mode is from a door.
pub fn s_isdoor(mode: Mode) -> bool {
    FileType::Door.matches(mode)
}

/// Return true if mode is from an event port.
pub fn s_isport(mode: Mode) -> bool {
    FileType::EventPort.matches(mode)
}

/// Return true if mode is from a whiteout.
pub fn s_iswht(mode: Mode) -> bool {
    FileType::Whiteout.matches(mode)
}
