// Copyright (C) 2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! BSD file flags (`st_flags`), stat tuple indices and Windows file
//! attributes.

/// Do not dump file
pub const UF_NODUMP: u32 = 0x0000_0001;
/// File may not be changed
pub const UF_IMMUTABLE: u32 = 0x0000_0002;
/// File may only be appended to
pub const UF_APPEND: u32 = 0x0000_0004;
/// Directory is opaque when viewed through a union stack
pub const UF_OPAQUE: u32 = 0x0000_0008;
/// File may not be renamed or deleted
pub const UF_NOUNLINK: u32 = 0x0000_0010;
/// macOS: file is hfs-compressed
pub const UF_COMPRESSED: u32 = 0x0000_0020;
/// macOS: file should not be displayed
pub const UF_HIDDEN: u32 = 0x0000_8000;
/// File may be archived
pub const SF_ARCHIVED: u32 = 0x0001_0000;
/// File may not be changed
pub const SF_IMMUTABLE: u32 = 0x0002_0000;
/// File may only be appended to
pub const SF_APPEND: u32 = 0x0004_0000;
/// File may not be renamed or deleted
pub const SF_NOUNLINK: u32 = 0x0010_0000;
/// File is a snapshot file
pub const SF_SNAPSHOT: u32 = 0x0020_0000;

pub const ST_MODE: usize = 0;
pub const ST_INO: usize = 1;
pub const ST_DEV: usize = 2;
pub const ST_NLINK: usize = 3;
pub const ST_UID: usize = 4;
pub const ST_GID: usize = 5;
pub const ST_SIZE: usize = 6;
pub const ST_ATIME: usize = 7;
pub const ST_MTIME: usize = 8;
pub const ST_CTIME: usize = 9;

// Windows file attributes. The values are fixed by the Win32 API, so they
// are defined everywhere but only carry meaning on Windows.
pub const FILE_ATTRIBUTE_READONLY: u32 = 0x0000_0001;
pub const FILE_ATTRIBUTE_HIDDEN: u32 = 0x0000_0002;
pub const FILE_ATTRIBUTE_SYSTEM: u32 = 0x0000_0004;
pub const FILE_ATTRIBUTE_DIRECTORY: u32 = 0x0000_0010;
pub const FILE_ATTRIBUTE_ARCHIVE: u32 = 0x0000_0020;
pub const FILE_ATTRIBUTE_DEVICE: u32 = 0x0000_0040;
pub const FILE_ATTRIBUTE_NORMAL: u32 = 0x0000_0080;
pub const FILE_ATTRIBUTE_TEMPORARY: u32 = 0x0000_0100;
pub const FILE_ATTRIBUTE_SPARSE_FILE: u32 = 0x0000_0200;
pub const FILE_ATTRIBUTE_REPARSE_POINT: u32 = 0x0000_0400;
pub const FILE_ATTRIBUTE_COMPRESSED: u32 = 0x0000_0800;
pub const FILE_ATTRIBUTE_OFFLINE: u32 = 0x0000_1000;
pub const FILE_ATTRIBUTE_NOT_CONTENT_INDEXED: u32 = 0x0000_2000;
pub const FILE_ATTRIBUTE_ENCRYPTED: u32 = 0x0000_4000;
pub const FILE_ATTRIBUTE_INTEGRITY_STREAM: u32 = 0x0000_8000;
pub const FILE_ATTRIBUTE_VIRTUAL: u32 = 0x0001_0000;
pub const FILE_ATTRIBUTE_NO_SCRUB_DATA: u32 = 0x0002_0000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bsd_flags_are_distinct_bits() {
        let flags = [
            UF_NODUMP,
            UF_IMMUTABLE,
            UF_APPEND,
            UF_OPAQUE,
            UF_NOUNLINK,
            UF_COMPRESSED,
            UF_HIDDEN,
            SF_ARCHIVED,
            SF_IMMUTABLE,
            SF_APPEND,
            SF_NOUNLINK,
            SF_SNAPSHOT,
        ];
        let mut seen = 0;
        for flag in flags {
            assert_eq!(flag.count_ones(), 1, "{flag:#x}");
            assert_eq!(seen & flag, 0, "{flag:#x}");
            seen |= flag;
        }
    }

    #[test]
    fn test_stat_tuple_indices() {
        assert_eq!(
            [ST_MODE, ST_INO, ST_DEV, ST_NLINK, ST_UID, ST_GID, ST_SIZE, ST_ATIME, ST_MTIME, ST_CTIME],
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
    }
}
