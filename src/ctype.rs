// Copyright (C) 2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! Locale-independent ASCII character classification.
//!
//! The tables are computed at compile time and never consult the current
//! locale. Bytes from 128 to 255 carry no flags and are left alone by the
//! case conversion.

pub const CTF_LOWER: u32 = 0x01;
pub const CTF_UPPER: u32 = 0x02;
pub const CTF_ALPHA: u32 = CTF_LOWER | CTF_UPPER;
pub const CTF_DIGIT: u32 = 0x04;
pub const CTF_ALNUM: u32 = CTF_ALPHA | CTF_DIGIT;
pub const CTF_SPACE: u32 = 0x08;
pub const CTF_XDIGIT: u32 = 0x10;

/// Category flags for every byte value.
pub static CTYPE_TABLE: [u32; 256] = build_ctype_table();
/// Lower case mapping for every byte value.
pub static CTYPE_TOLOWER: [u8; 256] = build_case_table(false);
/// Upper case mapping for every byte value.
pub static CTYPE_TOUPPER: [u8; 256] = build_case_table(true);

/// Single flags in table order together with their names.
pub const CTF_NAMES: [(u32, &str); 5] = [
    (CTF_LOWER, "lower"),
    (CTF_UPPER, "upper"),
    (CTF_DIGIT, "digit"),
    (CTF_SPACE, "space"),
    (CTF_XDIGIT, "xdigit"),
];

const fn build_ctype_table() -> [u32; 256] {
    let mut table = [0; 256];
    let mut i = 0;
    while i < table.len() {
        let c = i as u8;
        let mut flags = 0;
        if matches!(c, b'a'..=b'z') {
            flags |= CTF_LOWER;
        }
        if matches!(c, b'A'..=b'Z') {
            flags |= CTF_UPPER;
        }
        if matches!(c, b'0'..=b'9') {
            flags |= CTF_DIGIT | CTF_XDIGIT;
        }
        if matches!(c, b'a'..=b'f' | b'A'..=b'F') {
            flags |= CTF_XDIGIT;
        }
        // horizontal tab, line feed, vertical tab, form feed, carriage return, space
        if matches!(c, 0x09..=0x0D | b' ') {
            flags |= CTF_SPACE;
        }
        table[i] = flags;
        i += 1;
    }
    table
}

const fn build_case_table(upper: bool) -> [u8; 256] {
    let mut table = [0; 256];
    let mut i = 0;
    while i < table.len() {
        let c = i as u8;
        table[i] = if upper {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        };
        i += 1;
    }
    table
}

/// Reduce a character value to the byte used as table index.
///
/// Signed values are treated like C treats a `char` passed to the
/// `<ctype.h>` functions: only the low 8 bits count.
pub trait CharMask: Copy {
    fn charmask(self) -> u8;
}

impl CharMask for u8 {
    fn charmask(self) -> u8 {
        self
    }
}

impl CharMask for i8 {
    fn charmask(self) -> u8 {
        self as u8
    }
}

impl CharMask for u32 {
    fn charmask(self) -> u8 {
        (self & 0xFF) as u8
    }
}

impl CharMask for i32 {
    fn charmask(self) -> u8 {
        (self & 0xFF) as u8
    }
}

pub fn classify<C: CharMask>(c: C) -> u32 {
    CTYPE_TABLE[usize::from(c.charmask())]
}

pub fn is_lower<C: CharMask>(c: C) -> bool {
    classify(c) & CTF_LOWER != 0
}

pub fn is_upper<C: CharMask>(c: C) -> bool {
    classify(c) & CTF_UPPER != 0
}

pub fn is_alpha<C: CharMask>(c: C) -> bool {
    classify(c) & CTF_ALPHA != 0
}

pub fn is_digit<C: CharMask>(c: C) -> bool {
    classify(c) & CTF_DIGIT != 0
}

pub fn is_xdigit<C: CharMask>(c: C) -> bool {
    classify(c) & CTF_XDIGIT != 0
}

pub fn is_alnum<C: CharMask>(c: C) -> bool {
    classify(c) & CTF_ALNUM != 0
}

pub fn is_space<C: CharMask>(c: C) -> bool {
    classify(c) & CTF_SPACE != 0
}

pub fn to_lower<C: CharMask>(c: C) -> u8 {
    CTYPE_TOLOWER[usize::from(c.charmask())]
}

pub fn to_upper<C: CharMask>(c: C) -> u8 {
    CTYPE_TOUPPER[usize::from(c.charmask())]
}

/// Return the names of the single flags set in `flags`, joined by `|`.
pub fn flag_names(flags: u32) -> String {
    let names: Vec<&str> = CTF_NAMES
        .iter()
        .filter(|(flag, _)| flags & flag != 0)
        .map(|(_, name)| *name)
        .collect();
    if names.is_empty() {
        "-".into()
    } else {
        names.join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_matches_ascii() {
        for c in 0..=255u8 {
            let flags = classify(c);
            assert_eq!(flags & CTF_LOWER != 0, c.is_ascii_lowercase(), "{c:#x}");
            assert_eq!(flags & CTF_UPPER != 0, c.is_ascii_uppercase(), "{c:#x}");
            assert_eq!(flags & CTF_DIGIT != 0, c.is_ascii_digit(), "{c:#x}");
            assert_eq!(flags & CTF_XDIGIT != 0, c.is_ascii_hexdigit(), "{c:#x}");
            // is_ascii_whitespace() does not consider the vertical tab a space.
            assert_eq!(
                flags & CTF_SPACE != 0,
                c.is_ascii_whitespace() || c == 0x0B,
                "{c:#x}"
            );
        }
    }

    #[test]
    fn test_classify_non_ascii_has_no_flags() {
        for c in 128..=255u8 {
            assert_eq!(classify(c), 0);
            assert_eq!(to_lower(c), c);
            assert_eq!(to_upper(c), c);
        }
    }

    #[test]
    fn test_classify_signed_is_masked() {
        assert_eq!(classify(-1i8), classify(0xFFu8));
        assert_eq!(classify(b'a' as i32 + 256), CTF_LOWER | CTF_XDIGIT);
        assert_eq!(classify(-191i32), classify(b'A'));
        assert_eq!(to_upper(0x161u32), b'A');
    }

    #[test]
    fn test_derived_predicates() {
        assert!(is_alpha(b'q'));
        assert!(is_alpha(b'Q'));
        assert!(!is_alpha(b'5'));
        assert!(is_alnum(b'5'));
        assert!(!is_alnum(b'_'));
        assert!(is_xdigit(b'F'));
        assert!(!is_xdigit(b'g'));
        assert!(is_space(b'\x0b'));
        assert!(!is_space(0xA0u8));
        assert!(is_lower(b'z'));
        assert!(!is_upper(b'z'));
        assert!(is_digit(b'0'));
    }

    #[test]
    fn test_case_conversion() {
        for c in 0..=255u8 {
            if c.is_ascii_uppercase() {
                assert_eq!(to_lower(c), c + 32);
                assert_eq!(to_upper(c), c);
            } else if c.is_ascii_lowercase() {
                assert_eq!(to_upper(c), c - 32);
                assert_eq!(to_lower(c), c);
            } else {
                assert_eq!(to_lower(c), c);
                assert_eq!(to_upper(c), c);
            }
            assert_eq!(to_upper(to_upper(c)), to_upper(c));
            assert_eq!(to_lower(to_lower(c)), to_lower(c));
        }
    }

    #[test]
    fn test_flag_names() {
        assert_eq!(flag_names(classify(b'a')), "lower|xdigit");
        assert_eq!(flag_names(classify(b'7')), "digit|xdigit");
        assert_eq!(flag_names(classify(b'\t')), "space");
        assert_eq!(flag_names(classify(b'~')), "-");
    }
}
