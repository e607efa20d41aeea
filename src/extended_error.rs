// Copyright (C) 2025-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

use std::io::Error;

pub(crate) trait ExtendedError {
    fn add_prefix<S: AsRef<str>>(self, prefix: S) -> Self;
}

impl ExtendedError for Error {
    fn add_prefix<S: AsRef<str>>(self, prefix: S) -> Self {
        Self::new(self.kind(), format!("{}: {self}", prefix.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::mode::ModeOutOfRange;

    #[test]
    fn test_add_prefix_keeps_kind() {
        let err = Error::from(ModeOutOfRange).add_prefix("0o7777777777777");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "0o7777777777777: mode out of range");
    }
}
