/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors possible while reading a PAM image
pub enum PamDecodeErrors {
    /// The stream does not start with `P7` and a newline
    NotPam,
    /// A header line is missing or its value cannot be parsed
    MalformedHeader(String),
    /// The header is valid but describes a map we cannot read
    Unsupported(String),
    /// Width or height is zero
    EmptyImage,
    /// Too large dimensions
    ///
    /// # Arguments
    /// - 1st argument is the configured maximum
    /// - 2nd argument is the dimension found
    LargeDimensions(usize, usize),
    /// The body ends before this row is complete
    CorruptBody { row: usize }
}

impl Debug for PamDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotPam => write!(f, "Image is not a portable arbitrary map"),
            Self::MalformedHeader(reason) => {
                write!(f, "Malformed PAM image header, reason: {reason}")
            }
            Self::Unsupported(reason) => write!(f, "Unsupported PAM format, reason: {reason}"),
            Self::EmptyImage => write!(f, "Empty input image"),
            Self::LargeDimensions(expected, found) => {
                write!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::CorruptBody { row } => write!(f, "Corrupt PAM image body, row {row} is truncated")
        }
    }
}

impl Display for PamDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PamDecodeErrors {}
