/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors encountered during encoding
pub enum QoiEncodeErrors {
    /// The image has a zero width or height
    EmptyImage,
    /// Too large dimensions
    /// The dimension cannot be correctly encoded to a 32 bit width or height
    TooLargeDimensions(usize),
    /// A worker thread panicked while encoding the slice with this index
    ///
    /// Slices before it have already been written to the sink
    WorkerPanicked(usize),
    /// Writing to the sink failed
    IoError(std::io::Error)
}

impl Debug for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiEncodeErrors::EmptyImage => {
                write!(f, "Empty input image, width and height must be non-zero")
            }
            QoiEncodeErrors::TooLargeDimensions(found) => {
                write!(
                    f,
                    "Too large image dimensions {found}, QOI can only encode images less than {}",
                    u32::MAX
                )
            }
            QoiEncodeErrors::WorkerPanicked(chunk) => {
                write!(f, "Worker encoding slice {chunk} panicked, output is incomplete")
            }
            QoiEncodeErrors::IoError(err) => {
                write!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for QoiEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QoiEncodeErrors::IoError(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for QoiEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        QoiEncodeErrors::IoError(value)
    }
}

/// Possible errors found while inspecting an encoded stream
pub enum QoiErrors {
    /// The stream does not start with QOI magic bytes `qoif`
    WrongMagicBytes,
    /// The stream doesn't have enough bytes to cover the image
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually left
    InsufficientData(usize, usize),
    /// The header contains an invalid channel number
    ///
    /// The only supported types are `3` and `4`
    UnknownChannels(u8),
    /// The header contains an invalid colorspace value
    ///
    /// The should be `0` or `1`
    UnknownColorspace(u8),
    /// All pixels were covered but the end marker does not follow
    MissingEndMarker,
    /// Bytes follow the end marker
    ///
    /// The argument is the number of extra bytes
    TrailingBytes(usize)
}

impl Debug for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiErrors::WrongMagicBytes => {
                write!(f, "Wrong magic bytes, expected `qoif` as image start")
            }
            QoiErrors::InsufficientData(expected, found) => {
                write!(
                    f,
                    "Insufficient data required {expected} but remaining stream has {found}"
                )
            }
            QoiErrors::UnknownChannels(channel) => {
                write!(f, "Unknown channel number {channel}, expected either 3 or 4")
            }
            QoiErrors::UnknownColorspace(colorspace) => {
                write!(
                    f,
                    "Unknown colorspace number {colorspace}, expected either 0 or 1"
                )
            }
            QoiErrors::MissingEndMarker => {
                write!(f, "Expected the end of stream marker after the last pixel")
            }
            QoiErrors::TrailingBytes(extra) => {
                write!(f, "Found {extra} bytes after the end of stream marker")
            }
        }
    }
}

impl Display for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for QoiErrors {}
