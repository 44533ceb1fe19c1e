/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and encoder options

/// Options for reading images
///
/// These bound how large an image a decoder will accept before
/// allocating memory for it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    max_width:  usize,
    max_height: usize
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  1 << 14,
            max_height: 1 << 14
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}

/// Options for encoding images
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EncoderOptions {
    num_threads: usize
}

impl Default for EncoderOptions {
    /// Use as many threads as the host reports it can run in parallel
    fn default() -> Self {
        Self {
            num_threads: available_threads()
        }
    }
}

impl EncoderOptions {
    /// Set the number of threads allowed for multithreaded encoding
    ///
    /// Anything less than two encodes on the calling thread
    #[must_use]
    pub fn set_num_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }

    /// Return number of threads configured for multithreading
    pub const fn get_num_threads(&self) -> usize {
        self.num_threads
    }
}

/// Number of threads the host can run in parallel, or 1 if unknown
pub fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|x| x.get())
        .unwrap_or(1)
}
