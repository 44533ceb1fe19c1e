/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all pamqoi libraries
//!
//! It currently contains
//!
//! - The [`Pixel`](pixel::Pixel) and [`Image`](image::Image) types the
//!   reader produces and the encoder consumes
//! - A bytestream reader used for parsing container headers
//! - Decoder and encoder options
//! - Log macros that forward to the `log` crate when the `log` feature is enabled
//!
//! # Features
//!  - `log`: Route logging macros to the [`log`](https://docs.rs/log) facade,
//!     enabled by default.
#![macro_use]

pub mod bytestream;
pub mod image;
pub mod log;
pub mod options;
pub mod pixel;
