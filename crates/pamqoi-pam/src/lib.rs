/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Arbitrary Map (`P7`) reader
//!
//! Only 8 bit `RGB` and `RGB_ALPHA` maps are supported, which is what the
//! QOI encoder needs. Images are returned as [`Image`](pamqoi_core::image::Image)
//! with alpha set to 255 for `RGB` maps.
//!
//! # Example
//! ```
//! use pamqoi_pam::PamDecoder;
//!
//! let data = b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n\x01\x02\x03";
//! let image = PamDecoder::new(data).decode().unwrap();
//!
//! assert_eq!(image.dimensions(), (1, 1));
//! ```
pub use decoder::*;
pub use errors::*;
pub use pamqoi_core;

mod decoder;
mod errors;
