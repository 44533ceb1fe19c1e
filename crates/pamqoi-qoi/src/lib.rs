/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Encoding the Quite Ok Image format in parallel
//!
//! [Format Specification](https://qoiformat.org/qoi-specification.pdf)
//!
//! The image is cut into horizontal slices of rows, each slice is encoded
//! on its own thread with fresh codec state and the slices are written out
//! in row order. The first slice carries the header, the last one the end
//! marker.
//!
//! # Features
//! - `threads`: encode slices on scoped threads, enabled by default.
//!   Without it slices are encoded one after the other on the calling
//!   thread, producing the same bytes.
//! - `log`: log through the `log` crate, enabled by default.
//!
//! # Example
//! ```
//! use pamqoi_core::image::Image;
//! use pamqoi_core::options::EncoderOptions;
//! use pamqoi_core::pixel::Pixel;
//! use pamqoi_qoi::{inspect, QoiEncoder};
//!
//! let image = Image::from_fn(64, 64, |x, y| Pixel::rgb(x as u8, y as u8, 0));
//! let options = EncoderOptions::default().set_num_threads(4);
//!
//! let bytes = QoiEncoder::new(&image, options).encode_to_vec().unwrap();
//! let info = inspect(&bytes).unwrap();
//!
//! assert_eq!((info.width, info.height), (64, 64));
//! ```

pub use encoder::*;
pub use errors::*;
pub use inspect::*;
pub use pamqoi_core;
pub use planner::*;

mod constants;
mod encoder;
mod errors;
mod inspect;
mod planner;
