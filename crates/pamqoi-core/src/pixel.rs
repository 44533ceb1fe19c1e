/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single RGBA pixel

/// An 8 bit per channel RGBA pixel.
///
/// The default pixel is opaque black, `(0, 0, 0, 255)`, which is also
/// what sources without an alpha channel get for alpha.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::new(0, 0, 0, 255)
    }
}

impl Pixel {
    /// Create a pixel from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel { r, g, b, a }
    }

    /// Create an opaque pixel
    pub const fn rgb(r: u8, g: u8, b: u8) -> Pixel {
        Pixel::new(r, g, b, 255)
    }

    /// Channels in `[r, g, b, a]` order
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(value: [u8; 4]) -> Self {
        Pixel::new(value[0], value[1], value[2], value[3])
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(value: [u8; 3]) -> Self {
        Pixel::rgb(value[0], value[1], value[2])
    }
}
