/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In-memory raster image
use core::fmt::{Debug, Display, Formatter};

use crate::pixel::Pixel;

/// Errors from constructing an image out of a pixel buffer
pub enum ImageErrors {
    /// The pixel buffer does not hold `width * height` pixels
    ///
    /// # Arguments
    /// - 1st argument is the number of pixels expected
    /// - 2nd argument is the number of pixels found
    DimensionsMisMatch(usize, usize)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ImageErrors::DimensionsMisMatch(expected, found) => {
                write!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

/// A width by height grid of pixels stored row-major.
///
/// An image is built once and only read afterwards, so it can be
/// shared by reference between encoding threads.
#[derive(Clone, Eq, PartialEq)]
pub struct Image {
    width:  usize,
    height: usize,
    pixels: Vec<Pixel>
}

impl Image {
    /// Create an image with every pixel set to the default pixel
    pub fn new(width: usize, height: usize) -> Image {
        Image {
            width,
            height,
            pixels: vec![Pixel::default(); width.saturating_mul(height)]
        }
    }

    /// Create an image from row-major pixels
    ///
    /// Returns an error if `pixels.len()` isn't `width * height`
    pub fn from_pixels(
        width: usize, height: usize, pixels: Vec<Pixel>
    ) -> Result<Image, ImageErrors> {
        let expected = width.saturating_mul(height);

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(Image {
            width,
            height,
            pixels
        })
    }

    /// Create an image by calling `func(x, y)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Image
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let mut pixels = Vec::with_capacity(width.saturating_mul(height));

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        Image {
            width,
            height,
            pixels
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True if either dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Return the pixel at `(x, y)`
    ///
    /// Coordinates outside the image give the default pixel.
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        if x < self.width && y < self.height {
            return self.pixels[y * self.width + x];
        }
        Pixel::default()
    }

    /// Set the pixel at `(x, y)`, out of bounds writes are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, value: Pixel) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = value;
        }
    }

    /// Return a single row, or an empty slice if `y` is past the last row
    pub fn row(&self, y: usize) -> &[Pixel] {
        if y < self.height {
            let start = y * self.width;
            return &self.pixels[start..start + self.width];
        }
        &[]
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl Debug for Image {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
