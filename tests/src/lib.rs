/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end tests, PAM bytes in and QOI bytes out
//!
//! Test images are described in `tests/encode.json` and generated on the
//! fly, outputs are compared through their xxh3 digests.

use std::ops::Range;
use std::path::{Path, PathBuf};

use pamqoi_core::image::Image;
use pamqoi_core::pixel::Pixel;
use pamqoi_qoi::{Opcode, Opcodes, QoiErrors};
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

#[cfg(test)]
mod encode;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPattern {
    Gradient,
    Solid,
    Noise,
    Stripes
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:    String,
    pub width:   usize,
    pub height:  usize,
    pub pattern: JsonPattern,
    pub alpha:   bool,
    pub threads: Vec<usize>,
    pub comment: Option<String>
}

impl TestEntry {
    /// Generate the image this entry describes
    pub fn image(&self) -> Image {
        let mut seed = 0x2545_f491_u32 ^ (self.width * 31 + self.height) as u32;

        Image::from_fn(self.width, self.height, |x, y| {
            let alpha = if self.alpha { (x * 7 + y) as u8 } else { 255 };

            match self.pattern {
                JsonPattern::Gradient => Pixel::new(x as u8, y as u8, (x + y) as u8, alpha),
                JsonPattern::Solid => Pixel::new(9, 200, 33, if self.alpha { 128 } else { 255 }),
                JsonPattern::Noise => {
                    // xorshift, deterministic across runs
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    let [r, g, b, a] = seed.to_le_bytes();

                    Pixel::new(r, g, b, if self.alpha { a } else { 255 })
                }
                JsonPattern::Stripes => {
                    if (x / 4 + y) % 2 == 0 {
                        Pixel::new(250, 10, 10, alpha)
                    } else {
                        Pixel::new(252, 12, 9, alpha)
                    }
                }
            }
        })
    }
}

/// Write `image` as a PAM file, `RGB_ALPHA` when `alpha` is set
pub fn to_pam(image: &Image, alpha: bool) -> Vec<u8> {
    let (depth, tuple_type) = if alpha { (4, "RGB_ALPHA") } else { (3, "RGB") };

    let mut out = format!(
        "P7\n# written by pamqoi-tests\nWIDTH {}\nHEIGHT {}\nDEPTH {}\nMAXVAL 255\nTUPLTYPE {}\nENDHDR\n",
        image.width(),
        image.height(),
        depth,
        tuple_type
    )
    .into_bytes();

    for px in image.pixels() {
        out.extend_from_slice(&px.to_array()[..depth]);
    }
    out
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    path.join("tests")
}

pub fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}

pub fn hash_pixels(pixels: &[Pixel]) -> u128 {
    let bytes: Vec<u8> = pixels.iter().flat_map(|px| px.to_array()).collect();
    hash(&bytes)
}

fn index_position(px: Pixel) -> usize {
    (usize::from(px.r) * 3 + usize::from(px.g) * 5 + usize::from(px.b) * 7 + usize::from(px.a) * 11)
        % 64
}

/// Decode a stream produced from the row slices in `slices`
///
/// Behaves as a plain QOI decoder that resets its previous pixel and
/// index at the first pixel of every slice, which is where the encoder
/// restarted its own state.
pub fn decode_slices(data: &[u8], slices: &[Range<usize>]) -> Result<Vec<Pixel>, QoiErrors> {
    let mut opcodes = Opcodes::new(data)?;
    let width = opcodes.header().width as usize;
    let size = opcodes.pixels_left();

    let mut restarts: Vec<usize> = slices.iter().map(|rows| rows.start * width).collect();
    restarts.reverse();

    let mut pixels = Vec::with_capacity(size);
    let mut index = [Pixel::new(0, 0, 0, 0); 64];
    let mut px = Pixel::default();

    for opcode in opcodes.by_ref() {
        if restarts.last() == Some(&pixels.len()) {
            restarts.pop();
            index = [Pixel::new(0, 0, 0, 0); 64];
            px = Pixel::default();
        }
        let opcode = opcode?;

        px = match opcode {
            Opcode::Index(slot) => index[usize::from(slot)],
            Opcode::Diff { dr, dg, db } => Pixel::new(
                px.r.wrapping_add(dr as u8),
                px.g.wrapping_add(dg as u8),
                px.b.wrapping_add(db as u8),
                px.a
            ),
            Opcode::Luma { dg, dr_dg, db_dg } => Pixel::new(
                px.r.wrapping_add(dg.wrapping_add(dr_dg) as u8),
                px.g.wrapping_add(dg as u8),
                px.b.wrapping_add(dg.wrapping_add(db_dg) as u8),
                px.a
            ),
            Opcode::Run(_) => px,
            Opcode::Rgb([r, g, b]) => Pixel::new(r, g, b, px.a),
            Opcode::Rgba(value) => Pixel::from(value)
        };
        index[index_position(px)] = px;

        for _ in 0..opcode.pixels() {
            pixels.push(px);
        }
    }
    Ok(pixels)
}
