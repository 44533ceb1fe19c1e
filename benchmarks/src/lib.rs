/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pamqoi_core::image::Image;
use pamqoi_core::pixel::Pixel;

/// A photo-like image, smooth gradients with flat areas and some noise
///
/// Mixes every opcode the encoder can emit.
pub fn sample_image(width: usize, height: usize) -> Image {
    let mut seed = 0x9e37_79b9_u32;

    Image::from_fn(width, height, |x, y| {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;

        if (x / 64 + y / 64) % 3 == 0 {
            // flat tile
            Pixel::rgb(30, 90, 160)
        } else if (x / 64 + y / 64) % 3 == 1 {
            Pixel::rgb((x / 3) as u8, (y / 3) as u8, ((x + y) / 5) as u8)
        } else {
            let noise = (seed & 7) as u8;
            Pixel::new(
                (x as u8).wrapping_add(noise),
                (y as u8).wrapping_add(noise),
                noise,
                255
            )
        }
    })
}

/// Write `image` as an `RGB_ALPHA` PAM file
pub fn sample_pam(image: &Image) -> Vec<u8> {
    let mut out = format!(
        "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        image.width(),
        image.height()
    )
    .into_bytes();

    for px in image.pixels() {
        out.extend_from_slice(&px.to_array());
    }
    out
}
