/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pamqoi_core::bytestream::ZByteReader;
use pamqoi_core::image::Image;
use pamqoi_core::log::{info, trace};
use pamqoi_core::options::DecoderOptions;
use pamqoi_core::pixel::Pixel;

use crate::errors::PamDecodeErrors;

/// Channel layouts the decoder understands
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PamLayout {
    /// `DEPTH 3`, `TUPLTYPE RGB`
    Rgb,
    /// `DEPTH 4`, `TUPLTYPE RGB_ALPHA`
    RgbAlpha
}

impl PamLayout {
    /// Bytes per pixel
    pub const fn depth(self) -> usize {
        match self {
            PamLayout::Rgb => 3,
            PamLayout::RgbAlpha => 4
        }
    }
}

/// An instance of a PAM decoder
pub struct PamDecoder<'a> {
    width:           usize,
    height:          usize,
    layout:          PamLayout,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> PamDecoder<'a> {
    /// Create a new PAM decoder with default options
    ///
    /// # Arguments
    /// - data: PAM encoded image
    ///
    /// # Example
    /// ```
    /// use pamqoi_pam::PamDecoder;
    /// let mut decoder = PamDecoder::new(b"NOT VALID PAM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PamDecoder<'a> {
        PamDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PAM decoder with the specified options
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PamDecoder<'a> {
        PamDecoder {
            width: 0,
            height: 0,
            layout: PamLayout::Rgb,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            options
        }
    }

    /// Read PAM headers and store them in internal state
    ///
    /// After this returns the reader is positioned on the first body byte
    pub fn decode_headers(&mut self) -> Result<(), PamDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if self.reader.get_as_ref(3) != Some(&b"P7\n"[..]) {
            return Err(PamDecodeErrors::NotPam);
        }

        let mut width = None;
        let mut height = None;
        let mut depth = None;
        let mut max_value = None;
        let mut tuple_type = None;
        let mut seen_end = false;

        while let Some(byte) = self.reader.peek_u8() {
            if byte == b'#' {
                skip_to_eol(&mut self.reader);
                continue;
            }
            let token = get_token(&mut self.reader);

            match token {
                b"WIDTH" => width = Some(self.header_integer("WIDTH")?),
                b"HEIGHT" => height = Some(self.header_integer("HEIGHT")?),
                b"DEPTH" => depth = Some(self.header_integer("DEPTH")?),
                b"MAXVAL" => max_value = Some(self.header_integer("MAXVAL")?),
                b"TUPLTYPE" => {
                    let value = get_token(&mut self.reader);

                    if value.is_empty() {
                        return Err(PamDecodeErrors::MalformedHeader(
                            "TUPLTYPE has no value".to_string()
                        ));
                    }
                    tuple_type = Some(value);
                    skip_to_eol(&mut self.reader);
                }
                b"ENDHDR" => {
                    skip_to_eol(&mut self.reader);
                    seen_end = true;
                    break;
                }
                // trailing whitespace at the end of the stream
                b"" => break,
                _ => {
                    trace!(
                        "Skipping unknown header line {}",
                        String::from_utf8_lossy(token)
                    );
                    skip_to_eol(&mut self.reader);
                }
            }
        }
        if !seen_end {
            return Err(PamDecodeErrors::MalformedHeader(
                "ENDHDR not found".to_string()
            ));
        }

        let missing = |name: &str| PamDecodeErrors::MalformedHeader(format!("{name} is missing"));

        let width = width.ok_or_else(|| missing("WIDTH"))?;
        let height = height.ok_or_else(|| missing("HEIGHT"))?;
        let depth = depth.ok_or_else(|| missing("DEPTH"))?;
        let max_value = max_value.ok_or_else(|| missing("MAXVAL"))?;
        let tuple_type = tuple_type.ok_or_else(|| missing("TUPLTYPE"))?;

        if max_value != 255 {
            return Err(PamDecodeErrors::Unsupported(format!(
                "MAXVAL {max_value}, only 255 is supported"
            )));
        }
        self.layout = match (depth, tuple_type) {
            (3, b"RGB") => PamLayout::Rgb,
            (4, b"RGB_ALPHA") => PamLayout::RgbAlpha,
            _ => {
                return Err(PamDecodeErrors::Unsupported(format!(
                    "DEPTH {depth} with TUPLTYPE {}, expected DEPTH 3 with RGB or DEPTH 4 with RGB_ALPHA",
                    String::from_utf8_lossy(tuple_type)
                )))
            }
        };

        if width == 0 || height == 0 {
            return Err(PamDecodeErrors::EmptyImage);
        }
        if width > self.options.get_max_width() {
            return Err(PamDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PamDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        self.width = width;
        self.height = height;

        info!("Width: {}", self.width);
        info!("Height: {}", self.height);
        info!("Layout: {:?}", self.layout);

        self.decoded_headers = true;

        Ok(())
    }

    /// Read an unsigned integer header value, then skip the rest of the line
    fn header_integer(&mut self, name: &str) -> Result<usize, PamDecodeErrors> {
        let token = get_token(&mut self.reader);

        let value = parse_integer(token).ok_or_else(|| {
            PamDecodeErrors::MalformedHeader(format!(
                "{name} value `{}` is not an unsigned integer",
                String::from_utf8_lossy(token)
            ))
        })?;
        skip_to_eol(&mut self.reader);

        Ok(value)
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// Return the channel layout or none if headers aren't decoded
    pub const fn layout(&self) -> Option<PamLayout> {
        if self.decoded_headers {
            return Some(self.layout);
        }
        None
    }

    /// Decode a PAM image
    ///
    /// Each row must be complete, bytes after the last row are ignored.
    pub fn decode(&mut self) -> Result<Image, PamDecodeErrors> {
        self.decode_headers()?;

        let depth = self.layout.depth();
        let row_size = self
            .width
            .checked_mul(depth)
            .ok_or(PamDecodeErrors::LargeDimensions(usize::MAX / depth, self.width))?;
        let body_size = row_size
            .checked_mul(self.height)
            .ok_or(PamDecodeErrors::LargeDimensions(usize::MAX / row_size, self.height))?;

        // check the body before allocating room for it
        if !self.reader.has(body_size) {
            let row = self.reader.remaining() / row_size;
            return Err(PamDecodeErrors::CorruptBody { row });
        }

        let mut image = Image::new(self.width, self.height);

        for y in 0..self.height {
            let row = self
                .reader
                .get_as_ref(row_size)
                .ok_or(PamDecodeErrors::CorruptBody { row: y })?;

            for (x, channels) in row.chunks_exact(depth).enumerate() {
                let pixel = match self.layout {
                    PamLayout::Rgb => Pixel::rgb(channels[0], channels[1], channels[2]),
                    PamLayout::RgbAlpha => {
                        Pixel::new(channels[0], channels[1], channels[2], channels[3])
                    }
                };
                image.set_pixel(x, y, pixel);
            }
        }
        if !self.reader.eof() {
            trace!("Ignoring {} bytes after the last row", self.reader.remaining());
        }
        Ok(image)
    }
}

/// Skip everything up to and including the next newline
fn skip_to_eol(reader: &mut ZByteReader) {
    while !reader.eof() {
        if reader.get_u8() == b'\n' {
            break;
        }
    }
}

/// Skip whitespace, then return all bytes up to the next whitespace.
///
/// The whitespace following the token is left unread, an empty slice
/// means the stream ended.
fn get_token<'a>(reader: &mut ZByteReader<'a>) -> &'a [u8] {
    while let Some(byte) = reader.peek_u8() {
        if !byte.is_ascii_whitespace() {
            break;
        }
        reader.skip(1);
    }
    let mut length = 0;

    while let Some(bytes) = reader.peek_at(length, 1) {
        if bytes[0].is_ascii_whitespace() {
            break;
        }
        length += 1;
    }
    reader.get_as_ref(length).unwrap_or_default()
}

fn parse_integer(token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0_usize, |value, byte| {
        if !byte.is_ascii_digit() {
            return None;
        }
        value
            .checked_mul(10)?
            .checked_add(usize::from(byte - b'0'))
    })
}
