/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::ops::Range;
use std::io::Write;

use pamqoi_core::image::Image;
use pamqoi_core::log::{debug, trace};
use pamqoi_core::options::EncoderOptions;
use pamqoi_core::pixel::Pixel;

use crate::constants::{
    QOI_CHANNELS, QOI_COLORSPACE, QOI_HEADER_SIZE, QOI_INDEX_SIZE, QOI_MAGIC, QOI_MAX_RUN,
    QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LONG_RUN, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA, QOI_OP_RUN,
    QOI_PADDING
};
use crate::planner::plan_chunks;
use crate::QoiEncodeErrors;

/// Slot of `pixel` in the index
#[inline(always)]
pub(crate) fn index_position(pixel: Pixel) -> usize {
    (usize::from(pixel.r) * 3
        + usize::from(pixel.g) * 5
        + usize::from(pixel.b) * 7
        + usize::from(pixel.a) * 11)
        % QOI_INDEX_SIZE
}

/// Codec state for a single slice.
///
/// Never shared, every slice starts from a new one.
struct SliceState {
    index:   [Option<Pixel>; QOI_INDEX_SIZE],
    px_prev: Pixel,
    run:     u8
}

impl SliceState {
    /// The slice holding the stream start sees the index a decoder starts
    /// with, all zeroes. Later slices start with an empty index since they
    /// cannot know what came before them.
    fn new(stream_start: bool) -> SliceState {
        let seed = if stream_start {
            Some(Pixel::new(0, 0, 0, 0))
        } else {
            None
        };
        SliceState {
            index:   [seed; QOI_INDEX_SIZE],
            px_prev: Pixel::default(),
            run:     0
        }
    }

    #[inline]
    fn flush_run(&mut self, out: &mut Vec<u8>) {
        if self.run > 0 {
            out.push(QOI_OP_RUN | (self.run - 1));
            self.run = 0;
        }
    }

    fn push(&mut self, px: Pixel, out: &mut Vec<u8>) {
        if px == self.px_prev {
            self.run += 1;

            if self.run == QOI_MAX_RUN {
                out.push(QOI_OP_LONG_RUN);
                self.run = 0;
            }
            return;
        }
        self.flush_run(out);

        let index_pos = index_position(px);

        if self.index[index_pos] == Some(px) {
            out.push(QOI_OP_INDEX | (index_pos as u8));
            self.px_prev = px;
            return;
        }
        self.index[index_pos] = Some(px);

        let px_prev = core::mem::replace(&mut self.px_prev, px);

        if px.a != px_prev.a {
            out.push(QOI_OP_RGBA);
            out.extend_from_slice(&px.to_array());
            return;
        }

        let vr = px.r.wrapping_sub(px_prev.r) as i8;
        let vg = px.g.wrapping_sub(px_prev.g) as i8;
        let vb = px.b.wrapping_sub(px_prev.b) as i8;

        let vg_r = vr.wrapping_sub(vg);
        let vg_b = vb.wrapping_sub(vg);

        if (-2..=1).contains(&vr) && (-2..=1).contains(&vg) && (-2..=1).contains(&vb) {
            out.push(
                QOI_OP_DIFF | ((vr + 2) as u8) << 4 | ((vg + 2) as u8) << 2 | ((vb + 2) as u8)
            );
        } else if (-32..=31).contains(&vg) && (-8..=7).contains(&vg_r) && (-8..=7).contains(&vg_b)
        {
            out.push(QOI_OP_LUMA | ((vg + 32) as u8));
            out.push(((vg_r + 8) as u8) << 4 | ((vg_b + 8) as u8));
        } else {
            out.extend_from_slice(&[QOI_OP_RGB, px.r, px.g, px.b]);
        }
    }
}

fn write_header(image: &Image, out: &mut Vec<u8>) {
    out.extend_from_slice(&QOI_MAGIC.to_be_bytes());
    // dimensions are checked against u32::MAX by the encoder before any
    // slice is encoded
    out.extend_from_slice(&(image.width() as u32).to_be_bytes());
    out.extend_from_slice(&(image.height() as u32).to_be_bytes());
    out.push(QOI_CHANNELS);
    out.push(QOI_COLORSPACE);
}

/// Encode the rows `rows.start..rows.end` of `image` into QOI opcodes.
///
/// Each call starts from fresh codec state, so any number of slices can be
/// encoded independently and concatenated in row order.
///
/// - A slice starting at row 0 is prefixed with the stream header.
/// - A slice with `rows.end + 1 >= height` is suffixed with the end of
///   stream marker.
/// - Rows past the image height are ignored.
///
/// The image width and height are written as 32 bit integers, callers
/// must ensure they fit, [`QoiEncoder`] does.
pub fn encode_chunk(image: &Image, rows: Range<usize>) -> Vec<u8> {
    let (width, height) = image.dimensions();
    let end_y = rows.end.min(height);

    let mut out =
        Vec::with_capacity(end_y.saturating_sub(rows.start) * width * 4 * 2 / 3 + QOI_HEADER_SIZE);

    if rows.start == 0 {
        write_header(image, &mut out);
    }

    let mut state = SliceState::new(rows.start == 0);

    for y in rows.start..end_y {
        for &px in image.row(y) {
            state.push(px, &mut out);
        }
    }
    state.flush_run(&mut out);

    if rows.end.saturating_add(1) >= height {
        out.extend_from_slice(&QOI_PADDING);
    }
    trace!("Rows {:?} encoded to {} bytes", rows, out.len());

    out
}

/// Quite Ok Image Encoder
///
/// Encodes an image by splitting it into row slices which are encoded
/// on separate threads and written in order.
///
/// # Example
/// - Encode a 100 by 100 image on four threads
///
/// ```
/// use pamqoi_core::image::Image;
/// use pamqoi_core::options::EncoderOptions;
/// use pamqoi_core::pixel::Pixel;
/// use pamqoi_qoi::{QoiEncodeErrors, QoiEncoder};
///
/// fn main() -> Result<(), QoiEncodeErrors> {
///     let image = Image::from_fn(100, 100, |x, y| Pixel::rgb((x * y) as u8, 0, 255));
///     let encoder = QoiEncoder::new(&image, EncoderOptions::default().set_num_threads(4));
///     let mut sink = vec![];
///     let written = encoder.encode(&mut sink)?;
///     assert_eq!(written, sink.len());
///     Ok(())
/// }
/// ```
pub struct QoiEncoder<'a> {
    image:   &'a Image,
    options: EncoderOptions
}

impl<'a> QoiEncoder<'a> {
    /// Create a new encoder which will encode the image
    ///
    /// # Arguments
    /// - image: The image to encode
    /// - options: Encoder options, this contains the number of threads to use
    pub const fn new(image: &'a Image, options: EncoderOptions) -> QoiEncoder<'a> {
        QoiEncoder { image, options }
    }

    /// Return the maximum size for which the encoder can
    /// encode the image
    ///
    /// Every pixel costs at most five bytes, the header is written once
    /// and the end marker at most once per slice.
    pub fn max_size(&self) -> usize {
        let slices = self.chunks().len();

        self.image.width() * self.image.height() * 5 + QOI_HEADER_SIZE + slices * QOI_PADDING.len()
    }

    /// The row slices this encoder will encode, in output order
    pub fn chunks(&self) -> Vec<Range<usize>> {
        plan_chunks(self.image.height(), self.options.get_num_threads())
    }

    fn check_dimensions(&self) -> Result<(), QoiEncodeErrors> {
        let (width, height) = self.image.dimensions();

        if self.image.is_empty() {
            return Err(QoiEncodeErrors::EmptyImage);
        }
        if (width as u64) > u64::from(u32::MAX) {
            return Err(QoiEncodeErrors::TooLargeDimensions(width));
        }
        if (height as u64) > u64::from(u32::MAX) {
            return Err(QoiEncodeErrors::TooLargeDimensions(height));
        }
        Ok(())
    }

    /// Encode the image, writing slices to `sink` in row order
    ///
    /// # Returns
    /// - Ok(size): Number of bytes written
    /// - Err: The error encountered during encoding, slices written before
    ///   the error stay written
    pub fn encode<W: Write>(&self, mut sink: W) -> Result<usize, QoiEncodeErrors> {
        self.check_dimensions()?;

        let threads = self.options.get_num_threads();

        if threads < 2 {
            debug!("Encoding on the calling thread");

            let bytes = encode_chunk(self.image, 0..self.image.height());
            sink.write_all(&bytes)?;
            sink.flush()?;

            return Ok(bytes.len());
        }

        let chunks = self.chunks();
        debug!(
            "Encoding {} rows as {} slices with up to {} threads",
            self.image.height(),
            chunks.len(),
            threads
        );

        let written = self.encode_slices(&chunks, &mut sink)?;
        sink.flush()?;

        Ok(written)
    }

    #[cfg(feature = "threads")]
    fn encode_slices<W: Write>(
        &self, chunks: &[Range<usize>], sink: &mut W
    ) -> Result<usize, QoiEncodeErrors> {
        let image = self.image;

        std::thread::scope(|s| -> Result<usize, QoiEncodeErrors> {
            let handles: Vec<_> = chunks
                .iter()
                .cloned()
                .map(|rows| s.spawn(move || encode_chunk(image, rows)))
                .collect();

            let mut written = 0;

            // join in submission order, not completion order
            for (position, handle) in handles.into_iter().enumerate() {
                let bytes = handle
                    .join()
                    .map_err(|_| QoiEncodeErrors::WorkerPanicked(position))?;

                sink.write_all(&bytes)?;
                written += bytes.len();
            }
            Ok(written)
        })
    }

    #[cfg(not(feature = "threads"))]
    fn encode_slices<W: Write>(
        &self, chunks: &[Range<usize>], sink: &mut W
    ) -> Result<usize, QoiEncodeErrors> {
        let mut written = 0;

        for rows in chunks.iter().cloned() {
            let bytes = encode_chunk(self.image, rows);

            sink.write_all(&bytes)?;
            written += bytes.len();
        }
        Ok(written)
    }

    /// Encode the image into a new vector
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, QoiEncodeErrors> {
        let mut sink = Vec::with_capacity(self.image.width() * self.image.height());
        self.encode(&mut sink)?;

        Ok(sink)
    }
}
