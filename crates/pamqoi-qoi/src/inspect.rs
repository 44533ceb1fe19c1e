/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Structural checks for encoded streams
//!
//! This walks the opcode grammar and counts how many pixels each opcode
//! covers, it never reconstructs pixel values.

use pamqoi_core::bytestream::ZByteReader;

use crate::constants::{
    QOI_HEADER_SIZE, QOI_MAGIC, QOI_MASK_2, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB,
    QOI_OP_RGBA, QOI_OP_RUN, QOI_PADDING
};
use crate::QoiErrors;

/// A single opcode read from a stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Opcode {
    /// Pixel from this index slot
    Index(u8),
    /// Small per channel difference from the previous pixel
    Diff { dr: i8, dg: i8, db: i8 },
    /// Green difference plus red and blue differences relative to it
    Luma { dg: i8, dr_dg: i8, db_dg: i8 },
    /// Repeat the previous pixel this many times, 1 to 62
    Run(u8),
    Rgb([u8; 3]),
    Rgba([u8; 4])
}

impl Opcode {
    /// Number of pixels this opcode produces
    pub const fn pixels(&self) -> usize {
        match self {
            Opcode::Run(length) => *length as usize,
            _ => 1
        }
    }
}

/// Header of an encoded stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QoiHeader {
    pub width:      u32,
    pub height:     u32,
    pub channels:   u8,
    pub colorspace: u8
}

/// How many opcodes of each kind a stream holds
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct OpcodeCounts {
    pub index:      usize,
    pub diff:       usize,
    pub luma:       usize,
    pub run:        usize,
    pub rgb:        usize,
    pub rgba:       usize,
    /// Pixels covered by run opcodes
    pub run_pixels: usize
}

impl OpcodeCounts {
    fn add(&mut self, opcode: Opcode) {
        match opcode {
            Opcode::Index(_) => self.index += 1,
            Opcode::Diff { .. } => self.diff += 1,
            Opcode::Luma { .. } => self.luma += 1,
            Opcode::Run(length) => {
                self.run += 1;
                self.run_pixels += usize::from(length);
            }
            Opcode::Rgb(_) => self.rgb += 1,
            Opcode::Rgba(_) => self.rgba += 1
        }
    }

    /// Total number of opcodes
    pub const fn total(&self) -> usize {
        self.index + self.diff + self.luma + self.run + self.rgb + self.rgba
    }
}

/// Summary of a structurally valid stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QoiStreamInfo {
    pub width:      usize,
    pub height:     usize,
    pub channels:   u8,
    pub colorspace: u8,
    pub opcodes:    OpcodeCounts
}

/// Iterator over the opcodes of a stream
///
/// Stops once the opcodes cover `width * height` pixels, the end marker
/// is left unread.
pub struct Opcodes<'a> {
    stream:      ZByteReader<'a>,
    header:      QoiHeader,
    pixels_left: usize,
    failed:      bool
}

impl<'a> Opcodes<'a> {
    /// Read the header of `data` and position the iterator on the first opcode
    pub fn new(data: &'a [u8]) -> Result<Opcodes<'a>, QoiErrors> {
        let mut stream = ZByteReader::new(data);

        let header_bytes = stream
            .get_as_ref(QOI_HEADER_SIZE)
            .ok_or(QoiErrors::InsufficientData(QOI_HEADER_SIZE, data.len()))?;

        let field = |start: usize| {
            u32::from_be_bytes([
                header_bytes[start],
                header_bytes[start + 1],
                header_bytes[start + 2],
                header_bytes[start + 3]
            ])
        };

        if field(0) != QOI_MAGIC {
            return Err(QoiErrors::WrongMagicBytes);
        }
        let header = QoiHeader {
            width:      field(4),
            height:     field(8),
            channels:   header_bytes[12],
            colorspace: header_bytes[13]
        };
        if header.channels != 3 && header.channels != 4 {
            return Err(QoiErrors::UnknownChannels(header.channels));
        }
        if header.colorspace > 1 {
            return Err(QoiErrors::UnknownColorspace(header.colorspace));
        }
        let pixels_left = (header.width as usize).saturating_mul(header.height as usize);

        Ok(Opcodes {
            stream,
            header,
            pixels_left,
            failed: false
        })
    }

    pub const fn header(&self) -> QoiHeader {
        self.header
    }

    /// Pixels not yet covered by an opcode
    pub const fn pixels_left(&self) -> usize {
        self.pixels_left
    }

    fn payload<const N: usize>(&mut self) -> Result<[u8; N], QoiErrors> {
        let remaining = self.stream.remaining();
        let bytes = self
            .stream
            .get_as_ref(N)
            .ok_or(QoiErrors::InsufficientData(N, remaining))?;

        let mut out = [0; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn read_opcode(&mut self) -> Result<Opcode, QoiErrors> {
        let [tag] = self.payload::<1>()?;

        let opcode = match tag {
            QOI_OP_RGB => Opcode::Rgb(self.payload::<3>()?),
            QOI_OP_RGBA => Opcode::Rgba(self.payload::<4>()?),
            _ => match tag & QOI_MASK_2 {
                QOI_OP_INDEX => Opcode::Index(tag & 63),
                QOI_OP_DIFF => Opcode::Diff {
                    dr: ((tag >> 4) & 3) as i8 - 2,
                    dg: ((tag >> 2) & 3) as i8 - 2,
                    db: (tag & 3) as i8 - 2
                },
                QOI_OP_LUMA => {
                    let [next] = self.payload::<1>()?;

                    Opcode::Luma {
                        dg:    (tag & 63) as i8 - 32,
                        dr_dg: (next >> 4) as i8 - 8,
                        db_dg: (next & 15) as i8 - 8
                    }
                }
                // QOI_OP_RUN, all four tags are covered
                _ => Opcode::Run((tag & 63) + 1)
            }
        };
        Ok(opcode)
    }

    /// Consume the iterator and check what follows the last opcode is
    /// exactly the end of stream marker
    fn finish(self) -> Result<(), QoiErrors> {
        let remaining = self.stream.remaining();

        match self.stream.peek_at(0, QOI_PADDING.len()) {
            Some(bytes) if bytes == QOI_PADDING => {
                if remaining > QOI_PADDING.len() {
                    return Err(QoiErrors::TrailingBytes(remaining - QOI_PADDING.len()));
                }
                Ok(())
            }
            _ => Err(QoiErrors::MissingEndMarker)
        }
    }
}

impl<'a> Iterator for Opcodes<'a> {
    type Item = Result<Opcode, QoiErrors>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pixels_left == 0 || self.failed {
            return None;
        }
        match self.read_opcode() {
            Ok(opcode) => {
                self.pixels_left = self.pixels_left.saturating_sub(opcode.pixels());
                Some(Ok(opcode))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Check that `data` is a structurally complete QOI stream
///
/// The magic, header fields and opcode grammar are checked, the opcodes
/// must cover exactly `width * height` pixels and be followed by the end
/// of stream marker and nothing else.
///
/// Opcode values are not checked against each other, a stream can
/// pass this and still decode to different pixels than were encoded.
pub fn inspect(data: &[u8]) -> Result<QoiStreamInfo, QoiErrors> {
    let mut opcodes = Opcodes::new(data)?;
    let mut counts = OpcodeCounts::default();

    for opcode in &mut opcodes {
        counts.add(opcode?);
    }
    let header = opcodes.header();
    opcodes.finish()?;

    Ok(QoiStreamInfo {
        width:      header.width as usize,
        height:     header.height as usize,
        channels:   header.channels,
        colorspace: header.colorspace,
        opcodes:    counts
    })
}

#[cfg(test)]
mod tests {
    use crate::constants::QOI_OP_RUN;
    use crate::{inspect, Opcode, Opcodes, QoiErrors};

    fn stream(width: u32, height: u32, body: &[u8]) -> Vec<u8> {
        let mut out = b"qoif".to_vec();
        out.extend_from_slice(&width.to_be_bytes());
        out.extend_from_slice(&height.to_be_bytes());
        out.extend_from_slice(&[4, 0]);
        out.extend_from_slice(body);
        out.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);
        out
    }

    #[test]
    fn reads_every_opcode_kind() {
        let data = stream(
            8,
            1,
            &[0xFE, 1, 2, 3, 0xFF, 1, 2, 3, 4, 0x05, 0x76, 0xA5, 0xDC, QOI_OP_RUN | 2]
        );
        let opcodes = Opcodes::new(&data)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(opcodes, vec![
            Opcode::Rgb([1, 2, 3]),
            Opcode::Rgba([1, 2, 3, 4]),
            Opcode::Index(5),
            Opcode::Diff {
                dr: 1,
                dg: -1,
                db: 0
            },
            Opcode::Luma {
                dg:    5,
                dr_dg: 5,
                db_dg: 4
            },
            Opcode::Run(3)
        ]);

        let info = inspect(&data).unwrap();
        assert_eq!(info.opcodes.total(), 6);
        assert_eq!(info.opcodes.run_pixels, 3);
    }

    #[test]
    fn zero_index_opcodes_are_not_the_end_marker() {
        // four pixels from slot 0, then the marker
        let data = stream(4, 1, &[0, 0, 0, 0]);
        let info = inspect(&data).unwrap();

        assert_eq!(info.opcodes.index, 4);
    }

    #[test]
    fn errors() {
        assert!(matches!(
            inspect(b"qoif"),
            Err(QoiErrors::InsufficientData(14, 4))
        ));

        let mut data = stream(1, 1, &[0xC0]);
        data[0] = b'x';
        assert!(matches!(inspect(&data), Err(QoiErrors::WrongMagicBytes)));

        let mut data = stream(1, 1, &[0xC0]);
        data[12] = 5;
        assert!(matches!(inspect(&data), Err(QoiErrors::UnknownChannels(5))));

        let mut data = stream(1, 1, &[0xC0]);
        data[13] = 2;
        assert!(matches!(inspect(&data), Err(QoiErrors::UnknownColorspace(2))));

        // two pixels claimed but one covered, the marker is read as opcodes
        let data = stream(2, 1, &[0xC0]);
        assert!(inspect(&data).is_err());

        let mut data = stream(1, 1, &[0xC0]);
        data.push(0);
        assert!(matches!(inspect(&data), Err(QoiErrors::TrailingBytes(1))));

        let mut data = stream(1, 1, &[0xC0]);
        data.pop();
        assert!(matches!(inspect(&data), Err(QoiErrors::MissingEndMarker)));

        // truncated rgb payload
        let data = &stream(3, 1, &[0xFE, 1])[..16];
        assert!(matches!(
            inspect(data),
            Err(QoiErrors::InsufficientData(3, 1))
        ));
    }
}
