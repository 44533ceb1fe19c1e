/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `qoif`
pub const QOI_MAGIC: u32 = u32::from_be_bytes(*b"qoif");
/// magic + width + height + channels + colorspace
pub const QOI_HEADER_SIZE: usize = 14;
/// End of stream marker, seven zero bytes then a one
pub const QOI_PADDING: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Channels byte, every stream is written as RGBA
pub const QOI_CHANNELS: u8 = 4;
/// Colorspace byte, sRGB with linear alpha
pub const QOI_COLORSPACE: u8 = 0;

pub const QOI_OP_INDEX: u8 = 0x00;
pub const QOI_OP_DIFF: u8 = 0x40;
pub const QOI_OP_LUMA: u8 = 0x80;
pub const QOI_OP_RUN: u8 = 0xC0;
pub const QOI_OP_RGB: u8 = 0xFE;
pub const QOI_OP_RGBA: u8 = 0xFF;

/// Mask for the two bit tags
pub const QOI_MASK_2: u8 = 0xC0;

/// Longest run a single run opcode can carry
pub const QOI_MAX_RUN: u8 = 62;
/// The run opcode for a full run of [`QOI_MAX_RUN`] pixels
pub const QOI_OP_LONG_RUN: u8 = QOI_OP_RUN | (QOI_MAX_RUN - 1);

/// Number of slots in the pixel index
pub const QOI_INDEX_SIZE: usize = 64;
