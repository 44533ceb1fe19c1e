/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pamqoi_pam::pamqoi_core::options::DecoderOptions;
use pamqoi_pam::pamqoi_core::pixel::Pixel;
use pamqoi_pam::{PamDecodeErrors, PamDecoder, PamLayout};

fn pam(header: &str, body: &[u8]) -> Vec<u8> {
    let mut out = header.as_bytes().to_vec();
    out.extend_from_slice(body);
    out
}

const RGB_HEADER: &str = "P7\nWIDTH 2\nHEIGHT 2\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n";

#[test]
fn decode_rgb() {
    let data = pam(RGB_HEADER, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    let mut decoder = PamDecoder::new(&data);
    let image = decoder.decode().unwrap();

    assert_eq!(decoder.dimensions(), Some((2, 2)));
    assert_eq!(decoder.layout(), Some(PamLayout::Rgb));
    assert_eq!(image.pixels(), &[
        Pixel::new(1, 2, 3, 255),
        Pixel::new(4, 5, 6, 255),
        Pixel::new(7, 8, 9, 255),
        Pixel::new(10, 11, 12, 255)
    ]);
}

#[test]
fn decode_rgb_alpha_with_comments() {
    let header = "P7\n# made by hand\nWIDTH 1\n\n  HEIGHT\t2\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nCOLOR fancy\nENDHDR\n";
    let data = pam(header, &[1, 2, 3, 4, 5, 6, 7, 8, 99]);
    let image = PamDecoder::new(&data).decode().unwrap();

    assert_eq!(image.dimensions(), (1, 2));
    assert_eq!(image.pixel(0, 1), Pixel::new(5, 6, 7, 8));
}

#[test]
fn headers_are_readable_before_the_body() {
    let data = pam(RGB_HEADER, &[]);
    let mut decoder = PamDecoder::new(&data);

    assert_eq!(decoder.dimensions(), None);
    decoder.decode_headers().unwrap();
    assert_eq!(decoder.dimensions(), Some((2, 2)));
    assert!(matches!(
        decoder.decode(),
        Err(PamDecodeErrors::CorruptBody { row: 0 })
    ));
}

#[test]
fn wrong_prologue() {
    for data in [&b"P6\n1 1 255\n"[..], b"P7 WIDTH 1", b"P7", b""] {
        assert!(matches!(
            PamDecoder::new(data).decode(),
            Err(PamDecodeErrors::NotPam)
        ));
    }
}

#[test]
fn malformed_headers() {
    let cases = [
        // no ENDHDR
        "P7\nWIDTH 2\nHEIGHT 2\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\n",
        // missing HEIGHT
        "P7\nWIDTH 2\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n",
        // not a number
        "P7\nWIDTH two\nHEIGHT 2\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n",
        // missing TUPLTYPE
        "P7\nWIDTH 2\nHEIGHT 2\nDEPTH 3\nMAXVAL 255\nENDHDR\n"
    ];
    for header in cases {
        let result = PamDecoder::new(header.as_bytes()).decode();

        assert!(
            matches!(result, Err(PamDecodeErrors::MalformedHeader(_))),
            "{header:?}"
        );
    }
}

#[test]
fn unsupported_formats() {
    let cases = [
        "P7\nWIDTH 1\nHEIGHT 1\nDEPTH 3\nMAXVAL 65535\nTUPLTYPE RGB\nENDHDR\n",
        "P7\nWIDTH 1\nHEIGHT 1\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n",
        "P7\nWIDTH 1\nHEIGHT 1\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        "P7\nWIDTH 1\nHEIGHT 1\nDEPTH 1\nMAXVAL 255\nTUPLTYPE GRAYSCALE\nENDHDR\n"
    ];
    for header in cases {
        let data = pam(header, &[0; 16]);
        let result = PamDecoder::new(&data).decode();

        assert!(
            matches!(result, Err(PamDecodeErrors::Unsupported(_))),
            "{header:?}"
        );
    }
}

#[test]
fn empty_image() {
    let data = b"P7\nWIDTH 0\nHEIGHT 4\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n";

    assert!(matches!(
        PamDecoder::new(data).decode(),
        Err(PamDecodeErrors::EmptyImage)
    ));
}

#[test]
fn truncated_body() {
    let data = pam(RGB_HEADER, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

    assert!(matches!(
        PamDecoder::new(&data).decode(),
        Err(PamDecodeErrors::CorruptBody { row: 1 })
    ));
}

#[test]
fn large_header_with_missing_body() {
    let data = b"P7\nWIDTH 65536\nHEIGHT 65536\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n";
    let options = DecoderOptions::default()
        .set_max_width(1 << 17)
        .set_max_height(1 << 17);

    assert!(matches!(
        PamDecoder::new_with_options(options, data).decode(),
        Err(PamDecodeErrors::CorruptBody { row: 0 })
    ));
}

#[test]
fn large_header_with_short_body() {
    let mut data =
        b"P7\nWIDTH 4096\nHEIGHT 4096\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n".to_vec();
    // two full rows and part of a third
    data.resize(data.len() + 4096 * 4 * 2 + 100, 7);

    assert!(matches!(
        PamDecoder::new(&data).decode(),
        Err(PamDecodeErrors::CorruptBody { row: 2 })
    ));
}

#[test]
fn dimension_limits() {
    let data = pam(RGB_HEADER, &[0; 12]);
    let options = DecoderOptions::default().set_max_width(1);

    assert!(matches!(
        PamDecoder::new_with_options(options, &data).decode(),
        Err(PamDecodeErrors::LargeDimensions(1, 2))
    ));
}
