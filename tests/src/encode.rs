/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use pamqoi_core::options::EncoderOptions;
use pamqoi_pam::PamDecoder;
use pamqoi_qoi::{encode_chunk, inspect, QoiEncoder};

use crate::{decode_slices, hash, hash_pixels, sample_path, to_pam, TestEntry};

fn entries() -> Vec<TestEntry> {
    let file = sample_path().join("encode.json");
    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_pam_to_qoi() {
    let mut error = false;

    for entry in entries() {
        let source = entry.image();
        let expected = hash_pixels(source.pixels());

        let pam = to_pam(&source, entry.alpha);
        let image = PamDecoder::new(&pam).decode().unwrap();

        assert_eq!(
            hash_pixels(image.pixels()),
            expected,
            "PAM round trip changed pixels for {}",
            entry.name
        );

        for &threads in &entry.threads {
            let options = EncoderOptions::default().set_num_threads(threads);
            let encoder = QoiEncoder::new(&image, options);

            let encoded = encoder.encode_to_vec().unwrap();

            if let Err(err) = inspect(&encoded) {
                error = true;
                eprintln!("{} with {} threads is malformed: {:?}\n", entry.name, threads, err);
                continue;
            }

            let chunks = encoder.chunks();
            let serial: Vec<u8> = chunks
                .iter()
                .flat_map(|rows| encode_chunk(&image, rows.clone()))
                .collect();

            if hash(&encoded) != hash(&serial) {
                error = true;
                eprintln!(
                    "{} with {} threads differs from its slices encoded in order\nConfig:{:#?}\n",
                    entry.name, threads, entry
                );
            }

            let decoded = decode_slices(&encoded, &chunks).unwrap();

            if hash_pixels(&decoded) != expected {
                error = true;
                eprintln!(
                    "{} with {} threads does not decode to its source, {} slices\n",
                    entry.name,
                    threads,
                    chunks.len()
                );
            }
        }
    }
    if error {
        panic!("Some encodes failed, check the log above");
    }
}

#[test]
fn repeated_encodes_match() {
    for entry in entries() {
        let image = entry.image();

        for &threads in &entry.threads {
            let options = EncoderOptions::default().set_num_threads(threads);

            let first = QoiEncoder::new(&image, options).encode_to_vec().unwrap();
            let second = QoiEncoder::new(&image, options).encode_to_vec().unwrap();

            assert_eq!(hash(&first), hash(&second), "{} with {threads} threads", entry.name);
        }
    }
}

#[test]
fn one_thread_is_a_plain_stream() {
    for entry in entries() {
        let image = entry.image();
        let options = EncoderOptions::default().set_num_threads(1);

        let encoded = QoiEncoder::new(&image, options).encode_to_vec().unwrap();
        let decoded = decode_slices(&encoded, &[0..image.height()]).unwrap();

        assert_eq!(decoded, image.pixels(), "{}", entry.name);
    }
}
