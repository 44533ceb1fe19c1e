/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Instant;

use log::{debug, info};
use pamqoi_core::options::EncoderOptions;
use pamqoi_pam::PamDecoder;
use pamqoi_qoi::QoiEncoder;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CmdErrors;
use crate::file_io::{open_output, read_input, verify_file_paths};

/// Read a PAM image, encode it to QOI and write it out
pub(crate) fn encode_from_cmd(options: &CmdOptions) -> Result<(), CmdErrors> {
    let input = options.input.as_deref();
    let output = options.output.as_deref();

    verify_file_paths(input, output)?;

    let start = Instant::now();

    let data = read_input(input)?;
    let image = PamDecoder::new_with_options(options.decoder_options(), &data).decode()?;

    info!("Read: {}ms", start.elapsed().as_millis());

    let start = Instant::now();

    let sink = open_output(output)?;
    let encoder_options = EncoderOptions::default().set_num_threads(options.threads);
    let written = QoiEncoder::new(&image, encoder_options).encode(sink)?;

    debug!("Wrote {written} bytes");
    info!("Write: {}ms", start.elapsed().as_millis());

    Ok(())
}
