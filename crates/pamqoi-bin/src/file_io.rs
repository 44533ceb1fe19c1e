/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{stdin, stdout, BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use crate::errors::CmdErrors;

/// Read the whole input, from a file or standard input
pub fn read_input(path: Option<&OsStr>) -> Result<Vec<u8>, CmdErrors> {
    let mut buf = Vec::with_capacity(1 << 20);

    match path {
        Some(path) => {
            debug!("Reading {:?} to memory", path);
            File::open(path)?.read_to_end(&mut buf)?;
        }
        None => {
            debug!("Reading standard input to memory");
            stdin().lock().read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

/// Open the output, a file or standard output, behind a buffered writer
pub fn open_output(path: Option<&OsStr>) -> Result<Box<dyn Write>, CmdErrors> {
    match path {
        Some(path) => {
            debug!("Writing to {:?}", path);
            let file = OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)?;

            Ok(Box::new(BufWriter::new(file)))
        }
        None => {
            debug!("Writing to standard output");
            Ok(Box::new(BufWriter::new(stdout().lock())))
        }
    }
}

pub fn verify_file_paths(input: Option<&OsStr>, output: Option<&OsStr>) -> Result<(), CmdErrors> {
    if let (Some(input), Some(output)) = (input, output) {
        if input == output {
            return Err(CmdErrors::GenericString(format!(
                "Cannot use {:?} as both input and output",
                input
            )));
        }
        if !Path::new(input).exists() {
            return Err(CmdErrors::GenericString(format!(
                "Path {:?}, does not exist",
                input
            )));
        }
    }
    Ok(())
}
