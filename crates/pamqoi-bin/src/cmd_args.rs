/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pamqoi")
        .about("Convert a PAM image to QOI, encoding horizontal slices in parallel")
        .arg(Arg::new("threads")
            .help("Number of threads to encode with, defaults to the number of CPUs")
            .long_help("Number of threads to encode with.\nAbsent or non-numeric values use the number of CPUs, values below 2 encode on a single thread.")
            .value_name("THREADS")
            .allow_negative_numbers(true)
            .index(1))
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input PAM file to read, defaults to standard input"))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output QOI file to write, defaults to standard output"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of input images")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of input images")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display timings and image information"))
}
