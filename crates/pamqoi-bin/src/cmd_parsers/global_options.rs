/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::ArgMatches;
use log::{info, warn, Level};
use pamqoi_core::options::{available_threads, DecoderOptions};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CmdOptions {
    pub threads:    usize,
    pub max_width:  usize,
    pub max_height: usize,
    pub input:      Option<OsString>,
    pub output:     Option<OsString>
}

impl CmdOptions {
    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
    }
}

/// Parse the thread count, falling back to the number of CPUs when the
/// argument is absent or not a number
fn parse_threads(options: &ArgMatches) -> usize {
    match options.get_one::<String>("threads") {
        Some(value) => match value.parse::<usize>() {
            Ok(threads) => threads,
            Err(_) => {
                let threads = available_threads();
                warn!("Thread count `{value}` is not a usable number, using {threads} threads");
                threads
            }
        },
        None => available_threads()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let defaults = DecoderOptions::default();

    let cmd_options = CmdOptions {
        threads:    parse_threads(options),
        max_width:  options
            .get_one::<usize>("max-width")
            .copied()
            .unwrap_or(defaults.get_max_width()),
        max_height: options
            .get_one::<usize>("max-height")
            .copied()
            .unwrap_or(defaults.get_max_height()),
        input:      options.get_raw("in").and_then(|mut x| x.next()).map(OsString::from),
        output:     options.get_raw("out").and_then(|mut x| x.next()).map(OsString::from)
    };
    info!("Using {} threads", cmd_options.threads);

    cmd_options
}

fn flag(options: &ArgMatches, name: &str) -> bool {
    options.get_one::<bool>(name).copied().unwrap_or(false)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "warn") {
        Level::Warn
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    };

    if simple_logger::init_with_level(log_level).is_ok() {
        info!("Initialized logger");
        info!("Log level :{}", log_level);
    }
}
