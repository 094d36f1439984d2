/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use ppmtool_core::options::{DecoderOptions, EncoderOptions, DEFAULT_MAX_COLOR};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:  usize,
    pub max_height: usize,
    pub max_color:  u32
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:  0,
            max_height: 0,
            max_color:  DEFAULT_MAX_COLOR
        }
    }
    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
    }
    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions::default().set_max_color(self.max_color)
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();
    let defaults = DecoderOptions::default();

    cmd_options.max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.get_max_width());
    cmd_options.max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.get_max_height());
    cmd_options.max_color = options
        .get_one::<u32>("max-color")
        .copied()
        .unwrap_or(DEFAULT_MAX_COLOR);

    info!(
        "Max dimensions {}x{}, output max color {}",
        cmd_options.max_width, cmd_options.max_height, cmd_options.max_color
    );
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not set up logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
