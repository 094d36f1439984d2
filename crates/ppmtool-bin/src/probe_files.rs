/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, stdin, stdout, BufReader, Write};

use clap::ArgMatches;
use log::warn;
use ppmtool_core::bytestream::ByteReaderTrait;
use ppmtool_core::errors::ImageErrors;
use ppmtool_image::codecs::ppm::PPMDecoder;
use ppmtool_image::traits::DecoderTrait;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::serde::Metadata;

/// Probe the input, extract metadata, and print it to standard output as JSON.
pub fn probe_input(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    // We'll just be reading headers so the size limits don't matter
    let options = cmd_opts
        .decoder_options()
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    if let Some(in_file) = args.get_one::<OsString>("in") {
        let file = File::open(in_file)?;
        let size = file.metadata()?.len();

        let decoder = PPMDecoder::new_with_options(options, BufReader::new(file));
        print_metadata(in_file.clone(), Some(size), decoder)
    } else {
        let decoder = PPMDecoder::new_with_options(options, stdin().lock());
        print_metadata(OsString::from("-"), None, decoder)
    }
}

fn print_metadata<T: ByteReaderTrait>(
    file: OsString, size: Option<u64>, mut decoder: PPMDecoder<T>
) -> Result<(), ImageErrors> {
    match DecoderTrait::read_headers(&mut decoder)? {
        Some(metadata) => {
            let real_metadata = Metadata::new(file, size, &metadata);
            let mut out = stdout().lock();

            serde_json::to_writer_pretty(&mut out, &real_metadata).map_err(io::Error::from)?;
            writeln!(out)?;
        }
        None => warn!("No metadata found for {:?}", file)
    }
    Ok(())
}
