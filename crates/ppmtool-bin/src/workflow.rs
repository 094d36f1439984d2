/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{stdin, stdout, BufReader, BufWriter, Write};
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use ppmtool_core::errors::ImageErrors;
use ppmtool_image::codecs::ppm::{PPMDecoder, PPMEncoder};
use ppmtool_image::workflow::WorkFlow;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{fill_operation_args, operations};
use crate::show_gui::open_in_default_app;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let out_files: Vec<&OsString> = args
        .get_many::<OsString>("out")
        .map(Iterator::collect)
        .unwrap_or_default();
    let to_stdout = args.get_flag("stdout");
    let view = args.get_flag("view");

    if out_files.is_empty() && !to_stdout && !view {
        return Err(ImageErrors::argument(
            "No output specified, use --out, --stdout or --view"
        ));
    }
    let mut workflow = WorkFlow::new();

    let decoder_options = cmd_opts.decoder_options();

    if let Some(in_file) = args.get_one::<OsString>("in") {
        verify_file_paths(in_file, &out_files)?;

        debug!("Reading from {:?}", in_file);
        let reader = BufReader::new(File::open(in_file)?);
        workflow.add_decoder(Box::new(PPMDecoder::new_with_options(decoder_options, reader)));
    } else {
        debug!("Reading from standard input");
        let reader = stdin().lock();
        workflow.add_decoder(Box::new(PPMDecoder::new_with_options(decoder_options, reader)));
    }

    for argument in fill_operation_args(args) {
        operations::parse_options(&mut workflow, &argument, args)?;
    }

    // output files are only truncated once the image decoded and transformed
    workflow.advance_to_encode()?;

    let encoder_options = cmd_opts.encoder_options();
    let mut encoder: PPMEncoder<Box<dyn Write>> = PPMEncoder::new(encoder_options);
    let mut has_sinks = false;

    for out_file in out_files {
        debug!("Writing to {:?}", out_file);
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(out_file)?;

        encoder.add_sink(Box::new(BufWriter::new(file)));
        has_sinks = true;
    }
    if to_stdout {
        debug!("Writing to standard output");
        encoder.add_sink(Box::new(stdout().lock()));
        has_sinks = true;
    }
    if has_sinks {
        workflow.add_encoder(Box::new(encoder));
    }

    workflow.advance_to_end()?;

    if view {
        if let Some(image) = workflow.get_image() {
            open_in_default_app(image, &encoder_options)?;
        }
    }

    Ok(())
}

fn verify_file_paths(in_file: &OsString, out_files: &[&OsString]) -> Result<(), ImageErrors> {
    let in_path = Path::new(in_file);

    if out_files.iter().any(|out| Path::new(out) == in_path) {
        return Err(ImageErrors::IllegalArgument(format!(
            "Cannot use {in_path:?} as both input and output"
        )));
    }
    if !in_path.exists() {
        return Err(ImageErrors::IllegalArgument(format!(
            "Path {in_path:?}, does not exist"
        )));
    }
    if !in_path.is_file() {
        return Err(ImageErrors::IllegalArgument(format!(
            "Path {in_path:?} is not a file"
        )));
    }
    Ok(())
}
