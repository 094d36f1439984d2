/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::debug;
use ppmtool_core::errors::ImageErrors;
use ppmtool_image::workflow::WorkFlow;
use ppmtool_imageprocs::edge_detection::EdgeDetection;
use ppmtool_imageprocs::grayscale::Grayscale;

/// Argument ids which add an operation to the workflow
pub static OPERATIONS: [&str; 2] = ["greyscale", "edge-detection"];

pub fn parse_options(
    workflow: &mut WorkFlow, argument: &str, args: &ArgMatches
) -> Result<(), ImageErrors> {
    if argument == "greyscale" {
        debug!("Added greyscale operation");
        workflow.chain_operations(Box::new(Grayscale::new()));
    } else if argument == "edge-detection" {
        let value = args
            .get_one::<String>(argument)
            .map(String::as_str)
            .unwrap_or("sobel");
        let edge_detection = EdgeDetection::from_name(value)?;

        debug!("Added edge detection with algorithm {:?}", value);
        workflow.chain_operations(Box::new(edge_detection));
    }
    Ok(())
}
