/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use crate::cmd_args::help_strings::{
    EDGE_DETECTION_HELP, GREYSCALE_HELP, MAX_COLOR_HELP, PROBE_HELP, VIEW_HELP
};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ppmtool")
        .about("Read, transform and write plain text (P3) PPM images")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read the image from")
            .value_parser(value_parser!(std::ffi::OsString))
            .action(ArgAction::Set))
        .arg(Arg::new("stdin")
            .long("stdin")
            .action(ArgAction::SetTrue)
            .help("Read the image from standard input"))
        .group(ArgGroup::new("input")
            .args(["in", "stdin"])
            .required(true)
            .multiple(false))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Output file to write the image to, may be repeated")
            .value_parser(value_parser!(std::ffi::OsString))
            .action(ArgAction::Append))
        .arg(Arg::new("stdout")
            .long("stdout")
            .action(ArgAction::SetTrue)
            .help("Write the image to standard output"))
        .arg(Arg::new("view")
            .long("view")
            .action(ArgAction::SetTrue)
            .help("Open the result in the default image viewer")
            .long_help(VIEW_HELP))
        .arg(Arg::new("max-color")
            .short('c')
            .long("max-color")
            .help("Max color value of the output")
            .long_help(MAX_COLOR_HELP)
            .value_parser(value_parser!(u32).range(0..=65536))
            .default_value("255"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image information and exit")
            .long_help(PROBE_HELP)
            .conflicts_with_all(["out", "stdout", "view", "greyscale", "edge-detection"]))
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
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("greyscale")
            .short('g')
            .long("greyscale")
            .visible_alias("grayscale")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Convert the image to greyscale")
            .long_help(GREYSCALE_HELP))
        .arg(Arg::new("edge-detection")
            .short('e')
            .long("edge-detection")
            .value_name("ALGORITHM")
            .help_heading("OPERATIONS")
            .num_args(0..=1)
            .default_missing_value("sobel")
            .help("Replace the image with its edges")
            .long_help(EDGE_DETECTION_HELP))
        .group(ArgGroup::new("operations")
            .args(["greyscale", "edge-detection"])
            .multiple(true))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn input_is_required_and_exclusive() {
        assert!(create_cmd_args()
            .try_get_matches_from(["ppmtool", "--stdout"])
            .is_err());
        assert!(create_cmd_args()
            .try_get_matches_from(["ppmtool", "-i", "a.ppm", "--stdin", "--stdout"])
            .is_err());
    }

    #[test]
    fn edge_detection_defaults_to_sobel() {
        let matches = create_cmd_args()
            .try_get_matches_from(["ppmtool", "--stdin", "-e", "--stdout"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("edge-detection").map(String::as_str),
            Some("sobel")
        );
    }

    #[test]
    fn operations_can_be_combined() {
        let matches = create_cmd_args()
            .try_get_matches_from(["ppmtool", "--stdin", "-g", "-e", "sobel", "--stdout"])
            .unwrap();
        assert!(matches.get_flag("greyscale"));
        assert_eq!(
            matches.get_one::<String>("edge-detection").map(String::as_str),
            Some("sobel")
        );

        assert!(create_cmd_args()
            .try_get_matches_from(["ppmtool", "--stdin", "-e", "-g", "--stdout"])
            .is_ok());
    }

    #[test]
    fn max_color_range() {
        assert!(create_cmd_args()
            .try_get_matches_from(["ppmtool", "--stdin", "-c", "65537"])
            .is_err());

        let matches = create_cmd_args()
            .try_get_matches_from(["ppmtool", "--stdin", "-c", "65536"])
            .unwrap();
        assert_eq!(matches.get_one::<u32>("max-color"), Some(&65536));
    }
}
