/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static GREYSCALE_HELP: &str = "Convert the image to greyscale

Every pixel is replaced by its luma using ITU-R BT.709 weights
0.2126*R + 0.7152*G + 0.0722*B, written to all three channels.";

pub static EDGE_DETECTION_HELP: &str = "Replace the image with its edges

The algorithm name is optional and case insensitive,
when left out sobel is used.

Supported algorithms: sobel";

pub static MAX_COLOR_HELP: &str = "Max color value of the output

Normalized pixel values are multiplied by this and rounded,
e.g 255 gives 8 bit output and 65535 gives 16 bit output.
Must be between 0 and 65536";

pub static PROBE_HELP: &str = "Print image information and exit

Reads the header of the input and prints its dimensions
and max color as JSON, no operations or outputs run.";

pub static VIEW_HELP: &str = "Open the result in the default image viewer

The image is written to a temporary .ppm file which is
then handed to the platform's default application.";
