/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;

pub mod global_options;
pub mod operations;

/// Operation arguments passed on the command line,
/// sorted in the order they were specified
pub fn fill_operation_args(options: &ArgMatches) -> Vec<String> {
    let mut map = Vec::with_capacity(4);

    for id in options.ids() {
        if options.try_get_many::<clap::Id>(id.as_str()).is_ok() {
            // ignore groups
            continue;
        }
        if !operations::OPERATIONS.contains(&id.as_str()) {
            continue;
        }
        if options.value_source(id.as_str()) != Some(ValueSource::CommandLine) {
            // ignore things not passed via command line
            continue;
        }
        if let Some(index) = options.index_of(id.as_str()) {
            map.push((index, id.to_string()));
        }
    }
    map.sort_by_key(|(index, _)| *index);
    map.into_iter().map(|(_, argument)| argument).collect()
}
