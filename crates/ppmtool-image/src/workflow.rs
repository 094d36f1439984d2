/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A decode, operations, encode pipeline
//!
//! A workflow holds a single decoder (or an already decoded image),
//! a list of operations run in insertion order and a list of encoders.
//!
//! # Example
//! ```
//! use ppmtool_core::options::{DecoderOptions, EncoderOptions};
//! use ppmtool_image::codecs::ppm::{PPMDecoder, PPMEncoder};
//! use ppmtool_image::workflow::WorkFlow;
//!
//! let decoder = PPMDecoder::new_with_options(DecoderOptions::default(), &b"P3 1 1 1 1 0 1"[..]);
//! let encoder = PPMEncoder::<Vec<u8>>::new_with_sinks(EncoderOptions::default(), vec![vec![]]);
//!
//! let mut workflow = WorkFlow::new();
//! workflow.chain_decoder(Box::new(decoder)).chain_encoder(Box::new(encoder));
//! workflow.advance_to_end().unwrap();
//!
//! assert_eq!(workflow.get_image().unwrap().get_dimensions(), (1, 1));
//! ```
use std::time::Instant;

use log::{debug, info};
use ppmtool_core::errors::ImageErrors;

use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait, OperationsTrait};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum WorkFlowState {
    Initialized,
    Decode,
    Operations,
    Encode,
    Finished
}

impl WorkFlowState {
    const fn next(self) -> Option<Self> {
        match self {
            WorkFlowState::Initialized => Some(WorkFlowState::Decode),
            WorkFlowState::Decode => Some(WorkFlowState::Operations),
            WorkFlowState::Operations => Some(WorkFlowState::Encode),
            WorkFlowState::Encode => Some(WorkFlowState::Finished),
            WorkFlowState::Finished => None
        }
    }
}

/// A workflow that decodes an image, runs operations on
/// it and encodes the result
pub struct WorkFlow<'a> {
    state:      Option<WorkFlowState>,
    decode:     Option<Box<dyn DecoderTrait + 'a>>,
    image:      Option<Image>,
    operations: Vec<Box<dyn OperationsTrait + 'a>>,
    encode:     Vec<Box<dyn EncoderTrait + 'a>>
}

impl<'a> WorkFlow<'a> {
    /// Create a new empty workflow
    #[allow(clippy::new_without_default)]
    pub fn new() -> WorkFlow<'a> {
        WorkFlow {
            state:      Some(WorkFlowState::Initialized),
            decode:     None,
            image:      None,
            operations: vec![],
            encode:     vec![]
        }
    }
    /// Add a single encoder for this image
    ///
    /// One can define multiple encoders for a single decoder
    /// the workflow will run all encoders in order of definition
    pub fn add_encoder(&mut self, encoder: Box<dyn EncoderTrait + 'a>) {
        self.encode.push(encoder);
    }
    /// Add a single decoder for this image, replacing any previous one
    pub fn add_decoder(&mut self, decoder: Box<dyn DecoderTrait + 'a>) {
        self.decode = Some(decoder);
    }
    /// Start from an already decoded image
    ///
    /// The decode step is skipped if no decoder is present
    pub fn add_image(&mut self, image: Image) {
        self.image = Some(image);
    }
    /// Add an operation, operations run in the order they were added
    pub fn add_operation(&mut self, operation: Box<dyn OperationsTrait + 'a>) {
        self.operations.push(operation);
    }
    pub fn chain_encoder(&mut self, encoder: Box<dyn EncoderTrait + 'a>) -> &mut WorkFlow<'a> {
        self.add_encoder(encoder);
        self
    }
    pub fn chain_decoder(&mut self, decoder: Box<dyn DecoderTrait + 'a>) -> &mut WorkFlow<'a> {
        self.add_decoder(decoder);
        self
    }
    pub fn chain_operations(
        &mut self, operation: Box<dyn OperationsTrait + 'a>
    ) -> &mut WorkFlow<'a> {
        self.add_operation(operation);
        self
    }
    /// Return the image held by this workflow, if any
    pub fn get_image(&self) -> Option<&Image> {
        self.image.as_ref()
    }
    /// Remove the image from this workflow
    pub fn take_image(&mut self) -> Option<Image> {
        self.image.take()
    }
    /// Return true if every state has run
    pub const fn is_finished(&self) -> bool {
        self.state.is_none()
    }
    /// Advance the workflow one state forward
    ///
    /// The workflow advance is as follows
    ///
    /// 1. Decode
    /// 2. One or more operations [ all ran at once]
    /// 3. One or more encodes [all ran at once]
    /// 4. Finish
    ///
    /// Calling `Workflow::advance()` will run one of this operation.
    /// On error the workflow stays in the state that failed.
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        debug!("Current state: {:?}", state);

        match state {
            WorkFlowState::Initialized => {}
            WorkFlowState::Decode => {
                if let Some(decoder) = self.decode.as_mut() {
                    let start = Instant::now();

                    self.image = Some(decoder.decode()?);

                    info!(
                        "Finished decoding with `{}` in {} ms",
                        decoder.name(),
                        start.elapsed().as_millis()
                    );
                } else if self.image.is_none() {
                    return Err(ImageErrors::argument(
                        "No decoder or image present for this workflow"
                    ));
                }
            }
            WorkFlowState::Operations => {
                let image = self.image.as_mut().ok_or_else(no_image)?;

                for operation in &self.operations {
                    let operation_name = operation.name();

                    info!("Running {}", operation_name);

                    let start = Instant::now();

                    operation.execute(image)?;

                    info!(
                        "Finished running `{operation_name}` in {} ms",
                        start.elapsed().as_millis()
                    );
                }
            }
            WorkFlowState::Encode => {
                let image = self.image.as_ref().ok_or_else(no_image)?;

                for encoder in self.encode.iter_mut() {
                    let encoder_name = encoder.name();

                    info!("Running {}", encoder_name);

                    let start = Instant::now();

                    encoder.encode(image)?;

                    info!(
                        "Finished running `{encoder_name}` in {} ms",
                        start.elapsed().as_millis()
                    );
                }
            }
            WorkFlowState::Finished => {
                info!("Finished operations for this workflow");
            }
        }
        self.state = state.next();
        Ok(())
    }
    /// Run the decoder and every operation, stopping
    /// right before the encoders
    ///
    /// Encoders added after this returns still run on the next advance,
    /// so sinks can be opened only once the image is known to be valid.
    pub fn advance_to_encode(&mut self) -> Result<(), ImageErrors> {
        while matches!(
            self.state,
            Some(WorkFlowState::Initialized | WorkFlowState::Decode | WorkFlowState::Operations)
        ) {
            self.advance()?;
        }
        Ok(())
    }
    /// Advance the operations in this workflow up until
    /// we finish.
    ///
    /// This will run a decoder, all operations and all encoders
    /// for this particular workflow
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}

fn no_image() -> ImageErrors {
    ImageErrors::argument("No image present for this workflow")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ppmtool_core::color::Color;
    use ppmtool_core::errors::{ErrorKind, ImageErrors};
    use ppmtool_core::options::EncoderOptions;

    use crate::codecs::ppm::{PPMDecoder, PPMEncoder};
    use crate::image::Image;
    use crate::traits::OperationsTrait;
    use crate::workflow::WorkFlow;

    /// Records its name so tests can see the order operations ran in
    struct Record {
        name: &'static str,
        log:  Rc<RefCell<Vec<&'static str>>>
    }

    impl OperationsTrait for Record {
        fn name(&self) -> &'static str {
            self.name
        }
        fn execute_impl(&self, _: &mut Image) -> Result<(), ImageErrors> {
            self.log.borrow_mut().push(self.name);
            Ok(())
        }
    }

    struct Fail;

    impl OperationsTrait for Fail {
        fn name(&self) -> &'static str {
            "fail"
        }
        fn execute_impl(&self, _: &mut Image) -> Result<(), ImageErrors> {
            Err(ImageErrors::argument("always fails"))
        }
    }

    #[test]
    fn operations_run_in_insertion_order() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut workflow = WorkFlow::new();

        workflow.add_image(Image::new(2, 2));
        for name in ["second", "first", "third"] {
            workflow.add_operation(Box::new(Record {
                name,
                log: log.clone()
            }));
        }
        workflow.advance_to_end().unwrap();

        assert!(workflow.is_finished());
        assert_eq!(*log.borrow(), ["second", "first", "third"]);
    }

    #[test]
    fn missing_input_is_an_error() {
        let mut workflow = WorkFlow::new();
        let err = workflow.advance_to_end().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(!workflow.is_finished());
    }

    #[test]
    fn decode_errors_stop_the_workflow() {
        let mut workflow = WorkFlow::new();
        workflow.add_decoder(Box::new(PPMDecoder::new(&b"P6 1 1 255"[..])));

        let err = workflow.advance_to_end().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(workflow.get_image().is_none());
    }

    #[test]
    fn operation_errors_stop_before_encoding() {
        let mut out = vec![];
        {
            let mut workflow = WorkFlow::new();
            workflow
                .chain_decoder(Box::new(PPMDecoder::new(&b"P3 1 1 1 1 1 1"[..])))
                .chain_operations(Box::new(Fail))
                .chain_encoder(Box::new(PPMEncoder::new_with_sinks(
                    EncoderOptions::default(),
                    vec![&mut out]
                )));

            assert!(workflow.advance_to_end().is_err());
            assert_eq!(
                workflow.get_image().unwrap().get_color(0, 0).unwrap(),
                Color::WHITE
            );
        }
        assert!(out.is_empty());
    }

    #[test]
    fn encoders_can_be_added_after_operations() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut out = vec![];
        {
            let mut workflow = WorkFlow::new();
            workflow
                .chain_decoder(Box::new(PPMDecoder::new(&b"P3 1 1 1 0 1 0"[..])))
                .chain_operations(Box::new(Record {
                    name: "only",
                    log:  log.clone()
                }));
            workflow.advance_to_encode().unwrap();

            assert_eq!(*log.borrow(), ["only"]);
            assert!(!workflow.is_finished());

            workflow.add_encoder(Box::new(PPMEncoder::new_with_sinks(
                EncoderOptions::default(),
                vec![&mut out]
            )));
            workflow.advance_to_end().unwrap();
            assert!(workflow.is_finished());
        }
        assert_eq!(*log.borrow(), ["only"]);
        assert_eq!(out, b"P3\n1 1\n255\n0 255 0\n");
    }

    #[test]
    fn decodes_and_encodes() {
        let mut out = vec![];
        {
            let mut workflow = WorkFlow::new();
            workflow
                .chain_decoder(Box::new(PPMDecoder::new(&b"P3 2 1 1 1 1 1 0 0 0"[..])))
                .chain_encoder(Box::new(PPMEncoder::new_with_sinks(
                    EncoderOptions::default().set_max_color(255),
                    vec![&mut out]
                )));
            workflow.advance_to_end().unwrap();
        }
        assert_eq!(out, b"P3\n2 1\n255\n255 255 255 0 0 0\n");
    }
}
