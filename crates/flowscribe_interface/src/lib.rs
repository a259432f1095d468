//! Trait definitions for Flowscribe generation backends.
//!
//! The narrative and illustration requesters only ever talk to these traits,
//! so tests can substitute deterministic fakes for the network service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageGeneration, TextGeneration};
