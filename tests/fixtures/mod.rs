//! Test fixtures for fleet-router.
//!
//! Provides:
//! - Singapore jobsite locations and certificate sets
//! - A small east-side road network with a disconnected western stub
//! - A scripted route filler that records its calls

#![allow(dead_code)]

pub mod singapore_locations;
pub mod stub_filler;

pub use singapore_locations::*;
pub use stub_filler::*;
