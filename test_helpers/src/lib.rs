//! Test helpers shared across crates.
//!
//! This crate provides sample domain errors and helpers for observing errors
//! propagated through dereference without noisy panic output.

pub mod errors;
pub mod panic;
