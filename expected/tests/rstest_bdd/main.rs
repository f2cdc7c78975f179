//! `rstest-bdd` scaffolding for `expected`.
//!
//! The modules register shared fixtures, step implementations and the
//! scenario bindings so the behavioural suite runs under the stock
//! `cargo test` harness.

mod scenarios;
mod steps;
