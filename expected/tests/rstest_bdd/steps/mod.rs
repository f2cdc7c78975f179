//! Behavioural step modules registered with `rstest-bdd`.

pub mod error_steps;
pub mod value_steps;
