//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{ExpectedContext, expected_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/expected_value.feature",
    fixtures = [expected_context: ExpectedContext]
);
