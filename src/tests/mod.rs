//! Scenario tests spanning the whole sampling pipeline.

mod profile_tests;
