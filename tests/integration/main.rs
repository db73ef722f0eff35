//! Integration test harness
mod run_tests;
