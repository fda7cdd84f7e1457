//! Scenario tests for layoutcheck.
//!
//! Scenarios drive the library end-to-end the way an embedding test suite
//! would: real YAML specs, a page snapshot and a recording session.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/login_page.rs"]
mod login_page;
