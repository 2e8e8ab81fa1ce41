//! Test Module
//!
//! Cross-module test suite for the care companion core.
//!
//! ## Test Categories
//! - `responder_tests`: reply pipeline scenarios and properties
//! - `integration_tests`: configuration, concurrency and analytics flows

pub mod integration_tests;
