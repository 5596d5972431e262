//! Structural boost factor estimator.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod estimator;
pub mod report;
pub mod storage;
