//! copd-cli
//!
//! Command-line front end: loads a patient record from JSON, runs it through
//! the scoring engine or the wizard, and renders reports.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
