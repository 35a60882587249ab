//! Tiredness library - classify a 0-5 tiredness level and pick a response
//!
//! This library provides the core functionality for the `tiredness` CLI tool.

pub mod cli;
pub mod commands;
pub mod selector;
