// src/cli/handlers/mod.rs

// One module per CLI action.

pub mod commons;
pub mod envlist;
pub mod expand;
pub mod resolve;
pub mod show;
