// src/core/mod.rs

pub mod arg_parser;
pub mod brace_expander;
pub mod commands;
pub mod config_loader;
pub mod envlist;
pub mod factors;
pub mod interpolator;
pub mod splitter;
