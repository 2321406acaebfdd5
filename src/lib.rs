//! Brace expansion and placeholder substitution for tox-style ini configuration.
//!
//! - [`core::brace_expander`] turns `py{27,34}-django{15,16}` into every combination.
//! - [`core::envlist`] expands a whole `envlist` value.
//! - [`core::factors`] gates `py27,py34: value` lines on an environment's factors.
//! - [`core::interpolator`] substitutes `{envpython}`, `{env:KEY:DEFAULT}`,
//!   `{[section]option}` and `{posargs:DEFAULT}` placeholders.

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
