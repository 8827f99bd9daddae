//! api_scaffold library - API description compiler
//!
//! Loads one declarative API description (models, endpoints, auth and
//! infrastructure policies) into a validated canonical model, derives the
//! naming, typing and routing facts every target shares, and drives the
//! per-target emitters that write server and client source trees.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod http;
pub mod loader;
pub mod logging;
pub mod naming;
pub mod output;
pub mod schema;
pub mod type_map;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
