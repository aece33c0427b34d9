// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cg.
//!
//! This module handles loading and parsing configuration from
//! various sources (files, defaults).

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, load_config, load_config_from, parse_config};
pub use schema::*;
