// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

pub mod load_config;
mod recovery_config;

pub use load_config::{ConfigSource, DEFAULT_CONFIG_NAME};
pub use recovery_config::*;
