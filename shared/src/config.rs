// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::PristinePolicy;
use knuffel::Decode;
use miette::{IntoDiagnostic, Result};

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Decode)]
pub struct ConfigDocument {
	#[knuffel(child, unwrap(argument))]
	pristine_fields: Option<PristinePolicy>,
	#[knuffel(child, unwrap(argument))]
	log_level: Option<String>,
}

impl ConfigDocument {
	pub fn pristine_policy(&self) -> PristinePolicy {
		self.pristine_fields.unwrap_or_default()
	}

	pub fn log_level(&self) -> &str {
		self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
	}
}

pub fn parse_config(file_name: &str, contents: &str) -> Result<ConfigDocument> {
	let config = knuffel::parse(file_name, contents).into_diagnostic()?;
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_config_uses_defaults() {
		let config = parse_config("config.kdl", "").unwrap();
		assert_eq!(config.pristine_policy(), PristinePolicy::Block);
		assert_eq!(config.log_level(), "info");
	}

	#[test]
	fn reads_all_settings() {
		let config = parse_config("config.kdl", "pristine-fields \"allow\"\nlog-level \"debug\"\n").unwrap();
		assert_eq!(config.pristine_policy(), PristinePolicy::Allow);
		assert_eq!(config.log_level(), "debug");
	}

	#[test]
	fn rejects_unknown_policy() {
		assert!(parse_config("config.kdl", "pristine-fields \"sometimes\"\n").is_err());
	}
}
