// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// One of the inputs on the registration form
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
	Username,
	Email,
	FirstName,
	LastName,
	Password,
}

impl FormField {
	pub const ALL: [FormField; 5] = [
		Self::Username,
		Self::Email,
		Self::FirstName,
		Self::LastName,
		Self::Password,
	];

	/// The name used for the field in input events and serialized form data
	pub fn name(&self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Email => "email",
			Self::FirstName => "firstName",
			Self::LastName => "lastName",
			Self::Password => "password",
		}
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownFieldError(pub String);

impl fmt::Display for UnknownFieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "no form field is named \"{}\"", self.0)
	}
}

impl Error for UnknownFieldError {}

impl FromStr for FormField {
	type Err = UnknownFieldError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|field| field.name() == s)
			.ok_or_else(|| UnknownFieldError(s.to_owned()))
	}
}
