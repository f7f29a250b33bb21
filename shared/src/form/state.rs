// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::fields::FormField;
use super::validation::{check_field, FieldValidationError};
use serde::{Deserialize, Serialize};

/// Current values of every form field
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
	pub username: String,
	pub email: String,
	pub first_name: String,
	pub last_name: String,
	pub password: String,
}

impl FormState {
	pub fn value(&self, field: FormField) -> &str {
		match field {
			FormField::Username => &self.username,
			FormField::Email => &self.email,
			FormField::FirstName => &self.first_name,
			FormField::LastName => &self.last_name,
			FormField::Password => &self.password,
		}
	}

	/// Returns the state with one field's value replaced
	pub fn with_value(mut self, field: FormField, value: String) -> Self {
		let slot = match field {
			FormField::Username => &mut self.username,
			FormField::Email => &mut self.email,
			FormField::FirstName => &mut self.first_name,
			FormField::LastName => &mut self.last_name,
			FormField::Password => &mut self.password,
		};
		*slot = value;
		self
	}
}

/// Validation outcome for a single field
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldStatus {
	/// The field hasn't been validated because it hasn't been edited yet
	#[default]
	Unchecked,
	Valid,
	Invalid(FieldValidationError),
}

impl FieldStatus {
	/// The message to show next to the field, if there is an error to show
	pub fn error_message(&self) -> Option<&'static str> {
		match self {
			Self::Invalid(error) => Some(error.message()),
			_ => None,
		}
	}

	/// The error string as held by the form: absent for unchecked fields, empty for valid ones
	pub fn entry(&self) -> Option<&'static str> {
		match self {
			Self::Unchecked => None,
			Self::Valid => Some(""),
			Self::Invalid(error) => Some(error.message()),
		}
	}
}

/// How fields that were never edited are treated when deciding whether the form can be submitted
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, knuffel::DecodeScalar)]
pub enum PristinePolicy {
	/// Unedited fields have no recorded result, which doesn't count as valid
	#[default]
	Block,
	/// Only fields with a recorded error prevent submission
	Allow,
}

/// Validation status of every form field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorState {
	username: FieldStatus,
	email: FieldStatus,
	first_name: FieldStatus,
	last_name: FieldStatus,
	password: FieldStatus,
}

impl ErrorState {
	pub fn status(&self, field: FormField) -> FieldStatus {
		match field {
			FormField::Username => self.username,
			FormField::Email => self.email,
			FormField::FirstName => self.first_name,
			FormField::LastName => self.last_name,
			FormField::Password => self.password,
		}
	}

	/// Re-validates one field against its new value. No other field's status changes.
	pub fn validate_field(mut self, field: FormField, value: &str) -> Self {
		let status = match check_field(field, value) {
			Ok(()) => FieldStatus::Valid,
			Err(error) => FieldStatus::Invalid(error),
		};
		let slot = match field {
			FormField::Username => &mut self.username,
			FormField::Email => &mut self.email,
			FormField::FirstName => &mut self.first_name,
			FormField::LastName => &mut self.last_name,
			FormField::Password => &mut self.password,
		};
		*slot = status;
		self
	}

	/// Validates by field name. Names that don't belong to a field leave the state unchanged.
	pub fn validate_named_field(self, field_name: &str, value: &str) -> Self {
		match field_name.parse() {
			Ok(field) => self.validate_field(field, value),
			Err(_) => self,
		}
	}

	/// Whether the current statuses allow the form to be submitted
	pub fn all_valid(&self, pristine_policy: PristinePolicy) -> bool {
		FormField::ALL.into_iter().all(|field| match self.status(field) {
			FieldStatus::Valid => true,
			FieldStatus::Unchecked => pristine_policy == PristinePolicy::Allow,
			FieldStatus::Invalid(_) => false,
		})
	}

	pub fn errors(&self) -> impl Iterator<Item = FieldValidationError> + '_ {
		FormField::ALL.into_iter().filter_map(|field| match self.status(field) {
			FieldStatus::Invalid(error) => Some(error),
			_ => None,
		})
	}
}
