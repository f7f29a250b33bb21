// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::fields::FormField;
use regex::Regex;
use std::error::Error;
use std::fmt;
use std::sync::LazyLock;

pub const EMAIL_SUFFIX: &str = "@gmail.com";
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "@$!%*?&._-";

/// A capital letter followed only by lowercase letters
static NAME_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Z][a-z]*$").expect("name pattern is a valid regex"));

/// Restricts the whole password to letters, digits, and the allowed special characters
static PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9@$!%*?&._-]{8,}$").expect("password pattern is a valid regex")
});

/// The reason a field's value was rejected. Each field has exactly one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldValidationError {
	Username,
	Email,
	FirstName,
	LastName,
	Password,
}

impl FieldValidationError {
	pub fn for_field(field: FormField) -> Self {
		match field {
			FormField::Username => Self::Username,
			FormField::Email => Self::Email,
			FormField::FirstName => Self::FirstName,
			FormField::LastName => Self::LastName,
			FormField::Password => Self::Password,
		}
	}

	pub fn field(&self) -> FormField {
		match self {
			Self::Username => FormField::Username,
			Self::Email => FormField::Email,
			Self::FirstName => FormField::FirstName,
			Self::LastName => FormField::LastName,
			Self::Password => FormField::Password,
		}
	}

	/// The message shown to the user next to the field
	pub fn message(&self) -> &'static str {
		match self {
			Self::Username => "Username must have exactly one special character and allow numbers.",
			Self::Email => "Email must be a valid Gmail address.",
			Self::FirstName => "First name must start with a capital letter.",
			Self::LastName => "Last name must start with a capital letter.",
			Self::Password => "Password must be at least 8 characters long, including uppercase, lowercase, a number, and a special character.",
		}
	}
}

impl fmt::Display for FieldValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message())
	}
}

impl Error for FieldValidationError {}

/// Usernames need exactly one character that isn't an ASCII letter or digit.
pub fn validate_username(username: &str) -> bool {
	username.chars().filter(|c| !c.is_ascii_alphanumeric()).count() == 1
}

/// Only checks the suffix; no other structure of the address is examined.
pub fn validate_email(email: &str) -> bool {
	email.ends_with(EMAIL_SUFFIX)
}

/// Used for both first and last names.
pub fn validate_name(name: &str) -> bool {
	NAME_PATTERN.is_match(name)
}

/// Checks the password after stripping surrounding whitespace.
///
/// The trimmed password must be at least [`PASSWORD_MIN_LENGTH`] characters, made up only of ASCII letters, digits,
/// and [`PASSWORD_SPECIAL_CHARACTERS`], with at least one of each of lowercase, uppercase, digit, and special.
pub fn validate_password(password: &str) -> bool {
	let password = password.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
	PASSWORD_PATTERN.is_match(password)
		&& password.chars().any(|c| c.is_ascii_lowercase())
		&& password.chars().any(|c| c.is_ascii_uppercase())
		&& password.chars().any(|c| c.is_ascii_digit())
		&& password.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c))
}

/// Runs the rule belonging to the given field against a value.
pub fn check_field(field: FormField, value: &str) -> Result<(), FieldValidationError> {
	let valid = match field {
		FormField::Username => validate_username(value),
		FormField::Email => validate_email(value),
		FormField::FirstName | FormField::LastName => validate_name(value),
		FormField::Password => validate_password(value),
	};
	if valid {
		Ok(())
	} else {
		Err(FieldValidationError::for_field(field))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn username_needs_exactly_one_special_character() {
		assert!(validate_username("john_doe"));
		assert!(validate_username("john.doe42"));
		assert!(validate_username("-"));
		assert!(!validate_username("johndoe"));
		assert!(!validate_username("john99"));
		assert!(!validate_username("john.doe!"));
		assert!(!validate_username(""));
	}

	#[test]
	fn username_counts_spaces_and_non_ascii_as_special() {
		assert!(validate_username("john doe"));
		assert!(validate_username("jöhn"));
		assert!(!validate_username("jöhn_doe"));
	}

	#[test]
	fn email_only_checks_gmail_suffix() {
		assert!(validate_email("a@gmail.com"));
		assert!(validate_email("@gmail.com"));
		assert!(validate_email("not really an address@gmail.com"));
		assert!(!validate_email("a@yahoo.com"));
		assert!(!validate_email("a@gmail.comX"));
		assert!(!validate_email("a@GMAIL.COM"));
		assert!(!validate_email("xgmail.com"));
		assert!(!validate_email(""));
	}

	#[test]
	fn name_is_capital_then_lowercase() {
		assert!(validate_name("Alice"));
		assert!(validate_name("A"));
		assert!(!validate_name("alice"));
		assert!(!validate_name("Al1ce"));
		assert!(!validate_name("AlIce"));
		assert!(!validate_name("Mary Ann"));
		assert!(!validate_name("Smith-Jones"));
		assert!(!validate_name("Alice\n"));
		assert!(!validate_name(""));
	}

	#[test]
	fn password_requirements() {
		assert!(validate_password("Abcdef1@"));
		assert!(validate_password("Zz9-zzzzzzzz"));
		assert!(!validate_password("abcdef1@"));
		assert!(!validate_password("ABCDEF1@"));
		assert!(!validate_password("Abcdefg@"));
		assert!(!validate_password("Abcdefg1"));
		assert!(!validate_password("Abc1@"));
		assert!(!validate_password(""));
	}

	#[test]
	fn password_is_trimmed_before_checking() {
		assert!(validate_password("  Abcdef1@\t"));
		assert!(validate_password("\u{feff}Abcdef1@"));
		assert!(!validate_password("  Abc1@  "));
	}

	#[test]
	fn password_rejects_characters_outside_allowed_set() {
		assert!(!validate_password("Abcd ef1@"));
		assert!(!validate_password("Abcdef1@#"));
		assert!(!validate_password("Äbcdef1@"));
	}

	#[test]
	fn check_field_dispatches_to_field_rule() {
		assert_eq!(check_field(FormField::Username, "john_doe"), Ok(()));
		assert_eq!(check_field(FormField::Email, "a@yahoo.com"), Err(FieldValidationError::Email));
		assert_eq!(check_field(FormField::FirstName, "Alice"), Ok(()));
		assert_eq!(check_field(FormField::LastName, "smith"), Err(FieldValidationError::LastName));
		assert_eq!(check_field(FormField::Password, "short"), Err(FieldValidationError::Password));
	}

	#[test]
	fn errors_map_back_to_their_field() {
		for field in FormField::ALL {
			assert_eq!(FieldValidationError::for_field(field).field(), field);
		}
		assert_eq!(
			FieldValidationError::FirstName.to_string(),
			"First name must start with a capital letter."
		);
	}
}
