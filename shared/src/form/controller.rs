// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::fields::{FormField, UnknownFieldError};
use super::state::{ErrorState, FormState, PristinePolicy};

/// Where the form is in its lifetime
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FormPhase {
	/// No field has been edited
	#[default]
	Pristine,
	Editing,
	/// A submission went through. There's no leaving this phase.
	Submitted,
}

/// State of the form after a field changes
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldChange {
	pub form_state: FormState,
	pub error_state: ErrorState,
}

/// Result of a submission attempt
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmitOutcome {
	/// Whether the form has been submitted
	pub submitted: bool,
	/// The submitted values, present only when this attempt passed validation
	pub form_state: Option<FormState>,
}

/// Owns the state for one session of the registration form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormController {
	pristine_policy: PristinePolicy,
	form_state: FormState,
	error_state: ErrorState,
	phase: FormPhase,
	password_visible: bool,
}

impl FormController {
	pub fn new(pristine_policy: PristinePolicy) -> Self {
		Self {
			pristine_policy,
			..Default::default()
		}
	}

	pub fn form_state(&self) -> &FormState {
		&self.form_state
	}

	pub fn error_state(&self) -> &ErrorState {
		&self.error_state
	}

	pub fn phase(&self) -> FormPhase {
		self.phase
	}

	pub fn is_submitted(&self) -> bool {
		self.phase == FormPhase::Submitted
	}

	pub fn password_visible(&self) -> bool {
		self.password_visible
	}

	/// Stores the new value for a field and re-validates only that field.
	pub fn handle_change(&mut self, field: FormField, value: String) -> FieldChange {
		self.error_state = std::mem::take(&mut self.error_state).validate_field(field, &value);
		self.form_state = std::mem::take(&mut self.form_state).with_value(field, value);
		if self.phase == FormPhase::Pristine {
			self.phase = FormPhase::Editing;
		}

		FieldChange {
			form_state: self.form_state.clone(),
			error_state: self.error_state.clone(),
		}
	}

	/// Same as [`handle_change`](Self::handle_change), with the field given by name. An unknown name changes nothing.
	pub fn handle_named_change(&mut self, field_name: &str, value: String) -> Result<FieldChange, UnknownFieldError> {
		let field: FormField = field_name.parse()?;
		Ok(self.handle_change(field, value))
	}

	/// Attempts to submit the form. Submission only goes through when every field passes under the pristine policy.
	pub fn handle_submit(&mut self) -> SubmitOutcome {
		if !self.error_state.all_valid(self.pristine_policy) {
			return SubmitOutcome {
				submitted: self.is_submitted(),
				form_state: None,
			};
		}

		self.phase = FormPhase::Submitted;
		SubmitOutcome {
			submitted: true,
			form_state: Some(self.form_state.clone()),
		}
	}

	/// Flips whether the password is displayed in plain text. Returns the new visibility.
	pub fn toggle_password_visibility(&mut self) -> bool {
		self.password_visible = !self.password_visible;
		self.password_visible
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::state::FieldStatus;
	use crate::form::validation::FieldValidationError;

	fn fill_valid(controller: &mut FormController) {
		controller.handle_change(FormField::Username, String::from("john_doe"));
		controller.handle_change(FormField::Email, String::from("john@gmail.com"));
		controller.handle_change(FormField::FirstName, String::from("John"));
		controller.handle_change(FormField::LastName, String::from("Doe"));
		controller.handle_change(FormField::Password, String::from("Abcdef1@"));
	}

	#[test]
	fn change_updates_value_and_status() {
		let mut controller = FormController::default();
		let change = controller.handle_change(FormField::FirstName, String::from("alice"));
		assert_eq!(change.form_state.first_name, "alice");
		assert_eq!(
			change.error_state.status(FormField::FirstName),
			FieldStatus::Invalid(FieldValidationError::FirstName)
		);
		assert_eq!(controller.form_state(), &change.form_state);
		assert_eq!(controller.error_state(), &change.error_state);
	}

	#[test]
	fn repeated_change_is_idempotent() {
		let mut once = FormController::default();
		let first = once.handle_change(FormField::Password, String::from("Abc1@"));

		let mut twice = FormController::default();
		twice.handle_change(FormField::Password, String::from("Abc1@"));
		let second = twice.handle_change(FormField::Password, String::from("Abc1@"));

		assert_eq!(first, second);
		assert_eq!(once, twice);
	}

	#[test]
	fn change_leaves_other_errors_untouched() {
		let mut controller = FormController::default();
		controller.handle_change(FormField::Username, String::from("johndoe"));
		let before = controller.error_state().status(FormField::Username);

		let change = controller.handle_change(FormField::Email, String::from("john@yahoo.com"));
		assert_eq!(change.error_state.status(FormField::Username), before);
		assert_eq!(change.error_state.status(FormField::FirstName), FieldStatus::Unchecked);
		assert_eq!(change.form_state.username, "johndoe");
	}

	#[test]
	fn stale_errors_persist_until_their_field_is_edited() {
		let mut controller = FormController::default();
		controller.handle_change(FormField::LastName, String::from("doe"));
		controller.handle_change(FormField::Username, String::from("john_doe"));
		assert_eq!(
			controller.error_state().status(FormField::LastName),
			FieldStatus::Invalid(FieldValidationError::LastName)
		);
		controller.handle_change(FormField::LastName, String::from("Doe"));
		assert_eq!(controller.error_state().status(FormField::LastName), FieldStatus::Valid);
	}

	#[test]
	fn named_change_rejects_unknown_fields() {
		let mut controller = FormController::default();
		let result = controller.handle_named_change("nickname", String::from("jd"));
		assert_eq!(result, Err(UnknownFieldError(String::from("nickname"))));
		assert_eq!(controller, FormController::default());

		let change = controller
			.handle_named_change("lastName", String::from("Doe"))
			.expect("lastName is a field");
		assert_eq!(change.form_state.last_name, "Doe");
	}

	#[test]
	fn phases_progress_from_pristine_to_submitted() {
		let mut controller = FormController::default();
		assert_eq!(controller.phase(), FormPhase::Pristine);
		controller.handle_change(FormField::Email, String::from("x"));
		assert_eq!(controller.phase(), FormPhase::Editing);
		controller.handle_change(FormField::Email, String::from(""));
		fill_valid(&mut controller);
		controller.handle_submit();
		assert_eq!(controller.phase(), FormPhase::Submitted);
		controller.handle_change(FormField::Email, String::from("changed@gmail.com"));
		assert_eq!(controller.phase(), FormPhase::Submitted);
	}

	#[test]
	fn valid_form_submits_entered_values() {
		let mut controller = FormController::default();
		fill_valid(&mut controller);
		let outcome = controller.handle_submit();

		assert!(outcome.submitted);
		assert_eq!(
			outcome.form_state,
			Some(FormState {
				username: String::from("john_doe"),
				email: String::from("john@gmail.com"),
				first_name: String::from("John"),
				last_name: String::from("Doe"),
				password: String::from("Abcdef1@"),
			})
		);
		assert!(controller.is_submitted());
	}

	#[test]
	fn invalid_field_refuses_submission() {
		let mut controller = FormController::default();
		fill_valid(&mut controller);
		controller.handle_change(FormField::Email, String::from("john@yahoo.com"));
		let before = controller.form_state().clone();

		let outcome = controller.handle_submit();
		assert_eq!(
			outcome,
			SubmitOutcome {
				submitted: false,
				form_state: None
			}
		);
		assert_eq!(controller.form_state(), &before);
		assert_eq!(controller.phase(), FormPhase::Editing);
	}

	#[test]
	fn pristine_policy_decides_unedited_fields() {
		let mut blocking = FormController::new(PristinePolicy::Block);
		assert!(!blocking.handle_submit().submitted);
		blocking.handle_change(FormField::Username, String::from("john_doe"));
		assert!(!blocking.handle_submit().submitted);

		let mut allowing = FormController::new(PristinePolicy::Allow);
		allowing.handle_change(FormField::Username, String::from("john_doe"));
		let outcome = allowing.handle_submit();
		assert!(outcome.submitted);
		assert_eq!(outcome.form_state.map(|state| state.username), Some(String::from("john_doe")));
	}

	#[test]
	fn submitted_form_stays_submitted_when_resubmitted_invalid() {
		let mut controller = FormController::default();
		fill_valid(&mut controller);
		controller.handle_submit();
		controller.handle_change(FormField::Password, String::from("weak"));

		let outcome = controller.handle_submit();
		assert!(outcome.submitted);
		assert_eq!(outcome.form_state, None);
	}

	#[test]
	fn password_visibility_toggles() {
		let mut controller = FormController::default();
		assert!(!controller.password_visible());
		assert!(controller.toggle_password_visibility());
		assert!(!controller.toggle_password_visibility());
		assert_eq!(controller.error_state(), &ErrorState::default());
	}
}
