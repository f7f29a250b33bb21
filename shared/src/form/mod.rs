// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod controller;
pub mod fields;
pub mod state;
pub mod validation;

pub use controller::{FieldChange, FormController, FormPhase, SubmitOutcome};
pub use fields::{FormField, UnknownFieldError};
pub use state::{ErrorState, FieldStatus, FormState, PristinePolicy};
pub use validation::FieldValidationError;
