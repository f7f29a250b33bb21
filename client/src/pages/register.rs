// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::field_input::{change_handler, field_error_signal, field_error_view, FieldInput};
use crate::style::REGISTRATION_STYLES;
use registration_form_shared::form::{FormController, FormField, PristinePolicy};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct RegistrationViewProps {
	pristine_policy: PristinePolicy,
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>, props: RegistrationViewProps) -> View<G> {
	let controller = create_signal(ctx, FormController::new(props.pristine_policy));
	let submitted_signal = create_memo(ctx, || controller.get().is_submitted());
	let password_visible_signal = create_memo(ctx, || controller.get().password_visible());
	let password_input_type_signal = create_memo(ctx, || {
		if *password_visible_signal.get() {
			"text"
		} else {
			"password"
		}
	});
	let password_error_signal = field_error_signal(ctx, controller, FormField::Password);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let outcome = controller.modify().handle_submit();
		let Some(form_state) = outcome.form_state else {
			let controller = controller.get();
			let invalid_fields: Vec<&str> = controller
				.error_state()
				.errors()
				.map(|error| error.field().name())
				.collect();
			log::debug!("Refused form submission; fields with errors: {:?}", invalid_fields);
			return;
		};

		match serde_json::to_string(&form_state) {
			Ok(form_json) => log::info!("Form submitted: {}", form_json),
			Err(error) => log::error!("Failed to serialize submitted form data: {}", error),
		}
	};

	let toggle_password_handler = move |_event: WebEvent| {
		controller.modify().toggle_password_visibility();
	};

	view! {
		ctx,
		div(id="registration_form_container", style=REGISTRATION_STYLES.form_container.inline()) {
			h2(style=REGISTRATION_STYLES.title.inline()) { "Registration Form" }
			form(id="registration_form", on:submit=form_submission_handler) {
				FieldInput(field=FormField::Username, label="Username:", input_type="text", controller=controller)
				FieldInput(field=FormField::Email, label="Email:", input_type="email", controller=controller)
				FieldInput(field=FormField::FirstName, label="First Name:", input_type="text", controller=controller)
				FieldInput(field=FormField::LastName, label="Last Name:", input_type="text", controller=controller)
				div(style=REGISTRATION_STYLES.password_container.inline()) {
					label(for="register_password", style=REGISTRATION_STYLES.label.inline()) { "Password:" }
					input(
						id="register_password",
						type=*password_input_type_signal.get(),
						name="password",
						style=REGISTRATION_STYLES.password_input.inline(),
						on:input=change_handler(controller, FormField::Password)
					)
					span(id="register_password_toggle", class="click", style=REGISTRATION_STYLES.eye_icon.inline(), on:click=toggle_password_handler) {
						(if *password_visible_signal.get() { "Hide" } else { "Show" })
					}
					(field_error_view(ctx, password_error_signal))
				}
				div(style=REGISTRATION_STYLES.button_container.inline()) {
					button(type="submit", style=REGISTRATION_STYLES.button.inline()) { "Register" }
				}
			}
			(
				if *submitted_signal.get() {
					view! {
						ctx,
						p(id="registration_success", style=REGISTRATION_STYLES.success.inline()) { "Registration successful!" }
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
