// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::style::REGISTRATION_STYLES;
use registration_form_shared::form::{FormController, FormField};
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

/// Creates an input event handler that passes the input's new value to the controller for the given field
pub fn change_handler(controller: &Signal<FormController>, field: FormField) -> impl Fn(WebEvent) + '_ {
	move |event: WebEvent| {
		let Some(input) = event
			.target()
			.and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
		else {
			log::warn!("Received a change for {} that didn't come from an input element", field);
			return;
		};
		controller.modify().handle_change(field, input.value());
	}
}

/// Creates a memo holding the error message to show for a field, if any
pub fn field_error_signal<'a>(
	ctx: Scope<'a>,
	controller: &'a Signal<FormController>,
	field: FormField,
) -> &'a ReadSignal<Option<&'static str>> {
	create_memo(ctx, move || controller.get().error_state().status(field).error_message())
}

/// Renders the inline error message next to a field
pub fn field_error_view<'a, G: Html>(ctx: Scope<'a>, error_message: &'a ReadSignal<Option<&'static str>>) -> View<G> {
	view! {
		ctx,
		(match *error_message.get() {
			Some(message) => view! {
				ctx,
				span(class="input_error", style=REGISTRATION_STYLES.error.inline()) { (message) }
			},
			None => view! { ctx, }
		})
	}
}

#[derive(Prop)]
pub struct FieldInputProps<'a> {
	field: FormField,
	label: &'static str,
	input_type: &'static str,
	controller: &'a Signal<FormController>,
}

#[component]
pub fn FieldInput<'a, G: Html>(ctx: Scope<'a>, props: FieldInputProps<'a>) -> View<G> {
	let field = props.field;
	let label_text = props.label;
	let input_type = props.input_type;
	let controller = props.controller;
	let error_message = field_error_signal(ctx, controller, field);

	let input_id = format!("register_{}", field.name());
	let input_id_for = input_id.clone();
	view! {
		ctx,
		div {
			label(for=input_id_for, style=REGISTRATION_STYLES.label.inline()) { (label_text) }
			input(
				id=input_id,
				type=input_type,
				name=field.name(),
				style=REGISTRATION_STYLES.input.inline(),
				on:input=change_handler(controller, field)
			)
			(field_error_view(ctx, error_message))
		}
	}
}
