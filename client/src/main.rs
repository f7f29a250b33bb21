// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::Level;
use registration_form_shared::config::{parse_config, DEFAULT_LOG_LEVEL};
use sycamore::prelude::*;

mod components;
mod pages;
mod style;
use pages::error::{ErrorData, ErrorView};
use pages::register::RegistrationView;

const CONFIG_FILE_NAME: &str = "config.kdl";
const CONFIG_FILE_CONTENTS: &str = include_str!("../config.kdl");

fn main() {
	console_error_panic_hook::set_once();

	let config = match parse_config(CONFIG_FILE_NAME, CONFIG_FILE_CONTENTS) {
		Ok(config) => config,
		Err(error) => {
			wasm_logger::init(wasm_logger::Config::default());
			log::error!("Failed to load form configuration: {}", error);
			sycamore::render(|ctx| {
				provide_context(
					ctx,
					ErrorData::new_with_error("Unable to load the registration form configuration.", error),
				);
				view! { ctx, ErrorView }
			});
			return;
		}
	};

	let log_level: Option<Level> = config.log_level().parse().ok();
	wasm_logger::init(wasm_logger::Config::new(log_level.unwrap_or(Level::Info)));
	if log_level.is_none() {
		log::warn!(
			"Unrecognized log level \"{}\" in configuration; using {}",
			config.log_level(),
			DEFAULT_LOG_LEVEL
		);
	}

	let pristine_policy = config.pristine_policy();
	log::debug!("Starting registration form with pristine field policy {:?}", pristine_policy);

	sycamore::render(move |ctx| {
		view! {
			ctx,
			RegistrationView(pristine_policy=pristine_policy)
		}
	});
}
