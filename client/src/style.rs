// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// CSS declarations for one element, applied through its `style` attribute
pub struct StyleRule(&'static [(&'static str, &'static str)]);

impl StyleRule {
	pub fn inline(&self) -> String {
		self.0
			.iter()
			.map(|(property, value)| format!("{}: {};", property, value))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

pub struct StyleSheet {
	pub form_container: StyleRule,
	pub title: StyleRule,
	pub label: StyleRule,
	pub input: StyleRule,
	pub password_container: StyleRule,
	pub password_input: StyleRule,
	pub eye_icon: StyleRule,
	pub error: StyleRule,
	pub button_container: StyleRule,
	pub button: StyleRule,
	pub success: StyleRule,
}

pub static REGISTRATION_STYLES: StyleSheet = StyleSheet {
	form_container: StyleRule(&[
		("max-width", "500px"),
		("margin", "40px auto"),
		("padding", "30px"),
		("border", "3px solid #ff69b4"),
		("border-radius", "15px"),
		("background-color", "#fff0f5"),
		("color", "#333"),
		("font-family", "Comic Sans MS, cursive"),
	]),
	title: StyleRule(&[
		("text-align", "center"),
		("font-size", "28px"),
		("font-weight", "bold"),
		("color", "#ff1493"),
	]),
	label: StyleRule(&[("font-weight", "bold"), ("font-size", "16px"), ("color", "#d63384")]),
	input: StyleRule(&[
		("width", "100%"),
		("padding", "10px"),
		("margin-bottom", "5px"),
		("border", "2px solid #ff69b4"),
		("border-radius", "8px"),
		("font-size", "16px"),
		("box-sizing", "border-box"),
	]),
	password_container: StyleRule(&[("position", "relative")]),
	password_input: StyleRule(&[
		("width", "100%"),
		("padding", "10px 60px 10px 10px"),
		("margin-bottom", "5px"),
		("border", "2px solid #ff69b4"),
		("border-radius", "8px"),
		("font-size", "16px"),
		("box-sizing", "border-box"),
	]),
	eye_icon: StyleRule(&[
		("position", "absolute"),
		("right", "12px"),
		("top", "32px"),
		("cursor", "pointer"),
		("color", "#d63384"),
	]),
	error: StyleRule(&[("color", "red"), ("font-size", "14px")]),
	button_container: StyleRule(&[
		("display", "flex"),
		("justify-content", "center"),
		("margin-top", "15px"),
	]),
	button: StyleRule(&[
		("padding", "12px 20px"),
		("background-color", "#ff1493"),
		("color", "white"),
		("border", "none"),
		("border-radius", "5px"),
		("font-size", "18px"),
		("cursor", "pointer"),
	]),
	success: StyleRule(&[
		("color", "green"),
		("text-align", "center"),
		("margin-top", "10px"),
		("font-size", "18px"),
	]),
};
